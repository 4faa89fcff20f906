//! Testing utilities for the storefront workspace
//!
//! Shared catalog fixtures and builders.

#![allow(missing_docs)]

use indexmap::IndexMap;
use storefront_core::{Amount, Cart, CartItem, Checkout, Field, OptionMap, Product, ProductOption};

pub const PROMOTIONS: &str = "Promociones";

pub fn option(category: &str, title: &str, price: Amount) -> ProductOption {
    ProductOption::new(title.to_lowercase().replace(' ', "-"), title, category, price)
}

pub fn options_of(entries: &[(&str, &str, Amount, u32)]) -> OptionMap {
    let mut map: OptionMap = IndexMap::new();
    for &(category, title, price, quantity) in entries {
        map.entry(category.to_string())
            .or_default()
            .push(option(category, title, price).with_quantity(quantity));
    }
    map
}

/// Pizza with a size choice and extra toppings
pub fn pizza_product() -> Product {
    Product {
        id: "muzzarella".to_string(),
        title: "Muzzarella".to_string(),
        category: "Pizzas".to_string(),
        description: "Salsa de tomate y muzzarella".to_string(),
        image: String::new(),
        options: options_of(&[
            ("Tamaño", "Chica", 0, 0),
            ("Tamaño", "Grande", 2000, 0),
            ("Extras", "Jamón", 800, 0),
            ("Extras", "Aceitunas", 300, 0),
        ]),
        price: 8000,
        minimum: 0,
        multiple: false,
        disabled: false,
    }
}

/// Dozen empanadas sold as a fixed-price bundle of `minimum` units
pub fn bundle_product(minimum: u32, price: Amount) -> Product {
    Product {
        id: "docena".to_string(),
        title: "Docena de empanadas".to_string(),
        category: PROMOTIONS.to_string(),
        description: String::new(),
        image: String::new(),
        options: options_of(&[
            (PROMOTIONS, "Carne", 0, 0),
            (PROMOTIONS, "Pollo", 0, 0),
            (PROMOTIONS, "Jamón y queso", 0, 0),
        ]),
        price,
        minimum,
        multiple: true,
        disabled: false,
    }
}

pub fn cart_item(title: &str, options: OptionMap) -> CartItem {
    CartItem {
        id: title.to_lowercase(),
        title: title.to_string(),
        category: "Pizzas".to_string(),
        description: String::new(),
        image: String::new(),
        price: 0,
        quantity: 1,
        multiple: false,
        minimum: 0,
        delivery_price: 0,
        options,
    }
}

pub fn bundle_item(title: &str, price: Amount, options: OptionMap) -> CartItem {
    CartItem {
        price,
        multiple: true,
        ..cart_item(title, options)
    }
}

pub fn cart_of(items: impl IntoIterator<Item = CartItem>) -> Cart {
    items.into_iter().collect()
}

pub fn checkout_of(answers: &[(&str, &str)]) -> Checkout {
    answers.iter().copied().collect()
}

/// The storefront's usual checkout questions
pub fn default_fields() -> Vec<Field> {
    vec![
        Field::Radio {
            title: "Forma de retiro".to_string(),
            options: vec!["Delivery".to_string(), "Retiro en el local".to_string()],
            note: None,
        },
        Field::Text {
            title: "Dirección".to_string(),
            placeholder: "Calle 123, piso 4".to_string(),
            note: Some("Indicá entre qué calles".to_string()),
        },
        Field::Radio {
            title: "Medio de pago".to_string(),
            options: vec!["Efectivo".to_string(), "Transferencia".to_string()],
            note: None,
        },
    ]
}
