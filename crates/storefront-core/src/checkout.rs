//! Checkout fields and answers

use crate::cart::Cart;
use crate::config::DeliverySettings;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A question asked before the order is sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Field {
    /// Pick one of a fixed list
    Radio {
        title: String,
        options: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    /// Free text
    Text {
        title: String,
        #[serde(default)]
        placeholder: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
}

impl Field {
    /// Field title, also the key of its answer
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Field::Radio { title, .. } | Field::Text { title, .. } => title,
        }
    }

    /// Optional note shown under the field
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        match self {
            Field::Radio { note, .. } | Field::Text { note, .. } => note.as_deref(),
        }
    }
}

/// How the order reaches the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fulfillment {
    /// Sent to the customer's address, surcharge applies
    Delivery,
    /// Collected at the store
    Pickup,
}

/// Answers given so far, keyed by field title
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checkout {
    answers: IndexMap<String, String>,
}

impl Checkout {
    /// Create empty checkout
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or replace an answer
    pub fn answer(&mut self, title: impl Into<String>, value: impl Into<String>) {
        self.answers.insert(title.into(), value.into());
    }

    /// Answer for a field
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&str> {
        self.answers.get(title).map(String::as_str)
    }

    /// Answers in the order they were first given
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of answers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Check if nothing was answered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Fulfillment chosen in the configured field, if any
    #[must_use]
    pub fn fulfillment(&self, settings: &DeliverySettings) -> Option<Fulfillment> {
        let value = self.get(&settings.field)?.trim();

        if value.eq_ignore_ascii_case(&settings.delivery_value) {
            Some(Fulfillment::Delivery)
        } else if value.eq_ignore_ascii_case(&settings.pickup_value) {
            Some(Fulfillment::Pickup)
        } else {
            None
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Checkout {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut checkout = Checkout::new();
        for (title, value) in iter {
            checkout.answer(title, value);
        }
        checkout
    }
}

/// Answer a field and keep the cart's delivery surcharge in step
///
/// Returns the fulfillment recognised from the answer, if the field was the
/// configured fulfillment field.
pub fn answer_field(
    checkout: &mut Checkout,
    cart: &mut Cart,
    settings: &DeliverySettings,
    title: &str,
    value: &str,
) -> Option<Fulfillment> {
    checkout.answer(title, value);

    if title != settings.field {
        return None;
    }

    let fulfillment = checkout.fulfillment(settings);
    match fulfillment {
        Some(method) => cart.apply_fulfillment(method, settings.fee),
        None => tracing::warn!(value, "unrecognised fulfillment answer, surcharge unchanged"),
    }
    fulfillment
}

/// Fields to show for the current cart
///
/// Text fields (address and the like) only matter for delivery orders.
pub fn visible_fields<'a>(fields: &'a [Field], cart: &Cart) -> Vec<&'a Field> {
    let delivery = cart.has_delivery();
    fields
        .iter()
        .filter(|field| matches!(field, Field::Radio { .. }) || delivery)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CartItem, OptionMap};

    fn settings() -> DeliverySettings {
        DeliverySettings::default()
    }

    fn cart() -> Cart {
        [CartItem {
            id: "p1".into(),
            title: "Muzza".into(),
            category: "Pizzas".into(),
            description: String::new(),
            image: String::new(),
            price: 1000,
            quantity: 1,
            multiple: false,
            minimum: 0,
            delivery_price: 0,
            options: OptionMap::new(),
        }]
        .into_iter()
        .collect()
    }

    fn fields() -> Vec<Field> {
        serde_json::from_str(
            r#"[{"type":"radio","title":"Forma de retiro","options":["Delivery","Retiro en el local"]},
                {"type":"text","title":"Dirección","placeholder":"Calle 123","note":"Entre calles"}]"#,
        )
        .unwrap()
    }

    #[test]
    fn fields_decode_tagged() {
        let fields = fields();
        assert_eq!(fields[0].title(), "Forma de retiro");
        assert!(matches!(&fields[1], Field::Text { placeholder, .. } if placeholder == "Calle 123"));
        assert_eq!(fields[1].note(), Some("Entre calles"));
    }

    #[test]
    fn answers_are_counted_once_per_field() {
        let mut checkout = Checkout::new();
        checkout.answer("Forma de retiro", "Delivery");
        checkout.answer("Dirección", "Calle 123");
        checkout.answer("Forma de retiro", "Retiro en el local");

        assert_eq!(checkout.len(), 2);
    }

    #[test]
    fn pickup_matches_case_insensitively() {
        let checkout: Checkout = [("Forma de retiro", "Retiro en el Local")].into_iter().collect();
        assert_eq!(checkout.fulfillment(&settings()), Some(Fulfillment::Pickup));
    }

    #[test]
    fn text_fields_hidden_without_delivery() {
        let fields = fields();
        let mut cart = cart();

        assert_eq!(visible_fields(&fields, &cart).len(), 1);

        cart.apply_fulfillment(Fulfillment::Delivery, 600);
        assert_eq!(visible_fields(&fields, &cart).len(), 2);
    }

    #[test]
    fn answering_fulfillment_updates_surcharge() {
        let settings = settings();
        let mut checkout = Checkout::new();
        let mut cart = cart();

        let method = answer_field(&mut checkout, &mut cart, &settings, "Forma de retiro", "Delivery");
        assert_eq!(method, Some(Fulfillment::Delivery));
        assert_eq!(cart.delivery_fee(), settings.fee);

        let method = answer_field(
            &mut checkout,
            &mut cart,
            &settings,
            "Forma de retiro",
            "Retiro en el local",
        );
        assert_eq!(method, Some(Fulfillment::Pickup));
        assert_eq!(cart.delivery_fee(), 0);
        assert_eq!(checkout.get("Forma de retiro"), Some("Retiro en el local"));
    }

    #[test]
    fn other_fields_leave_cart_alone() {
        let mut checkout = Checkout::new();
        let mut cart = cart();

        let method = answer_field(&mut checkout, &mut cart, &settings(), "Dirección", "Delivery");
        assert_eq!(method, None);
        assert!(!cart.has_delivery());
    }
}
