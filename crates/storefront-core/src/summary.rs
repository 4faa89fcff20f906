//! Order summary formatting
//!
//! Produces the option summary shown under each cart line and the plain-text
//! order message sent to the store.

use crate::cart::Cart;
use crate::checkout::Checkout;
use crate::currency::CurrencyFormatter;
use crate::pricing::{cart_total, item_price};
use crate::types::{CartItem, OptionMap};

/// Separator between option entries in a one-line summary
pub const SUMMARY_SEPARATOR: &str = ", ";

/// Indent of option lines inside an item paragraph
const OPTION_INDENT: &str = "  ";

/// One entry per selected option, in category then option order
///
/// Options with a quantity show it; options without one show their price.
#[must_use]
pub fn option_entries(options: &OptionMap) -> Vec<String> {
    options
        .values()
        .flat_map(|options| options.iter())
        .map(|option| {
            if option.quantity == 0 {
                format!("{}: $ {}", option.title, option.price)
            } else {
                format!("{}: {}", option.title, option.quantity)
            }
        })
        .collect()
}

/// All option entries on one line
#[must_use]
pub fn options_summary(options: &OptionMap) -> String {
    option_entries(options).join(SUMMARY_SEPARATOR)
}

fn item_paragraph(item: &CartItem, formatter: &impl CurrencyFormatter) -> String {
    let mut lines = Vec::with_capacity(item.options.len() + 2);
    lines.push(format!("* {}", item.title));
    lines.extend(
        option_entries(&item.options)
            .into_iter()
            .map(|entry| format!("{OPTION_INDENT}{entry}")),
    );
    lines.push(formatter.format(item_price(item)));
    lines.join("\n")
}

/// Plain-text order message
///
/// One paragraph per item, then the checkout answers, then the total. The
/// last line is always `Total: <formatted total>`.
pub fn order_message(cart: &Cart, checkout: &Checkout, formatter: &impl CurrencyFormatter) -> String {
    let mut sections = Vec::with_capacity(3);

    if !cart.is_empty() {
        let items: Vec<_> = cart
            .items()
            .map(|item| item_paragraph(item, formatter))
            .collect();
        sections.push(items.join("\n\n"));
    }

    if !checkout.is_empty() {
        let fields: Vec<_> = checkout
            .iter()
            .map(|(field, value)| format!("* {field}: {value}"))
            .collect();
        sections.push(fields.join("\n"));
    }

    sections.push(format!("Total: {}", formatter.format(cart_total(cart))));

    tracing::debug!(items = cart.len(), answers = checkout.len(), "built order message");
    sections.join("\n\n")
}
