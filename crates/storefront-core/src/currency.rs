//! Currency formatting
//!
//! The order message only asks a [`CurrencyFormatter`] for text; the
//! storefront decides the locale. [`LocaleCurrency`] covers the usual
//! symbol / grouping / decimal conventions.

use crate::config::CurrencySettings;
use crate::types::Amount;

/// Renders an amount for display
pub trait CurrencyFormatter {
    /// Format a whole-unit amount
    fn format(&self, amount: Amount) -> String;
}

impl<F: Fn(Amount) -> String> CurrencyFormatter for F {
    fn format(&self, amount: Amount) -> String {
        self(amount)
    }
}

/// Formatter driven by [`CurrencySettings`]
#[derive(Debug, Clone, Default)]
pub struct LocaleCurrency {
    settings: CurrencySettings,
}

impl LocaleCurrency {
    /// Create formatter from settings
    #[inline]
    #[must_use]
    pub fn new(settings: CurrencySettings) -> Self {
        Self { settings }
    }

    /// Settings in use
    #[inline]
    #[must_use]
    pub fn settings(&self) -> &CurrencySettings {
        &self.settings
    }

    fn group(&self, value: u64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push_str(&self.settings.thousands_separator);
            }
            out.push(ch);
        }
        out
    }
}

impl CurrencyFormatter for LocaleCurrency {
    fn format(&self, amount: Amount) -> String {
        let s = &self.settings;
        let mut number = self.group(amount.unsigned_abs());

        if s.fraction_digits > 0 {
            number.push_str(&s.decimal_separator);
            number.extend(std::iter::repeat('0').take(usize::from(s.fraction_digits)));
        }

        let sign = if amount < 0 { "-" } else { "" };
        let space = if s.symbol_spacing { " " } else { "" };
        format!("{sign}{}{space}{number}", s.symbol)
    }
}
