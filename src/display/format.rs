//! Text formatting for amounts and dates
//!
//! The rendered text is what the user sees and also what a search query is
//! matched against, so the filter formats through here too.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};

use crate::config::Settings;
use crate::models::transaction::STORED_DATETIME_FORMAT;
use crate::models::{Money, Transaction, DEFAULT_CURRENCY_SYMBOL};

/// Amount and date formatting rules derived from settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFormat {
    currency_symbol: String,
    datetime_format: String,
}

impl DisplayFormat {
    /// Build from user settings
    ///
    /// A date format that chrono rejects, or that needs a time zone
    /// (`%z`, `%Z`, `%+`), falls back to the default one.
    pub fn from_settings(settings: &Settings) -> Self {
        let datetime_format = if is_valid_strftime(&settings.datetime_format) {
            settings.datetime_format.clone()
        } else {
            tracing::warn!(
                format = %settings.datetime_format,
                "invalid datetime format in settings, using default"
            );
            Settings::default().datetime_format
        };

        Self {
            currency_symbol: settings.currency_symbol.clone(),
            datetime_format,
        }
    }

    /// Explicit sign, currency symbol, thousands separators: `+₹5,000.00`
    pub fn signed(&self, amount: Money) -> String {
        amount.format_signed(&self.currency_symbol)
    }

    /// Sign only when negative: `₹3,800.00`, `-₹12.00`
    pub fn unsigned(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// A transaction's amount, signed by its type
    pub fn transaction_amount(&self, txn: &Transaction) -> String {
        self.signed(txn.signed_amount())
    }

    pub fn datetime(&self, date: &NaiveDateTime) -> String {
        let mut out = String::new();
        match write!(out, "{}", date.format(&self.datetime_format)) {
            Ok(()) => out,
            Err(_) => {
                tracing::warn!(
                    format = %self.datetime_format,
                    "date format failed, using stored form"
                );
                date.format(STORED_DATETIME_FORMAT).to_string()
            }
        }
    }
}

impl Default for DisplayFormat {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            datetime_format: settings.datetime_format,
        }
    }
}

/// The format parses and can render a date without an offset
fn is_valid_strftime(format: &str) -> bool {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    let Some(sample) = NaiveDate::from_ymd_opt(2024, 1, 2).and_then(|d| d.and_hms_opt(9, 5, 0))
    else {
        return false;
    };
    let mut out = String::new();
    write!(out, "{}", sample.format(format)).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionId, TransactionType};

    fn date(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_default_datetime_is_en_us_locale_string() {
        let fmt = DisplayFormat::default();
        assert_eq!(fmt.datetime(&date(0, 0, 0)), "1/2/2024, 12:00:00 AM");
        assert_eq!(fmt.datetime(&date(9, 5, 0)), "1/2/2024, 9:05:00 AM");
        assert_eq!(fmt.datetime(&date(21, 30, 15)), "1/2/2024, 9:30:15 PM");
    }

    #[test]
    fn test_transaction_amount_sign_follows_type() {
        let fmt = DisplayFormat::default();
        let mut txn = Transaction {
            id: TransactionId::new(1),
            name: "Rent".into(),
            amount: Money::from_cents(120_000),
            date: date(0, 0, 0),
            source: String::new(),
            recipient: String::new(),
            kind: TransactionType::Expense,
        };
        assert_eq!(fmt.transaction_amount(&txn), "-₹1,200.00");

        txn.kind = TransactionType::Income;
        assert_eq!(fmt.transaction_amount(&txn), "+₹1,200.00");
    }

    #[test]
    fn test_custom_symbol() {
        let settings = Settings {
            currency_symbol: "$".into(),
            ..Settings::default()
        };
        let fmt = DisplayFormat::from_settings(&settings);
        assert_eq!(fmt.signed(Money::from_cents(-5)), "-$0.05");
        assert_eq!(fmt.unsigned(Money::from_cents(380_000)), "$3,800.00");
    }

    #[test]
    fn test_invalid_datetime_format_falls_back() {
        let settings = Settings {
            datetime_format: "%Q broken".into(),
            ..Settings::default()
        };
        let fmt = DisplayFormat::from_settings(&settings);
        assert_eq!(fmt, DisplayFormat::default());
    }

    #[test]
    fn test_offset_formats_fall_back() {
        for format in ["%Y-%m-%d %z", "%d %b %Y %Z", "%+", "%:z"] {
            let settings = Settings {
                datetime_format: format.into(),
                ..Settings::default()
            };
            let fmt = DisplayFormat::from_settings(&settings);
            assert_eq!(fmt, DisplayFormat::default(), "format {}", format);
            assert_eq!(fmt.datetime(&date(9, 5, 0)), "1/2/2024, 9:05:00 AM");
        }
    }

    #[test]
    fn test_custom_datetime_format() {
        let settings = Settings {
            datetime_format: "%Y-%m-%d %H:%M".into(),
            ..Settings::default()
        };
        let fmt = DisplayFormat::from_settings(&settings);
        assert_eq!(fmt.datetime(&date(21, 30, 15)), "2024-01-02 21:30");
    }
}
