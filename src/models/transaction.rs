//! Transaction model
//!
//! A transaction records an income or expense entry. The amount is stored as
//! an unsigned magnitude; whether it adds to or subtracts from the balance is
//! decided by its type.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Format used when writing dates to disk
pub const STORED_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Whether a transaction is money coming in or going out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Map the form's "income" checkbox to a type
    pub fn from_income_flag(is_income: bool) -> Self {
        if is_income {
            Self::Income
        } else {
            Self::Expense
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A recorded transaction
///
/// Field order matches the stored JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// Free-text description
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,

    /// Unsigned magnitude
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Money,

    #[serde(with = "stored_datetime")]
    pub date: NaiveDateTime,

    /// Payment method
    #[serde(default, deserialize_with = "string_or_null")]
    pub source: String,

    #[serde(default, deserialize_with = "string_or_null")]
    pub recipient: String,

    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    /// Build a stored transaction from validated input and an assigned id
    pub fn from_new(id: TransactionId, input: NewTransaction) -> Self {
        Self {
            id,
            name: input.name,
            amount: input.amount,
            date: input.date,
            source: input.source,
            recipient: input.recipient,
            kind: input.kind,
        }
    }

    /// The amount with the sign implied by the type
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount.abs(),
            TransactionType::Expense => -self.amount.abs(),
        }
    }
}

/// Candidate transaction submitted by the user, before an id is assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub name: String,
    pub amount: Money,
    pub date: NaiveDateTime,
    pub source: String,
    pub recipient: String,
    pub kind: TransactionType,
}

impl NewTransaction {
    /// Validate raw form input
    ///
    /// The amount must parse, must not be negative and must not exceed
    /// [`Money::MAX`]; the date accepts the same formats as stored dates
    /// (see [`parse_datetime`]).
    pub fn from_form(
        name: &str,
        amount: &str,
        date: &str,
        source: &str,
        recipient: &str,
        is_income: bool,
    ) -> LedgerResult<Self> {
        let amount = Money::parse(amount).map_err(|e| {
            LedgerError::Validation(format!(
                "Invalid amount '{}'. Use a format like '1200' or '49.99'. {}",
                amount.trim(),
                e
            ))
        })?;
        if amount.is_negative() {
            return Err(LedgerError::Validation(format!(
                "Amount must not be negative: {}",
                amount
            )));
        }
        if amount.exceeds_limit() {
            return Err(LedgerError::Validation(format!(
                "Amount must not exceed {}",
                Money::MAX
            )));
        }

        let date = parse_datetime(date).ok_or_else(|| {
            LedgerError::Validation(format!(
                "Invalid date '{}'. Use YYYY-MM-DD or YYYY-MM-DDTHH:MM",
                date.trim()
            ))
        })?;

        Ok(Self {
            name: name.trim().to_string(),
            amount,
            date,
            source: source.trim().to_string(),
            recipient: recipient.trim().to_string(),
            kind: TransactionType::from_income_flag(is_income),
        })
    }
}

/// Parse a date-time in any of the accepted layouts
///
/// RFC 3339 timestamps are converted to local time; naive forms
/// (`YYYY-MM-DDTHH:MM[:SS]`, `YYYY-MM-DD HH:MM[:SS]`) are taken as local
/// already, and a bare `YYYY-MM-DD` means midnight.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt);
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

mod stored_datetime {
    use super::{parse_datetime, STORED_DATETIME_FORMAT};
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(STORED_DATETIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_datetime(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {}", raw)))
    }
}

fn string_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Stored amounts that are not numbers (a NaN amount is written as `null`),
/// are negative or exceed [`Money::MAX`] count as zero.
fn lenient_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;

    let amount = value.as_f64().and_then(Money::from_f64);
    match amount {
        Some(amount) if amount.is_negative() => {
            tracing::warn!(%amount, "negative stored amount treated as zero");
            Ok(Money::zero())
        }
        Some(amount) if amount.exceeds_limit() => {
            tracing::warn!(%amount, "out of range stored amount treated as zero");
            Ok(Money::zero())
        }
        Some(amount) => Ok(amount),
        None => {
            tracing::warn!(%value, "non-numeric stored amount treated as zero");
            Ok(Money::zero())
        }
    }
}
