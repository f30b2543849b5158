use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Category;

/// One persisted expense record. Records are immutable once created;
/// the store assigns the id and is the only component that builds these.
///
/// The serialized shape is fixed: `id` as a UUID string, `amount` as a
/// JSON number, `category` as its variant name, `date` as an RFC 3339
/// string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: Category,
    pub date: DateTime<Utc>,
}

/// An expense candidate as submitted by the form or CLI, before the
/// store has assigned it an id.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub title: String,
    pub amount: Decimal,
    pub category: Category,
    pub date: DateTime<Utc>,
}

impl NewExpense {
    pub(crate) fn into_expense(self, id: Uuid) -> Expense {
        Expense {
            id,
            title: self.title,
            amount: self.amount,
            category: self.category,
            date: self.date,
        }
    }
}
