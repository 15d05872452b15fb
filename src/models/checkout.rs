//! Checkout (loan) model and related types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A book lent to a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkout {
    pub id: String,
    pub student_name: String,
    pub book_id: String,
    pub checkout_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<DateTime<Utc>>,
}

impl Checkout {
    /// The book has not been returned yet
    pub fn is_active(&self) -> bool {
        self.return_date.is_none()
    }

    /// Time the book was (or has so far been) out
    pub fn duration_at(&self, now: DateTime<Utc>) -> Duration {
        self.return_date.unwrap_or(now) - self.checkout_date
    }
}

/// Create checkout request. The backend assigns `id` and `checkoutDate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCheckout {
    pub student_name: String,
    pub book_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<DateTime<Utc>>,
}

impl NewCheckout {
    pub fn new(student_name: impl Into<String>, book_id: impl Into<String>) -> Self {
        Self {
            student_name: student_name.into(),
            book_id: book_id.into(),
            return_date: None,
        }
    }
}
