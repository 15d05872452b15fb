//! Dashboard counters

use serde::{Deserialize, Serialize};

/// Counters shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_books: u64,
    pub available_books: u64,
    pub total_checkouts: u64,
    pub active_checkouts: u64,
}
