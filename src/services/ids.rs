//! Client-side book identifiers

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::config::BookIdStrategy;

/// Id to attach to a new book, or `None` when the backend assigns it.
///
/// The timestamp scheme only makes collisions unlikely: two books created in
/// the same millisecond share a prefix and rely on the 3-digit suffix.
pub fn generate_book_id(strategy: BookIdStrategy) -> Option<String> {
    match strategy {
        BookIdStrategy::Timestamp => {
            let suffix = rand::thread_rng().gen_range(100..=999);
            Some(format!("B-{}{}", Utc::now().timestamp_millis(), suffix))
        }
        BookIdStrategy::Uuid => Some(format!("B-{}", Uuid::new_v4())),
        BookIdStrategy::Server => None,
    }
}
