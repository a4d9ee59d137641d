//! Skip/take pagination for list queries.
//!
//! Queries fetch one row more than requested; the extra row only signals
//! that another page exists and is never returned.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_TAKE: u64 = 250;
/// Maximum page size.
const MAX_TAKE: u64 = 1000;
/// Largest skip that still fits a PostgreSQL `OFFSET`.
const MAX_SKIP: u64 = i64::MAX as u64;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Number of rows to skip.
    #[serde(default)]
    pub skip: u64,
    /// Number of rows to return.
    #[serde(default = "default_take")]
    pub take: u64,
}

impl PageRequest {
    /// Create a new page request; `take` is clamped to `1..=1000` and
    /// `skip` to `i64::MAX`.
    pub fn new(skip: u64, take: u64) -> Self {
        Self {
            skip: skip.min(MAX_SKIP),
            take: take.clamp(1, MAX_TAKE),
        }
    }

    /// The SQL `OFFSET` value.
    pub fn offset(&self) -> i64 {
        i64::try_from(self.skip).unwrap_or(i64::MAX)
    }

    /// The SQL `LIMIT` value, including the look-ahead row.
    pub fn limit_with_lookahead(&self) -> i64 {
        self.take.clamp(1, MAX_TAKE) as i64 + 1
    }

    /// The request for the page after this one.
    pub fn next(&self) -> Self {
        Self::new(self.skip.saturating_add(self.take), self.take)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            skip: 0,
            take: DEFAULT_TAKE,
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Whether another page follows.
    pub has_next_page: bool,
}

impl<T> Paginated<T> {
    /// Build a page from rows fetched with [`PageRequest::limit_with_lookahead`].
    pub fn from_lookahead(mut items: Vec<T>, take: u64) -> Self {
        let take = take as usize;
        let has_next_page = items.len() > take;
        if has_next_page {
            items.truncate(take);
        }
        Self {
            items,
            has_next_page,
        }
    }
}

fn default_take() -> u64 {
    DEFAULT_TAKE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_is_clamped() {
        assert_eq!(PageRequest::new(0, 0).take, 1);
        assert_eq!(PageRequest::new(0, 5000).take, MAX_TAKE);
    }

    #[test]
    fn test_lookahead_row_is_dropped() {
        let page = Paginated::from_lookahead(vec![1, 2, 3, 4], 3);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert!(page.has_next_page);
    }

    #[test]
    fn test_last_page() {
        let page = Paginated::from_lookahead(vec![1, 2], 3);
        assert_eq!(page.items, vec![1, 2]);
        assert!(!page.has_next_page);
    }

    #[test]
    fn test_next_page() {
        let request = PageRequest::new(10, 5);
        assert_eq!(request.next(), PageRequest::new(15, 5));
        assert_eq!(request.limit_with_lookahead(), 6);
    }

    #[test]
    fn test_huge_skip_stays_a_valid_offset() {
        let request = PageRequest::new(u64::MAX, 10);
        assert_eq!(request.offset(), i64::MAX);
        assert_eq!(request.next().offset(), i64::MAX);

        // Deserialized requests bypass `new`.
        let raw = PageRequest {
            skip: u64::MAX,
            take: u64::MAX,
        };
        assert_eq!(raw.offset(), i64::MAX);
        assert_eq!(raw.limit_with_lookahead(), 1001);
    }
}
