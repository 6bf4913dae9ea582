//! `pagination` search parameter.

use serde::{Deserialize, Serialize};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Table pagination, serialized as `"<page_index>,<page_size>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub page_index: u64,
    pub page_size: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    /// Parse the raw search parameter, falling back to the default on
    /// absent or malformed input.
    pub fn parse_server_side(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_default()
    }

    fn parse(raw: &str) -> Option<Self> {
        let (index, size) = raw.split_once(',')?;
        let page_index = index.trim().parse().ok()?;
        let page_size = size.trim().parse().ok()?;
        if page_size == 0 {
            return None;
        }
        Some(Self {
            page_index,
            page_size,
        })
    }

    /// Row offset of the first item on the page.
    pub fn offset(&self) -> u64 {
        self.page_index.saturating_mul(self.page_size)
    }

    /// Serialize back to the search parameter form.
    pub fn to_search_param(&self) -> String {
        format!("{},{}", self.page_index, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let state = PaginationState::parse_server_side(Some("2,25"));
        assert_eq!(
            state,
            PaginationState {
                page_index: 2,
                page_size: 25
            }
        );
        assert_eq!(state.offset(), 50);
        assert_eq!(state.to_search_param(), "2,25");
    }

    #[test]
    fn test_defaults() {
        let default = PaginationState::default();
        assert_eq!(PaginationState::parse_server_side(None), default);
        assert_eq!(PaginationState::parse_server_side(Some("")), default);
        assert_eq!(PaginationState::parse_server_side(Some("3")), default);
        assert_eq!(PaginationState::parse_server_side(Some("a,b")), default);
        assert_eq!(PaginationState::parse_server_side(Some("-1,10")), default);
        assert_eq!(PaginationState::parse_server_side(Some("1,0")), default);
        assert_eq!(default.offset(), 0);
    }
}
