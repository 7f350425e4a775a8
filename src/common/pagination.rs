use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::common::error::{AppError, AppResult};

/// Page-number pagination settings for one collection.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct PageConfig {
    pub page_size: u32,
    pub max_page_size: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            max_page_size: 20,
        }
    }
}

impl PageConfig {
    pub fn new(page_size: u32, max_page_size: u32) -> Self {
        let max_page_size = max_page_size.max(1);
        Self {
            page_size: page_size.clamp(1, max_page_size),
            max_page_size,
        }
    }
}

/// Raw `page` / `page_size` query values. Kept as strings so malformed sizes can
/// fall back to the default instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number
    pub page: Option<String>,
    /// Items per page, capped by the collection maximum
    pub page_size: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageQuery {
    pub fn resolve(&self, config: PageConfig) -> AppResult<PageRequest> {
        let page = match self.page.as_deref().map(str::trim) {
            None | Some("") => 1,
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n >= 1 => n,
                _ => return Err(AppError::NotFound("Invalid page".to_string())),
            },
        };

        let page_size = self
            .page_size
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .map(|n| n.min(config.max_page_size))
            .unwrap_or(config.page_size);

        Ok(PageRequest { page, page_size })
    }
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// The first page always exists; any later page must start before `count`.
    pub fn ensure_in_range(&self, count: u64) -> AppResult<()> {
        if self.page > 1 && self.offset() as u64 >= count {
            return Err(AppError::NotFound("Invalid page".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(results: Vec<T>, count: u64, request: PageRequest, base_path: &str) -> Self {
        let link = |page: u32| format!("{}?page={}&page_size={}", base_path, page, request.page_size);

        let has_next = (request.offset() as u64) + (results.len() as u64) < count;
        let next = has_next.then(|| link(request.page + 1));
        let previous = (request.page > 1).then(|| link(request.page - 1));

        Self {
            count,
            next,
            previous,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, page_size: Option<&str>) -> PageQuery {
        PageQuery {
            page: page.map(String::from),
            page_size: page_size.map(String::from),
        }
    }

    #[test]
    fn defaults_to_first_page_of_ten() {
        let req = query(None, None).resolve(PageConfig::default()).unwrap();
        assert_eq!(req, PageRequest { page: 1, page_size: 10 });
        assert_eq!(req.offset(), 0);
        assert_eq!(req.limit(), 10);
    }

    #[test]
    fn page_size_is_capped_at_maximum() {
        let req = query(Some("2"), Some("50")).resolve(PageConfig::default()).unwrap();
        assert_eq!(req.page_size, 20);
        assert_eq!(req.offset(), 20);
    }

    #[test]
    fn malformed_page_size_falls_back_to_default() {
        for raw in ["abc", "0", "-3", ""] {
            let req = query(None, Some(raw)).resolve(PageConfig::default()).unwrap();
            assert_eq!(req.page_size, 10, "page_size={raw:?}");
        }
    }

    #[test]
    fn invalid_page_number_is_not_found() {
        for raw in ["0", "abc", "-1"] {
            let err = query(Some(raw), None).resolve(PageConfig::default()).unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)), "page={raw:?}");
        }
    }

    #[test]
    fn only_first_page_may_be_empty() {
        let first = PageRequest { page: 1, page_size: 10 };
        assert!(first.ensure_in_range(0).is_ok());

        let third = PageRequest { page: 3, page_size: 10 };
        assert!(third.ensure_in_range(21).is_ok());
        assert!(third.ensure_in_range(20).is_err());
    }

    #[test]
    fn page_links_point_to_neighbours() {
        let req = PageRequest { page: 2, page_size: 10 };
        let page = Page::new(vec![0u8; 10], 35, req, "/api/v1/orders");

        assert_eq!(page.next.as_deref(), Some("/api/v1/orders?page=3&page_size=10"));
        assert_eq!(page.previous.as_deref(), Some("/api/v1/orders?page=1&page_size=10"));

        let last = Page::new(vec![0u8; 5], 35, PageRequest { page: 4, page_size: 10 }, "/api/v1/orders");
        assert!(last.next.is_none());
    }

    #[test]
    fn config_keeps_default_within_maximum() {
        let config = PageConfig::new(50, 20);
        assert_eq!(config.page_size, 20);
        assert_eq!(PageConfig::new(10, 0).max_page_size, 1);
    }
}
