use serde::Serialize;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Validated pagination parameters. Construct via [`PaginationParams::from_raw`]
/// so page is always >= 1 and page_size is always in 1..=MAX_PAGE_SIZE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PaginationParams {
    fn default() -> Self {
        PaginationParams {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationParams {
    /// Parses raw query string values. Missing, non-numeric or out-of-range
    /// values fall back to the defaults rather than failing the request.
    pub fn from_raw(page: Option<&str>, page_size: Option<&str>) -> Self {
        let mut params = PaginationParams::default();

        if let Some(p) = page.and_then(|v| v.trim().parse::<usize>().ok()) {
            if p > 0 {
                params.page = p;
            }
        }

        if let Some(ps) = page_size.and_then(|v| v.trim().parse::<usize>().ok()) {
            if ps > 0 && ps <= MAX_PAGE_SIZE {
                params.page_size = ps;
            }
        }

        params
    }

    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }
}

/// One page of results plus the metadata callers need to fetch the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// Windows an already-filtered, order-preserved sequence. A page past
    /// the end yields an empty window, not an error.
    pub fn new(items: Vec<T>, params: PaginationParams) -> Self {
        let total = items.len();
        let total_pages = if total == 0 {
            0
        } else {
            total.div_ceil(params.page_size)
        };

        let data = items
            .into_iter()
            .skip(params.offset())
            .take(params.page_size)
            .collect();

        Paginated {
            data,
            page: params.page,
            page_size: params.page_size,
            total,
            total_pages,
        }
    }
}
