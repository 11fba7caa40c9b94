//! Page/size inputs for listing endpoints.

/// 1-based page index and page size as sent by clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

pub const MAX_PER_PAGE: u32 = 100;

impl Pagination {
    /// Clamp to sane bounds: page 0 means the first page, size stays within 1..=100.
    pub fn normalize(self) -> Self {
        Self { page: self.page.max(1), per_page: self.per_page.clamp(1, MAX_PER_PAGE) }
    }

    /// Row offset and limit for the normalized page.
    pub fn offset_limit(self) -> (u64, u64) {
        let p = self.normalize();
        ((p.page as u64 - 1) * p.per_page as u64, p.per_page as u64)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: 20 } }
}
