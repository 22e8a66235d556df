//! View Transform Parameters
//!
//! The three orthogonal transformations applied to a collection:
//! free-text filter, single-key sort, fixed-size pages.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort key and direction. At most one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::ascending("id")
    }
}

impl SortSpec {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Sort-header click: same key flips direction, a new key starts ascending.
    pub fn toggled(&self, key: &str) -> Self {
        if self.key == key {
            Self {
                key: self.key.clone(),
                direction: self.direction.flipped(),
            }
        } else {
            Self::ascending(key)
        }
    }

    /// Indicator for a column header
    pub fn indicator(&self, key: &str) -> SortIndicator {
        match (self.key == key, self.direction) {
            (false, _) => SortIndicator::Unsorted,
            (true, SortDirection::Ascending) => SortIndicator::Ascending,
            (true, SortDirection::Descending) => SortIndicator::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

/// Case-insensitive free-text query. Empty = no filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec(String);

impl FilterSpec {
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into())
    }

    pub fn query(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fixed page size and 1-based current page. Only built through
/// [`PageSpec::new`] / [`PageSpec::with_page`], so both stay positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    page_size: usize,
    current_page: usize,
}

impl PageSpec {
    /// A zero page size is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn with_page(self, page: usize) -> Self {
        Self {
            current_page: page.max(1),
            ..self
        }
    }

    /// `ceil(count / page_size)`; zero for an empty result
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size)
    }

    /// Clamp the current page into `1..=max(1, total_pages)`
    pub fn clamped(self, count: usize) -> Self {
        let last = self.total_pages(count).max(1);
        self.with_page(self.current_page.min(last))
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_same_key_flips() {
        let spec = SortSpec::default();
        let once = spec.toggled("id");
        assert_eq!(once.direction, SortDirection::Descending);
        assert_eq!(once.toggled("id").direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggle_new_key_resets_to_ascending() {
        let spec = SortSpec::descending("id").toggled("orgName");
        assert_eq!(spec, SortSpec::ascending("orgName"));
    }

    #[test]
    fn test_indicator() {
        let spec = SortSpec::descending("orgUrl");
        assert_eq!(spec.indicator("orgUrl"), SortIndicator::Descending);
        assert_eq!(spec.indicator("id"), SortIndicator::Unsorted);
    }

    #[test]
    fn test_page_bounds() {
        let page = PageSpec::new(10);
        assert_eq!(page.total_pages(0), 0);
        assert_eq!(page.total_pages(10), 1);
        assert_eq!(page.total_pages(12), 2);
        assert_eq!(page.with_page(5).clamped(12).current_page(), 2);
        assert_eq!(page.with_page(5).clamped(0).current_page(), 1);
        assert_eq!(page.with_page(0).current_page(), 1);
        assert_eq!(PageSpec::new(0).page_size(), 1);
    }

    #[test]
    fn test_zero_inputs_are_raised_to_one() {
        let page = PageSpec::new(0);
        assert_eq!(page.total_pages(5), 5);
        assert_eq!(page.clamped(5).current_page(), 1);

        let page = PageSpec::new(10).with_page(0);
        assert_eq!(page.current_page(), 1);
        assert_eq!(page.total_pages(3), 1);
    }
}
