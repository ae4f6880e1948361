//! Pagination types
//!
//! Defines the cursor that walks a ranged listing.

use std::fmt;

/// Records requested per ranged call
pub const PAGE_SIZE: u64 = 1000;

/// Query parameter carrying the record window
pub const RANGE_PARAM: &str = "_range";

/// Inclusive, zero-indexed record window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: u64,
    pub end: u64,
}

impl PageRange {
    /// Window for the `call`-th ranged request (the unranged first call is 0)
    pub fn for_call(call: u64, page_size: u64) -> Self {
        Self {
            start: call * page_size,
            end: (call + 1) * page_size - 1,
        }
    }

    /// Append `_range=<start>-<end>` to a URL
    ///
    /// Uses `&` when the URL already carries a query string, `?` otherwise.
    pub fn apply_to(&self, url: &str) -> String {
        let separator = if url.contains('?') { '&' } else { '?' };
        format!("{url}{separator}{RANGE_PARAM}={self}")
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Tracks a ranged listing while it is being fetched
///
/// The unranged first call is assumed to have returned a full page, so
/// `records_fetched` starts at `page_size` whatever that page held. Each
/// further page adds exactly `page_size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    records_fetched: u64,
    total_records: u64,
    page_size: u64,
    calls: u64,
}

impl PageCursor {
    /// Cursor positioned after the first, unranged page
    pub fn new(total_records: u64, page_size: u64) -> Self {
        Self {
            records_fetched: page_size,
            total_records,
            page_size,
            calls: 1,
        }
    }

    /// Window of the next page, or `None` once the total is covered
    pub fn next_range(&self) -> Option<PageRange> {
        (self.total_records > self.records_fetched)
            .then(|| PageRange::for_call(self.calls, self.page_size))
    }

    /// Record that the page from [`next_range`](Self::next_range) arrived
    pub fn advance(&mut self) {
        self.records_fetched += self.page_size;
        self.calls += 1;
    }

    /// Records counted as fetched so far
    pub fn records_fetched(&self) -> u64 {
        self.records_fetched
    }

    /// Total announced by the server
    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    /// Calls made so far, the unranged one included
    pub fn calls(&self) -> u64 {
        self.calls
    }
}
