//! Pagination module
//!
//! Range-based pagination for SFG listing endpoints.
//!
//! # Overview
//!
//! A listing call returns the first page and announces the total number of
//! records in its `Content-Range` header (`0-999/2500`). Further pages are
//! requested with a `_range=<start>-<end>` query parameter until the
//! announced total is covered.

mod content_range;
mod types;

pub use content_range::{parse_total_count, total_record_count};
pub use types::{PageCursor, PageRange, PAGE_SIZE, RANGE_PARAM};
