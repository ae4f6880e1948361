//! Engine types
//!
//! The ordered result of a paged listing.

use crate::error::Result;
use crate::types::ApiResponse;
use serde_json::Value;

/// Pages of a listing in fetch order
///
/// Fetch order is ascending range order. A list returned by the engine is
/// never empty and every page has status `200`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceList {
    pages: Vec<ApiResponse>,
}

impl ResourceList {
    /// Wrap fetched pages
    pub fn new(pages: Vec<ApiResponse>) -> Self {
        Self { pages }
    }

    /// Pages in fetch order
    pub fn pages(&self) -> &[ApiResponse] {
        &self.pages
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if there are no pages
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate over pages
    pub fn iter(&self) -> std::slice::Iter<'_, ApiResponse> {
        self.pages.iter()
    }

    /// Take the pages out
    pub fn into_pages(self) -> Vec<ApiResponse> {
        self.pages
    }

    /// All records across pages, in order
    ///
    /// A page holding a JSON array contributes its elements, any other JSON
    /// value is one record. Empty bodies contribute nothing.
    pub fn records(&self) -> Result<Vec<Value>> {
        let mut records = Vec::new();
        for page in &self.pages {
            if page.body().trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Value>(page.body())? {
                Value::Array(items) => records.extend(items),
                other => records.push(other),
            }
        }
        Ok(records)
    }
}

impl IntoIterator for ResourceList {
    type Item = ApiResponse;
    type IntoIter = std::vec::IntoIter<ApiResponse>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResourceList {
    type Item = &'a ApiResponse;
    type IntoIter = std::slice::Iter<'a, ApiResponse>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
