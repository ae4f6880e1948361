//! `Content-Range` header parsing

use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, CONTENT_RANGE};

/// Total record count announced by a listing response
///
/// Returns 0 when the header is absent or announces an unknown total
/// (`*`). When the header is repeated, the last one wins.
pub fn total_record_count(headers: &HeaderMap) -> Result<u64> {
    let Some(value) = headers.get_all(CONTENT_RANGE).iter().last() else {
        return Ok(0);
    };

    let value = value
        .to_str()
        .map_err(|_| Error::import("Content-Range header is not valid text"))?;

    Ok(parse_total_count(value)?.unwrap_or(0))
}

/// Parse the total from `<anything>/<total>`
///
/// Only the text after the last `/` is read. `Ok(None)` means the server
/// did not know the total. A negative total counts as 0.
pub fn parse_total_count(value: &str) -> Result<Option<u64>> {
    let total = value
        .rsplit_once('/')
        .map_or(value, |(_, total)| total)
        .trim();

    if total == "*" {
        return Ok(None);
    }

    let total = total
        .parse::<i64>()
        .map_err(|_| Error::import(format!("Invalid Content-Range header '{value}'")))?;

    Ok(Some(u64::try_from(total).unwrap_or(0)))
}
