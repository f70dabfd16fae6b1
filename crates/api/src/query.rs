//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters of the forms list (`?search=&page=`).
///
/// `page` is 1-based and is deliberately NOT reset or clamped when the
/// search filter changes. An out-of-range page renders as an empty page
/// with its requested index, so clients can detect and correct it.
#[derive(Debug, Deserialize)]
pub struct FormsListParams {
    pub search: Option<String>,
    pub page: Option<usize>,
}
