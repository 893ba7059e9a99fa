//! Display callbacks supplied by the page hosting the table.

use crate::domain::request::RequestStatus;
use crate::domain::sort::{SortField, SortState};

/// Formatting hooks the table delegates to its host.
///
/// Implementations must be pure: the table calls `status_icon`,
/// `status_color` and `format_date` once per row and `render_sort_icon` once
/// per sortable header on every render. Icons are HTML snippets inserted
/// without escaping.
pub trait RequestTablePresenter {
    /// Icon markup placed before the status text in the badge.
    fn status_icon(&self, status: &RequestStatus) -> String;

    /// CSS classes applied to the status badge.
    fn status_color(&self, status: &RequestStatus) -> String;

    /// Text shown in the date column for a raw `created_at` value.
    fn format_date(&self, timestamp: &str) -> String;

    /// Sort indicator markup for a sortable header.
    fn render_sort_icon(&self, field: SortField, sort: Option<&SortState>) -> String;
}
