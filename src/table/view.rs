//! View model of the request table, shaped for the Tera template.

use serde::Serialize;

use crate::domain::request::{Request, RequestDetail};
use crate::domain::sort::{SortField, SortState};
use crate::table::presenter::RequestTablePresenter;

/// Number of line items listed per row before the summary line.
pub const VISIBLE_ITEMS: usize = 3;

/// Item names longer than this are cut and suffixed with an ellipsis.
pub const ITEM_NAME_MAX_CHARS: usize = 32;

/// Placeholder shown in the note column when a request has no note.
pub const EMPTY_NOTE: &str = "-";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HeaderCell {
    pub label: &'static str,
    /// Set for sortable columns.
    pub sort_field: Option<&'static str>,
    pub sort_icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ItemLine {
    /// Name as rendered, possibly truncated.
    pub name: String,
    pub full_name: String,
    pub quantity: i32,
    /// Line as rendered after the marker icon, e.g. `Widget (2x)`.
    pub label: String,
}

impl ItemLine {
    fn from_detail(detail: &RequestDetail) -> Self {
        let full_name = detail.display_name().into_owned();
        let name = truncate_name(&full_name);
        Self {
            label: format!("{name} ({}x)", detail.requested_quantity),
            name,
            full_name,
            quantity: detail.requested_quantity,
        }
    }
}

/// Controls rendered in the actions column.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
    View,
    Update,
    Cancel,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RowView {
    pub id: i32,
    pub request_number: String,
    pub status: String,
    pub status_icon: String,
    pub status_color: String,
    pub items: Vec<ItemLine>,
    /// Details beyond the visible ones.
    pub more_items: usize,
    /// `+K item lainnya` when any details are hidden.
    pub more_items_label: Option<String>,
    pub note: String,
    pub created_at: String,
    pub actions: Vec<RowAction>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RowView>,
    pub events_url: String,
}

/// Builds the table for `requests`, keeping their order.
pub fn build_table_view<P>(
    requests: &[Request],
    presenter: &P,
    sort: Option<&SortState>,
    events_url: &str,
) -> TableView
where
    P: RequestTablePresenter + ?Sized,
{
    TableView {
        headers: build_headers(presenter, sort),
        rows: requests
            .iter()
            .map(|request| build_row(request, presenter))
            .collect(),
        events_url: events_url.to_string(),
    }
}

fn build_headers<P>(presenter: &P, sort: Option<&SortState>) -> Vec<HeaderCell>
where
    P: RequestTablePresenter + ?Sized,
{
    let sortable = |label, field: SortField| HeaderCell {
        label,
        sort_field: Some(field.as_str()),
        sort_icon: Some(presenter.render_sort_icon(field, sort)),
    };
    let fixed = |label| HeaderCell {
        label,
        sort_field: None,
        sort_icon: None,
    };

    vec![
        sortable("Request Number", SortField::RequestNumber),
        sortable("Status", SortField::Status),
        fixed("Items Requested"),
        fixed("Catatan"),
        sortable("Tanggal", SortField::CreatedAt),
        fixed("Aksi"),
    ]
}

fn build_row<P>(request: &Request, presenter: &P) -> RowView
where
    P: RequestTablePresenter + ?Sized,
{
    let details = request.details();
    let more_items = details.len().saturating_sub(VISIBLE_ITEMS);

    let mut actions = vec![RowAction::View];
    if request.status.is_draft() {
        actions.extend([RowAction::Update, RowAction::Cancel]);
    }

    RowView {
        id: request.id.get(),
        request_number: request.request_number.clone(),
        status: request.status.as_str().to_string(),
        status_icon: presenter.status_icon(&request.status),
        status_color: presenter.status_color(&request.status),
        items: details
            .iter()
            .take(VISIBLE_ITEMS)
            .map(ItemLine::from_detail)
            .collect(),
        more_items,
        more_items_label: (more_items > 0).then(|| format!("+{more_items} item lainnya")),
        note: request.note().unwrap_or(EMPTY_NOTE).to_string(),
        created_at: presenter.format_date(&request.created_at),
        actions,
    }
}

fn truncate_name(name: &str) -> String {
    match name.char_indices().nth(ITEM_NAME_MAX_CHARS) {
        Some((cut, _)) => format!("{}…", &name[..cut]),
        None => name.to_string(),
    }
}
