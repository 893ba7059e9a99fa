//! Events emitted by the table controls and their delivery to the host.

use crate::domain::sort::SortField;
use crate::domain::types::RequestId;
use crate::services::ServiceResult;

/// A single activation of a header or row control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableEvent {
    Sort(SortField),
    ViewDetails(RequestId),
    UpdateRequest(RequestId),
    CancelRequest(RequestId),
}

impl TableEvent {
    /// Name of the event as carried by the control's form.
    pub const fn name(&self) -> &'static str {
        match self {
            TableEvent::Sort(_) => "sort",
            TableEvent::ViewDetails(_) => "view",
            TableEvent::UpdateRequest(_) => "update",
            TableEvent::CancelRequest(_) => "cancel",
        }
    }
}

/// Callbacks owned by the page hosting the table.
///
/// Each method receives exactly one argument and returns the location the
/// browser should be sent to once the host has handled the event.
#[cfg_attr(any(test, feature = "test-mocks"), mockall::automock)]
pub trait RequestTableActions: Send + Sync {
    fn on_sort(&self, field: SortField) -> ServiceResult<String>;

    fn on_view_details(&self, id: RequestId) -> ServiceResult<String>;

    fn on_update_request(&self, id: RequestId) -> ServiceResult<String>;

    fn on_cancel_request(&self, id: RequestId) -> ServiceResult<String>;
}

/// Delivers `event` to the matching callback, once.
pub fn dispatch<A>(actions: &A, event: TableEvent) -> ServiceResult<String>
where
    A: RequestTableActions + ?Sized,
{
    match event {
        TableEvent::Sort(field) => actions.on_sort(field),
        TableEvent::ViewDetails(id) => actions.on_view_details(id),
        TableEvent::UpdateRequest(id) => actions.on_update_request(id),
        TableEvent::CancelRequest(id) => actions.on_cancel_request(id),
    }
}
