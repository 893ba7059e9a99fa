use tera::Tera;

use crate::domain::request::Request;
use crate::domain::sort::SortState;
use crate::forms::table_event::TableEventForm;
use crate::services::{ServiceError, ServiceResult};
use crate::table::{RequestTable, RequestTableActions, RequestTablePresenter, TableEvent, dispatch};

/// Renders the request table fragment for embedding into a host page.
pub fn render_request_table<P>(
    tera: &Tera,
    requests: &[Request],
    presenter: &P,
    sort: Option<&SortState>,
    events_url: &str,
) -> ServiceResult<String>
where
    P: RequestTablePresenter + ?Sized,
{
    RequestTable::new(requests, presenter, events_url)
        .sorted_by(sort)
        .render(tera)
        .map_err(|err| {
            log::error!("Failed to render request table: {err}");
            ServiceError::from(err)
        })
}

/// Decodes a posted control and delivers it to the host callbacks.
///
/// Returns the location the host wants the browser to go to next.
pub fn handle_table_event<A>(actions: &A, body: &[u8]) -> ServiceResult<String>
where
    A: RequestTableActions + ?Sized,
{
    let form = TableEventForm::parse(body).map_err(|err| {
        log::error!("Failed to decode table event: {err}");
        err
    })?;
    let event = TableEvent::try_from(form).map_err(|err| {
        log::error!("Failed to validate table event: {err}");
        err
    })?;

    log::debug!("Dispatching table event {} ({event:?})", event.name());

    dispatch(actions, event).map_err(|err| {
        log::error!("Failed to handle table event {}: {err}", event.name());
        err
    })
}
