//! Server-rendered table of requests.
//!
//! The table is a pure function of its inputs: the requests in the order the
//! host wants them shown, a [`RequestTablePresenter`] for everything that
//! depends on the host's status taxonomy or locale, and the URL its controls
//! post [`TableEvent`]s to.

pub mod events;
pub mod presenter;
pub mod render;
pub mod view;

use tera::Tera;

use crate::domain::request::Request;
use crate::domain::sort::SortState;

pub use events::{RequestTableActions, TableEvent, dispatch};
pub use presenter::RequestTablePresenter;
pub use view::{TableView, build_table_view};

/// Inputs of a single table render.
pub struct RequestTable<'a, P: ?Sized> {
    pub requests: &'a [Request],
    pub presenter: &'a P,
    /// Current ordering, handed to the sort-icon callback only.
    pub sort: Option<&'a SortState>,
    pub events_url: &'a str,
}

impl<'a, P> RequestTable<'a, P>
where
    P: RequestTablePresenter + ?Sized,
{
    pub fn new(requests: &'a [Request], presenter: &'a P, events_url: &'a str) -> Self {
        Self {
            requests,
            presenter,
            sort: None,
            events_url,
        }
    }

    pub fn sorted_by(mut self, sort: Option<&'a SortState>) -> Self {
        self.sort = sort;
        self
    }

    pub fn view(&self) -> TableView {
        build_table_view(self.requests, self.presenter, self.sort, self.events_url)
    }

    pub fn render(&self, tera: &Tera) -> tera::Result<String> {
        render::render_table(tera, &self.view())
    }
}
