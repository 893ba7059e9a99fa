//! Actix-web surface of the request table.

use actix_web::http::header;
use actix_web::{HttpResponse, web};

pub mod table;

/// Path the table controls post to unless the host configures another one.
pub const DEFAULT_EVENTS_PATH: &str = "/request-table/events";

/// Mounts the table event route at `events_path`.
///
/// The host must register its callbacks as `web::Data<dyn RequestTableActions>`.
pub fn configure(cfg: &mut web::ServiceConfig, events_path: &str) {
    cfg.service(web::resource(events_path).route(web::post().to(table::table_event)));
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
