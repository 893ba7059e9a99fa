use actix_web::{HttpResponse, Responder, web};

use crate::routes::redirect;
use crate::services::{ServiceError, table as table_service};
use crate::table::RequestTableActions;

pub async fn table_event(
    actions: web::Data<dyn RequestTableActions>,
    form: web::Bytes,
) -> impl Responder {
    match table_service::handle_table_event(actions.get_ref(), form.as_ref()) {
        Ok(location) => redirect(&location),
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().body(message),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(err) => {
            log::error!("Failed to handle table event: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
