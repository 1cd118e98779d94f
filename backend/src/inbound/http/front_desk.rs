//! Front desk HTTP handlers.
//!
//! ```text
//! GET  /          HTML front desk page
//! POST /checkin   check a guest in, then 303 back to /
//! POST /checkout  check a room out, then 303 back to /
//! GET  /export    guest history as CSV
//! ```
//!
//! A full hotel and a check-out of an empty room are not reported to the
//! browser; both redirect home and are logged by the service.

use actix_web::http::header::{self, ContentDisposition, ContentType, DispositionParam, DispositionType};
use actix_web::{HttpResponse, get, post, web};
use tracing::{debug, error};

use crate::domain::{BookingError, CheckIn, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::export::{HISTORY_FILENAME, history_csv};
use crate::inbound::http::forms::{CheckInForm, CheckOutForm};
use crate::inbound::http::page::FrontDeskPage;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

/// Render the front desk page.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Front desk page", body = String, content_type = "text/html"),
        (status = 503, description = "Booking registry unavailable", body = ErrorSchema)
    ),
    tags = ["front-desk"],
    operation_id = "frontDeskPage"
)]
#[get("/")]
pub async fn front_desk_page(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let snapshot = state.booking_queries.snapshot().await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(FrontDeskPage::new(&snapshot).to_string()))
}

/// Check a guest in to the lowest free room.
#[utoipa::path(
    post,
    path = "/checkin",
    request_body(content = CheckInForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Checked in, or the hotel is full; redirects to /"),
        (status = 400, description = "Missing or malformed form field", body = ErrorSchema),
        (status = 503, description = "Booking registry unavailable", body = ErrorSchema)
    ),
    tags = ["front-desk"],
    operation_id = "checkIn"
)]
#[post("/checkin")]
pub async fn check_in(
    state: web::Data<HttpState>,
    form: web::Form<CheckInForm>,
) -> ApiResult<HttpResponse> {
    let request = CheckIn::try_from(form.into_inner())?;
    match state.bookings.check_in(request).await {
        Ok(_) | Err(BookingError::NoRoomsAvailable) => Ok(redirect_home()),
        Err(error) => Err(error.into()),
    }
}

/// Check out the guest in the submitted room.
#[utoipa::path(
    post,
    path = "/checkout",
    request_body(content = CheckOutForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Checked out, or nothing to do; redirects to /"),
        (status = 503, description = "Booking registry unavailable", body = ErrorSchema)
    ),
    tags = ["front-desk"],
    operation_id = "checkOut"
)]
#[post("/checkout")]
pub async fn check_out(
    state: web::Data<HttpState>,
    form: web::Form<CheckOutForm>,
) -> ApiResult<HttpResponse> {
    let Some(room) = form.room_number() else {
        debug!(room = ?form.room, "ignoring check-out without a room number");
        return Ok(redirect_home());
    };
    match state.bookings.check_out(room).await {
        Ok(_) | Err(BookingError::RoomNotOccupied { .. }) => Ok(redirect_home()),
        Err(error) => Err(error.into()),
    }
}

/// Download the checked-out guest history.
#[utoipa::path(
    get,
    path = "/export",
    responses(
        (status = 200, description = "Guest history", body = String, content_type = "text/csv"),
        (status = 503, description = "Booking registry unavailable", body = ErrorSchema)
    ),
    tags = ["front-desk"],
    operation_id = "exportHistory"
)]
#[get("/export")]
pub async fn export_history(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let history = state.booking_queries.history().await?;
    let body = history_csv(&history).map_err(|err| {
        error!(error = %err, "failed to serialise guest history");
        Error::internal("failed to serialise guest history")
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(HISTORY_FILENAME.to_owned())],
        })
        .body(body))
}

#[cfg(test)]
#[path = "front_desk_tests.rs"]
mod tests;
