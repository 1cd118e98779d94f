//! Tests for the front desk HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::Value;

use super::*;
use crate::domain::ports::{BookingCommand, BookingQuery, MockBookingCommand, MockBookingQuery};
use crate::domain::{FrontDeskService, RoomNumber};
use crate::test_support::fixture_front_desk;

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .service(front_desk_page)
        .service(check_in)
        .service(check_out)
        .service(export_history)
}

fn alice_form() -> [(&'static str, &'static str); 6] {
    [
        ("name", "Alice"),
        ("email", "alice@example.com"),
        ("phone", "555-0100"),
        ("room_type", "Single"),
        ("nights", "2"),
        ("special_requests", ""),
    ]
}

fn location(res: &actix_web::dev::ServiceResponse) -> Option<&str> {
    res.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

#[rstest]
#[actix_web::test]
async fn check_in_redirects_and_books_a_room() {
    let service = fixture_front_desk();
    let app = actix_test::init_service(test_app(HttpState::from_service(service.clone()))).await;

    let req = actix_test::TestRequest::post()
        .uri("/checkin")
        .set_form(alice_form())
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/"));
    let snapshot = service.snapshot().await.expect("snapshot");
    assert_eq!(snapshot.available_rooms, 4);
    assert_eq!(snapshot.guests[0].total_cost(), 100);
    assert_eq!(snapshot.guests[0].details().special_requests(), None);
}

#[rstest]
#[actix_web::test]
async fn check_in_with_zero_nights_is_a_bad_request() {
    let service = fixture_front_desk();
    let app = actix_test::init_service(test_app(HttpState::from_service(service.clone()))).await;
    let mut form = alice_form();
    form[4] = ("nights", "0");

    let req = actix_test::TestRequest::post()
        .uri("/checkin")
        .set_form(form)
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], "nights");
    assert_eq!(service.snapshot().await.expect("snapshot").available_rooms, 5);
}

#[rstest]
#[actix_web::test]
async fn check_in_without_name_is_a_bad_request() {
    let app = actix_test::init_service(test_app(HttpState::from_service(fixture_front_desk()))).await;

    let req = actix_test::TestRequest::post()
        .uri("/checkin")
        .set_form([("email", "a@example.com"), ("phone", "1"), ("room_type", "Suite"), ("nights", "1")])
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["details"]["code"], "missing_field");
    assert_eq!(body["details"]["field"], "name");
}

#[rstest]
#[actix_web::test]
async fn full_hotel_redirects_silently() {
    let mut bookings = MockBookingCommand::new();
    bookings
        .expect_check_in()
        .times(1)
        .returning(|_| Err(BookingError::NoRoomsAvailable));
    let state = HttpState::new(Arc::new(bookings), Arc::new(MockBookingQuery::new()));
    let app = actix_test::init_service(test_app(state)).await;

    let req = actix_test::TestRequest::post()
        .uri("/checkin")
        .set_form(alice_form())
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/"));
}

#[rstest]
#[actix_web::test]
async fn unavailable_registry_surfaces_as_503() {
    let mut bookings = MockBookingCommand::new();
    bookings
        .expect_check_in()
        .returning(|_| Err(BookingError::unavailable("lock poisoned")));
    let state = HttpState::new(Arc::new(bookings), Arc::new(MockBookingQuery::new()));
    let app = actix_test::init_service(test_app(state)).await;

    let req = actix_test::TestRequest::post()
        .uri("/checkin")
        .set_form(alice_form())
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "service_unavailable");
}

#[rstest]
#[case("three")]
#[case("")]
#[actix_web::test]
async fn check_out_ignores_non_numeric_rooms(#[case] room: &str) {
    let mut bookings = MockBookingCommand::new();
    bookings.expect_check_out().times(0);
    let state = HttpState::new(Arc::new(bookings), Arc::new(MockBookingQuery::new()));
    let app = actix_test::init_service(test_app(state)).await;

    let req = actix_test::TestRequest::post()
        .uri("/checkout")
        .set_form([("room", room)])
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
}

#[rstest]
#[case("1", 0, 1)]
#[case("4", 1, 0)]
#[actix_web::test]
async fn check_out_always_redirects(
    #[case] room: &str,
    #[case] expected_guests: usize,
    #[case] expected_history: usize,
) {
    let service = fixture_front_desk();
    service
        .check_in(crate::test_support::guest_check_in("Alice", "Single", 1))
        .await
        .expect("room is free");
    let app = actix_test::init_service(test_app(HttpState::from_service(service.clone()))).await;

    let req = actix_test::TestRequest::post()
        .uri("/checkout")
        .set_form([("room", room)])
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    let snapshot = service.snapshot().await.expect("snapshot");
    assert_eq!(snapshot.guests.len(), expected_guests);
    assert_eq!(snapshot.history.len(), expected_history);
}

#[rstest]
#[actix_web::test]
async fn page_is_html() {
    let app = actix_test::init_service(test_app(HttpState::from_service(fixture_front_desk()))).await;

    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/html; charset=utf-8")
    );
    let body = actix_test::read_body(res).await;
    let html = std::str::from_utf8(&body).expect("utf8 page");
    assert!(html.contains("Hotel Front Desk"));
}

#[rstest]
#[actix_web::test]
async fn page_reports_unavailable_registry() {
    let mut queries = MockBookingQuery::new();
    queries
        .expect_snapshot()
        .returning(|| Err(Error::service_unavailable("booking registry lock poisoned")));
    let state = HttpState::new(Arc::new(MockBookingCommand::new()), Arc::new(queries));
    let app = actix_test::init_service(test_app(state)).await;

    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[rstest]
#[actix_web::test]
async fn export_is_a_csv_attachment() {
    let service = Arc::new(FrontDeskService::with_defaults(crate::test_support::fixture_clock()));
    service
        .check_in(crate::test_support::guest_check_in("Alice", "Double", 1))
        .await
        .expect("room is free");
    service.check_out(RoomNumber::new(1)).await.expect("checked out");
    let app = actix_test::init_service(test_app(HttpState::from_service(service))).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/export").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let header_value = |name: header::HeaderName| {
        res.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };
    assert_eq!(header_value(header::CONTENT_TYPE).as_deref(), Some("text/csv"));
    assert_eq!(
        header_value(header::CONTENT_DISPOSITION).as_deref(),
        Some("attachment; filename=\"guest_history.csv\"")
    );
    let body = actix_test::read_body(res).await;
    let csv = std::str::from_utf8(&body).expect("utf8 csv");
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.lines().nth(1).is_some_and(|row| row.starts_with("1,Alice,")));
}
