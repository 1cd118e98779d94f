//! OpenAPI documentation for the front desk HTTP surface.
//!
//! [`ApiDoc`] registers the page, form, export and health endpoints together
//! with the error schema wrappers from [`crate::inbound::http::schemas`]. The
//! document backs Swagger UI in debug builds and is printed by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::forms::{CheckInForm, CheckOutForm};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the front desk.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Front desk",
        description = "Hotel check-in, check-out and guest history export."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::front_desk::front_desk_page,
        crate::inbound::http::front_desk::check_in,
        crate::inbound::http::front_desk::check_out,
        crate::inbound::http::front_desk::export_history,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(CheckInForm, CheckOutForm, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "front-desk", description = "Guest check-in, check-out and history"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    #[rstest]
    #[case("/")]
    #[case("/checkin")]
    #[case("/checkout")]
    #[case("/export")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn document_lists_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn check_in_form_schema_lists_form_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let Some(RefOr::T(Schema::Object(form))) = schemas.get("CheckInForm") else {
            panic!("expected CheckInForm object schema");
        };

        for field in ["name", "email", "phone", "room_type", "nights", "special_requests"] {
            assert!(form.properties.contains_key(field), "missing {field}");
        }
    }
}
