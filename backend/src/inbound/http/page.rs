//! HTML rendering of the front desk page.
//!
//! The page is assembled by hand. Every piece of guest-supplied text goes
//! through [`escape_html`] before it is written.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::GuestStay;
use crate::domain::ports::FrontDeskSnapshot;

/// Display format for check-in and check-out times, in UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Escape text for use in HTML element content and quoted attributes.
///
/// # Examples
/// ```
/// use frontdesk::inbound::http::page::escape_html;
///
/// assert_eq!(escape_html("<b>\"Tom & Jerry\"</b>"),
///     "&lt;b&gt;&quot;Tom &amp; Jerry&quot;&lt;/b&gt;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }
    let mut escaped = String::with_capacity(raw.len() + 16);
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Renders a [`FrontDeskSnapshot`] as a complete HTML document.
pub struct FrontDeskPage<'a> {
    snapshot: &'a FrontDeskSnapshot,
}

impl<'a> FrontDeskPage<'a> {
    pub fn new(snapshot: &'a FrontDeskSnapshot) -> Self {
        Self { snapshot }
    }

    fn availability(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot;
        writeln!(f, "<section id=\"availability\">")?;
        writeln!(f, "<h2>Availability</h2>")?;
        writeln!(
            f,
            "<p>Available rooms: <strong>{}</strong> of {}</p>",
            snapshot.available_rooms, snapshot.total_rooms
        )?;
        writeln!(f, "<ul>")?;
        for entry in &snapshot.by_type {
            writeln!(
                f,
                "<li>{} (${}/night): {} booked, {} available</li>",
                escape_html(&entry.room_type),
                entry.nightly_rate,
                entry.occupied,
                entry.available
            )?;
        }
        writeln!(f, "</ul>")?;
        writeln!(f, "</section>")
    }

    fn check_in_form(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<section id=\"check-in\">")?;
        writeln!(f, "<h2>Check in</h2>")?;
        writeln!(f, "<form method=\"post\" action=\"/checkin\">")?;
        for (field, label, kind) in [
            ("name", "Name", "text"),
            ("email", "Email", "email"),
            ("phone", "Phone", "tel"),
        ] {
            writeln!(
                f,
                "<label>{label} <input type=\"{kind}\" name=\"{field}\" required></label>"
            )?;
        }
        writeln!(f, "<label>Room type <select name=\"room_type\" required>")?;
        for rate in &self.snapshot.rates {
            let room_type = escape_html(rate.room_type());
            writeln!(
                f,
                "<option value=\"{room_type}\">{room_type} (${}/night)</option>",
                rate.nightly_rate()
            )?;
        }
        writeln!(f, "</select></label>")?;
        writeln!(
            f,
            "<label>Nights <input type=\"number\" name=\"nights\" min=\"1\" value=\"1\" required></label>"
        )?;
        writeln!(
            f,
            "<label>Special requests <textarea name=\"special_requests\"></textarea></label>"
        )?;
        writeln!(f, "<button type=\"submit\">Check in</button>")?;
        writeln!(f, "</form>")?;
        writeln!(f, "</section>")
    }

    fn check_out_form(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<section id=\"check-out\">")?;
        writeln!(f, "<h2>Check out</h2>")?;
        writeln!(f, "<form method=\"post\" action=\"/checkout\">")?;
        writeln!(
            f,
            "<label>Room number <input type=\"number\" name=\"room\" min=\"1\" required></label>"
        )?;
        writeln!(f, "<button type=\"submit\">Check out</button>")?;
        writeln!(f, "</form>")?;
        writeln!(f, "</section>")
    }

    fn guests(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<section id=\"guests\">")?;
        writeln!(f, "<h2>Current guests</h2>")?;
        if self.snapshot.guests.is_empty() {
            writeln!(f, "<p>No guests are checked in.</p>")?;
        } else {
            writeln!(f, "<ul>")?;
            for stay in &self.snapshot.guests {
                write_stay(f, stay)?;
            }
            writeln!(f, "</ul>")?;
        }
        writeln!(f, "</section>")
    }

    fn history(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<section id=\"history\">")?;
        writeln!(f, "<h2>Guest history</h2>")?;
        writeln!(f, "<p><a href=\"/export\">Download CSV</a></p>")?;
        if self.snapshot.history.is_empty() {
            writeln!(f, "<p>No guests have checked out yet.</p>")?;
        } else {
            writeln!(f, "<ul>")?;
            for stay in &self.snapshot.history {
                write_stay(f, stay)?;
            }
            writeln!(f, "</ul>")?;
        }
        writeln!(f, "</section>")
    }
}

fn write_stay(f: &mut fmt::Formatter<'_>, stay: &GuestStay) -> fmt::Result {
    let details = stay.details();
    write!(
        f,
        "<li>Room {}: {} ({}, {} nights, ${}) &middot; {} &middot; {} &middot; checked in {}",
        stay.room_number(),
        escape_html(details.name()),
        escape_html(stay.room_type()),
        stay.nights(),
        stay.total_cost(),
        escape_html(details.email()),
        escape_html(details.phone()),
        format_timestamp(stay.checked_in_at()),
    )?;
    if let Some(at) = stay.checked_out_at() {
        write!(f, ", checked out {}", format_timestamp(at))?;
    }
    if let Some(requests) = details.special_requests() {
        write!(f, "<br><em>Requests: {}</em>", escape_html(requests))?;
    }
    writeln!(f, "</li>")
}

impl fmt::Display for FrontDeskPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        writeln!(f, "<head><meta charset=\"utf-8\"><title>Hotel Front Desk</title></head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, "<h1>Hotel Front Desk</h1>")?;
        self.availability(f)?;
        self.check_in_form(f)?;
        self.check_out_form(f)?;
        self.guests(f)?;
        self.history(f)?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{BookingCommand, BookingQuery};
    use crate::domain::{FrontDeskService, GuestDetails};
    use crate::test_support::{fixture_front_desk, guest_check_in};
    use rstest::rstest;

    async fn render(service: &FrontDeskService) -> String {
        let snapshot = service.snapshot().await.expect("snapshot");
        FrontDeskPage::new(&snapshot).to_string()
    }

    #[rstest]
    #[tokio::test]
    async fn empty_hotel_lists_catalog_and_availability() {
        let html = render(&fixture_front_desk()).await;

        assert!(html.contains("Available rooms: <strong>5</strong> of 5"));
        assert!(html.contains("<option value=\"Single\">Single ($50/night)</option>"));
        assert!(html.contains("<option value=\"Double\">Double ($80/night)</option>"));
        assert!(html.contains("<option value=\"Suite\">Suite ($120/night)</option>"));
        assert!(html.contains("No guests are checked in."));
        assert!(html.contains("<a href=\"/export\">Download CSV</a>"));
    }

    #[rstest]
    #[tokio::test]
    async fn guest_rows_show_stay_details() {
        let service = fixture_front_desk();
        let mut request = guest_check_in("Alice", "Single", 2);
        request.details = GuestDetails::new(
            "Alice",
            "alice@example.com",
            "555-0100",
            Some("Late arrival".to_owned()),
        );
        service.check_in(request).await.expect("room is free");

        let html = render(&service).await;

        assert!(html.contains("Room 1: Alice (Single, 2 nights, $100)"));
        assert!(html.contains("alice@example.com"));
        assert!(html.contains("checked in 2026-03-14 15:00:00"));
        assert!(html.contains("<em>Requests: Late arrival</em>"));
        assert!(html.contains("Available rooms: <strong>4</strong> of 5"));
    }

    #[rstest]
    #[tokio::test]
    async fn guest_markup_is_escaped() {
        let service = fixture_front_desk();
        let room = service
            .check_in(guest_check_in("<script>alert(1)</script>", "Suite", 1))
            .await
            .expect("room is free");
        service.check_out(room).await.expect("checked out");

        let html = render(&service).await;

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("checked out 2026-03-14 15:00:00"));
    }

    #[rstest]
    #[case("Tom & Jerry", "Tom &amp; Jerry")]
    #[case("O'Brien", "O&#39;Brien")]
    #[case("Suite", "Suite")]
    fn escape_html_handles_reserved_characters(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(escape_html(raw), expected);
    }
}
