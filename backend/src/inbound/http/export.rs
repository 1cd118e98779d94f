//! CSV serialisation of the guest history.

use crate::domain::GuestStay;
use crate::inbound::http::page::format_timestamp;

/// Column headers of the history export, in order.
pub const HISTORY_HEADER: [&str; 9] = [
    "Room Number",
    "Name",
    "Email",
    "Phone",
    "Room Type",
    "Nights",
    "Total Cost",
    "Check-in",
    "Check-out",
];

/// File name suggested to browsers downloading the export.
pub const HISTORY_FILENAME: &str = "guest_history.csv";

fn history_row(stay: &GuestStay) -> [String; 9] {
    let details = stay.details();
    [
        stay.room_number().to_string(),
        details.name().to_owned(),
        details.email().to_owned(),
        details.phone().to_owned(),
        stay.room_type().to_owned(),
        stay.nights().to_string(),
        stay.total_cost().to_string(),
        format_timestamp(stay.checked_in_at()),
        stay.checked_out_at()
            .map(format_timestamp)
            .unwrap_or_default(),
    ]
}

/// Serialise archived stays, one row each in history order, below
/// [`HISTORY_HEADER`].
///
/// # Errors
/// Returns the underlying `csv` error if a record cannot be written.
pub fn history_csv(history: &[GuestStay]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HISTORY_HEADER)?;
    for stay in history {
        writer.write_record(history_row(stay))?;
    }
    writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}
