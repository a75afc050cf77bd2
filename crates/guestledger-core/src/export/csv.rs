//! CSV projection of a filtered attendee set.

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::debug;

use super::fields::{ExportField, ExportMask};
use crate::attendee::Attendee;

/// Errors that can occur during export projection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    /// The field mask selects nothing; no partial file is produced.
    #[error("No fields selected for export")]
    NoFieldsSelected,
}

/// A finished export, ready to be offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// Download filename, embedding the export timestamp.
    pub filename: String,
    /// Full CSV payload.
    pub content: String,
}

/// Formats an RFC 3339 timestamp as `YYYY-MM-DD HH:mm:ss` in local time.
///
/// Falls back to the raw string when the value does not parse.
fn format_timestamp_local(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw).map_or_else(
        |_| raw.to_string(),
        |dt| {
            dt.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        },
    )
}

/// Wraps a cell in double quotes, doubling internal quotes.
fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// Reads one field off one record as its export cell text.
///
/// Null/absent values become the empty string; timestamps are localized;
/// everything else is stringified as-is.
fn cell_value(attendee: &Attendee, field: ExportField) -> String {
    match field {
        ExportField::Name => attendee.name.clone(),
        ExportField::Email => attendee.email.clone(),
        ExportField::TicketType => attendee.ticket_type.clone(),
        ExportField::FormTitle => attendee.form_title.clone(),
        ExportField::RegisteredAt => format_timestamp_local(&attendee.registered_at),
        ExportField::CheckedInAt => attendee
            .checked_in_at
            .as_deref()
            .map(format_timestamp_local)
            .unwrap_or_default(),
        ExportField::PaymentStatus => attendee
            .payment_status
            .map(|s| s.as_str().to_string())
            .unwrap_or_default(),
        ExportField::PaymentAmount => attendee
            .payment_amount
            .map(|amount| amount.to_string())
            .unwrap_or_default(),
        ExportField::InvoiceId => attendee.invoice_id.clone().unwrap_or_default(),
        ExportField::TransactionId => attendee.transaction_id.clone().unwrap_or_default(),
        ExportField::DonatedSeats => attendee.donated_seats.to_string(),
        ExportField::DonatedTables => attendee.donated_tables.to_string(),
        ExportField::DietaryPreferences => {
            attendee.dietary_preferences.clone().unwrap_or_default()
        }
    }
}

/// Projects the filtered set into CSV text.
///
/// Columns follow the mask's declaration order; the projection always
/// covers every record passed in, never a paginated slice.
///
/// # Errors
///
/// Returns [`ExportError::NoFieldsSelected`] when the mask selects nothing.
pub fn project_csv(attendees: &[&Attendee], mask: &ExportMask) -> Result<String, ExportError> {
    let fields: Vec<ExportField> = mask.selected().collect();
    if fields.is_empty() {
        return Err(ExportError::NoFieldsSelected);
    }

    let mut rows = Vec::with_capacity(attendees.len() + 1);
    rows.push(
        fields
            .iter()
            .map(|f| quote(f.label()))
            .collect::<Vec<_>>()
            .join(","),
    );
    for attendee in attendees {
        rows.push(
            fields
                .iter()
                .map(|f| quote(&cell_value(attendee, *f)))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    debug!("Projected {} attendees into {} columns", attendees.len(), fields.len());
    Ok(rows.join("\n"))
}

/// Download filename for an export taken at `at`.
#[must_use]
pub fn export_filename(at: DateTime<Local>) -> String {
    at.format("attendees_%Y%m%d_%H%M.csv").to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::attendee;
    use chrono::TimeZone;

    fn localized(raw: &str) -> String {
        DateTime::parse_from_rfc3339(raw)
            .unwrap()
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }

    #[test]
    fn test_zero_fields_is_a_validation_error() {
        let a = attendee("a1");
        let mask = ExportMask::of(&[]);

        assert_eq!(project_csv(&[&a], &mask), Err(ExportError::NoFieldsSelected));
    }

    #[test]
    fn test_null_checked_in_exports_as_empty_quoted_cell() {
        let a = attendee("a1");
        let mask = ExportMask::of(&[ExportField::CheckedInAt]);

        let csv = project_csv(&[&a], &mask).unwrap();
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some("\"Checked In At\""));
        assert_eq!(lines.next(), Some("\"\""));
    }

    #[test]
    fn test_checked_in_timestamp_is_localized() {
        let mut a = attendee("a1");
        a.checked_in_at = Some("2024-01-01T10:00:00Z".into());
        let mask = ExportMask::of(&[ExportField::CheckedInAt]);

        let csv = project_csv(&[&a], &mask).unwrap();
        let expected = format!("\"{}\"", localized("2024-01-01T10:00:00Z"));

        assert_eq!(csv.lines().nth(1), Some(expected.as_str()));
    }

    #[test]
    fn test_internal_quotes_are_doubled() {
        let mut a = attendee("a1");
        a.name = r#"Ada "The Countess" Lovelace"#.into();
        let mask = ExportMask::of(&[ExportField::Name]);

        let csv = project_csv(&[&a], &mask).unwrap();

        assert_eq!(
            csv.lines().nth(1),
            Some(r#""Ada ""The Countess"" Lovelace""#)
        );
    }

    #[test]
    fn test_column_order_follows_mask_declaration_order() {
        let a = attendee("a1");
        let mask = ExportMask::of(&[ExportField::Email, ExportField::Name]);

        let csv = project_csv(&[&a], &mask).unwrap();

        assert_eq!(csv.lines().next(), Some("\"Email\",\"Name\""));
    }

    #[test]
    fn test_mask_order_is_stable_across_record_order() {
        let a = attendee("a1");
        let b = attendee("b1");
        let mask = ExportMask::of(&[ExportField::Name, ExportField::Email]);

        let forward = project_csv(&[&a, &b], &mask).unwrap();
        let reverse = project_csv(&[&b, &a], &mask).unwrap();

        assert_eq!(forward.lines().next(), reverse.lines().next());
    }

    #[test]
    fn test_export_filename_embeds_timestamp() {
        let at = Local.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();

        assert_eq!(export_filename(at), "attendees_20240305_1430.csv");
    }
}
