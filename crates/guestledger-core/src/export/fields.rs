//! Exportable fields and the selection mask.

/// An exportable attendee attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportField {
    /// Attendee name.
    Name,
    /// Attendee email address.
    Email,
    /// Ticket category.
    TicketType,
    /// Originating event title.
    FormTitle,
    /// Registration timestamp.
    RegisteredAt,
    /// Check-in timestamp.
    CheckedInAt,
    /// Payment state.
    PaymentStatus,
    /// Amount paid.
    PaymentAmount,
    /// Invoice reference.
    InvoiceId,
    /// Payment processor transaction reference.
    TransactionId,
    /// Number of donated seats.
    DonatedSeats,
    /// Number of donated tables.
    DonatedTables,
    /// Dietary notes.
    DietaryPreferences,
}

impl ExportField {
    /// Every exportable field, in canonical declaration order.
    pub const ALL: [Self; 13] = [
        Self::Name,
        Self::Email,
        Self::TicketType,
        Self::FormTitle,
        Self::RegisteredAt,
        Self::CheckedInAt,
        Self::PaymentStatus,
        Self::PaymentAmount,
        Self::InvoiceId,
        Self::TransactionId,
        Self::DonatedSeats,
        Self::DonatedTables,
        Self::DietaryPreferences,
    ];

    /// Stable field key, matching the persistence collaborator's names.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::TicketType => "ticketType",
            Self::FormTitle => "formTitle",
            Self::RegisteredAt => "registeredAt",
            Self::CheckedInAt => "checkedInAt",
            Self::PaymentStatus => "paymentStatus",
            Self::PaymentAmount => "paymentAmount",
            Self::InvoiceId => "invoiceId",
            Self::TransactionId => "transactionId",
            Self::DonatedSeats => "donatedSeats",
            Self::DonatedTables => "donatedTables",
            Self::DietaryPreferences => "dietaryPreferences",
        }
    }

    /// Human label used as the CSV column header.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::TicketType => "Ticket Type",
            Self::FormTitle => "Event",
            Self::RegisteredAt => "Registered At",
            Self::CheckedInAt => "Checked In At",
            Self::PaymentStatus => "Payment Status",
            Self::PaymentAmount => "Amount",
            Self::InvoiceId => "Invoice ID",
            Self::TransactionId => "Transaction ID",
            Self::DonatedSeats => "Donated Seats",
            Self::DonatedTables => "Donated Tables",
            Self::DietaryPreferences => "Dietary Preferences",
        }
    }

    /// Returns true for timestamp fields, which are formatted to local
    /// time on export.
    #[must_use]
    pub const fn is_timestamp(&self) -> bool {
        matches!(self, Self::RegisteredAt | Self::CheckedInAt)
    }
}

/// An ordered field-inclusion mask.
///
/// Column order in the export follows the mask's own declaration order,
/// never the data or an alphabetical sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportMask {
    entries: Vec<(ExportField, bool)>,
}

impl Default for ExportMask {
    fn default() -> Self {
        Self::all()
    }
}

impl ExportMask {
    /// A mask including every field, in canonical order.
    #[must_use]
    pub fn all() -> Self {
        Self {
            entries: ExportField::ALL.iter().map(|f| (*f, true)).collect(),
        }
    }

    /// A mask declaring exactly the given fields, all included, in the
    /// given order.
    #[must_use]
    pub fn of(fields: &[ExportField]) -> Self {
        Self {
            entries: fields.iter().map(|f| (*f, true)).collect(),
        }
    }

    /// Includes or excludes one field, preserving its declaration position.
    ///
    /// A field not yet declared is appended.
    pub fn set(&mut self, field: ExportField, included: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|(f, _)| *f == field) {
            entry.1 = included;
        } else {
            self.entries.push((field, included));
        }
    }

    /// Included fields, in declaration order.
    pub fn selected(&self) -> impl Iterator<Item = ExportField> + '_ {
        self.entries
            .iter()
            .filter(|(_, included)| *included)
            .map(|(field, _)| *field)
    }

    /// Returns true when no field is included.
    #[must_use]
    pub fn is_empty_selection(&self) -> bool {
        self.selected().next().is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mask_includes_all_fields_in_order() {
        let mask = ExportMask::default();
        let fields: Vec<ExportField> = mask.selected().collect();

        assert_eq!(fields, ExportField::ALL);
    }

    #[test]
    fn test_set_preserves_declaration_order() {
        let mut mask = ExportMask::all();
        mask.set(ExportField::Name, false);
        mask.set(ExportField::Name, true);

        let first = mask.selected().next().unwrap();
        assert_eq!(first, ExportField::Name);
    }

    #[test]
    fn test_empty_selection() {
        let mut mask = ExportMask::of(&[ExportField::Email]);
        assert!(!mask.is_empty_selection());

        mask.set(ExportField::Email, false);
        assert!(mask.is_empty_selection());
    }
}
