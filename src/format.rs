//! Display formatting for funding figures (pt-BR style)

use crate::data::DisplayRecord;

/// Shown for any figure missing from the table
pub const NOT_AVAILABLE: &str = "N/D";

/// Which kind of figure is being formatted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Count,
    Amount,
}

/// Group digits in thousands with '.'
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Format a figure for display. `None` passes through as "N/D" for either kind.
pub fn format_number(value: Option<u64>, kind: FieldKind) -> String {
    match (value, kind) {
        (Some(v), FieldKind::Count) => group_thousands(v),
        (Some(v), FieldKind::Amount) => format!("R$ {}", group_thousands(v)),
        (None, _) => NOT_AVAILABLE.to_string(),
    }
}

/// Short amount for chart labels, e.g. "9,8 bi" or "850 mi"
pub fn format_compact_amount(value: u64) -> String {
    const MILLION: u64 = 1_000_000;
    const BILLION: u64 = 1_000_000_000;
    if value >= BILLION {
        let tenths = (value + BILLION / 20) / (BILLION / 10);
        format!("{},{} bi", tenths / 10, tenths % 10)
    } else if value >= MILLION {
        format!("{} mi", value / MILLION)
    } else {
        group_thousands(value)
    }
}

impl DisplayRecord {
    /// (enrollment, amount) ready for the metric panels
    pub fn formatted(&self) -> (String, String) {
        (
            format_number(self.enrollment_count, FieldKind::Count),
            format_number(self.amount_received, FieldKind::Amount),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataStore;

    #[test]
    fn test_count_grouping() {
        assert_eq!(format_number(Some(1_200_000), FieldKind::Count), "1.200.000");
        assert_eq!(format_number(Some(350_000), FieldKind::Count), "350.000");
        assert_eq!(format_number(Some(999), FieldKind::Count), "999");
        assert_eq!(format_number(Some(1_000), FieldKind::Count), "1.000");
        assert_eq!(format_number(Some(0), FieldKind::Count), "0");
    }

    #[test]
    fn test_amount_prefix() {
        assert_eq!(
            format_number(Some(9_800_000_000), FieldKind::Amount),
            "R$ 9.800.000.000"
        );
        assert_eq!(
            format_number(Some(10_450_000_000), FieldKind::Amount),
            "R$ 10.450.000.000"
        );
    }

    #[test]
    fn test_not_available_passthrough() {
        assert_eq!(format_number(None, FieldKind::Count), "N/D");
        assert_eq!(format_number(None, FieldKind::Amount), "N/D");
    }

    #[test]
    fn test_formatted_records() {
        let store = DataStore::demo();
        assert_eq!(
            store.lookup("São Paulo", 2023).formatted(),
            ("1.200.000".to_string(), "R$ 9.800.000.000".to_string())
        );
        assert_eq!(
            store.lookup("Recife", 2023).formatted(),
            ("N/D".to_string(), "N/D".to_string())
        );
    }

    #[test]
    fn test_compact_amount() {
        assert_eq!(format_compact_amount(9_800_000_000), "9,8 bi");
        assert_eq!(format_compact_amount(10_450_000_000), "10,5 bi");
        assert_eq!(format_compact_amount(2_100_000_000), "2,1 bi");
        assert_eq!(format_compact_amount(850_000_000), "850 mi");
        assert_eq!(format_compact_amount(12_345), "12.345");
    }
}
