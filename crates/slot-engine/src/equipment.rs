//! Equipment availability for a candidate window.
//!
//! Equipment is campus-wide, not per-room: every loan on the date whose
//! parent booking overlaps the requested window consumes units, regardless
//! of which room the parent booking is in.

use std::collections::BTreeMap;

use crate::types::{CatalogEntry, EquipmentLoan, TimeRange};

/// Compute remaining units per equipment type for the requested window.
///
/// Sums the quantities of all loans whose parent window overlaps `range`
/// under the half-open test, then subtracts from each catalog total,
/// saturating at zero. Every catalog entry appears in the result, so a type
/// with no overlapping loans reports its full total.
///
/// `exclude_reservation` removes one booking's own loans from the sum. An
/// edit that keeps its existing allotment would otherwise count against
/// itself and appear over capacity.
pub fn equipment_availability(
    catalog: &[CatalogEntry],
    loans: &[EquipmentLoan],
    range: TimeRange,
    exclude_reservation: Option<&str>,
) -> BTreeMap<String, u32> {
    let mut used: BTreeMap<&str, u32> = BTreeMap::new();
    for loan in loans {
        if exclude_reservation == Some(loan.reservation_id.as_str()) {
            continue;
        }
        if loan.range.overlaps(&range) {
            *used.entry(loan.equipment_id.as_str()).or_insert(0) += loan.quantity;
        }
    }

    catalog
        .iter()
        .map(|entry| {
            let consumed = used.get(entry.equipment_id.as_str()).copied().unwrap_or(0);
            (
                entry.equipment_id.clone(),
                entry.total_quantity.saturating_sub(consumed),
            )
        })
        .collect()
}
