//! Slot occupancy — which slot starts are taken, and how far a free run
//! extends.
//!
//! A booking for `[start, end)` occupies every slot-start marker `t` with
//! `start <= t < end`, stepped by the policy granularity. Occupancy is a set
//! union, so the result is order-independent and idempotent.

use std::collections::BTreeSet;

use crate::policy::SchedulePolicy;
use crate::types::{Booking, SlotMarker};

/// Compute the occupied slot-start set for one room and date.
///
/// Bookings in terminal states (cancelled, rejected, completed) are skipped,
/// so a caller may pass either a pre-filtered listing or the raw day listing
/// and get the same answer. Bookings are assumed well-formed (`end > start`,
/// grid-aligned); malformed windows are rejected upstream by
/// [`crate::validate::validate_range`] before they are ever persisted.
pub fn occupied_slots(bookings: &[Booking], policy: &SchedulePolicy) -> BTreeSet<SlotMarker> {
    bookings
        .iter()
        .filter(|b| b.status.is_occupying())
        .flat_map(|b| b.range.slot_starts(policy.slot_minutes))
        .collect()
}

/// The full slot-start grid for a day under the given policy, in order.
///
/// Filtering this against [`occupied_slots`] yields the start times a
/// requester may be offered.
pub fn slot_grid(policy: &SchedulePolicy) -> Vec<SlotMarker> {
    (policy.opening.minutes()..policy.closing.minutes())
        .step_by(policy.slot_minutes as usize)
        .map(SlotMarker::from_minutes)
        .collect()
}

/// Enumerate the valid end times for a window beginning at `start`.
///
/// Walks forward one slot at a time and stops as soon as the slot
/// immediately preceding a candidate end is occupied, the closing time is
/// reached, or the maximum duration is reached. Every returned end time
/// therefore closes an unbroken free run from `start` — a conflict is never
/// silently skipped over.
///
/// Returns an empty list when the very first slot is occupied.
pub fn valid_end_times(
    start: SlotMarker,
    occupied: &BTreeSet<SlotMarker>,
    policy: &SchedulePolicy,
) -> Vec<SlotMarker> {
    let slot = policy.slot_minutes;
    let cap = (start.minutes() + policy.max_duration_minutes).min(policy.closing.minutes());

    let mut ends = Vec::new();
    let mut m = start.minutes() + slot;
    while m <= cap {
        // The slot that a window ending at `m` would newly cover.
        let preceding = SlotMarker::from_minutes(m - slot);
        if occupied.contains(&preceding) {
            break;
        }
        ends.push(SlotMarker::from_minutes(m));
        m += slot;
    }
    ends
}
