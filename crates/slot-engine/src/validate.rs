//! Candidate range validation — the single authoritative rule set.
//!
//! Earlier revisions carried three slightly diverging copies of these checks
//! (booking form, edit form, assistant flow); this module is the one
//! implementation all entry points share. Rules run in a fixed order and the
//! first violated rule wins, so callers can render an exact message.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::policy::SchedulePolicy;
use crate::types::{BlockedDateRange, SlotMarker, TimeRange};

/// Why a candidate window was turned down.
///
/// These are expected, user-facing outcomes, not errors. The serialized tag
/// is the stable identifier callers key their messaging on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectReason {
    /// The date falls inside an administrative blocked range; `reason` is
    /// the range's reason string, verbatim.
    BlockedDate { reason: String },
    /// The window starts before opening or ends after closing.
    OutsideHours,
    /// Zero or negative length, or not aligned to the slot grid.
    InvalidRange,
    /// The window overlaps an occupying booking; `slot` is the first
    /// occupied slot-start inside the window.
    Conflict { slot: SlotMarker },
    /// The date is already over, or the start time has passed today.
    InPast,
    /// The date lies beyond the booking horizon.
    TooFarAhead,
    /// Fewer units remain for the window than were requested.
    EquipmentInsufficient {
        equipment_id: String,
        requested: u32,
        available: u32,
    },
}

/// Outcome of validating a candidate booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    Rejected(RejectReason),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Decide whether `[range.start, range.end)` on `date` is bookable.
///
/// Rule order, first violation wins:
///
/// 1. `date` inside a blocked range → [`RejectReason::BlockedDate`];
/// 2. window outside business hours → [`RejectReason::OutsideHours`];
/// 3. `end <= start` or misaligned to the slot grid →
///    [`RejectReason::InvalidRange`];
/// 4. any covered slot-start already occupied → [`RejectReason::Conflict`];
/// 5. `date` before today, or today with the start time already passed
///    (minute resolution) → [`RejectReason::InPast`].
///
/// `occupied` is the set from [`crate::occupancy::occupied_slots`] for the
/// same room and date. `now` is the caller's wall clock; validation at
/// submission time must use a freshly fetched occupancy snapshot, since a
/// client-side result may be stale by the time the insert runs.
pub fn validate_range(
    date: NaiveDate,
    range: TimeRange,
    occupied: &BTreeSet<SlotMarker>,
    blocked: &[BlockedDateRange],
    now: NaiveDateTime,
    policy: &SchedulePolicy,
) -> Verdict {
    if let Some(b) = blocked.iter().find(|b| b.contains(date)) {
        return Verdict::Rejected(RejectReason::BlockedDate {
            reason: b.reason.clone(),
        });
    }

    if range.start < policy.opening || range.end > policy.closing {
        return Verdict::Rejected(RejectReason::OutsideHours);
    }

    let misaligned = range.start.minutes() % policy.slot_minutes != 0
        || range.end.minutes() % policy.slot_minutes != 0;
    if range.end <= range.start || misaligned {
        return Verdict::Rejected(RejectReason::InvalidRange);
    }

    if let Some(slot) = range
        .slot_starts(policy.slot_minutes)
        .find(|s| occupied.contains(s))
    {
        return Verdict::Rejected(RejectReason::Conflict { slot });
    }

    let today = now.date();
    let now_minutes = (now.time().hour() * 60 + now.time().minute()) as u16;
    if date < today || (date == today && range.start.minutes() < now_minutes) {
        return Verdict::Rejected(RejectReason::InPast);
    }

    Verdict::Accepted
}
