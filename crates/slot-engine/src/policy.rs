//! Scheduling policy — the named constants behind the slot grid.
//!
//! These were scattered magic numbers in earlier revisions (7, 21, 30, 180,
//! 5-day horizon). Callers pass a policy instead so a deployment can change
//! hours or granularity without touching the availability logic.

use serde::{Deserialize, Serialize};

use crate::types::SlotMarker;

/// Scheduling constants for a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePolicy {
    /// Earliest slot start of the day.
    pub opening: SlotMarker,
    /// Hard end of the day; no booking may end later.
    pub closing: SlotMarker,
    /// Slot granularity in minutes. Must be nonzero and divide evenly into
    /// the opening-to-closing span.
    pub slot_minutes: u16,
    /// Longest window a single booking may span.
    pub max_duration_minutes: u16,
    /// How many days ahead of the current date a booking may be placed.
    pub horizon_days: u32,
}

impl Default for SchedulePolicy {
    /// The production campus policy: 07:00–21:00 business hours, 30-minute
    /// slots, 3-hour maximum, 5-day booking horizon.
    fn default() -> Self {
        SchedulePolicy {
            opening: SlotMarker::from_minutes(7 * 60),
            closing: SlotMarker::from_minutes(21 * 60),
            slot_minutes: 30,
            max_duration_minutes: 180,
            horizon_days: 5,
        }
    }
}
