//! Domain records for room and equipment reservations.
//!
//! Everything here is owned and persisted by the external store; the engine
//! only reads these values and derives availability from them. Times are
//! naive local campus times on a single-day grid — there is no timezone
//! handling because reservations never cross midnight.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A minutes-since-midnight timestamp used as the atomic unit of occupancy.
///
/// The canonical text form is `HH:MM`, matching the persisted representation
/// (`time_start`/`time_end` columns). Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotMarker(u16);

impl SlotMarker {
    /// Build a marker from minutes since midnight. Values of 1440 or more
    /// would name a time outside the day and are rejected at parse time, but
    /// this constructor does not re-check; callers stay within the grid.
    pub const fn from_minutes(minutes: u16) -> Self {
        SlotMarker(minutes)
    }

    pub const fn minutes(self) -> u16 {
        self.0
    }
}

impl fmt::Display for SlotMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Error parsing an `HH:MM` slot marker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid slot marker {0:?}: expected HH:MM within a single day")]
pub struct SlotParseError(pub String);

impl FromStr for SlotMarker {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SlotParseError(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(err)?;
        let h: u16 = h.parse().map_err(|_| err())?;
        let m: u16 = m.parse().map_err(|_| err())?;
        if h >= 24 || m >= 60 {
            return Err(err());
        }
        Ok(SlotMarker(h * 60 + m))
    }
}

impl Serialize for SlotMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotMarker {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A half-open time window `[start, end)` within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: SlotMarker,
    pub end: SlotMarker,
}

impl TimeRange {
    pub const fn new(start: SlotMarker, end: SlotMarker) -> Self {
        TimeRange { start, end }
    }

    /// Two half-open ranges overlap iff `a.start < b.end && b.start < a.end`.
    /// Adjacent ranges (one ends exactly when the other starts) do NOT overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Iterate the slot-start markers covered by this range, stepping by
    /// `slot_minutes`. Empty when `end <= start`. `slot_minutes` must be
    /// nonzero.
    pub fn slot_starts(self, slot_minutes: u16) -> impl Iterator<Item = SlotMarker> {
        (self.start.0..self.end.0)
            .step_by(slot_minutes as usize)
            .map(SlotMarker)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Lifecycle state of a reservation, as persisted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Verified,
    Confirmed,
    Rejected,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// The states that count toward slot and equipment occupancy.
    pub const OCCUPYING: [BookingStatus; 3] = [
        BookingStatus::Pending,
        BookingStatus::Verified,
        BookingStatus::Confirmed,
    ];

    /// Whether a booking in this state blocks other requests. Terminal
    /// states (rejected, cancelled, completed) do not.
    pub fn is_occupying(self) -> bool {
        matches!(
            self,
            BookingStatus::Pending | BookingStatus::Verified | BookingStatus::Confirmed
        )
    }
}

/// A persisted room reservation, as read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Opaque store-assigned identifier.
    pub id: String,
    pub room_id: String,
    pub date: NaiveDate,
    pub range: TimeRange,
    pub status: BookingStatus,
}

/// An equipment allocation tied to a booking. Consumes `quantity` units for
/// the parent booking's exact window, not for the whole day; the store
/// returns loans pre-joined with that window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentLoan {
    pub reservation_id: String,
    pub equipment_id: String,
    pub quantity: u32,
    pub range: TimeRange,
}

/// One equipment type and the total number of units that exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub equipment_id: String,
    pub total_quantity: u32,
}

/// A closed date interval during which no room may be booked at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockedDateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Shown verbatim to the requester when a date inside the range is
    /// rejected.
    pub reason: String,
}

impl BlockedDateRange {
    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
