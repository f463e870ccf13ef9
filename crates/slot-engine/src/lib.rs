//! # slot-engine
//!
//! Room and equipment availability resolution for campus reservation
//! systems.
//!
//! Given a read-only snapshot of existing bookings, equipment loans, and
//! blocked dates, the engine answers "what is free": which 30-minute slots
//! are open for a room and date, whether a candidate window is bookable,
//! how many units of each equipment type remain for a window, and how far a
//! contiguous free run extends from a chosen start time. All computation is
//! pure and synchronous; persistence belongs to the external store.
//!
//! ## Modules
//!
//! - [`occupancy`] — occupied slot sets and contiguous end-time enumeration
//! - [`validate`] — the authoritative candidate-range rule set
//! - [`equipment`] — remaining equipment quantities per window
//! - [`resolver`] — snapshot re-fetch and re-check at submission time
//! - [`policy`] — named scheduling constants (hours, granularity, horizon)
//! - [`types`] — domain records as persisted by the store
//! - [`error`] — infrastructure error types

pub mod equipment;
pub mod error;
pub mod occupancy;
pub mod policy;
pub mod resolver;
pub mod types;
pub mod validate;

pub use equipment::equipment_availability;
pub use error::StoreError;
pub use occupancy::{occupied_slots, slot_grid, valid_end_times};
pub use policy::SchedulePolicy;
pub use resolver::{BookingRequest, ReservationStore, Resolver};
pub use types::{
    BlockedDateRange, Booking, BookingStatus, CatalogEntry, EquipmentLoan, SlotMarker, TimeRange,
};
pub use validate::{validate_range, RejectReason, Verdict};
