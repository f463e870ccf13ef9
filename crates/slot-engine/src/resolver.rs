//! Server-authoritative booking resolution.
//!
//! Client-side availability results are advisory only: by the time a request
//! reaches the insert path the occupancy it was computed against may be
//! stale. [`Resolver::decide`] re-fetches a fresh snapshot from the store and
//! re-runs the full rule set at that moment, so every entry point — booking
//! form, edit form, assistant flow — goes through the same authoritative
//! check.
//!
//! The resolver never writes. A read here followed by an insert in the
//! caller is still a check-then-act race between two simultaneous writers;
//! closing it is the store's obligation, via a uniqueness/exclusion
//! constraint on `(room_id, date, time range)` for occupying statuses.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use crate::equipment::equipment_availability;
use crate::error::Result;
use crate::occupancy::occupied_slots;
use crate::policy::SchedulePolicy;
use crate::types::{BlockedDateRange, Booking, BookingStatus, CatalogEntry, EquipmentLoan, TimeRange};
use crate::validate::{validate_range, RejectReason, Verdict};

/// Read-only view of the persistence store, scoped to what resolution needs.
///
/// Implementations wrap the hosted database. Errors from these methods are
/// infrastructure failures and propagate unchanged through
/// [`Resolver::decide`]; they are never folded into a rejection.
pub trait ReservationStore {
    /// Bookings for one room and date whose status is in `statuses`.
    fn list_bookings(
        &self,
        room_id: &str,
        date: NaiveDate,
        statuses: &[BookingStatus],
    ) -> Result<Vec<Booking>>;

    /// Active equipment loans on `date` whose parent window overlaps `range`,
    /// across all rooms. Loans of cancelled/rejected bookings are excluded.
    fn list_equipment_loans(&self, date: NaiveDate, range: TimeRange)
        -> Result<Vec<EquipmentLoan>>;

    /// All administrative blocked date ranges.
    fn list_blocked_ranges(&self) -> Result<Vec<BlockedDateRange>>;

    /// The equipment catalog with per-type unit totals.
    fn equipment_catalog(&self) -> Result<Vec<CatalogEntry>>;
}

/// A candidate booking to resolve.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub room_id: String,
    pub date: NaiveDate,
    pub range: TimeRange,
    /// Requested units per equipment type. Zero entries are ignored.
    pub equipment: BTreeMap<String, u32>,
    /// When re-validating an edit, the reservation being edited. Its own
    /// occupancy and loans are excluded so it does not conflict with itself.
    pub exclude_reservation: Option<String>,
}

/// Resolves booking requests against fresh store snapshots.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    policy: SchedulePolicy,
}

impl Resolver {
    pub fn new(policy: SchedulePolicy) -> Self {
        Resolver { policy }
    }

    pub fn policy(&self) -> &SchedulePolicy {
        &self.policy
    }

    /// Decide a booking request against the store's current state.
    ///
    /// Fetches blocked ranges and the room/date occupancy, runs
    /// [`validate_range`], applies the booking-horizon gate, then checks
    /// each requested equipment quantity against remaining availability for
    /// the window. The first violated rule produces the verdict.
    ///
    /// # Errors
    ///
    /// Only store failures. Rejections are returned as `Ok(Verdict::Rejected)`.
    pub fn decide<S: ReservationStore>(
        &self,
        store: &S,
        request: &BookingRequest,
        now: NaiveDateTime,
    ) -> Result<Verdict> {
        let blocked = store.list_blocked_ranges()?;

        let mut bookings =
            store.list_bookings(&request.room_id, request.date, &BookingStatus::OCCUPYING)?;
        if let Some(own) = request.exclude_reservation.as_deref() {
            bookings.retain(|b| b.id != own);
        }
        let occupied = occupied_slots(&bookings, &self.policy);

        let verdict = validate_range(
            request.date,
            request.range,
            &occupied,
            &blocked,
            now,
            &self.policy,
        );
        if let Verdict::Rejected(reason) = verdict {
            debug!(room = %request.room_id, date = %request.date, range = %request.range,
                   ?reason, "booking request rejected");
            return Ok(Verdict::Rejected(reason));
        }

        let latest = now.date() + Duration::days(i64::from(self.policy.horizon_days));
        if request.date > latest {
            debug!(room = %request.room_id, date = %request.date,
                   horizon_days = self.policy.horizon_days, "booking request beyond horizon");
            return Ok(Verdict::Rejected(RejectReason::TooFarAhead));
        }

        if request.equipment.values().any(|&qty| qty > 0) {
            let catalog = store.equipment_catalog()?;
            let loans = store.list_equipment_loans(request.date, request.range)?;
            let remaining = equipment_availability(
                &catalog,
                &loans,
                request.range,
                request.exclude_reservation.as_deref(),
            );

            for (equipment_id, &requested) in &request.equipment {
                if requested == 0 {
                    continue;
                }
                let available = remaining.get(equipment_id).copied().unwrap_or(0);
                if requested > available {
                    warn!(room = %request.room_id, date = %request.date, %equipment_id,
                          requested, available, "equipment over-allocation prevented");
                    return Ok(Verdict::Rejected(RejectReason::EquipmentInsufficient {
                        equipment_id: equipment_id.clone(),
                        requested,
                        available,
                    }));
                }
            }
        }

        debug!(room = %request.room_id, date = %request.date, range = %request.range,
               "booking request accepted");
        Ok(Verdict::Accepted)
    }
}
