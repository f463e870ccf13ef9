//! Tests for contiguous end-time enumeration.

use std::collections::BTreeSet;

use slot_engine::occupancy::valid_end_times;
use slot_engine::types::SlotMarker;
use slot_engine::SchedulePolicy;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn slot(s: &str) -> SlotMarker {
    s.parse().unwrap()
}

fn slots(markers: &[&str]) -> BTreeSet<SlotMarker> {
    markers.iter().map(|s| slot(s)).collect()
}

fn ends(markers: &[&str]) -> Vec<SlotMarker> {
    markers.iter().map(|s| slot(s)).collect()
}

// ── Test 1: Open day caps at the maximum duration ───────────────────────────

#[test]
fn open_day_caps_at_max_duration() {
    let result = valid_end_times(slot("09:00"), &BTreeSet::new(), &SchedulePolicy::default());

    // 09:30 through 12:00 — six options, three hours at most.
    assert_eq!(
        result,
        ends(&["09:30", "10:00", "10:30", "11:00", "11:30", "12:00"])
    );
}

// ── Test 2: Closing time truncates before the duration cap ──────────────────

#[test]
fn closing_time_truncates_options() {
    let result = valid_end_times(slot("20:00"), &BTreeSet::new(), &SchedulePolicy::default());
    assert_eq!(result, ends(&["20:30", "21:00"]));

    let result = valid_end_times(slot("19:00"), &BTreeSet::new(), &SchedulePolicy::default());
    assert_eq!(result, ends(&["19:30", "20:00", "20:30", "21:00"]));
}

// ── Test 3: Walk stops at the first occupied slot ───────────────────────────

#[test]
fn walk_stops_at_first_conflict() {
    // 10:00 is occupied: a window may end at 10:00 (it never covers the
    // occupied slot) but not at 10:30 or later.
    let occupied = slots(&["10:00"]);
    let result = valid_end_times(slot("09:00"), &occupied, &SchedulePolicy::default());

    assert_eq!(result, ends(&["09:30", "10:00"]));
}

// ── Test 4: No skip-over past a conflict ────────────────────────────────────

#[test]
fn no_end_time_beyond_a_gap() {
    // Even though 10:30 onward is free again, enumeration must not offer an
    // end time whose window would span the occupied 10:00 slot.
    let occupied = slots(&["10:00"]);
    let result = valid_end_times(slot("09:00"), &occupied, &SchedulePolicy::default());

    assert!(!result.contains(&slot("11:00")));
    assert!(!result.contains(&slot("12:00")));
}

// ── Test 5: Occupied start slot yields no options ───────────────────────────

#[test]
fn occupied_start_slot_yields_nothing() {
    let occupied = slots(&["09:00"]);
    let result = valid_end_times(slot("09:00"), &occupied, &SchedulePolicy::default());

    assert!(result.is_empty());
}

// ── Test 6: Every option closes an unbroken run ─────────────────────────────

#[test]
fn every_option_closes_an_unbroken_run() {
    let occupied = slots(&["08:00", "11:30", "14:00"]);
    let policy = SchedulePolicy::default();
    let start = slot("09:00");

    for end in valid_end_times(start, &occupied, &policy) {
        let mut m = start.minutes();
        while m < end.minutes() {
            assert!(
                !occupied.contains(&SlotMarker::from_minutes(m)),
                "end {end} spans occupied slot at {} minutes",
                m
            );
            m += policy.slot_minutes;
        }
    }
}
