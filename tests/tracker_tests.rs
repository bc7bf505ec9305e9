use chrono::{DateTime, Duration, Local, TimeZone};
use geopunch::core::{Ticker, Tracker};
use geopunch::errors::AppError;
use geopunch::models::{GeoPoint, GeofenceTarget, SessionState};
use geopunch::utils::time::format_hms;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration as StdDuration;

mod common;
use common::{TARGET_LAT, TARGET_LON};

fn office() -> GeofenceTarget {
    GeofenceTarget::new(GeoPoint::new(TARGET_LAT, TARGET_LON), 100.0)
}

fn t0() -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()
}

#[test]
fn check_in_at_the_exact_center_always_succeeds() {
    let mut tracker = Tracker::new(office());
    let center = GeoPoint::new(TARGET_LAT, TARGET_LON);

    let check_in = tracker.request_check_in(center, t0()).unwrap();
    assert_eq!(check_in.at, t0());
    assert_eq!(check_in.distance_meters, 0.0);
    assert_eq!(tracker.state(), SessionState::Running);
}

#[test]
fn check_in_at_exactly_the_radius_succeeds() {
    let center = GeoPoint::new(TARGET_LAT, TARGET_LON);
    let nearby = GeoPoint::new(TARGET_LAT + 0.0005, TARGET_LON);
    let exact = center.distance_meters(&nearby);

    let mut tracker = Tracker::new(GeofenceTarget::new(center, exact));
    assert!(tracker.request_check_in(nearby, t0()).is_ok());
}

#[test]
fn check_in_just_past_the_radius_is_out_of_range() {
    let center = GeoPoint::new(TARGET_LAT, TARGET_LON);
    let nearby = GeoPoint::new(TARGET_LAT + 0.0005, TARGET_LON);
    let exact = center.distance_meters(&nearby);

    let mut tracker = Tracker::new(GeofenceTarget::new(center, exact - 0.01));
    match tracker.request_check_in(nearby, t0()) {
        Err(AppError::OutOfRange {
            distance_meters, ..
        }) => assert!((distance_meters - exact).abs() < 1e-9),
        other => panic!("expected OutOfRange, got {:?}", other),
    }
    assert_eq!(tracker.state(), SessionState::Idle);
}

#[test]
fn check_in_500_meters_away_fails_and_leaves_idle() {
    // ~500 m north of the target, radius 100 m.
    let away = GeoPoint::new(TARGET_LAT + 0.0045, TARGET_LON);
    let mut tracker = Tracker::new(office());

    match tracker.request_check_in(away, t0()) {
        Err(AppError::OutOfRange {
            distance_meters,
            radius_meters,
        }) => {
            assert!((400.0..600.0).contains(&distance_meters), "{}", distance_meters);
            assert_eq!(radius_meters, 100.0);
        }
        other => panic!("expected OutOfRange, got {:?}", other),
    }
    assert_eq!(tracker.state(), SessionState::Idle);
}

#[test]
fn full_session_scenario() {
    let mut tracker = Tracker::new(office());
    let center = GeoPoint::new(TARGET_LAT, TARGET_LON);

    tracker.request_check_in(center, t0()).unwrap();
    assert_eq!(tracker.state(), SessionState::Running);

    let later = t0() + Duration::milliseconds(3_661_000);
    assert_eq!(format_hms(tracker.elapsed(later)), "01:01:01");

    let d = tracker.check_out(later).unwrap();
    assert_eq!(format_hms(d), "01:01:01");
    assert_eq!(tracker.state(), SessionState::CheckedOut);

    // Duration stays frozen whatever `now` says afterwards.
    assert_eq!(
        format_hms(tracker.elapsed(later + Duration::days(2))),
        "01:01:01"
    );

    let summary = tracker.summary(later + Duration::days(2));
    assert_eq!(summary.elapsed, "01:01:01");
    assert!(summary.checked_in_at.is_some());
    assert!(summary.checked_out_at.is_some());
}

#[test]
fn re_entrant_check_in_is_rejected_while_running() {
    let mut tracker = Tracker::new(office());
    let center = GeoPoint::new(TARGET_LAT, TARGET_LON);

    tracker.request_check_in(center, t0()).unwrap();
    assert!(matches!(
        tracker.request_check_in(center, t0() + Duration::seconds(1)),
        Err(AppError::InvalidTransition { .. })
    ));
}

#[test]
fn ticker_emits_while_running_and_stops_on_cancel() {
    let mut tracker = Tracker::new(office());
    let center = GeoPoint::new(TARGET_LAT, TARGET_LON);
    tracker.request_check_in(center, Local::now()).unwrap();

    let shared = Arc::new(Mutex::new(tracker));
    let (tx, rx) = mpsc::channel::<String>();

    let mut ticker = Ticker::spawn(
        Arc::clone(&shared),
        StdDuration::from_millis(10),
        move |elapsed| {
            let _ = tx.send(elapsed);
        },
    );

    thread::sleep(StdDuration::from_millis(80));
    ticker.stop();

    let seen: Vec<String> = rx.try_iter().collect();
    assert!(!seen.is_empty(), "ticker never fired");
    assert!(seen.iter().all(|s| s.starts_with("00:00:0")));

    // No tick may land after cancellation.
    thread::sleep(StdDuration::from_millis(50));
    assert!(rx.try_iter().next().is_none());
}

#[test]
fn ticker_exits_on_its_own_after_check_out() {
    let mut tracker = Tracker::new(office());
    let center = GeoPoint::new(TARGET_LAT, TARGET_LON);
    tracker.request_check_in(center, Local::now()).unwrap();

    let shared = Arc::new(Mutex::new(tracker));
    let (tx, rx) = mpsc::channel::<String>();

    let _ticker = Ticker::spawn(
        Arc::clone(&shared),
        StdDuration::from_millis(10),
        move |elapsed| {
            let _ = tx.send(elapsed);
        },
    );

    thread::sleep(StdDuration::from_millis(40));
    shared.lock().unwrap().check_out(Local::now()).unwrap();

    // Drain anything emitted before the check-out landed, give the thread a
    // couple of intervals to notice, then confirm silence.
    thread::sleep(StdDuration::from_millis(40));
    let _: Vec<String> = rx.try_iter().collect();
    thread::sleep(StdDuration::from_millis(40));
    assert!(rx.try_iter().next().is_none());
}
