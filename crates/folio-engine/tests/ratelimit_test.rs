use std::time::{Duration, Instant};

use folio_engine::ratelimit::{countdown_minutes, throttle_message, RateLimitWindow};
use folio_engine::Gate;

#[test]
fn admits_up_to_the_cap_within_the_window() {
    let mut window = RateLimitWindow::new(3, Duration::from_secs(600));
    let t0 = Instant::now();

    for i in 0..3 {
        let now = t0 + Duration::from_secs(i);
        assert_eq!(window.check(now), Gate::Allowed, "attempt {i}");
        window.record(now);
    }

    match window.check(t0 + Duration::from_secs(3)) {
        Gate::Throttled { retry_after } => {
            // Oldest attempt was at t0; the gate reopens at t0 + 600s.
            assert_eq!(retry_after, Duration::from_secs(597));
        }
        Gate::Allowed => panic!("fourth attempt should be throttled"),
    }
}

#[test]
fn reopens_after_the_window_slides() {
    let mut window = RateLimitWindow::new(2, Duration::from_secs(60));
    let t0 = Instant::now();

    window.record(t0);
    window.record(t0 + Duration::from_secs(1));
    assert!(matches!(
        window.check(t0 + Duration::from_secs(2)),
        Gate::Throttled { .. }
    ));

    // t0 has expired; one slot is free again.
    assert_eq!(window.check(t0 + Duration::from_secs(61)), Gate::Allowed);
}

#[test]
fn check_does_not_consume_a_slot() {
    let mut window = RateLimitWindow::new(1, Duration::from_secs(60));
    let t0 = Instant::now();

    assert_eq!(window.check(t0), Gate::Allowed);
    assert_eq!(window.check(t0), Gate::Allowed);
    window.record(t0);
    assert!(matches!(window.check(t0), Gate::Throttled { .. }));
}

#[test]
fn zero_cap_always_throttles_without_panicking() {
    let mut window = RateLimitWindow::new(0, Duration::from_secs(60));
    let t0 = Instant::now();

    assert_eq!(
        window.check(t0),
        Gate::Throttled {
            retry_after: Duration::from_secs(60)
        }
    );

    // Still throttled after a recorded attempt and after the period.
    window.record(t0);
    assert!(matches!(window.check(t0), Gate::Throttled { .. }));
    assert!(matches!(
        window.check(t0 + Duration::from_secs(120)),
        Gate::Throttled { .. }
    ));
}

#[test]
fn countdown_rounds_up_to_whole_minutes() {
    assert_eq!(countdown_minutes(Duration::from_secs(1)), 1);
    assert_eq!(countdown_minutes(Duration::from_secs(60)), 1);
    assert_eq!(countdown_minutes(Duration::from_secs(61)), 2);
    assert_eq!(countdown_minutes(Duration::from_secs(599)), 10);
    // Sub-second remainder still counts toward the next minute.
    assert_eq!(countdown_minutes(Duration::from_millis(60_500)), 2);
    // Never reports zero minutes, even for sub-second waits.
    assert_eq!(countdown_minutes(Duration::from_millis(10)), 1);
}

#[test]
fn throttle_message_carries_the_countdown() {
    assert_eq!(
        throttle_message(Duration::from_secs(120)),
        "Rate limit reached. Try again in 2 minute(s)."
    );
}
