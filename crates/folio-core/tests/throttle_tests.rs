// Tests for frame throttling.

use folio_core::*;

#[test]
fn first_tick_always_fires() {
    let mut t = FrameThrottle::new(30.0);
    assert!(t.ready(12345.0));
}

#[test]
fn at_most_rate_invocations_per_second() {
    for rate in [10.0, 24.0, 30.0, 60.0] {
        let mut t = FrameThrottle::new(rate);
        // Host fires at 1 kHz, far faster than any target rate
        let fired = (0..1000).filter(|ms| t.ready(*ms as f64)).count();
        let expected = rate as usize;
        assert!(
            fired <= expected && fired + 1 >= expected,
            "rate {rate}: fired {fired} times in one second"
        );
    }
}

#[test]
fn sixty_hz_host_at_thirty_hz_fires_every_other_frame() {
    let mut t = FrameThrottle::new(30.0);
    // A touch slower than 60 Hz so frame pairs never land exactly one interval apart
    let frame = 16.7;
    let fired: Vec<bool> = (0..10).map(|i| t.ready(i as f64 * frame)).collect();
    assert_eq!(
        fired,
        vec![true, false, true, false, true, false, true, false, true, false]
    );
}

#[test]
fn missed_frames_are_dropped_not_queued() {
    let mut t = FrameThrottle::new(10.0);
    assert!(t.ready(0.0));
    assert!(!t.ready(50.0));
    assert!(t.ready(100.0));
    // Tab was backgrounded: one call, not a burst of catch-up calls
    assert!(t.ready(450.0));
    assert!(!t.ready(500.0));
    assert!(t.ready(550.0));
}

#[test]
fn invalid_rate_disables_throttling() {
    for rate in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let mut t = FrameThrottle::new(rate);
        assert_eq!(t.interval_ms(), 0.0, "rate {rate}");
        assert!((0..5).all(|i| t.ready(i as f64)), "rate {rate}");
    }
}

#[test]
fn reset_fires_on_next_tick() {
    let mut t = FrameThrottle::new(1.0);
    assert!(t.ready(0.0));
    assert!(!t.ready(10.0));
    t.reset();
    assert!(t.ready(20.0));
}

#[test]
fn throttled_forwards_argument() {
    let mut seen = Vec::new();
    let mut throttled = Throttled::new(20.0, |frame: u32| seen.push(frame));
    for (i, ms) in [0.0, 10.0, 50.0, 60.0, 100.0].into_iter().enumerate() {
        throttled.tick(ms, i as u32);
    }
    drop(throttled);
    assert_eq!(seen, vec![0, 2, 4]);
}

#[test]
fn throttle_frame_reports_whether_it_fired() {
    let mut count = 0;
    {
        let mut cb = throttle_frame(50.0, |_: ()| count += 1);
        assert!(cb(0.0, ()));
        assert!(!cb(5.0, ()));
        assert!(cb(20.0, ()));
    }
    assert_eq!(count, 2);
}

#[test]
fn forwarded_calls_are_never_closer_than_one_interval() {
    let mut t = FrameThrottle::new(30.0);
    let ticks = [0.0, 40.0, 70.0, 104.0, 137.0, 171.0, 200.0, 260.0];
    let fired: Vec<f64> = ticks.into_iter().filter(|ms| t.ready(*ms)).collect();
    assert_eq!(fired, vec![0.0, 40.0, 104.0, 171.0, 260.0]);
    for pair in fired.windows(2) {
        let gap = pair[1] - pair[0];
        assert!(gap >= t.interval_ms(), "gap {gap}ms below interval {}", t.interval_ms());
    }
}
