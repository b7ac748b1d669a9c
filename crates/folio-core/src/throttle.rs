//! Frame-rate throttling for per-frame callbacks.
//!
//! The host calls into the wrapper on every native animation frame; the
//! wrapped callback only runs when a full interval has passed. Missed frames
//! are dropped, never queued.

#[derive(Clone, Copy, Debug)]
pub struct FrameThrottle {
    interval_ms: f64,
    last_fire_ms: Option<f64>,
}

impl FrameThrottle {
    /// A non-finite or non-positive rate disables throttling.
    pub fn new(rate_hz: f64) -> Self {
        let interval_ms = if rate_hz.is_finite() && rate_hz > 0.0 {
            1000.0 / rate_hz
        } else {
            0.0
        };
        Self {
            interval_ms,
            last_fire_ms: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Returns true when the caller should run its frame work for `now_ms`.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        let Some(last) = self.last_fire_ms else {
            self.last_fire_ms = Some(now_ms);
            return true;
        };
        if now_ms - last < self.interval_ms {
            return false;
        }
        // Measured from the actual fire time so forwarded calls are never
        // closer than one interval.
        self.last_fire_ms = Some(now_ms);
        true
    }

    pub fn reset(&mut self) {
        self.last_fire_ms = None;
    }
}

/// A callback wrapped with its own throttle state.
pub struct Throttled<F> {
    throttle: FrameThrottle,
    callback: F,
}

impl<F> Throttled<F> {
    pub fn new(rate_hz: f64, callback: F) -> Self {
        Self {
            throttle: FrameThrottle::new(rate_hz),
            callback,
        }
    }

    /// Forwards `arg` to the callback if the throttle allows it.
    pub fn tick<A>(&mut self, now_ms: f64, arg: A) -> bool
    where
        F: FnMut(A),
    {
        if self.throttle.ready(now_ms) {
            (self.callback)(arg);
            true
        } else {
            false
        }
    }
}

/// Closure form of [`Throttled`]: the returned callback takes the frame
/// timestamp and the per-frame argument, and reports whether it fired.
pub fn throttle_frame<A, F>(rate_hz: f64, callback: F) -> impl FnMut(f64, A) -> bool
where
    F: FnMut(A),
{
    let mut throttled = Throttled::new(rate_hz, callback);
    move |now_ms, arg| throttled.tick(now_ms, arg)
}
