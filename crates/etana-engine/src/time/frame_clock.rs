use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds. Never negative.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is derived from a monotonic clock, so it is always >= 0, and is
/// clamped to avoid pathological values when the process is paused by a
/// debugger, minimized, or stalled in a driver call.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with the default stall clamp (0.25s).
    ///
    /// The clamp caps the camera displacement applied after a long stall;
    /// without it the first frame after resume teleports the viewpoint.
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_max: Duration::from_millis(250),
        }
    }

    /// Creates a clock with a custom stall clamp.
    pub fn with_clamp(dt_max: Duration) -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_max,
        }
    }

    /// Resets the clock baseline.
    ///
    /// Useful after surface reconfigure events or when resuming from
    /// suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let mut dt = now.saturating_duration_since(self.last);

        if dt > self.dt_max {
            dt = self.dt_max;
        }

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dt_is_never_negative() {
        let mut clock = FrameClock::new();
        for _ in 0..8 {
            let ft = clock.tick();
            assert!(ft.dt >= 0.0);
        }
    }

    #[test]
    fn dt_is_clamped_after_a_stall() {
        let mut clock = FrameClock::with_clamp(Duration::from_millis(10));
        std::thread::sleep(Duration::from_millis(30));
        let ft = clock.tick();
        assert!(ft.dt <= 0.010 + 1e-4);
    }

    #[test]
    fn frame_index_is_monotonic() {
        let mut clock = FrameClock::new();
        let a = clock.tick().frame_index;
        let b = clock.tick().frame_index;
        assert_eq!(b, a + 1);
    }

    #[test]
    fn reset_rebaselines_without_advancing_index() {
        let mut clock = FrameClock::new();
        clock.tick();
        clock.reset();
        let ft = clock.tick();
        assert_eq!(ft.frame_index, 1);
    }
}
