/// Delta time between two host frame callbacks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame
    pub dt: f32,
    /// Monotonic frame counter
    pub frame_index: u64,
}

/// Converts the absolute millisecond timestamps handed to frame callbacks
/// into per-frame deltas.
///
/// The baseline starts at zero, so the first delta is the time since the
/// host's time origin. Stalls are not clamped: a backgrounded tab produces
/// one large delta. Only a clock that runs backwards is clamped to zero.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: f64,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock to `timestamp_ms` and returns the elapsed time.
    pub fn tick(&mut self, timestamp_ms: f64) -> FrameTime {
        let now = timestamp_ms * 0.001;
        let dt = (now - self.last).max(0.0) as f32;
        self.last = now.max(self.last);

        let ft = FrameTime {
            dt,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_measures_from_origin() {
        let mut clock = FrameClock::new();
        let ft = clock.tick(250.0);
        assert!((ft.dt - 0.25).abs() < 1e-6);
        assert_eq!(ft.frame_index, 0);
    }

    #[test]
    fn test_delta_between_frames() {
        let mut clock = FrameClock::new();
        clock.tick(1000.0);
        let ft = clock.tick(1016.0);
        assert!((ft.dt - 0.016).abs() < 1e-6);
        assert_eq!(ft.frame_index, 1);
    }

    #[test]
    fn test_long_stall_is_not_clamped() {
        let mut clock = FrameClock::new();
        clock.tick(1000.0);
        let ft = clock.tick(61_000.0);
        assert!((ft.dt - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_backwards_timestamp_yields_zero() {
        let mut clock = FrameClock::new();
        clock.tick(2000.0);
        let ft = clock.tick(1500.0);
        assert_eq!(ft.dt, 0.0);
        let ft = clock.tick(2100.0);
        assert!((ft.dt - 0.1).abs() < 1e-6);
    }
}
