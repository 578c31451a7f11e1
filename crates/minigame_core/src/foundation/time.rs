//! Time management utilities

/// Deterministic countdown driven by per-frame delta time
///
/// Unlike a wall-clock timer, a `FuseTimer` only moves when the caller feeds
/// it elapsed time, which keeps simulation ticks reproducible under test.
#[derive(Debug, Clone)]
pub struct FuseTimer {
    duration: f32,
    elapsed: f32,
}

impl FuseTimer {
    /// Create a fuse that expires after `duration` seconds of accumulated time
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
        }
    }

    /// Accumulate elapsed frame time
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Whether the fuse has run out
    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Seconds left before expiry (zero once expired)
    pub fn remaining(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }

    /// Seconds accumulated so far
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Restart the countdown from zero
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fuse_accumulates_delta_time() {
        let mut fuse = FuseTimer::new(1.0);
        assert!(!fuse.is_expired());

        fuse.advance(0.4);
        fuse.advance(0.4);
        assert!(!fuse.is_expired());
        assert_relative_eq!(fuse.remaining(), 0.2);

        fuse.advance(0.4);
        assert!(fuse.is_expired());
        assert_relative_eq!(fuse.remaining(), 0.0);
    }

    #[test]
    fn test_fuse_expires_exactly_at_duration() {
        let mut fuse = FuseTimer::new(2.0);
        fuse.advance(2.0);
        assert!(fuse.is_expired());
    }

    #[test]
    fn test_fuse_ignores_zero_delta() {
        let mut fuse = FuseTimer::new(1.0);
        fuse.advance(0.0);
        assert!(!fuse.is_expired());
        assert_relative_eq!(fuse.elapsed(), 0.0);
    }

    #[test]
    fn test_fuse_reset() {
        let mut fuse = FuseTimer::new(1.0);
        fuse.advance(1.5);
        assert!(fuse.is_expired());

        fuse.reset();
        assert!(!fuse.is_expired());
        assert_relative_eq!(fuse.remaining(), 1.0);
    }
}
