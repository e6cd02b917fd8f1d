//! Animated scroll-to-section.

/// Cubic ease-in-out over `t` in `[0, 1]`.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// A running scroll from one content offset to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    duration: f32,
    started_at: f64,
}

impl ScrollAnimation {
    /// Starts an animation at time `now` (seconds, host clock).
    pub fn new(from: f32, to: f32, duration: f32, now: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            started_at: now,
        }
    }

    fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (((now - self.started_at) as f32) / self.duration).clamp(0.0, 1.0)
    }

    /// Scroll offset to show at time `now`.
    pub fn sample(&self, now: f64) -> f32 {
        let eased = ease_in_out(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert!(ease_in_out(0.25) < 0.25);
        assert!(ease_in_out(0.75) > 0.75);
    }

    #[test]
    fn test_sample_runs_from_start_to_target() {
        let animation = ScrollAnimation::new(100.0, 900.0, 0.25, 10.0);
        assert_eq!(animation.sample(10.0), 100.0);
        assert!(!animation.is_finished(10.2));
        assert_eq!(animation.sample(10.25), 900.0);
        assert!(animation.is_finished(10.25));
        assert_eq!(animation.sample(11.0), 900.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let animation = ScrollAnimation::new(0.0, 50.0, 0.0, 3.0);
        assert!(animation.is_finished(3.0));
        assert_eq!(animation.sample(3.0), 50.0);
    }
}
