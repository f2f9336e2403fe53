//! Timed interpolation between numeric values.
//!
//! A [`Tween`] moves from where it currently is toward a target over a fixed
//! duration. Retargeting mid-flight starts the new leg from the current
//! interpolated value, so a fast sequence of targets never jumps.

use std::time::Duration;

/// Maps linear progress `t` in [0, 1] to eased progress in [0, 1].
pub type EasingFn = fn(f32) -> f32;

pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out, the default curve for column slides.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Tween {
    /// A tween already at rest on `value`.
    pub fn settled(value: f32, duration: Duration) -> Self {
        Self {
            from: value,
            to: value,
            elapsed: duration,
            duration,
            easing: ease_in_out,
        }
    }

    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Head toward `target`, starting from the current value.
    ///
    /// Retargeting to the value already being approached keeps the
    /// in-flight leg untouched.
    pub fn retarget(&mut self, target: f32) {
        if target == self.to {
            return;
        }
        self.from = self.value();
        self.to = target;
        self.elapsed = Duration::ZERO;
    }

    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()) as f32
    }

    pub fn value(&self) -> f32 {
        if self.is_complete() {
            return self.to;
        }
        let t = (self.easing)(self.progress());
        self.from + (self.to - self.from) * t
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Values at each `step` across the remaining transition, ending on the target.
    pub fn samples(&self, step: Duration) -> Vec<f32> {
        let mut probe = *self;
        let mut values = vec![probe.value()];
        if step.is_zero() {
            return values;
        }
        while !probe.is_complete() {
            probe.tick(step);
            values.push(probe.value());
        }
        values
    }
}
