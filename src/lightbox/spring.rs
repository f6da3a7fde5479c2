// SPDX-License-Identifier: MPL-2.0
//! Spring animation driven by wall-clock time.
//!
//! The spring is solved in closed form (damped harmonic oscillator) instead
//! of being stepped, so the result at a given instant does not depend on how
//! often `tick` is called.

use crate::config::{
    DEFAULT_SPRING_FRICTION, DEFAULT_SPRING_TENSION, MAX_SPRING_FRICTION, MAX_SPRING_TENSION,
    MIN_SPRING_FRICTION, MIN_SPRING_TENSION, SPRING_REST_DISPLACEMENT, SPRING_REST_SPEED,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Tension/friction tuning on the origami scale.
///
/// Both values are clamped to their valid range on construction.
///
/// # Example
///
/// ```
/// use iced_lightbox::lightbox::SpringConfig;
///
/// let config = SpringConfig::new(40.0, 7.0);
/// assert_eq!(config.tension(), 40.0);
///
/// // Values outside range are clamped
/// let too_soft = SpringConfig::new(-5.0, 7.0);
/// assert_eq!(too_soft.tension(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    tension: f32,
    friction: f32,
}

impl SpringConfig {
    #[must_use]
    pub fn new(tension: f32, friction: f32) -> Self {
        Self {
            tension: tension.clamp(MIN_SPRING_TENSION, MAX_SPRING_TENSION),
            friction: friction.clamp(MIN_SPRING_FRICTION, MAX_SPRING_FRICTION),
        }
    }

    #[must_use]
    pub fn tension(self) -> f32 {
        self.tension
    }

    #[must_use]
    pub fn friction(self) -> f32 {
        self.friction
    }

    /// Stiffness in the physical model (mass 1).
    #[must_use]
    pub fn stiffness(self) -> f32 {
        (self.tension - 30.0) * 3.62 + 194.0
    }

    /// Damping coefficient in the physical model.
    #[must_use]
    pub fn damping(self) -> f32 {
        (self.friction - 8.0) * 3.0 + 25.0
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            tension: DEFAULT_SPRING_TENSION,
            friction: DEFAULT_SPRING_FRICTION,
        }
    }
}

/// Result of advancing a spring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpringStatus {
    /// No animation was running.
    Idle,
    /// Still moving towards the target.
    Running,
    /// Reached the target during this tick.
    Settled,
}

#[derive(Debug, Clone, Copy)]
struct Animation {
    from: f32,
    to: f32,
    initial_velocity: f32,
    started_at: Instant,
    stiffness: f32,
    damping: f32,
}

impl Animation {
    /// Position and velocity `t` seconds after the start.
    fn sample(&self, t: f32) -> (f32, f32) {
        let zeta = self.damping / (2.0 * self.stiffness.sqrt());
        let omega0 = self.stiffness.sqrt();
        let x0 = self.to - self.from;
        let v0 = -self.initial_velocity;

        if zeta < 1.0 {
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * t).exp();
            let (sin, cos) = (omega1 * t).sin_cos();
            let a = (v0 + zeta * omega0 * x0) / omega1;

            let position = self.to - envelope * (a * sin + x0 * cos);
            let velocity = zeta * omega0 * envelope * (sin * a + x0 * cos)
                - envelope * (cos * (v0 + zeta * omega0 * x0) - omega1 * x0 * sin);
            (position, velocity)
        } else {
            let envelope = (-omega0 * t).exp();
            let position = self.to - envelope * (x0 + (v0 + omega0 * x0) * t);
            let velocity = envelope * (v0 * (t * omega0 - 1.0) + t * x0 * omega0 * omega0);
            (position, velocity)
        }
    }

    fn is_at_rest(&self, position: f32, velocity: f32) -> bool {
        velocity.abs() <= SPRING_REST_SPEED && (self.to - position).abs() <= SPRING_REST_DISPLACEMENT
    }
}

/// A scalar animated by a spring.
#[derive(Debug, Clone, Default)]
pub struct Spring {
    value: f32,
    velocity: f32,
    animation: Option<Animation>,
}

impl Spring {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            animation: None,
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current velocity in units per second.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Value the running animation is heading to, if any.
    #[must_use]
    pub fn target(&self) -> Option<f32> {
        self.animation.map(|a| a.to)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Jumps to `value`, stopping any running animation.
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
        self.velocity = 0.0;
        self.animation = None;
    }

    /// Starts animating from the current value and velocity towards `to`.
    pub fn animate_to(&mut self, to: f32, config: SpringConfig, now: Instant) {
        self.animation = Some(Animation {
            from: self.value,
            to,
            initial_velocity: self.velocity,
            started_at: now,
            stiffness: config.stiffness(),
            damping: config.damping(),
        });
    }

    /// Advances the animation to `now`.
    pub fn tick(&mut self, now: Instant) -> SpringStatus {
        let Some(animation) = self.animation else {
            return SpringStatus::Idle;
        };

        let t = now.saturating_duration_since(animation.started_at).as_secs_f32();
        let (position, velocity) = animation.sample(t);

        if animation.is_at_rest(position, velocity) {
            self.set_value(animation.to);
            SpringStatus::Settled
        } else {
            self.value = position;
            self.velocity = velocity;
            SpringStatus::Running
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn default_config_maps_to_expected_physics() {
        let config = SpringConfig::default();
        assert_eq!(config.tension(), 30.0);
        assert!((config.stiffness() - 194.0).abs() < 1e-3);
        assert!((config.damping() - 22.0).abs() < 1e-3);
    }

    #[test]
    fn config_clamps_to_valid_range() {
        let config = SpringConfig::new(10_000.0, 0.0);
        assert_eq!(config.tension(), MAX_SPRING_TENSION);
        assert_eq!(config.friction(), MIN_SPRING_FRICTION);
        assert!(config.stiffness() > 0.0);
        assert!(config.damping() > 0.0);
    }

    #[test]
    fn tick_without_animation_is_idle() {
        let mut spring = Spring::new(0.5);
        assert_eq!(spring.tick(Instant::now()), SpringStatus::Idle);
        assert_eq!(spring.value(), 0.5);
    }

    #[test]
    fn animation_starts_at_current_value() {
        let start = Instant::now();
        let mut spring = Spring::new(0.0);
        spring.animate_to(1.0, SpringConfig::default(), start);

        assert_eq!(spring.tick(start), SpringStatus::Running);
        assert!((spring.value() - 0.0).abs() < 1e-6);
    }

    #[test]
    fn animation_moves_towards_target_then_settles() {
        let start = Instant::now();
        let mut spring = Spring::new(0.0);
        spring.animate_to(1.0, SpringConfig::default(), start);

        assert_eq!(
            spring.tick(start + Duration::from_millis(50)),
            SpringStatus::Running
        );
        assert!(spring.value() > 0.0 && spring.value() < 1.0);

        assert_eq!(
            spring.tick(start + Duration::from_secs(5)),
            SpringStatus::Settled
        );
        assert_eq!(spring.value(), 1.0);
        assert!(!spring.is_animating());
        assert_eq!(spring.tick(start + Duration::from_secs(6)), SpringStatus::Idle);
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let start = Instant::now();
        let mut spring = Spring::new(0.0);
        spring.animate_to(1.0, SpringConfig::new(40.0, 3.0), start);

        let peak = (1..100)
            .map(|ms| {
                spring.tick(start + Duration::from_millis(ms * 10));
                spring.value()
            })
            .fold(f32::MIN, f32::max);

        assert!(peak > 1.0);
    }

    #[test]
    fn critically_damped_spring_does_not_overshoot() {
        let start = Instant::now();
        let mut spring = Spring::new(0.0);
        spring.animate_to(1.0, SpringConfig::new(40.0, 40.0), start);

        for ms in 1..300 {
            spring.tick(start + Duration::from_millis(ms * 10));
            assert!(spring.value() <= 1.0 + SPRING_REST_DISPLACEMENT);
        }
    }

    #[test]
    fn set_value_stops_animation() {
        let start = Instant::now();
        let mut spring = Spring::new(0.0);
        spring.animate_to(1.0, SpringConfig::default(), start);
        spring.set_value(0.25);

        assert!(!spring.is_animating());
        assert_eq!(spring.tick(start + Duration::from_secs(1)), SpringStatus::Idle);
        assert_eq!(spring.value(), 0.25);
    }

    #[test]
    fn retargeting_keeps_position_continuous() {
        let start = Instant::now();
        let mut spring = Spring::new(0.0);
        spring.animate_to(1.0, SpringConfig::default(), start);
        let mid = start + Duration::from_millis(100);
        spring.tick(mid);
        let before = spring.value();

        spring.animate_to(0.0, SpringConfig::default(), mid);
        spring.tick(mid);

        assert!((spring.value() - before).abs() < 1e-5);
        assert_eq!(spring.target(), Some(0.0));
    }
}
