use egui::Color32;

use crate::model::layout::ItemTarget;

// Stiff spring (react-spring `config.stiff`): fast settle, minimal overshoot.
const TENSION: f32 = 210.0;
const FRICTION: f32 = 20.0;
/// Largest step the integrator will take; long frame gaps are clamped rather
/// than extrapolated.
const MAX_DT: f32 = 1.0 / 30.0;
const REST_DELTA: f32 = 0.1;
const REST_VELOCITY: f32 = 0.1;

/// A single spring-driven scalar. Retargeting keeps the live value and
/// velocity, so rapid target updates never queue or snap.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn at(value: f32) -> Self {
        Self { value, velocity: 0.0, target: value }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Move the goalpost; interpolation restarts from the current state.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
    }

    /// Advance by `dt` seconds (semi-implicit Euler). Returns `false` once
    /// the spring has settled on its target.
    pub fn tick(&mut self, dt: f32) -> bool {
        let dt = dt.clamp(0.0, MAX_DT);
        let displacement = self.value - self.target;
        if displacement.abs() < REST_DELTA && self.velocity.abs() < REST_VELOCITY {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }
        let accel = -TENSION * displacement - FRICTION * self.velocity;
        self.velocity += accel * dt;
        self.value += self.velocity * dt;
        true
    }
}

/// Live animated state for one day item: x position, label opacity, and the
/// label color's alpha (the active/muted variants share one base hue, so the
/// color transition is an alpha fade).
#[derive(Debug, Clone, Copy)]
pub struct DayVisual {
    pub x: Spring,
    pub opacity: Spring,
    color_alpha: Spring,
    base: Color32,
}

impl DayVisual {
    /// Start at the given target without animation (mount layout).
    pub fn resting_at(target: ItemTarget) -> Self {
        Self {
            x: Spring::at(target.x),
            opacity: Spring::at(target.opacity),
            color_alpha: Spring::at(target.color.a() as f32),
            base: Color32::from_rgb(target.color.r(), target.color.g(), target.color.b()),
        }
    }

    pub fn retarget(&mut self, target: ItemTarget) {
        self.x.retarget(target.x);
        self.opacity.retarget(target.opacity);
        self.color_alpha.retarget(target.color.a() as f32);
        self.base = Color32::from_rgb(target.color.r(), target.color.g(), target.color.b());
    }

    /// Advance all channels; `true` while anything is still moving.
    pub fn tick(&mut self, dt: f32) -> bool {
        let x = self.x.tick(dt);
        let o = self.opacity.tick(dt);
        let c = self.color_alpha.tick(dt);
        x || o || c
    }

    /// Current label color with the live alpha fade and opacity applied.
    pub fn color(&self) -> Color32 {
        let alpha = (self.color_alpha.value().clamp(0.0, 255.0) / 255.0)
            * self.opacity.value().clamp(0.0, 1.0);
        self.base.gamma_multiply(alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::layout::{DAY_ACTIVE, DAY_MUTED};

    #[test]
    fn converges_to_target() {
        let mut s = Spring::at(0.0);
        s.retarget(160.0);
        for _ in 0..600 {
            s.tick(1.0 / 60.0);
        }
        // Settled springs snap exactly onto the target and report done.
        assert_eq!(s.value(), 160.0);
        assert!(!s.tick(1.0 / 60.0));
    }

    #[test]
    fn retarget_restarts_from_live_value() {
        let mut s = Spring::at(0.0);
        s.retarget(160.0);
        for _ in 0..5 {
            s.tick(1.0 / 60.0);
        }
        let mid = s.value();
        assert!(mid > 0.0 && mid < 160.0);

        // A rapid second update continues from the live value and velocity,
        // nowhere near the abandoned 160 target.
        s.retarget(-40.0);
        s.tick(1.0 / 60.0);
        assert!((s.value() - mid).abs() < 20.0);
    }

    #[test]
    fn settled_spring_reports_done() {
        let mut s = Spring::at(42.0);
        assert!(!s.tick(1.0 / 60.0));
        assert_eq!(s.value(), 42.0);
    }

    #[test]
    fn long_frame_gaps_are_clamped() {
        let mut s = Spring::at(0.0);
        s.retarget(100.0);
        s.tick(5.0); // stalled frame
        assert!(s.value().is_finite());
        assert!(s.value() <= 100.0 + 1.0);
    }

    #[test]
    fn visual_fades_between_color_variants() {
        let mut v = DayVisual::resting_at(ItemTarget {
            x: 0.0,
            color: DAY_MUTED,
            opacity: 1.0,
        });
        v.retarget(ItemTarget { x: 0.0, color: DAY_ACTIVE, opacity: 1.0 });
        for _ in 0..600 {
            v.tick(1.0 / 60.0);
        }
        assert_eq!(v.color().a(), DAY_ACTIVE.a());
    }
}
