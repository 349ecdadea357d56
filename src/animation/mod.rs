//! Discrete spring animation.
//!
//! This is not a physical integrator. Each frame applies one fixed-size step:
//!
//! ```text
//! displacement = to − current
//! velocity     = (velocity + displacement × stiffness) × damping
//! current      = clamp(current + velocity, min, max)
//! ```
//!
//! and the spring is done once both |displacement| and |velocity| fall within
//! epsilon, at which point the value snaps to the target exactly. With
//! damping below 1 the update contracts, so convergence takes finitely many
//! frames for any starting state.

use sheet_config::Spring;

/// A value animating toward a target with the discrete spring model.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    current: f64,
    velocity: f64,
    to: f64,
    params: Spring,
    is_done: bool,
}

impl Animation {
    /// Creates an animation from `from` toward `to`.
    ///
    /// `initial_velocity` carries momentum over from a replaced animation;
    /// pass zero when starting from rest.
    pub fn new(from: f64, to: f64, initial_velocity: f64, params: Spring) -> Self {
        Self {
            current: from,
            velocity: initial_velocity,
            to,
            params,
            is_done: false,
        }
    }

    /// Returns the current value.
    pub fn value(&self) -> f64 {
        self.current
    }

    /// Returns the final value.
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Returns the per-frame velocity.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    /// Redirects the animation toward a new target, keeping position and
    /// velocity. Used when snap geometry shifts under an in-flight animation.
    pub fn set_target(&mut self, to: f64) {
        self.to = to;
        self.is_done = false;
    }

    /// Advances the spring by one frame, hard-clamped to `[min, max]`.
    pub fn tick(&mut self, min: f64, max: f64) {
        if self.is_done {
            return;
        }

        let displacement = self.to - self.current;
        self.velocity = (self.velocity + displacement * self.params.stiffness) * self.params.damping;
        self.current = (self.current + self.velocity).clamp(min, max);

        if displacement.abs() <= self.params.epsilon && self.velocity.abs() <= self.params.epsilon {
            // Settle exactly; no residual fractional drift.
            self.current = self.to;
            self.velocity = 0.;
            self.is_done = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> Spring {
        Spring::default()
    }

    fn run(anim: &mut Animation, min: f64, max: f64) -> usize {
        let mut frames = 0;
        while !anim.is_done() {
            anim.tick(min, max);
            frames += 1;
            assert!(frames < 10_000, "spring failed to converge");
        }
        frames
    }

    #[test]
    fn converges_to_exact_target() {
        let mut anim = Animation::new(500., 920., 0., params());
        run(&mut anim, 0., 920.);
        assert_eq!(anim.value(), 920.);
        assert_eq!(anim.velocity(), 0.);
    }

    #[test]
    fn zero_distance_settles_on_first_tick() {
        let mut anim = Animation::new(500., 500., 0., params());
        anim.tick(0., 920.);
        assert!(anim.is_done());
        assert_eq!(anim.value(), 500.);
    }

    #[test]
    fn never_escapes_clamp_bounds() {
        let mut anim = Animation::new(100., 920., 0., params());
        while !anim.is_done() {
            anim.tick(0., 920.);
            assert!((0. ..=920.).contains(&anim.value()));
        }
    }

    #[test]
    fn done_tick_is_inert() {
        let mut anim = Animation::new(0., 100., 0., params());
        run(&mut anim, 0., 920.);
        let settled = anim.clone();
        anim.tick(0., 920.);
        assert_eq!(anim, settled);
    }

    #[test]
    fn retarget_restarts_convergence() {
        let mut anim = Animation::new(0., 500., 0., params());
        for _ in 0..5 {
            anim.tick(0., 920.);
        }
        anim.set_target(920.);
        run(&mut anim, 0., 920.);
        assert_eq!(anim.value(), 920.);
    }

    #[test]
    fn initial_velocity_carries_through() {
        let calm = Animation::new(500., 920., 0., params());
        let mut calm = calm;
        let mut brisk = Animation::new(500., 920., 30., params());
        calm.tick(0., 920.);
        brisk.tick(0., 920.);
        assert!(brisk.value() > calm.value());
    }
}
