use crate::body::Body;
use crate::error::{SimError, SimResult};
use crate::forces::{accumulate_forces, reset_forces};
use crate::system::System;

pub trait Integrator {
    fn name(&self) -> String;
    /// Advances every body by `dt`. `dt` has already been validated.
    fn advance(&self, bodies: &mut [Body], dt: f64);
}

/// Velocity Verlet with the position drift first, using the acceleration
/// stored from the previous step (zero before the first step).
pub struct VelocityVerlet;
impl Integrator for VelocityVerlet {
    fn name(&self) -> String {
        "VelocityVerlet".to_string()
    }

    fn advance(&self, bodies: &mut [Body], dt: f64) {
        let dt2_half = 0.5 * dt * dt;
        for body in bodies.iter_mut() {
            body.position += body.velocity * dt + body.acceleration * dt2_half;
        }

        reset_forces(bodies);
        accumulate_forces(bodies);

        for body in bodies.iter_mut() {
            let old_acceleration = body.acceleration;
            body.acceleration = body.force / body.mass;
            body.velocity += 0.5 * (old_acceleration + body.acceleration) * dt;
        }
    }
}

/// First-order kick-then-drift scheme: `v += a dt; x += v dt`.
pub struct SemiImplicitEuler;
impl Integrator for SemiImplicitEuler {
    fn name(&self) -> String {
        "SemiImplicitEuler".to_string()
    }

    fn advance(&self, bodies: &mut [Body], dt: f64) {
        reset_forces(bodies);
        accumulate_forces(bodies);

        for body in bodies.iter_mut() {
            body.acceleration = body.force / body.mass;
            body.velocity += body.acceleration * dt;
            body.position += body.velocity * dt;
        }
    }
}

/// Advances `system` by one velocity Verlet step of `dt` seconds.
///
/// The clock is left alone; callers account for elapsed time with
/// [`System::advance_clock`].
pub fn step(system: &mut System, dt: f64) -> SimResult<()> {
    step_with(&VelocityVerlet, system, dt)
}

pub fn step_with(integrator: &dyn Integrator, system: &mut System, dt: f64) -> SimResult<()> {
    if dt == 0.0 || !dt.is_finite() {
        return Err(SimError::InvalidStep(dt));
    }
    integrator.advance(system.bodies_mut(), dt);
    Ok(())
}
