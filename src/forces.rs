//! Pairwise Newtonian gravity.
//!
//! Pairs are visited as `(i, j)` with `i < j` in collection order, and that
//! order is part of the reproducibility contract: floating-point summation is
//! not associative, so visiting pairs differently changes trajectories in the
//! last bits.

use crate::body::Body;
use itertools::Itertools;
use nalgebra::Vector3;

pub const G: f64 = 6.67e-11;

/// Force exerted on `a` by `b`, or `None` when the two positions coincide.
pub fn pair_force(a: &Body, b: &Body) -> Option<Vector3<f64>> {
    let dist = b.position - a.position;
    let r = dist.norm();
    if r == 0.0 {
        return None;
    }
    let magnitude = G * (a.mass * b.mass) / (r * r);
    Some(dist * (magnitude / r))
}

pub fn reset_forces(bodies: &mut [Body]) {
    for body in bodies.iter_mut() {
        body.force = Vector3::zeros();
    }
}

/// Adds every pair's mutual attraction into both force accumulators.
pub fn accumulate_forces(bodies: &mut [Body]) {
    for (i, j) in (0..bodies.len()).tuple_combinations() {
        let (head, tail) = bodies.split_at_mut(j);
        let first = &mut head[i];
        let second = &mut tail[0];
        match pair_force(first, second) {
            Some(force) => {
                first.force += force;
                second.force -= force;
            }
            None => log::trace!(
                "skipping coincident pair `{}` / `{}`",
                first.label,
                second.label
            ),
        }
    }
}

pub fn potential_energy(bodies: &[Body]) -> f64 {
    let mut potential_energy = 0.0;
    for (a, b) in bodies.iter().tuple_combinations() {
        let r = (a.position - b.position).norm();
        if r > 0.0 {
            potential_energy -= G * a.mass * b.mass / r;
        }
    }
    potential_energy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{BodyDescriptor, BodyKind};

    fn body(label: &str, mass: f64, position: [f64; 3]) -> Body {
        Body::from_descriptor(&BodyDescriptor::new(
            label,
            BodyKind::Generic,
            mass,
            position,
            [0.0; 3],
        ))
        .unwrap()
    }

    #[test]
    fn forces_are_equal_and_opposite() {
        let mut bodies = vec![
            body("a", 2.0e20, [0.0, 0.0, 0.0]),
            body("b", 3.0e22, [1.0e6, -2.0e6, 5.0e5]),
            body("c", 7.0e18, [-4.0e6, 1.0e6, 0.0]),
        ];
        let ab = pair_force(&bodies[0], &bodies[1]).unwrap();
        let ba = pair_force(&bodies[1], &bodies[0]).unwrap();
        assert_eq!(ab, -ba);

        accumulate_forces(&mut bodies);
        let net: Vector3<f64> = bodies.iter().map(|b| b.force).sum();
        let scale = bodies.iter().map(|b| b.force.norm()).fold(0.0, f64::max);
        assert!(net.norm() <= scale * 1e-12, "net force {:?}", net);
    }

    #[test]
    fn force_points_toward_other_body_with_inverse_square_magnitude() {
        let a = body("a", 1.0e10, [0.0; 3]);
        let near = body("near", 1.0e10, [10.0, 0.0, 0.0]);
        let far = body("far", 1.0e10, [20.0, 0.0, 0.0]);

        let f_near = pair_force(&a, &near).unwrap();
        let f_far = pair_force(&a, &far).unwrap();
        assert!(f_near.x > 0.0);
        assert_eq!(f_near.y, 0.0);
        assert!((f_near.norm() / f_far.norm() - 4.0).abs() < 1e-12);
        assert!((f_near.x - G * 1.0e20 / 100.0).abs() < 1e-12 * f_near.x);
    }

    #[test]
    fn coincident_pair_contributes_nothing() {
        let mut bodies = vec![body("a", 1.0, [3.0; 3]), body("b", 1.0, [3.0; 3])];
        assert!(pair_force(&bodies[0], &bodies[1]).is_none());
        accumulate_forces(&mut bodies);
        assert_eq!(bodies[0].force, Vector3::zeros());
        assert_eq!(bodies[1].force, Vector3::zeros());
        assert_eq!(potential_energy(&bodies), 0.0);
    }

    #[test]
    fn reset_clears_accumulators() {
        let mut bodies = vec![body("a", 1.0e20, [0.0; 3]), body("b", 1.0e20, [1.0, 0.0, 0.0])];
        accumulate_forces(&mut bodies);
        assert!(bodies[0].force.norm() > 0.0);
        reset_forces(&mut bodies);
        assert!(bodies.iter().all(|b| b.force == Vector3::zeros()));
    }
}
