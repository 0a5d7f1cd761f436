//! Newtonian N-body simulation of a star and its planets.
//!
//! Build a [`System`] from body descriptors, advance it with [`step`], and
//! read it back through [`project`]. The simulation clock belongs to the
//! caller: `step` never advances it.

pub mod body;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod projection;
pub mod record;
pub mod scenario;
pub mod system;

pub use body::{Body, BodyDescriptor, BodyKind};
pub use error::{SimError, SimResult};
pub use integrator::{step, step_with, Integrator, SemiImplicitEuler, VelocityVerlet};
pub use projection::{project, snapshot, Frame, ProjectedBody, DEFAULT_SCALE};
pub use scenario::{Parameters, Scenario};
pub use system::{create_system, System};
