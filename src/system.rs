use crate::body::{Body, BodyDescriptor};
use crate::error::{SimError, SimResult};
use crate::forces;
use nalgebra::Vector3;

/// The simulated bodies plus the simulation clock.
///
/// Bodies keep their insertion order for the whole run; that order is the
/// pairwise interaction order. The collection only grows.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    bodies: Vec<Body>,
    sim_time: f64,
}

impl System {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            sim_time: 0.0,
        }
    }

    /// Builds a system from descriptors, optionally keeping only the listed
    /// labels. Every descriptor is validated, filtered or not, and any failure
    /// aborts the whole construction.
    pub fn from_descriptors(
        descriptors: &[BodyDescriptor],
        include_labels: Option<&[String]>,
    ) -> SimResult<Self> {
        for desc in descriptors {
            desc.validate()?;
        }

        let mut system = Self::new();
        for desc in descriptors {
            let wanted = include_labels.map_or(true, |labels| labels.contains(&desc.label));
            if wanted {
                system.add_body(desc)?;
            }
        }

        log::debug!(
            "created system with {} of {} bodies",
            system.bodies.len(),
            descriptors.len()
        );
        Ok(system)
    }

    /// Appends one body. Labels must stay unique.
    pub fn add_body(&mut self, desc: &BodyDescriptor) -> SimResult<()> {
        if self.body(&desc.label).is_some() {
            return Err(SimError::DuplicateLabel(desc.label.clone()));
        }
        self.bodies.push(Body::from_descriptor(desc)?);
        Ok(())
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn body(&self, label: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.label == label)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn set_sim_time(&mut self, sim_time: f64) {
        self.sim_time = sim_time;
    }

    /// Adds `dt` to the clock. Stepping never touches the clock on its own.
    pub fn advance_clock(&mut self, dt: f64) -> f64 {
        self.sim_time += dt;
        self.sim_time
    }

    pub fn total_momentum(&self) -> Vector3<f64> {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn calculate_total_energy(&self) -> f64 {
        let kinetic_energy = self.bodies.iter().map(Body::kinetic_energy).sum::<f64>();
        kinetic_energy + forces::potential_energy(&self.bodies)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.bodies.iter().map(|b| b.label.as_str()).collect()
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}

/// Free-function form of [`System::from_descriptors`].
pub fn create_system(
    descriptors: &[BodyDescriptor],
    include_labels: Option<&[String]>,
) -> SimResult<System> {
    System::from_descriptors(descriptors, include_labels)
}
