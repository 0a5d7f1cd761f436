// src/body.rs

use crate::error::{SimError, SimResult};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation variant of a body. Physics treats every kind the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Star,
    Planet,
    #[default]
    Generic,
}

impl BodyKind {
    pub fn default_color(self) -> &'static str {
        match self {
            BodyKind::Star => "orange",
            BodyKind::Planet => "blue",
            BodyKind::Generic => "black",
        }
    }

    pub fn default_size(self) -> f64 {
        match self {
            BodyKind::Star => 50.0,
            BodyKind::Planet => 15.0,
            BodyKind::Generic => 0.0,
        }
    }
}

/// One record of a body-definition list, as read from a scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyDescriptor {
    pub label: String,
    #[serde(default)]
    pub kind: BodyKind,
    pub mass: f64,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
}

impl BodyDescriptor {
    pub fn new(
        label: &str,
        kind: BodyKind,
        mass: f64,
        position: [f64; 3],
        velocity: [f64; 3],
    ) -> Self {
        BodyDescriptor {
            label: label.to_string(),
            kind,
            mass,
            size: None,
            color: None,
            position,
            velocity,
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    /// Checks mass and vector components without building anything.
    pub fn validate(&self) -> SimResult<()> {
        // `!(m > 0)` also rejects NaN
        if !(self.mass > 0.0) || !self.mass.is_finite() {
            return Err(SimError::NonPositiveMass {
                label: self.label.clone(),
                mass: self.mass,
            });
        }
        if !self.position.iter().all(|c| c.is_finite()) {
            return Err(SimError::NonFiniteComponent {
                label: self.label.clone(),
                field: "position",
            });
        }
        if !self.velocity.iter().all(|c| c.is_finite()) {
            return Err(SimError::NonFiniteComponent {
                label: self.label.clone(),
                field: "velocity",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub label: String,
    pub kind: BodyKind,
    pub mass: f64,
    pub size: f64,
    pub color: String,
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub acceleration: Vector3<f64>,
    /// Force accumulator, rebuilt on every step.
    pub force: Vector3<f64>,
}

impl Body {
    pub fn from_descriptor(desc: &BodyDescriptor) -> SimResult<Self> {
        desc.validate()?;
        Ok(Body {
            label: desc.label.clone(),
            kind: desc.kind,
            mass: desc.mass,
            size: desc.size.unwrap_or_else(|| desc.kind.default_size()),
            color: desc
                .color
                .clone()
                .unwrap_or_else(|| desc.kind.default_color().to_string()),
            position: Vector3::from(desc.position),
            velocity: Vector3::from(desc.velocity),
            acceleration: Vector3::zeros(),
            force: Vector3::zeros(),
        })
    }

    pub fn momentum(&self) -> Vector3<f64> {
        self.mass * self.velocity
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(m={:.2e}, p=[{:.2e}, {:.2e}, {:.2e}], v=[{:.2e}, {:.2e}, {:.2e}])",
            self.label,
            self.mass,
            self.position.x,
            self.position.y,
            self.position.z,
            self.velocity.x,
            self.velocity.y,
            self.velocity.z
        )
    }
}
