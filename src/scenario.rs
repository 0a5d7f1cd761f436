//! Scenario configuration loaded from JSON.
//!
//! A scenario pairs the run parameters with the body-definition list:
//!
//! ```json
//! {
//!   "parameters": { "dt": 86400.0, "steps": 365, "scale": 6.5e8, "include": ["Sun", "Earth"] },
//!   "bodies": [
//!     { "label": "Sun", "kind": "star", "mass": 1.989e30,
//!       "position": [0, 0, 0], "velocity": [0, 0, 0] },
//!     { "label": "Earth", "kind": "planet", "mass": 5.972e24, "size": 5, "color": "blue",
//!       "position": [1.496e11, 0, 0], "velocity": [0, 29780, 0] }
//!   ]
//! }
//! ```
//!
//! Every parameter is optional. Body `size` and `color` fall back to the
//! defaults of the body's `kind`.

use crate::body::{BodyDescriptor, BodyKind};
use crate::error::SimResult;
use crate::projection::DEFAULT_SCALE;
use crate::system::System;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SECONDS_PER_DAY: f64 = 60.0 * 60.0 * 24.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub dt: f64,       // step size in seconds
    pub steps: usize,  // number of steps the driver runs
    pub scale: f64,    // meters per display unit
    pub include: Option<Vec<String>>, // labels to keep, `None` keeps all
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            dt: SECONDS_PER_DAY,
            steps: 365,
            scale: DEFAULT_SCALE,
            include: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub parameters: Parameters,
    pub bodies: Vec<BodyDescriptor>,
}

impl Scenario {
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> SimResult<Self> {
        let path = path.as_ref();
        let scenario = Self::from_json(&std::fs::read_to_string(path)?)?;
        log::info!(
            "loaded scenario {} with {} bodies",
            path.display(),
            scenario.bodies.len()
        );
        Ok(scenario)
    }

    /// Sun, Earth and Mars on the x axis with circular-orbit velocities.
    pub fn solar_system() -> Self {
        Scenario {
            parameters: Parameters::default(),
            bodies: vec![
                BodyDescriptor::new("Sun", BodyKind::Star, 1.989e30, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0])
                    .with_size(50.0),
                BodyDescriptor::new(
                    "Earth",
                    BodyKind::Planet,
                    5.972e24,
                    [1.496e11, 0.0, 0.0],
                    [0.0, 29780.0, 0.0],
                )
                .with_size(5.0)
                .with_color("blue"),
                BodyDescriptor::new(
                    "Mars",
                    BodyKind::Planet,
                    6.39e23,
                    [2.279e11, 0.0, 0.0],
                    [0.0, 24070.0, 0.0],
                )
                .with_size(4.0)
                .with_color("red"),
            ],
        }
    }

    pub fn build_system(&self) -> SimResult<System> {
        System::from_descriptors(&self.bodies, self.parameters.include.as_deref())
    }
}
