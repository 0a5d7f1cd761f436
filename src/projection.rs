// src/projection.rs

use crate::body::BodyKind;
use crate::error::{SimError, SimResult};
use crate::system::System;
use serde::{Deserialize, Serialize};

/// Meters per display unit.
pub const DEFAULT_SCALE: f64 = 6.5e8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedBody {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub size: f64,
    pub color: String,
    pub label: String,
    pub kind: BodyKind,
}

/// A timestamped projection, the unit a streaming adapter sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub timestamp: f64,
    pub bodies: Vec<ProjectedBody>,
}

fn check_scale(scale: f64) -> SimResult<()> {
    if scale > 0.0 && scale.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidScale(scale))
    }
}

/// Scaled, render-ready view of every body, in collection order.
pub fn project(system: &System, scale: f64) -> SimResult<Vec<ProjectedBody>> {
    check_scale(scale)?;
    Ok(system
        .bodies()
        .iter()
        .map(|body| {
            let p = body.position / scale;
            ProjectedBody {
                x: p.x,
                y: p.y,
                z: p.z,
                size: body.size,
                color: body.color.clone(),
                label: body.label.clone(),
                kind: body.kind,
            }
        })
        .collect())
}

pub fn snapshot(system: &System, scale: f64) -> SimResult<Frame> {
    Ok(Frame {
        timestamp: system.sim_time(),
        bodies: project(system, scale)?,
    })
}
