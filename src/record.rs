use crate::error::SimResult;
use crate::system::System;
use chrono::Utc;
use nalgebra::Vector3;
use serde::Serialize;
use std::path::Path;

/// History a driver chooses to keep while stepping a system.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    pub labels: Vec<String>,
    pub times: Vec<f64>,
    pub positions: Vec<Vec<Vector3<f64>>>, // positions[body][sample]
    pub total_energy: Vec<f64>,
}

impl Trajectory {
    pub fn new(system: &System) -> Self {
        let labels: Vec<String> = system.labels().into_iter().map(String::from).collect();
        Trajectory {
            positions: vec![Vec::new(); labels.len()],
            labels,
            times: Vec::new(),
            total_energy: Vec::new(),
        }
    }

    pub fn record(&mut self, system: &System) {
        for (i, body) in system.bodies().iter().enumerate() {
            if i == self.positions.len() {
                // body appended after recording started
                self.labels.push(body.label.clone());
                self.positions.push(Vec::new());
            }
            self.positions[i].push(body.position);
        }
        self.times.push(system.sim_time());
        self.total_energy.push(system.calculate_total_energy());
    }

    pub fn num_samples(&self) -> usize {
        self.times.len()
    }

    /// Largest relative departure of total energy from the first sample.
    pub fn energy_drift(&self) -> f64 {
        let Some(&initial) = self.total_energy.first() else {
            return 0.0;
        };
        if initial == 0.0 {
            return 0.0;
        }
        self.total_energy
            .iter()
            .map(|e| ((e - initial) / initial).abs())
            .fold(0.0, f64::max)
    }

    /// True when every body has a position for every recorded sample, which
    /// stops holding once a body is appended mid-recording.
    pub fn is_complete(&self) -> bool {
        self.positions.iter().all(|p| p.len() == self.num_samples())
    }

    /// RMS position difference per sample against another trajectory of the
    /// same bodies. Returns `None` when the shapes differ or either trajectory
    /// is missing samples for some body.
    pub fn deviance(&self, other: &Trajectory) -> Option<Vec<f64>> {
        if self.labels != other.labels
            || self.num_samples() != other.num_samples()
            || !self.is_complete()
            || !other.is_complete()
        {
            return None;
        }
        let num_bodies = self.positions.len();
        if num_bodies == 0 {
            return Some(vec![0.0; self.num_samples()]);
        }
        Some(
            (0..self.num_samples())
                .map(|sample| {
                    let sum_sq_diff: f64 = self
                        .positions
                        .iter()
                        .zip(&other.positions)
                        .map(|(a, b)| (a[sample] - b[sample]).norm_squared())
                        .sum();
                    (sum_sq_diff / num_bodies as f64).sqrt()
                })
                .collect(),
        )
    }

    pub fn export_positions<P: AsRef<Path>>(&self, path: P) -> SimResult<()> {
        let mut wtr = csv::Writer::from_path(path.as_ref())?;
        wtr.write_record(["time", "label", "x", "y", "z"])?;
        for (sample, time) in self.times.iter().enumerate() {
            for (label, positions) in self.labels.iter().zip(&self.positions) {
                let Some(pos) = positions.get(sample) else {
                    continue;
                };
                wtr.write_record(&[
                    time.to_string(),
                    label.clone(),
                    pos.x.to_string(),
                    pos.y.to_string(),
                    pos.z.to_string(),
                ])?;
            }
        }
        wtr.flush()?;
        log::info!("wrote {} samples to {}", self.num_samples(), path.as_ref().display());
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub date: String,
    pub integrator: String,
    pub bodies: String,
    pub n_steps: usize,
    pub step_size: f64,
    pub sim_time: f64,
    pub energy_drift: f64,
    pub momentum_drift: f64,
    pub execution_duration: f64,
}

impl RunSummary {
    pub fn new(
        system: &System,
        trajectory: &Trajectory,
        integrator: &str,
        n_steps: usize,
        step_size: f64,
        initial_momentum: Vector3<f64>,
        execution_duration: f64,
    ) -> Self {
        RunSummary {
            date: Utc::now().to_rfc3339(),
            integrator: integrator.to_string(),
            bodies: system.labels().join(";"),
            n_steps,
            step_size,
            sim_time: system.sim_time(),
            energy_drift: trajectory.energy_drift(),
            momentum_drift: (system.total_momentum() - initial_momentum).norm(),
            execution_duration,
        }
    }

    /// Appends one row, writing the header only when the file is new.
    pub fn append_to<P: AsRef<Path>>(&self, path: P) -> SimResult<()> {
        let file_exists = path.as_ref().exists();
        let file = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(path.as_ref())?;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(!file_exists)
            .from_writer(file);

        wtr.serialize(self)?;
        wtr.flush()?;
        Ok(())
    }
}
