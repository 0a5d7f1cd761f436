use anyhow::Context;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use orrery::record::{RunSummary, Trajectory};
use orrery::{snapshot, step_with, Integrator, Scenario, SemiImplicitEuler, VelocityVerlet};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IntegratorChoice {
    Verlet,
    Euler,
}

#[derive(Parser, Debug)]
#[command(name = "orrery", about = "Newtonian N-body solar system simulation")]
struct Args {
    /// Scenario JSON file; the built-in Sun/Earth/Mars system when omitted
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Step size in seconds
    #[arg(long, allow_hyphen_values = true)]
    dt: Option<f64>,

    #[arg(long)]
    steps: Option<usize>,

    /// Meters per display unit for emitted frames
    #[arg(long)]
    scale: Option<f64>,

    /// Only simulate these labels (comma separated)
    #[arg(long, value_delimiter = ',')]
    include: Option<Vec<String>>,

    #[arg(long, value_enum, default_value_t = IntegratorChoice::Verlet)]
    integrator: IntegratorChoice,

    /// Print one JSON frame per step to stdout
    #[arg(long)]
    frames: bool,

    #[arg(long)]
    positions_csv: Option<PathBuf>,

    /// Append a run summary row to this CSV file
    #[arg(long)]
    summary_csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut scenario = match &args.scenario {
        Some(path) => Scenario::from_path(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => Scenario::solar_system(),
    };
    if let Some(dt) = args.dt {
        scenario.parameters.dt = dt;
    }
    if let Some(steps) = args.steps {
        scenario.parameters.steps = steps;
    }
    if let Some(scale) = args.scale {
        scenario.parameters.scale = scale;
    }
    if args.include.is_some() {
        scenario.parameters.include = args.include.clone();
    }
    let params = scenario.parameters.clone();

    let mut system = scenario.build_system().context("building system")?;
    let integrator: Box<dyn Integrator> = match args.integrator {
        IntegratorChoice::Verlet => Box::new(VelocityVerlet),
        IntegratorChoice::Euler => Box::new(SemiImplicitEuler),
    };
    log::info!(
        "simulating {} bodies with {} for {} steps of {} s",
        system.len(),
        integrator.name(),
        params.steps,
        params.dt
    );

    let initial_momentum = system.total_momentum();
    let mut trajectory = Trajectory::new(&system);
    trajectory.record(&system);

    let start = Instant::now();
    let pb = ProgressBar::new(params.steps as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message(format!("Solving with {}", integrator.name()));
    for _ in 0..params.steps {
        step_with(integrator.as_ref(), &mut system, params.dt)?;
        system.advance_clock(params.dt);
        trajectory.record(&system);
        if args.frames {
            let line = serde_json::to_string(&snapshot(&system, params.scale)?)?;
            pb.suspend(|| println!("{}", line));
        }
        pb.inc(1);
    }
    pb.finish_with_message("Simulation complete");
    let execution_duration = start.elapsed().as_secs_f64();

    for body in system.bodies() {
        log::info!("{}", body);
    }
    log::info!(
        "sim time {:.0} s, energy drift {:.3e}, momentum drift {:.3e}",
        system.sim_time(),
        trajectory.energy_drift(),
        (system.total_momentum() - initial_momentum).norm()
    );

    if let Some(path) = &args.positions_csv {
        trajectory
            .export_positions(path)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    if let Some(path) = &args.summary_csv {
        RunSummary::new(
            &system,
            &trajectory,
            &integrator.name(),
            params.steps,
            params.dt,
            initial_momentum,
            execution_duration,
        )
        .append_to(path)
        .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}
