use orrery::record::{RunSummary, Trajectory};
use orrery::{step, Scenario, SimError};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const SCENARIO: &str = r#"{
  "parameters": { "dt": 3600.0, "steps": 24, "include": ["Sun", "Earth"] },
  "bodies": [
    { "label": "Sun", "kind": "star", "mass": 1.989e30,
      "position": [0, 0, 0], "velocity": [0, 0, 0] },
    { "label": "Earth", "kind": "planet", "mass": 5.972e24, "size": 5, "color": "blue",
      "position": [1.496e11, 0, 0], "velocity": [0, 29780, 0] },
    { "label": "Mars", "kind": "planet", "mass": 6.39e23, "color": "red",
      "position": [2.279e11, 0, 0], "velocity": [0, 24070, 0] }
  ]
}"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_scenario_from_disk() {
    let file = write_temp(SCENARIO);
    let scenario = Scenario::from_path(file.path()).unwrap();

    assert_eq!(scenario.parameters.dt, 3600.0);
    assert_eq!(scenario.parameters.steps, 24);
    assert_eq!(scenario.bodies.len(), 3);

    let system = scenario.build_system().unwrap();
    assert_eq!(system.labels(), vec!["Sun", "Earth"]);
    assert_eq!(system.bodies()[1].size, 5.0);
}

#[test]
fn zero_mass_in_file_fails_to_build() {
    let file = write_temp(&SCENARIO.replace("6.39e23", "0"));
    let scenario = Scenario::from_path(file.path()).unwrap();
    let err = scenario.build_system().unwrap_err();
    assert!(err.is_construction_error());
}

#[test]
fn missing_vector_component_is_rejected() {
    let file = write_temp(&SCENARIO.replace("[0, 24070, 0]", "[0, 24070]"));
    assert!(matches!(Scenario::from_path(file.path()), Err(SimError::Json(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let result = Scenario::from_path(dir.path().join("absent.json"));
    assert!(matches!(result, Err(SimError::Io(_))));
}

#[test]
fn exports_positions_and_appends_summaries() {
    let dir = TempDir::new().unwrap();
    let scenario = Scenario::from_json(SCENARIO).unwrap();
    let mut system = scenario.build_system().unwrap();
    let initial_momentum = system.total_momentum();
    let dt = scenario.parameters.dt;

    let mut trajectory = Trajectory::new(&system);
    trajectory.record(&system);
    for _ in 0..scenario.parameters.steps {
        step(&mut system, dt).unwrap();
        system.advance_clock(dt);
        trajectory.record(&system);
    }

    let positions = dir.path().join("positions.csv");
    trajectory.export_positions(&positions).unwrap();
    let contents = std::fs::read_to_string(&positions).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines[0], "time,label,x,y,z");
    // header + 25 samples of 2 bodies
    assert_eq!(lines.len(), 1 + 25 * 2);
    assert!(lines[1].starts_with("0,Sun,"));

    let summary_path = dir.path().join("runs.csv");
    let summary = RunSummary::new(
        &system,
        &trajectory,
        "VelocityVerlet",
        scenario.parameters.steps,
        dt,
        initial_momentum,
        0.1,
    );
    assert_eq!(summary.n_steps, 24);
    assert_eq!(trajectory.num_samples(), 25);
    assert_eq!(summary.sim_time, 24.0 * 3600.0);
    summary.append_to(&summary_path).unwrap();
    summary.append_to(&summary_path).unwrap();

    let contents = std::fs::read_to_string(&summary_path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("date,integrator,bodies,"));
    assert!(lines[1].contains("VelocityVerlet"));
}
