use std::path::PathBuf;

use approx::assert_relative_eq;

use solar_sim::config::Config;
use solar_sim::file::{read_file, write_file};
use solar_sim::model::Simulation;
use solar_sim::orrery::BodyKind;
use solar_sim::physics::{total_energy, NEWTON_G};

fn scenario(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(name)
}

#[test]
fn bundled_scenarios_load() {
    let solar_system = read_file(scenario("solar_system.txt")).unwrap();
    assert_eq!(solar_system.len(), 6);
    assert_eq!(solar_system.bodies()[0].kind(), BodyKind::Star);
    assert_eq!(solar_system.max_distance(), 778.57e9);

    let double_star = read_file(scenario("double_star.txt")).unwrap();
    let kinds: Vec<_> = double_star.bodies().iter().map(|b| b.kind()).collect();
    assert_eq!(kinds, [BodyKind::Star, BodyKind::Star, BodyKind::Planet]);

    let one_satellite = read_file(scenario("one_satellite.txt")).unwrap();
    assert_eq!(one_satellite.len(), 2);
}

#[test]
fn bundled_config_is_the_default() {
    let config = Config::from_file(scenario("config.yaml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn earth_keeps_its_energy_for_a_year() {
    let orrery = read_file(scenario("solar_system.txt")).unwrap();
    let mut simulation = Simulation::new(orrery, &Config::default());
    let initial = total_energy(NEWTON_G, simulation.orrery().bodies());

    let year = 365.25 * 86400.0;
    simulation.run_for(year, 3600.0).unwrap();
    assert_relative_eq!(simulation.model_time(), year);

    let earth = &simulation.orrery().bodies()[3].state;
    assert_relative_eq!(earth.position.norm(), 149.598e9, max_relative = 0.02);
    assert_relative_eq!(
        total_energy(NEWTON_G, simulation.orrery().bodies()),
        initial,
        max_relative = 1e-5
    );
}

#[test]
fn missing_file_is_an_error() {
    assert!(read_file(scenario("no_such_scenario.txt")).is_err());
}

#[test]
fn save_and_reload() {
    let orrery = read_file(scenario("double_star.txt")).unwrap();
    let mut simulation = Simulation::new(orrery, &Config::default());
    simulation.run_for(86400.0, 600.0).unwrap();

    let path = std::env::temp_dir().join(format!("solar-sim-save-{}.txt", std::process::id()));
    write_file(&path, simulation.orrery()).unwrap();
    let reloaded = read_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(&reloaded, simulation.orrery());
}
