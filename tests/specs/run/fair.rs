//! Fair policy run specs

use crate::prelude::*;

#[test]
fn default_run_uses_fair_policy() {
    let temp = Project::empty();
    temp.file("tunnel.toml", QUICK_TRAFFIC);

    temp.tunnel()
        .args(&["run", "-c", "tunnel.toml"])
        .passes()
        .stdout_has("Policy: fair (car_limit=10, ped_limit=3)")
        .stdout_has("Travelers: 8")
        .stdout_has("Crossed: 3 north cars, 3 south cars, 2 pedestrians")
        .stdout_has("Monitor: 16");
}

#[test]
fn tight_limits_drain_and_release_token() {
    let temp = Project::empty();
    temp.file("tunnel.toml", QUICK_TRAFFIC);

    let run = temp
        .tunnel()
        .args(&[
            "run",
            "-c",
            "tunnel.toml",
            "--car-limit",
            "1",
            "--ped-limit",
            "1",
            "--north",
            "8",
            "--south",
            "8",
            "-o",
            "json",
        ])
        .passes();
    let summary = run.json();

    assert_eq!(summary["travelers"], 18);
    assert_eq!(summary["state"]["token"], "empty");
    assert_eq!(summary["state"]["admitted"]["north_car"], 8);
    assert_eq!(summary["state"]["departed"]["south_car"], 8);
    assert_eq!(summary["state"]["operations"], 36);
}

#[test]
fn narration_goes_to_stderr() {
    let temp = Project::empty();
    temp.file("tunnel.toml", QUICK_TRAFFIC);

    temp.tunnel()
        .args(&["run", "-c", "tunnel.toml", "--north", "1", "--south", "0", "--pedestrians", "0"])
        .passes()
        .stderr_has("Car 1 heading north wants to enter. Monitor: 0")
        .stderr_has("Car 1 heading north out of the bridge. Monitor: 2");
}
