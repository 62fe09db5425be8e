//! Simple policy run specs

use crate::prelude::*;

#[test]
fn everyone_crosses_and_bridge_ends_empty() {
    let temp = Project::empty();
    temp.file("tunnel.toml", QUICK_TRAFFIC);

    let run = temp
        .tunnel()
        .args(&["run", "-c", "tunnel.toml", "--policy", "simple", "-o", "json"])
        .passes();
    let summary = run.json();

    assert_eq!(summary["state"]["policy"]["kind"], "simple");
    assert_eq!(summary["state"]["token"], "empty");
    assert_eq!(summary["state"]["departed"]["north_car"], 3);
    assert_eq!(summary["state"]["departed"]["south_car"], 3);
    assert_eq!(summary["state"]["departed"]["pedestrian"], 2);
    for group in ["north_car", "south_car", "pedestrian"] {
        assert_eq!(summary["state"]["occupants"][group], 0);
        assert_eq!(summary["state"]["waiting"][group], 0);
    }
}

#[test]
fn single_direction_only() {
    let temp = Project::empty();
    temp.file("tunnel.toml", QUICK_TRAFFIC);

    temp.tunnel()
        .args(&[
            "run",
            "-c",
            "tunnel.toml",
            "--policy",
            "simple",
            "--south",
            "0",
            "--pedestrians",
            "0",
        ])
        .passes()
        .stdout_has("Crossed: 3 north cars, 0 south cars, 0 pedestrians")
        .stdout_has("Monitor: 6");
}
