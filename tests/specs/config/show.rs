//! Config command specs

use crate::prelude::*;

#[test]
fn default_config_is_fair_with_standard_limits() {
    cli()
        .args(&["config"])
        .passes()
        .stdout_has("policy = \"fair\"")
        .stdout_has("car_limit = 10")
        .stdout_has("ped_limit = 3");
}

#[test]
fn printed_defaults_load_back() {
    let temp = Project::empty();
    let defaults = temp.tunnel().args(&["config"]).passes().stdout();
    temp.file("tunnel.toml", &defaults);

    temp.tunnel()
        .args(&["config", "tunnel.toml"])
        .passes()
        .stdout_eq(&defaults);
}

#[test]
fn transit_list_required_for_present_group() {
    let temp = Project::empty();
    temp.file("tunnel.toml", "[traffic]\npedestrian_transit = []\n");

    temp.tunnel()
        .args(&["config", "tunnel.toml"])
        .fails()
        .stderr_has("pedestrian_transit");
}
