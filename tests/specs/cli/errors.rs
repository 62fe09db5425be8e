//! CLI error specs

use crate::prelude::*;

#[test]
fn no_subcommand_fails() {
    cli().fails().stderr_has("Usage");
}

#[test]
fn unknown_policy_fails() {
    cli()
        .args(&["run", "--policy", "round_robin"])
        .fails()
        .stderr_has("round_robin");
}

#[test]
fn negative_count_fails() {
    cli().args(&["run", "--north", "-3"]).fails();
}

#[test]
fn zero_pedestrian_limit_under_fair_fails() {
    let temp = Project::empty();
    temp.file("tunnel.toml", QUICK_TRAFFIC);

    temp.tunnel()
        .args(&["run", "-c", "tunnel.toml", "--ped-limit", "0"])
        .fails()
        .stderr_has("ped_limit");
}

#[test]
fn unreadable_config_fails() {
    let temp = Project::empty();
    temp.tunnel()
        .args(&["run", "--config", "missing.toml"])
        .fails()
        .stderr_has("missing.toml");
}
