//! CLI help and version specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("one-lane bridge")
        .stdout_has("run")
        .stdout_has("config");
}

#[test]
fn version_names_binary() {
    cli().args(&["--version"]).passes().stdout_has("tunnel");
}

#[test]
fn run_help_lists_overrides() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--policy")
        .stdout_has("--car-limit")
        .stdout_has("--ped-limit")
        .stdout_has("--pedestrians")
        .stdout_has("--output");
}
