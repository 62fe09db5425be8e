// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Traffic fast enough for a test run, merged under `monitor` settings.
pub const FAST_TRAFFIC: &str = r#"
[traffic]
north_cars = 4
south_cars = 4
pedestrians = 2
car_spacing = "2ms"
pedestrian_spacing = "5ms"
car_transit = ["3ms", "1ms"]
pedestrian_transit = ["6ms"]
seed = 11
"#;

/// Write a config file into a fresh temp dir. Keep the dir alive for as long
/// as the path is used.
pub fn write_config(body: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("tunnel.toml");
    std::fs::write(&path, body).expect("Failed to write config");
    (dir, path)
}

pub fn tunnel() -> Command {
    let mut cmd = Command::cargo_bin("tunnel").expect("tunnel binary not built");
    cmd.env_remove("RUST_LOG");
    cmd
}
