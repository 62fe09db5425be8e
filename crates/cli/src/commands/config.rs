// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tunnel config [FILE]` - Print the effective simulation config

use crate::traffic::SimulationConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ConfigArgs {
    /// Config file to check; defaults are printed when omitted
    pub file: Option<PathBuf>,
}

pub fn handle(args: ConfigArgs) -> Result<()> {
    let config = match &args.file {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    print!("{}", config.to_toml()?);
    Ok(())
}
