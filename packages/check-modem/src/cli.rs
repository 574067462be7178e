// Copyright (C) 2023 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use crate::diagnostics::Scope;
use check_plugin::cli::CommonArgs;
use check_plugin::constants;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    about = "Check diagnostic data on Thomson Cable Modem DCM476.",
    version = constants::VERSION
)]
pub struct Cli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Return only forward path diagnostic data
    #[arg(short, long)]
    pub forwardpath: bool,

    /// Return only return path diagnostic data
    #[arg(short, long)]
    pub returnpath: bool,

    /// Return all path diagnostic data (default)
    #[arg(short, long)]
    pub all: bool,
}

impl Cli {
    pub fn scope(&self) -> Scope {
        Scope::from_flags(self.forwardpath, self.returnpath, self.all)
    }
}
