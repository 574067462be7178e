// Copyright (C) 2023 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use check_plugin::cli::CommonArgs;
use check_plugin::constants;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Check Kodi playback status.", version = constants::VERSION)]
pub struct Cli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Username for HTTP Basic Auth
    #[arg(long)]
    pub auth_user: Option<String>,

    /// Password for HTTP Basic Auth
    #[arg(long, requires = "auth_user")]
    pub auth_pw: Option<String>,
}
