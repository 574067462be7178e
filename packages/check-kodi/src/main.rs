// Copyright (C) 2023 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use check_kodi::cli::Cli;
use check_kodi::{check_kodi, Config};
use check_plugin::http::ClientConfig;
use check_plugin::setup;
use clap::Parser;
use reqwest::header::HeaderValue;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    let host = args.common.require_host::<Cli>();
    let _logger = match setup::init_logging_from_args(&args.common, "check_kodi_playback") {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Logging disabled: {}", err);
            None
        }
    };

    let config = make_config(args, host);
    log::debug!("Querying {}", config.url());
    let output = check_kodi(&config).await;
    println!("{}", output);
    std::process::exit(output.state.into());
}

fn make_config(args: Cli, host: String) -> Config {
    Config {
        host,
        failure_state: args.common.failure_state(),
        client: ClientConfig::builder()
            .timeout(Duration::from_secs(args.common.timeout))
            // Kodi refuses JSON-RPC over GET with 415 unless told it is JSON.
            .content_type(HeaderValue::from_static("application/json"))
            .build(),
        auth_user: args.auth_user,
        auth_pw: args.auth_pw,
    }
}
