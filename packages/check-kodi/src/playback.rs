// Copyright (C) 2023 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use crate::rpc::{self, method, ActivePlayer, ItemResult, PlayerParams, PlayerProperties};
use crate::Config;
use anyhow::{Context, Result};
use check_plugin::checking::{Metric, State};
use check_plugin::http::{self, FetchError};
use check_plugin::output::Output;
use log::debug;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};

const IDLE_SUMMARY: &str = "Kodi is not playing any media.";

pub async fn check_kodi(cfg: &Config) -> Output {
    match collect(cfg).await {
        Ok(output) => output,
        Err(err) => Output::from_failure(&err, cfg.failure_state),
    }
}

async fn collect(cfg: &Config) -> Result<Output> {
    let client = http::build_client(&cfg.client).map_err(FetchError::from)?;

    let players: Vec<ActivePlayer> =
        query(&client, cfg, &rpc::Request::new(method::GET_ACTIVE_PLAYERS)).await?;
    // Only the first player is reported, Kodi rarely runs more than one.
    let Some(player) = players.first() else {
        return Ok(idle());
    };
    debug!(
        "Player {} is active ({})",
        player.playerid,
        player.kind.as_deref().unwrap_or("unknown type")
    );

    let item: ItemResult = query(
        &client,
        cfg,
        &rpc::Request::with_params(
            method::GET_ITEM,
            PlayerParams {
                playerid: player.playerid,
                properties: &["file"],
            },
        ),
    )
    .await?;
    let file = item
        .item
        .file
        .filter(|file| !file.is_empty())
        .context("Player.GetItem reported no file")?;

    let properties: PlayerProperties = query(
        &client,
        cfg,
        &rpc::Request::with_params(
            method::GET_PROPERTIES,
            PlayerParams {
                playerid: player.playerid,
                properties: &["percentage"],
            },
        ),
    )
    .await?;
    let percentage = properties
        .percentage
        .context("Player.GetProperties reported no percentage")?;

    Ok(playing(file_name(&file), percentage))
}

async fn query<P, T>(client: &Client, cfg: &Config, request: &rpc::Request<P>) -> Result<T>
where
    P: Serialize,
    T: DeserializeOwned,
{
    let payload = serde_json::to_string(request)?;
    debug!("Request: {}", payload);
    let text = http::fetch_text(client, cfg.request(payload)).await?;
    debug!("Response: {}", text);
    let response: rpc::Response<T> = serde_json::from_str(&text)
        .with_context(|| format!("Invalid response to {}", request.method))?;
    response.into_result(request.method)
}

pub fn idle() -> Output {
    Output::from_summary(
        State::Ok,
        IDLE_SUMMARY,
        &[
            Metric::new("playstatus", "0"),
            Metric::new("playbackpercent", "0"),
        ],
    )
}

pub fn playing(file: &str, percentage: f64) -> Output {
    Output::from_summary(
        State::Ok,
        &format!("Now playing: {}", file),
        &[
            Metric::new("playstatus", "1"),
            Metric::new("playbackpercent", format!("{:.2}%", percentage)),
        ],
    )
}

/// Everything after the last slash, the whole path if there is none.
pub fn file_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}
