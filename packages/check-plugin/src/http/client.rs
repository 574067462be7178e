// Copyright (C) 2023 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use crate::constants;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT},
    Client, Result as ReqwestResult,
};
use std::time::Duration;
use typed_builder::TypedBuilder;

#[derive(Debug, Clone, TypedBuilder)]
pub struct ClientConfig {
    #[builder(default = Duration::from_secs(constants::DEFAULT_TIMEOUT))]
    pub timeout: Duration,
    #[builder(default = Some(HeaderValue::from_static(constants::DEFAULT_USER_AGENT)))]
    pub user_agent: Option<HeaderValue>,
    #[builder(default, setter(strip_option))]
    pub content_type: Option<HeaderValue>,
    /// Embedded device web servers tend to ship self-signed certificates.
    #[builder(default = false)]
    pub accept_invalid_certs: bool,
}

pub fn build(cfg: &ClientConfig) -> ReqwestResult<Client> {
    let mut headers = HeaderMap::new();
    if let Some(ua) = &cfg.user_agent {
        headers.insert(USER_AGENT, ua.clone());
    }
    if let Some(content_type) = &cfg.content_type {
        headers.insert(CONTENT_TYPE, content_type.clone());
    }

    Client::builder()
        .timeout(cfg.timeout)
        .danger_accept_invalid_certs(cfg.accept_invalid_certs)
        .default_headers(headers)
        .build()
}
