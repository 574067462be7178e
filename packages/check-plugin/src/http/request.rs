// Copyright (C) 2023 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use reqwest::{Client, RequestBuilder, Response, Result as ReqwestResult};

#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub auth_user: Option<String>,
    pub auth_pw: Option<String>,
}

impl RequestConfig {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

pub async fn send(client: &Client, cfg: RequestConfig) -> ReqwestResult<Response> {
    log::debug!("GET {} {:?}", cfg.url, cfg.query);
    prepare_request(client, cfg).send().await
}

fn prepare_request(client: &Client, cfg: RequestConfig) -> RequestBuilder {
    let req = client.get(cfg.url);
    let req = if cfg.query.is_empty() {
        req
    } else {
        req.query(&cfg.query)
    };

    if let Some(user) = cfg.auth_user {
        req.basic_auth(user, cfg.auth_pw)
    } else {
        req
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_form_encoded() {
        let mut cfg = RequestConfig::get("http://kodi:8080/jsonrpc");
        cfg.query = vec![("request".to_string(), r#"{"id":1}"#.to_string())];
        let request = prepare_request(&Client::new(), cfg).build().unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://kodi:8080/jsonrpc?request=%7B%22id%22%3A1%7D"
        );
    }

    #[test]
    fn test_basic_auth() {
        let mut cfg = RequestConfig::get("http://kodi/jsonrpc");
        cfg.auth_user = Some("kodi".to_string());
        cfg.auth_pw = Some("secret".to_string());
        let request = prepare_request(&Client::new(), cfg).build().unwrap();
        assert_eq!(
            request.headers()["authorization"],
            "Basic a29kaTpzZWNyZXQ="
        );
    }
}
