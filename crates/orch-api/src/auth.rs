/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

//! Keycloak password-grant login.

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::OrchApiError;

pub const CLIENT_ID: &str = "system-client";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: u64,
}

pub fn token_url(keycloak_endpoint: &str) -> String {
    format!(
        "{}/realms/master/protocol/openid-connect/token",
        keycloak_endpoint.trim_end_matches('/')
    )
}

pub async fn login(
    client: &HttpClient,
    keycloak_endpoint: &str,
    username: &str,
    password: &str,
) -> Result<Token, OrchApiError> {
    let url = token_url(keycloak_endpoint);
    let form = [
        ("grant_type", "password"),
        ("client_id", CLIENT_ID),
        ("username", username),
        ("password", password),
        ("scope", "openid"),
    ];

    debug!("TX POST {url} (password grant for {username})");
    let response = client
        .post(&url)
        .form(&form)
        .send()
        .await
        .map_err(|e| OrchApiError::NetworkError {
            url: url.clone(),
            source: e,
        })?;
    let status_code = response.status();
    let body = response.text().await.map_err(|e| OrchApiError::NetworkError {
        url: url.clone(),
        source: e,
    })?;
    debug!("RX {status_code}");

    if !status_code.is_success() {
        return Err(OrchApiError::HttpErrorCode {
            url,
            status_code,
            response_body: body,
        });
    }
    serde_json::from_str(&body).map_err(|source| OrchApiError::JsonDeserializeError {
        url,
        body,
        source,
    })
}
