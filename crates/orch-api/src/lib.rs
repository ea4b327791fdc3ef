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

//! Typed REST clients for the edge orchestrator services.
//!
//! Every service client wraps a [`RestClient`], which owns the shared
//! `reqwest` connection pool and the [`Endpoint`] (base URL, project and
//! bearer token) that requests are sent to.

pub mod auth;
pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod deployment;
pub mod infra;
pub mod rps;
pub mod tenancy;

use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue, USER_AGENT};
use reqwest::{Certificate, Client as HttpClient, ClientBuilder, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_BODY_SIZE: u64 = 20 * 1024 * 1024;
const LOGGED_BODY_LEN: usize = 1500;
const CLIENT_USER_AGENT: &str = concat!("orch-cli/", env!("CARGO_PKG_VERSION"));

#[derive(thiserror::Error, Debug)]
pub enum OrchApiError {
    #[error("Network error talking to orchestrator at {url}. {source}")]
    NetworkError { url: String, source: reqwest::Error },

    #[error("HTTP {status_code} at {url}: {response_body}")]
    HttpErrorCode {
        url: String,
        status_code: StatusCode,
        response_body: String,
    },

    #[error("Response from {url} is {len} bytes, over the 20MB limit")]
    ResponseTooLarge { url: String, len: u64 },

    #[error("Could not deserialize response from {url}. Body: {body}. {source}")]
    JsonDeserializeError {
        url: String,
        body: String,
        source: serde_json::Error,
    },

    #[error("Could not serialize request body for {url}. Obj: {object_debug}. {source}")]
    JsonSerializeError {
        url: String,
        object_debug: String,
        source: serde_json::Error,
    },

    #[error("Remote returned empty body at {url}")]
    NoContent { url: String },

    #[error("No project set. Pass --project or set ORCH_PROJECT")]
    MissingProject,

    #[error("{kind} {reference} not found")]
    NotFound { kind: &'static str, reference: String },

    #[error("Could not read CA certificate {}: {source}", path.display())]
    CaCertificate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Reqwest error: '{0}'")]
    ReqwestError(#[from] reqwest::Error),
}

impl OrchApiError {
    pub fn is_not_found(&self) -> bool {
        match self {
            OrchApiError::NotFound { .. } => true,
            OrchApiError::HttpErrorCode { status_code, .. } => {
                *status_code == StatusCode::NOT_FOUND
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoint {
    pub base_url: String,
    pub project: Option<String>,
    pub token: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RestClientBuilder {
    pub timeout: Duration,
    pub accept_invalid_certs: bool,
    pub ca_cert_path: Option<PathBuf>,
}

impl Default for RestClientBuilder {
    fn default() -> Self {
        RestClientBuilder {
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
            ca_cert_path: None,
        }
    }
}

impl RestClientBuilder {
    /// Builds the HTTP client shared by every service client.
    pub fn build_http(&self) -> Result<HttpClient, OrchApiError> {
        let mut builder = ClientBuilder::new()
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .timeout(self.timeout);

        if let Some(path) = self.ca_cert_path.as_ref() {
            let pem = std::fs::read(path).map_err(|source| OrchApiError::CaCertificate {
                path: path.clone(),
                source,
            })?;
            builder = builder.add_root_certificate(Certificate::from_pem(&pem)?);
        }

        Ok(builder.build()?)
    }

    pub fn build(&self, endpoint: Endpoint) -> Result<RestClient, OrchApiError> {
        Ok(RestClient::new(self.build_http()?, endpoint))
    }
}

#[derive(Debug, Clone)]
pub struct RestClient {
    endpoint: Endpoint,
    client: HttpClient,
}

impl RestClient {
    pub fn new(client: HttpClient, endpoint: Endpoint) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Prefixes `api` with the project scope, `v1/projects/{project}/{api}`.
    pub fn project_path(&self, api: &str) -> Result<String, OrchApiError> {
        match self.endpoint.project.as_deref() {
            Some(project) if !project.is_empty() => Ok(format!(
                "v1/projects/{project}/{}",
                api.trim_start_matches('/')
            )),
            _ => Err(OrchApiError::MissingProject),
        }
    }

    pub async fn get<T>(&self, api: &str) -> Result<T, OrchApiError>
    where
        T: DeserializeOwned + ::std::fmt::Debug,
    {
        let (url, body) = self.req::<()>(Method::GET, api, &[], None).await?;
        decode(url, body)
    }

    pub async fn get_query<T>(&self, api: &str, query: &[(&str, String)]) -> Result<T, OrchApiError>
    where
        T: DeserializeOwned + ::std::fmt::Debug,
    {
        let (url, body) = self.req::<()>(Method::GET, api, query, None).await?;
        decode(url, body)
    }

    pub async fn post<T, B>(&self, api: &str, data: &B) -> Result<T, OrchApiError>
    where
        T: DeserializeOwned + ::std::fmt::Debug,
        B: Serialize + ::std::fmt::Debug,
    {
        let (url, body) = self.req(Method::POST, api, &[], Some(data)).await?;
        decode(url, body)
    }

    pub async fn put<T, B>(&self, api: &str, data: &B) -> Result<T, OrchApiError>
    where
        T: DeserializeOwned + ::std::fmt::Debug,
        B: Serialize + ::std::fmt::Debug,
    {
        let (url, body) = self.req(Method::PUT, api, &[], Some(data)).await?;
        decode(url, body)
    }

    pub async fn patch<T, B>(&self, api: &str, data: &B) -> Result<T, OrchApiError>
    where
        T: DeserializeOwned + ::std::fmt::Debug,
        B: Serialize + ::std::fmt::Debug,
    {
        let (url, body) = self.req(Method::PATCH, api, &[], Some(data)).await?;
        decode(url, body)
    }

    pub async fn delete(&self, api: &str) -> Result<(), OrchApiError> {
        self.req::<()>(Method::DELETE, api, &[], None).await?;
        Ok(())
    }

    /// Sends a request whose response body, if any, is not needed.
    pub async fn send<B>(&self, method: Method, api: &str, data: &B) -> Result<(), OrchApiError>
    where
        B: Serialize + ::std::fmt::Debug,
    {
        self.req(method, api, &[], Some(data)).await?;
        Ok(())
    }

    fn url(&self, api: &str) -> String {
        format!(
            "{}/{}",
            self.endpoint.base_url.trim_end_matches('/'),
            api.trim_start_matches('/')
        )
    }

    async fn req<B>(
        &self,
        method: Method,
        api: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<(String, String), OrchApiError>
    where
        B: Serialize + ::std::fmt::Debug,
    {
        let url = self.url(api);

        let body_enc = match body {
            Some(b) => Some(serde_json::to_string(b).map_err(|e| {
                OrchApiError::JsonSerializeError {
                    url: url.clone(),
                    object_debug: format!("{b:?}"),
                    source: e,
                }
            })?),
            None => None,
        };

        let mut req_b = self.client.request(method.clone(), &url);
        req_b = req_b.header(ACCEPT, HeaderValue::from_static("application/json"));
        req_b = req_b.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        req_b = req_b.header(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        if let Some(token) = self.endpoint.token.as_ref() {
            req_b = req_b.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if !query.is_empty() {
            req_b = req_b.query(query);
        }
        if let Some(b) = body_enc {
            debug!("TX {method} {url} {}", truncate(&b, LOGGED_BODY_LEN));
            req_b = req_b.body(b);
        } else {
            debug!("TX {method} {url}");
        }

        let response = req_b.send().await.map_err(|e| OrchApiError::NetworkError {
            url: url.clone(),
            source: e,
        })?;
        let status_code = response.status();
        if let Some(len) = response.content_length()
            && len > MAX_BODY_SIZE
        {
            return Err(OrchApiError::ResponseTooLarge { url, len });
        }

        let response_buffer = response.bytes().await.map_err(|e| OrchApiError::NetworkError {
            url: url.clone(),
            source: e,
        })?;
        let response_body = String::from_utf8_lossy(&response_buffer).to_string();
        debug!("RX {status_code} {}", truncate(&response_body, LOGGED_BODY_LEN));

        if !status_code.is_success() {
            return Err(OrchApiError::HttpErrorCode {
                url,
                status_code,
                response_body,
            });
        }
        Ok((url, response_body))
    }
}

fn decode<T: DeserializeOwned>(url: String, body: String) -> Result<T, OrchApiError> {
    if body.trim().is_empty() {
        return Err(OrchApiError::NoContent { url });
    }
    serde_json::from_str(&body).map_err(|source| OrchApiError::JsonDeserializeError {
        url,
        body,
        source,
    })
}

fn truncate(s: &str, len: usize) -> &str {
    match s.char_indices().nth(len) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Builds an equality filter matching either of two fields, as taken by
/// the `filter` query parameter of the list endpoints.
pub fn or_filter(first: &str, second: &str, value: &str) -> String {
    let value = value.replace('"', "\\\"");
    format!("{first}=\"{value}\" OR {second}=\"{value}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(project: Option<&str>) -> RestClient {
        RestClient::new(
            HttpClient::new(),
            Endpoint {
                base_url: "https://api.orch.example/".to_string(),
                project: project.map(str::to_string),
                token: None,
            },
        )
    }

    #[test]
    fn test_project_path() {
        let client = client(Some("blue"));
        assert_eq!(
            client.project_path("/compute/hosts").unwrap(),
            "v1/projects/blue/compute/hosts"
        );
        assert_eq!(
            client.url(&client.project_path("compute/os").unwrap()),
            "https://api.orch.example/v1/projects/blue/compute/os"
        );
    }

    #[test]
    fn test_project_path_requires_project() {
        assert!(matches!(
            client(None).project_path("compute/hosts"),
            Err(OrchApiError::MissingProject)
        ));
        assert!(matches!(
            client(Some("")).project_path("compute/hosts"),
            Err(OrchApiError::MissingProject)
        ));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("ab", 3), "ab");
        assert_eq!(truncate("ééé", 2), "éé");
    }

    #[test]
    fn test_or_filter() {
        assert_eq!(
            or_filter("name", "resourceId", "site-a"),
            "name=\"site-a\" OR resourceId=\"site-a\""
        );
        assert_eq!(
            or_filter("name", "resourceId", "a\"b"),
            "name=\"a\\\"b\" OR resourceId=\"a\\\"b\""
        );
    }
}
