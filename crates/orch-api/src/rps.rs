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

//! Remote provisioning server: AMT domain profiles.

use serde::{Deserialize, Serialize};

use crate::{OrchApiError, RestClient};

pub const CERT_FORMAT_STRING: &str = "string";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Domain {
    pub profile_name: String,
    pub domain_suffix: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub provisioning_cert: String,
    pub provisioning_cert_storage_format: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub provisioning_cert_password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub expiration_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tenant_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
}

#[derive(Debug, Clone)]
pub struct RpsClient {
    rest: RestClient,
}

impl RpsClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    pub async fn list_domains(&self) -> Result<Vec<Domain>, OrchApiError> {
        let path = self.rest.project_path("dm/amt/admin/domains")?;
        self.rest.get(&path).await
    }

    pub async fn get_domain(&self, name: &str) -> Result<Domain, OrchApiError> {
        let path = self
            .rest
            .project_path(&format!("dm/amt/admin/domains/{name}"))?;
        self.rest.get(&path).await
    }

    pub async fn create_domain(&self, domain: &Domain) -> Result<Domain, OrchApiError> {
        let path = self.rest.project_path("dm/amt/admin/domains")?;
        self.rest.post(&path, domain).await
    }

    pub async fn delete_domain(&self, name: &str) -> Result<(), OrchApiError> {
        let path = self
            .rest
            .project_path(&format!("dm/amt/admin/domains/{name}"))?;
        self.rest.delete(&path).await
    }
}
