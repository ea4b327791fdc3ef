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

//! Application catalog: deployment packages.

use serde::{Deserialize, Serialize};

use crate::{OrchApiError, RestClient};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationReference {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentProfile {
    pub name: String,
    pub display_name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentPackage {
    pub name: String,
    pub version: String,
    pub display_name: String,
    pub description: String,
    pub kind: String,
    pub is_deployed: bool,
    pub default_profile_name: String,
    pub application_references: Vec<ApplicationReference>,
    pub profiles: Vec<DeploymentProfile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentPackageList {
    pub deployment_packages: Vec<DeploymentPackage>,
    pub total_elements: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DeploymentPackageResponse {
    deployment_package: DeploymentPackage,
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    rest: RestClient,
}

impl CatalogClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    pub async fn list_deployment_packages(&self) -> Result<Vec<DeploymentPackage>, OrchApiError> {
        let path = self.rest.project_path("catalog/deployment_packages")?;
        let list: DeploymentPackageList = self.rest.get(&path).await?;
        Ok(list.deployment_packages)
    }

    pub async fn get_deployment_package(
        &self,
        name: &str,
        version: &str,
    ) -> Result<DeploymentPackage, OrchApiError> {
        let path = self.rest.project_path(&format!(
            "catalog/deployment_packages/{name}/versions/{version}"
        ))?;
        let response: DeploymentPackageResponse = self.rest.get(&path).await?;
        Ok(response.deployment_package)
    }
}
