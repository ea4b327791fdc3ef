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

//! Tenancy: projects. These paths are not project-scoped.

use serde::{Deserialize, Serialize};

use crate::{OrchApiError, RestClient};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectSpec {
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectStatusDetail {
    pub status_indicator: String,
    pub message: String,
    #[serde(rename = "uID")]
    pub uid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectStatus {
    pub project_status: ProjectStatusDetail,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: String,
    pub spec: ProjectSpec,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone)]
pub struct TenancyClient {
    rest: RestClient,
}

impl TenancyClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, OrchApiError> {
        self.rest.get("v1/projects").await
    }

    pub async fn get_project(&self, name: &str) -> Result<Project, OrchApiError> {
        self.rest.get(&format!("v1/projects/{name}")).await
    }

    pub async fn create_project(&self, name: &str, description: &str) -> Result<(), OrchApiError> {
        let spec = ProjectSpec {
            description: description.to_string(),
        };
        self.rest
            .send(reqwest::Method::PUT, &format!("v1/projects/{name}"), &spec)
            .await
    }

    pub async fn delete_project(&self, name: &str) -> Result<(), OrchApiError> {
        self.rest.delete(&format!("v1/projects/{name}")).await
    }
}
