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

//! Application deployments and clusters.

use std::collections::BTreeMap;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{OrchApiError, RestClient};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TargetCluster {
    pub app_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cluster_id: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentStatus {
    pub state: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Deployment {
    pub deploy_id: String,
    pub name: String,
    pub display_name: String,
    pub app_name: String,
    pub app_version: String,
    pub profile_name: String,
    pub deployment_type: String,
    pub create_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeploymentStatus>,
    pub target_clusters: Vec<TargetCluster>,
}

impl Deployment {
    pub fn state(&self) -> &str {
        self.status.as_ref().map_or("", |s| s.state.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentCreate {
    pub app_name: String,
    pub app_version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub profile_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    pub deployment_type: String,
    pub target_clusters: Vec<TargetCluster>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DeploymentList {
    deployments: Vec<Deployment>,
    total_elements: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DeploymentResponse {
    deployment: Deployment,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DeploymentCreated {
    deployment_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterNode {
    pub id: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterCreate {
    pub name: String,
    pub template: String,
    pub nodes: Vec<ClusterNode>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl ClusterCreate {
    /// A single node cluster running every role on the given host.
    pub fn single_node(
        name: &str,
        template_name: &str,
        template_version: &str,
        host_uuid: &str,
    ) -> Self {
        ClusterCreate {
            name: name.to_string(),
            template: format!("{template_name}-{template_version}"),
            nodes: vec![ClusterNode {
                id: host_uuid.to_string(),
                role: "all".to_string(),
            }],
            labels: BTreeMap::new(),
        }
    }
}

#[async_trait::async_trait]
pub trait ClusterApi: Send + Sync {
    async fn create_cluster(&self, req: &ClusterCreate) -> Result<(), OrchApiError>;
}

#[derive(Debug, Clone)]
pub struct DeploymentClient {
    rest: RestClient,
}

impl DeploymentClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    pub async fn list_deployments(&self) -> Result<Vec<Deployment>, OrchApiError> {
        let path = self.rest.project_path("appdeployment/deployments")?;
        let list: DeploymentList = self.rest.get(&path).await?;
        Ok(list.deployments)
    }

    pub async fn get_deployment(&self, id: &str) -> Result<Deployment, OrchApiError> {
        let path = self
            .rest
            .project_path(&format!("appdeployment/deployments/{id}"))?;
        let response: DeploymentResponse = self.rest.get(&path).await?;
        Ok(response.deployment)
    }

    /// Returns the id of the new deployment.
    pub async fn create_deployment(&self, req: &DeploymentCreate) -> Result<String, OrchApiError> {
        let path = self.rest.project_path("appdeployment/deployments")?;
        let created: DeploymentCreated = self.rest.post(&path, req).await?;
        Ok(created.deployment_id)
    }

    pub async fn delete_deployment(&self, id: &str) -> Result<(), OrchApiError> {
        let path = self
            .rest
            .project_path(&format!("appdeployment/deployments/{id}"))?;
        self.rest.delete(&path).await
    }
}

#[async_trait::async_trait]
impl ClusterApi for DeploymentClient {
    async fn create_cluster(&self, req: &ClusterCreate) -> Result<(), OrchApiError> {
        let path = self.rest.project_path("clusters")?;
        self.rest.send(Method::POST, &path, req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_node_cluster() {
        let req = ClusterCreate::single_node(
            "FW3R8X2",
            "baseline",
            "v2.0.2",
            "4c4c4544-0044-4210-8031-c2c04f305233",
        );
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"name":"FW3R8X2","template":"baseline-v2.0.2","nodes":[{"id":"4c4c4544-0044-4210-8031-c2c04f305233","role":"all"}]}"#
        );
    }
}
