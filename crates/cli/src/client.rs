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

use orch_api::catalog::CatalogClient;
use orch_api::deployment::DeploymentClient;
use orch_api::infra::InfraClient;
use orch_api::rps::RpsClient;
use orch_api::tenancy::TenancyClient;
use orch_api::{Endpoint, RestClient};

// ApiClient bundles one client per orchestrator service. They all share
// the same connection pool and endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub infra: InfraClient,
    pub catalog: CatalogClient,
    pub deployment: DeploymentClient,
    pub tenancy: TenancyClient,
    pub rps: RpsClient,
}

impl ApiClient {
    pub fn new(http: reqwest::Client, endpoint: Endpoint, page_size: u32) -> Self {
        let rest = RestClient::new(http, endpoint);
        ApiClient {
            infra: InfraClient::new(rest.clone()).with_page_size(page_size),
            catalog: CatalogClient::new(rest.clone()),
            deployment: DeploymentClient::new(rest.clone()),
            tenancy: TenancyClient::new(rest.clone()),
            rps: RpsClient::new(rest),
        }
    }
}
