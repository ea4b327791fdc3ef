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

//! Infrastructure manager: hosts, instances, OS profiles, sites and local
//! accounts.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{OrchApiError, RestClient};

pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Security feature value of an OS profile (and instance) with secure boot
/// and full disk encryption enabled.
pub const SECURE_BOOT_AND_FDE: &str = "SECURITY_FEATURE_SECURE_BOOT_AND_FULL_DISK_ENCRYPTION";
pub const SECURITY_FEATURE_NONE: &str = "SECURITY_FEATURE_NONE";
pub const INSTANCE_KIND_METAL: &str = "INSTANCE_KIND_METAL";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataItem {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Host {
    pub resource_id: String,
    pub name: String,
    pub serial_number: String,
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<Site>,
    pub host_status: String,
    pub onboarding_status: String,
    pub registration_status: String,
    pub current_state: String,
    pub desired_state: String,
    pub note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<Instance>,
    pub metadata: Vec<MetadataItem>,
}

impl Host {
    pub fn site_name(&self) -> &str {
        self.site.as_ref().map_or("", |s| s.name.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostList {
    pub hosts: Vec<Host>,
    pub total_elements: u32,
    pub has_next: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRegister {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub auto_onboard: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<MetadataItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostInvalidate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Instance {
    pub resource_id: String,
    pub name: String,
    pub kind: String,
    pub security_feature: String,
    pub instance_status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceCreate {
    pub name: String,
    pub kind: String,
    #[serde(rename = "hostID")]
    pub host_id: String,
    #[serde(rename = "osID")]
    pub os_id: String,
    pub security_feature: String,
    #[serde(rename = "localAccountID", skip_serializing_if = "Option::is_none")]
    pub local_account_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OsProfile {
    pub resource_id: String,
    pub name: String,
    pub profile_name: String,
    pub os_type: String,
    pub architecture: String,
    pub security_feature: String,
    pub image_url: String,
}

impl OsProfile {
    pub fn supports_secure_boot(&self) -> bool {
        self.security_feature == SECURE_BOOT_AND_FDE
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OsProfileList {
    #[serde(rename = "OperatingSystemResources")]
    pub operating_systems: Vec<OsProfile>,
    #[serde(rename = "totalElements")]
    pub total_elements: u32,
    #[serde(rename = "hasNext")]
    pub has_next: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Site {
    pub resource_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
}

impl Site {
    pub fn region_name(&self) -> &str {
        self.region.as_ref().map_or("", |r| r.name.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Region {
    pub resource_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteList {
    pub sites: Vec<Site>,
    pub total_elements: u32,
    pub has_next: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalAccount {
    pub resource_id: String,
    pub username: String,
    pub ssh_key: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalAccountList {
    pub local_accounts: Vec<LocalAccount>,
    pub total_elements: u32,
    pub has_next: bool,
}

/// One page of a list endpoint.
trait Page: DeserializeOwned + ::std::fmt::Debug {
    type Item;

    fn into_items(self) -> (Vec<Self::Item>, bool);
}

impl Page for HostList {
    type Item = Host;

    fn into_items(self) -> (Vec<Host>, bool) {
        (self.hosts, self.has_next)
    }
}

impl Page for OsProfileList {
    type Item = OsProfile;

    fn into_items(self) -> (Vec<OsProfile>, bool) {
        (self.operating_systems, self.has_next)
    }
}

impl Page for SiteList {
    type Item = Site;

    fn into_items(self) -> (Vec<Site>, bool) {
        (self.sites, self.has_next)
    }
}

impl Page for LocalAccountList {
    type Item = LocalAccount;

    fn into_items(self) -> (Vec<LocalAccount>, bool) {
        (self.local_accounts, self.has_next)
    }
}

#[async_trait::async_trait]
pub trait InfraApi: Send + Sync {
    async fn list_hosts(&self, filter: Option<&str>) -> Result<Vec<Host>, OrchApiError>;
    async fn get_host(&self, id: &str) -> Result<Host, OrchApiError>;
    async fn register_host(&self, req: &HostRegister) -> Result<Host, OrchApiError>;
    async fn patch_host(&self, id: &str, req: &HostPatch) -> Result<Host, OrchApiError>;
    async fn delete_host(&self, id: &str) -> Result<(), OrchApiError>;
    async fn invalidate_host(&self, id: &str, note: Option<&str>) -> Result<(), OrchApiError>;
    async fn create_instance(&self, req: &InstanceCreate) -> Result<Instance, OrchApiError>;
    async fn list_os_profiles(&self, filter: Option<&str>) -> Result<Vec<OsProfile>, OrchApiError>;
    async fn list_sites(&self, filter: Option<&str>) -> Result<Vec<Site>, OrchApiError>;
    async fn list_local_accounts(
        &self,
        filter: Option<&str>,
    ) -> Result<Vec<LocalAccount>, OrchApiError>;
}

#[derive(Debug, Clone)]
pub struct InfraClient {
    rest: RestClient,
    page_size: u32,
}

impl InfraClient {
    pub fn new(rest: RestClient) -> Self {
        Self {
            rest,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Fetches every page of a list endpoint, following `hasNext`.
    async fn list_all<P: Page>(
        &self,
        api: &str,
        filter: Option<&str>,
    ) -> Result<Vec<P::Item>, OrchApiError> {
        let path = self.rest.project_path(api)?;
        let mut items = Vec::new();
        let mut offset = 0u32;
        loop {
            let mut query = vec![
                ("offset", offset.to_string()),
                ("pageSize", self.page_size.to_string()),
            ];
            if let Some(filter) = filter {
                query.push(("filter", filter.to_string()));
            }

            let page: P = self.rest.get_query(&path, &query).await?;
            let (mut page_items, has_next) = page.into_items();
            let fetched = page_items.len() as u32;
            items.append(&mut page_items);
            debug!("{api}: fetched {fetched} items at offset {offset}");

            if !has_next || fetched == 0 {
                return Ok(items);
            }
            offset += fetched;
        }
    }
}

#[async_trait::async_trait]
impl InfraApi for InfraClient {
    async fn list_hosts(&self, filter: Option<&str>) -> Result<Vec<Host>, OrchApiError> {
        self.list_all::<HostList>("compute/hosts", filter).await
    }

    async fn get_host(&self, id: &str) -> Result<Host, OrchApiError> {
        let path = self.rest.project_path(&format!("compute/hosts/{id}"))?;
        self.rest.get(&path).await
    }

    async fn register_host(&self, req: &HostRegister) -> Result<Host, OrchApiError> {
        let path = self.rest.project_path("compute/hosts/register")?;
        self.rest.post(&path, req).await
    }

    async fn patch_host(&self, id: &str, req: &HostPatch) -> Result<Host, OrchApiError> {
        let path = self.rest.project_path(&format!("compute/hosts/{id}"))?;
        self.rest.patch(&path, req).await
    }

    async fn delete_host(&self, id: &str) -> Result<(), OrchApiError> {
        let path = self.rest.project_path(&format!("compute/hosts/{id}"))?;
        self.rest.delete(&path).await
    }

    async fn invalidate_host(&self, id: &str, note: Option<&str>) -> Result<(), OrchApiError> {
        let path = self
            .rest
            .project_path(&format!("compute/hosts/{id}/invalidate"))?;
        let req = HostInvalidate {
            note: note.map(str::to_string),
        };
        self.rest.send(Method::PUT, &path, &req).await
    }

    async fn create_instance(&self, req: &InstanceCreate) -> Result<Instance, OrchApiError> {
        let path = self.rest.project_path("compute/instances")?;
        self.rest.post(&path, req).await
    }

    async fn list_os_profiles(&self, filter: Option<&str>) -> Result<Vec<OsProfile>, OrchApiError> {
        self.list_all::<OsProfileList>("compute/os", filter).await
    }

    async fn list_sites(&self, filter: Option<&str>) -> Result<Vec<Site>, OrchApiError> {
        self.list_all::<SiteList>("regions/-/sites", filter).await
    }

    async fn list_local_accounts(
        &self,
        filter: Option<&str>,
    ) -> Result<Vec<LocalAccount>, OrchApiError> {
        self.list_all::<LocalAccountList>("localAccounts", filter).await
    }
}
