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

// In-memory orchestrator used by the resolver and import tests.

use std::sync::Mutex;

use orch_api::OrchApiError;
use orch_api::deployment::{ClusterApi, ClusterCreate};
use orch_api::infra::{
    Host, HostPatch, HostRegister, InfraApi, Instance, InstanceCreate, LocalAccount, OsProfile,
    SECURE_BOOT_AND_FDE, SECURITY_FEATURE_NONE, Site,
};
use reqwest::StatusCode;

pub fn os_profile(name: &str, secure: bool) -> OsProfile {
    OsProfile {
        resource_id: if secure { "os-55667788" } else { "os-11223344" }.to_string(),
        name: name.to_string(),
        security_feature: if secure {
            SECURE_BOOT_AND_FDE
        } else {
            SECURITY_FEATURE_NONE
        }
        .to_string(),
        ..Default::default()
    }
}

pub fn site(name: &str) -> Site {
    Site {
        resource_id: "site-0a1b2c3d".to_string(),
        name: name.to_string(),
        region: None,
    }
}

pub struct FakeInfra {
    pub os_profiles: Vec<OsProfile>,
    pub sites: Vec<Site>,
    pub local_accounts: Vec<LocalAccount>,
    pub hosts: Mutex<Vec<Host>>,
    pub instances: Mutex<Vec<InstanceCreate>>,
    pub patches: Mutex<Vec<(String, HostPatch)>>,
    pub clusters: Mutex<Vec<ClusterCreate>>,
    /// Name of the call that fails with a 500.
    pub fail_on: Option<&'static str>,
    calls: Mutex<Vec<(&'static str, Option<String>)>>,
}

impl Default for FakeInfra {
    fn default() -> Self {
        FakeInfra {
            os_profiles: vec![
                os_profile("ubuntu-22.04", false),
                os_profile("ubuntu-22.04-secure", true),
            ],
            sites: vec![site("site-a")],
            local_accounts: vec![LocalAccount {
                resource_id: "localaccount-5f6e7d8c".to_string(),
                username: "admin".to_string(),
                ssh_key: "ssh-ed25519 AAAA".to_string(),
            }],
            hosts: Mutex::default(),
            instances: Mutex::default(),
            patches: Mutex::default(),
            clusters: Mutex::default(),
            fail_on: None,
            calls: Mutex::default(),
        }
    }
}

impl FakeInfra {
    pub fn failing_on(name: &'static str) -> Self {
        FakeInfra {
            fail_on: Some(name),
            ..Default::default()
        }
    }

    pub fn calls_to(&self, name: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(call, _)| *call == name)
            .count()
    }

    pub fn call_names(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().iter().map(|(call, _)| *call).collect()
    }

    pub fn filters(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|(_, filter)| filter.clone())
            .collect()
    }

    fn record(&self, name: &'static str, filter: Option<&str>) -> Result<(), OrchApiError> {
        self.calls
            .lock()
            .unwrap()
            .push((name, filter.map(str::to_string)));
        if self.fail_on == Some(name) {
            return Err(OrchApiError::HttpErrorCode {
                url: format!("http://fake/{name}"),
                status_code: StatusCode::INTERNAL_SERVER_ERROR,
                response_body: "boom".to_string(),
            });
        }
        Ok(())
    }
}

fn matches(filter: Option<&str>, keys: &[&str]) -> bool {
    filter.is_none_or(|f| {
        keys.iter()
            .any(|k| !k.is_empty() && f.contains(&format!("\"{k}\"")))
    })
}

#[async_trait::async_trait]
impl InfraApi for FakeInfra {
    async fn list_hosts(&self, filter: Option<&str>) -> Result<Vec<Host>, OrchApiError> {
        self.record("list_hosts", filter)?;
        Ok(self
            .hosts
            .lock()
            .unwrap()
            .iter()
            .filter(|h| matches(filter, &[h.serial_number.as_str(), h.uuid.as_str()]))
            .cloned()
            .collect())
    }

    async fn get_host(&self, id: &str) -> Result<Host, OrchApiError> {
        self.record("get_host", None)?;
        self.hosts
            .lock()
            .unwrap()
            .iter()
            .find(|h| h.resource_id == id)
            .cloned()
            .ok_or_else(|| OrchApiError::NotFound {
                kind: "Host",
                reference: id.to_string(),
            })
    }

    async fn register_host(&self, req: &HostRegister) -> Result<Host, OrchApiError> {
        self.record("register_host", None)?;
        let mut hosts = self.hosts.lock().unwrap();
        let host = Host {
            resource_id: format!("host-{:08x}", hosts.len() + 1),
            name: req.name.clone(),
            serial_number: req.serial_number.clone().unwrap_or_default(),
            uuid: req.uuid.clone().unwrap_or_default(),
            ..Default::default()
        };
        hosts.push(host.clone());
        Ok(host)
    }

    async fn patch_host(&self, id: &str, req: &HostPatch) -> Result<Host, OrchApiError> {
        self.record("patch_host", None)?;
        self.patches
            .lock()
            .unwrap()
            .push((id.to_string(), req.clone()));
        Ok(Host {
            resource_id: id.to_string(),
            ..Default::default()
        })
    }

    async fn delete_host(&self, id: &str) -> Result<(), OrchApiError> {
        self.record("delete_host", None)?;
        self.hosts.lock().unwrap().retain(|h| h.resource_id != id);
        Ok(())
    }

    async fn invalidate_host(&self, _id: &str, _note: Option<&str>) -> Result<(), OrchApiError> {
        self.record("invalidate_host", None)
    }

    async fn create_instance(&self, req: &InstanceCreate) -> Result<Instance, OrchApiError> {
        self.record("create_instance", None)?;
        let mut instances = self.instances.lock().unwrap();
        instances.push(req.clone());
        Ok(Instance {
            resource_id: format!("inst-{:08x}", instances.len()),
            name: req.name.clone(),
            kind: req.kind.clone(),
            security_feature: req.security_feature.clone(),
            ..Default::default()
        })
    }

    async fn list_os_profiles(&self, filter: Option<&str>) -> Result<Vec<OsProfile>, OrchApiError> {
        self.record("list_os_profiles", filter)?;
        Ok(self
            .os_profiles
            .iter()
            .filter(|p| matches(filter, &[p.name.as_str(), p.resource_id.as_str()]))
            .cloned()
            .collect())
    }

    async fn list_sites(&self, filter: Option<&str>) -> Result<Vec<Site>, OrchApiError> {
        self.record("list_sites", filter)?;
        Ok(self
            .sites
            .iter()
            .filter(|s| matches(filter, &[s.name.as_str(), s.resource_id.as_str()]))
            .cloned()
            .collect())
    }

    async fn list_local_accounts(
        &self,
        filter: Option<&str>,
    ) -> Result<Vec<LocalAccount>, OrchApiError> {
        self.record("list_local_accounts", filter)?;
        Ok(self
            .local_accounts
            .iter()
            .filter(|a| matches(filter, &[a.username.as_str(), a.resource_id.as_str()]))
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl ClusterApi for FakeInfra {
    async fn create_cluster(&self, req: &ClusterCreate) -> Result<(), OrchApiError> {
        self.record("create_cluster", None)?;
        self.clusters.lock().unwrap().push(req.clone());
        Ok(())
    }
}
