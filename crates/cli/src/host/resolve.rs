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

use std::collections::HashMap;
use std::future::Future;

use orch_api::infra::{Host, InfraApi, LocalAccount, OsProfile, Site};
use orch_api::{OrchApiError, or_filter};
use tracing::debug;

/// ResponseCache memoizes name to resource lookups for one import run.
///
/// References are matched against either the resource name (`username`
/// for local accounts) or its resource ID. When the orchestrator returns
/// several matches the last one wins.
#[derive(Debug, Default)]
pub struct ResponseCache {
    os_profiles: HashMap<String, OsProfile>,
    sites: HashMap<String, Site>,
    local_accounts: HashMap<String, LocalAccount>,
    hosts: HashMap<String, Option<Host>>,
}

impl ResponseCache {
    pub async fn os_profile(
        &mut self,
        infra: &dyn InfraApi,
        reference: &str,
    ) -> Result<OsProfile, OrchApiError> {
        let filter = or_filter("name", "resourceId", reference);
        lookup(&mut self.os_profiles, "OS profile", reference, || async move {
            infra.list_os_profiles(Some(&filter)).await
        })
        .await
    }

    pub async fn site(
        &mut self,
        infra: &dyn InfraApi,
        reference: &str,
    ) -> Result<Site, OrchApiError> {
        let filter = or_filter("name", "resourceId", reference);
        lookup(&mut self.sites, "Site", reference, || async move {
            infra.list_sites(Some(&filter)).await
        })
        .await
    }

    pub async fn local_account(
        &mut self,
        infra: &dyn InfraApi,
        reference: &str,
    ) -> Result<LocalAccount, OrchApiError> {
        let filter = or_filter("username", "resourceId", reference);
        lookup(&mut self.local_accounts, "Local account", reference, || async move {
            infra.list_local_accounts(Some(&filter)).await
        })
        .await
    }

    /// The host already registered with this serial number or UUID, if any.
    pub async fn host(
        &mut self,
        infra: &dyn InfraApi,
        serial: &str,
        uuid: &str,
    ) -> Result<Option<Host>, OrchApiError> {
        let key = format!("{serial}/{uuid}");
        if let Some(host) = self.hosts.get(&key) {
            return Ok(host.clone());
        }

        let filter = host_filter(serial, uuid);
        let host = infra.list_hosts(Some(&filter)).await?.pop();
        self.hosts.insert(key, host.clone());
        Ok(host)
    }
}

async fn lookup<T, F, Fut>(
    cache: &mut HashMap<String, T>,
    kind: &'static str,
    reference: &str,
    fetch: F,
) -> Result<T, OrchApiError>
where
    T: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<T>, OrchApiError>>,
{
    if let Some(found) = cache.get(reference) {
        return Ok(found.clone());
    }

    let found = fetch().await?.pop().ok_or_else(|| OrchApiError::NotFound {
        kind,
        reference: reference.to_string(),
    })?;
    debug!("{kind} {reference} resolved");
    cache.insert(reference.to_string(), found.clone());
    Ok(found)
}

pub fn host_filter(serial: &str, uuid: &str) -> String {
    let mut clauses = Vec::new();
    if !serial.is_empty() {
        clauses.push(format!("serialNumber=\"{serial}\""));
    }
    if !uuid.is_empty() {
        clauses.push(format!("uuid=\"{uuid}\""));
    }
    clauses.join(" OR ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fake::{FakeInfra, os_profile};

    #[tokio::test]
    async fn test_lookup_is_cached() {
        let infra = FakeInfra::default();
        let mut cache = ResponseCache::default();

        for _ in 0..3 {
            let site = cache.site(&infra, "site-a").await.unwrap();
            assert_eq!(site.resource_id, "site-0a1b2c3d");
        }
        assert_eq!(infra.calls_to("list_sites"), 1);
    }

    #[tokio::test]
    async fn test_lookup_by_resource_id() {
        let infra = FakeInfra::default();
        let mut cache = ResponseCache::default();

        let profile = cache.os_profile(&infra, "os-11223344").await.unwrap();
        assert_eq!(profile.name, "ubuntu-22.04");
        assert_eq!(
            infra.filters(),
            vec!["name=\"os-11223344\" OR resourceId=\"os-11223344\"".to_string()]
        );
    }

    #[tokio::test]
    async fn test_lookup_takes_last_match() {
        let mut infra = FakeInfra::default();
        infra.os_profiles.push(OsProfile {
            resource_id: "os-99887766".to_string(),
            ..os_profile("ubuntu-22.04", false)
        });
        let mut cache = ResponseCache::default();

        let profile = cache.os_profile(&infra, "ubuntu-22.04").await.unwrap();
        assert_eq!(profile.resource_id, "os-99887766");
    }

    #[tokio::test]
    async fn test_lookup_not_found() {
        let infra = FakeInfra::default();
        let mut cache = ResponseCache::default();

        let err = cache.site(&infra, "site-z").await.unwrap_err();
        assert!(matches!(
            err,
            OrchApiError::NotFound { kind: "Site", ref reference } if reference == "site-z"
        ));
        // Misses are not cached.
        let _ = cache.site(&infra, "site-z").await;
        assert_eq!(infra.calls_to("list_sites"), 2);
    }

    #[tokio::test]
    async fn test_local_account_matches_username() {
        let infra = FakeInfra::default();
        let mut cache = ResponseCache::default();

        let account = cache.local_account(&infra, "admin").await.unwrap();
        assert_eq!(account.resource_id, "localaccount-5f6e7d8c");
        assert!(infra.filters()[0].starts_with("username=\"admin\""));
    }

    #[tokio::test]
    async fn test_host_lookup_caches_misses() {
        let infra = FakeInfra::default();
        let mut cache = ResponseCache::default();

        assert!(cache.host(&infra, "FW3R8X2", "").await.unwrap().is_none());
        assert!(cache.host(&infra, "FW3R8X2", "").await.unwrap().is_none());
        assert_eq!(infra.calls_to("list_hosts"), 1);
        assert_eq!(infra.filters(), vec!["serialNumber=\"FW3R8X2\"".to_string()]);
    }

    #[test]
    fn test_host_filter() {
        assert_eq!(
            host_filter("FW3R8X2", "4c4c4544-0044-4210-8031-c2c04f305233"),
            "serialNumber=\"FW3R8X2\" OR uuid=\"4c4c4544-0044-4210-8031-c2c04f305233\""
        );
        assert_eq!(
            host_filter("", "4c4c4544-0044-4210-8031-c2c04f305233"),
            "uuid=\"4c4c4544-0044-4210-8031-c2c04f305233\""
        );
    }
}
