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

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use host_validator::{
    ErrorCode, HostRecord, ValidationError, error_report_path, parse_metadata, read_host_records,
    sanitize, write_host_records,
};
use orch_api::OrchApiError;
use orch_api::cli::{CliError, CliResult};
use orch_api::deployment::{ClusterApi, ClusterCreate};
use orch_api::infra::{
    HostPatch, HostRegister, INSTANCE_KIND_METAL, InfraApi, InstanceCreate, MetadataItem,
    SECURE_BOOT_AND_FDE, SECURITY_FEATURE_NONE,
};
use serde::Serialize;
use tracing::{info, warn};

use super::args::ImportOverrides;
use super::resolve::ResponseCache;

/// Where a record got to before it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStage {
    Pending,
    Registered,
    InstanceCreated,
    SiteAllocated,
    Done,
}

impl fmt::Display for ImportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            ImportStage::Pending => "pending",
            ImportStage::Registered => "registered",
            ImportStage::InstanceCreated => "instance-created",
            ImportStage::SiteAllocated => "site-allocated",
            ImportStage::Done => "done",
        };
        f.write_str(stage)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error("{0}")]
    Rejected(ErrorCode),

    #[error("{0}")]
    Lookup(OrchApiError),

    #[error("Failed to {step} (host left {completed}): {source}")]
    Step {
        step: &'static str,
        completed: ImportStage,
        source: OrchApiError,
    },
}

fn step_failed(
    step: &'static str,
    completed: ImportStage,
) -> impl FnOnce(OrchApiError) -> RecordError {
    move |source| RecordError::Step {
        step,
        completed,
        source,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredHost {
    pub line: u64,
    pub name: String,
    pub host_id: String,
    pub instance_id: String,
    pub site: String,
    pub cluster: Option<String>,
}

impl ImportOverrides {
    pub fn apply(&self, record: &mut HostRecord) {
        let set = |field: &mut String, value: &Option<String>| {
            if let Some(value) = value {
                field.clone_from(value);
            }
        };
        set(&mut record.os_profile, &self.os_profile);
        set(&mut record.site, &self.site);
        set(&mut record.remote_user, &self.remote_user);
        set(&mut record.metadata, &self.metadata);
        set(&mut record.cluster_template, &self.cluster_template);
        if let Some(secure) = self.secure {
            record.secure = secure.to_string();
        }
    }
}

#[derive(Debug, Default)]
pub struct ImportSummary {
    pub total: usize,
    pub invalid: usize,
    pub failed: usize,
    pub registered: Vec<RegisteredHost>,
    /// Error report written next to the input when any record failed.
    pub report: Option<PathBuf>,
    pub dry_run: bool,
}

impl ImportSummary {
    /// Turns a summary with failures into the command's error.
    pub fn check(&self) -> CliResult<()> {
        match self.report.as_ref() {
            None => Ok(()),
            Some(report) if self.dry_run => {
                warn!("Error report written to {}", report.display());
                Err(CliError::Validation(ValidationError::CheckFailed {
                    invalid: self.invalid,
                    total: self.total,
                }))
            }
            Some(report) => Err(CliError::ImportFailed {
                failed: self.failed,
                total: self.total,
                report: report.clone(),
            }),
        }
    }
}

/// Importer registers the hosts of a CSV file one record at a time.
///
/// Each valid record goes through register, create instance, allocate
/// site and metadata, and optionally create a cluster. A failing record
/// keeps whatever steps already completed and the run moves on to the
/// next record.
pub struct Importer<'a> {
    infra: &'a dyn InfraApi,
    clusters: &'a dyn ClusterApi,
    cache: ResponseCache,
}

impl<'a> Importer<'a> {
    pub fn new(infra: &'a dyn InfraApi, clusters: &'a dyn ClusterApi) -> Self {
        Importer {
            infra,
            clusters,
            cache: ResponseCache::default(),
        }
    }

    pub async fn import_file<Tz: TimeZone>(
        &mut self,
        path: &Path,
        overrides: &ImportOverrides,
        dry_run: bool,
        now: &DateTime<Tz>,
    ) -> CliResult<ImportSummary>
    where
        Tz::Offset: fmt::Display,
    {
        let mut records = read_host_records(path)?;
        for record in records.iter_mut() {
            overrides.apply(record);
        }

        let mut summary = ImportSummary {
            total: records.len(),
            dry_run,
            ..Default::default()
        };
        if let Err(e) = sanitize(&mut records) {
            warn!("{e}");
        }
        summary.invalid = records.iter().filter(|r| !r.is_valid()).count();

        if !dry_run {
            for record in records.iter_mut().filter(|r| r.is_valid()) {
                match self.import_record(record).await {
                    Ok(host) => summary.registered.push(host),
                    Err(e) => {
                        warn!("{} (line {}): {e}", record.host_name(), record.line);
                        record.append_error_msg(&e);
                    }
                }
            }
        }

        let failed = records
            .into_iter()
            .filter(|r| !r.is_valid())
            .collect::<Vec<_>>();
        summary.failed = failed.len();
        if !failed.is_empty() {
            let report = error_report_path(path, now);
            write_host_records(&report, &failed)?;
            summary.report = Some(report);
        }
        Ok(summary)
    }

    pub async fn import_record(
        &mut self,
        record: &HostRecord,
    ) -> Result<RegisteredHost, RecordError> {
        let name = record.host_name().to_string();
        let secure = record.is_secure();

        let os = self
            .cache
            .os_profile(self.infra, &record.os_profile)
            .await
            .map_err(RecordError::Lookup)?;
        if secure && !os.supports_secure_boot() {
            return Err(RecordError::Rejected(ErrorCode::OsSecurityMismatch));
        }
        let site = self
            .cache
            .site(self.infra, &record.site)
            .await
            .map_err(RecordError::Lookup)?;
        let local_account_id = if record.remote_user.is_empty() {
            None
        } else {
            let account = self
                .cache
                .local_account(self.infra, &record.remote_user)
                .await
                .map_err(RecordError::Lookup)?;
            Some(account.resource_id)
        };
        if let Some(existing) = self
            .cache
            .host(self.infra, &record.serial, &record.uuid)
            .await
            .map_err(RecordError::Lookup)?
        {
            info!("{name}: already registered as {}", existing.resource_id);
            return Err(RecordError::Rejected(ErrorCode::AlreadyRegistered));
        }
        let metadata = parse_metadata(&record.metadata)
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| MetadataItem { key, value })
            .collect();

        let non_empty = |v: &str| (!v.is_empty()).then(|| v.to_string());
        let host = self
            .infra
            .register_host(&HostRegister {
                name: name.clone(),
                serial_number: non_empty(&record.serial),
                uuid: non_empty(&record.uuid),
                auto_onboard: true,
            })
            .await
            .map_err(step_failed("register host", ImportStage::Pending))?;
        info!("{name}: {} as {}", ImportStage::Registered, host.resource_id);

        let instance = self
            .infra
            .create_instance(&InstanceCreate {
                name: name.clone(),
                kind: INSTANCE_KIND_METAL.to_string(),
                host_id: host.resource_id.clone(),
                os_id: os.resource_id.clone(),
                security_feature: if secure {
                    SECURE_BOOT_AND_FDE
                } else {
                    SECURITY_FEATURE_NONE
                }
                .to_string(),
                local_account_id,
            })
            .await
            .map_err(step_failed("create instance", ImportStage::Registered))?;
        info!("{name}: {} as {}", ImportStage::InstanceCreated, instance.resource_id);

        self.infra
            .patch_host(
                &host.resource_id,
                &HostPatch {
                    site_id: Some(site.resource_id.clone()),
                    metadata,
                },
            )
            .await
            .map_err(step_failed("allocate site", ImportStage::InstanceCreated))?;
        info!("{name}: {} to {}", ImportStage::SiteAllocated, site.name);

        let cluster = match record.cluster_template_parts() {
            Some((template, version)) => {
                let node = [record.uuid.as_str(), host.uuid.as_str()]
                    .into_iter()
                    .find(|id| !id.is_empty())
                    .unwrap_or(host.resource_id.as_str());
                self.clusters
                    .create_cluster(&ClusterCreate::single_node(&name, template, version, node))
                    .await
                    .map_err(step_failed("create cluster", ImportStage::SiteAllocated))?;
                Some(name.clone())
            }
            None => None,
        };
        info!("{name}: {}", ImportStage::Done);

        Ok(RegisteredHost {
            line: record.line,
            name,
            host_id: host.resource_id,
            instance_id: instance.resource_id,
            site: site.name,
            cluster,
        })
    }
}
