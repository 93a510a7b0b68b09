// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Hub-side feature toggle for managed service accounts

use crate::constants::feature::COMPONENT_CONFIG_PATH;
use crate::error::{AddonError, Result};
use crate::kubernetes::{add_patch, get_singleton, merge_patch_at, patch_named};
use crate::types::hub::{ComponentConfig, HubFeatureView};
use crate::types::{HubConfig, MultiClusterEngine, MultiClusterHub};
use kube::api::{Api, ApiResource, DynamicObject};
use kube::core::PartialObjectMeta;
use kube::ResourceExt;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// How the feature flag is written to the hub config
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PatchStrategy {
    /// JSON patch `add` of the whole `/spec/componentConfig` object. Sibling
    /// components are replaced and the patch is rejected when `/spec` is missing.
    #[default]
    JsonAdd,
    /// JSON merge patch of only the managedServiceAccount toggle
    Merge,
}

impl FromStr for PatchStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json-add" => Ok(PatchStrategy::JsonAdd),
            "merge" => Ok(PatchStrategy::Merge),
            other => Err(format!(
                "unknown patch strategy '{}', expected 'json-add' or 'merge'",
                other
            )),
        }
    }
}

impl fmt::Display for PatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchStrategy::JsonAdd => f.write_str("json-add"),
            PatchStrategy::Merge => f.write_str("merge"),
        }
    }
}

/// Find the MultiClusterHub. Returns `Ok(None)` when there is none so the
/// caller can fall back to the MultiClusterEngine.
pub async fn find_hub_config(
    client: &kube::Client,
) -> Result<Option<PartialObjectMeta<MultiClusterHub>>> {
    match get_singleton::<MultiClusterHub>(client).await {
        Ok(mch) => Ok(Some(mch)),
        Err(AddonError::ResourceNotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Find the MultiClusterEngine. Having none is an error.
pub async fn find_hub_engine(
    client: &kube::Client,
) -> Result<PartialObjectMeta<MultiClusterEngine>> {
    get_singleton::<MultiClusterEngine>(client).await
}

/// Resolve the hub config, preferring the MultiClusterHub
pub async fn resolve_hub_config(client: &kube::Client) -> Result<HubConfig> {
    if let Some(mch) = find_hub_config(client).await? {
        return Ok(HubConfig::Hub(mch));
    }
    debug!("No MultiClusterHub found, falling back to MultiClusterEngine");
    Ok(HubConfig::Engine(find_hub_engine(client).await?))
}

/// Check if the hub config already has the managed-serviceaccount component enabled
pub async fn is_managed_service_account_feature_enabled(client: &kube::Client) -> Result<bool> {
    let hub = resolve_hub_config(client).await?;
    Ok(read_feature_view(client, &hub)
        .await?
        .is_managed_service_account_enabled())
}

/// Enable the managed-serviceaccount component on the hub with a JSON patch `add`
pub async fn enable_managed_service_account_feature(client: &kube::Client) -> Result<()> {
    enable_managed_service_account_feature_with(client, PatchStrategy::JsonAdd).await
}

/// Enable the managed-serviceaccount component on the hub
#[instrument(skip(client))]
pub async fn enable_managed_service_account_feature_with(
    client: &kube::Client,
    strategy: PatchStrategy,
) -> Result<()> {
    let hub = resolve_hub_config(client).await?;
    let name = hub.name();

    info!(
        "Enabling managed-serviceaccount on {} {} using {} patch",
        hub.kind(),
        name,
        strategy
    );

    let patch = match strategy {
        PatchStrategy::JsonAdd => add_patch(
            COMPONENT_CONFIG_PATH,
            &ComponentConfig::managed_service_account_enabled(),
        )?,
        PatchStrategy::Merge => merge_patch_at(
            COMPONENT_CONFIG_PATH,
            &ComponentConfig::managed_service_account_enabled(),
        )?,
    };

    match &hub {
        HubConfig::Hub(mch) => {
            let api: Api<PartialObjectMeta<MultiClusterHub>> = match mch.namespace() {
                Some(namespace) => Api::namespaced(client.clone(), &namespace),
                None => Api::default_namespaced(client.clone()),
            };
            patch_named(&api, &name, &patch).await?;
        }
        HubConfig::Engine(_) => {
            let api: Api<PartialObjectMeta<MultiClusterEngine>> = Api::all(client.clone());
            patch_named(&api, &name, &patch).await?;
        }
    }

    info!("Enabled managed-serviceaccount on {} {}", hub.kind(), name);
    Ok(())
}

/// Fetch the hub config untyped so a missing or partial spec reads as disabled
async fn read_feature_view(client: &kube::Client, hub: &HubConfig) -> Result<HubFeatureView> {
    let api: Api<DynamicObject> = match hub {
        HubConfig::Hub(mch) => {
            let resource = ApiResource::erase::<MultiClusterHub>(&());
            match mch.namespace() {
                Some(namespace) => Api::namespaced_with(client.clone(), &namespace, &resource),
                None => Api::default_namespaced_with(client.clone(), &resource),
            }
        }
        HubConfig::Engine(_) => {
            Api::all_with(client.clone(), &ApiResource::erase::<MultiClusterEngine>(&()))
        }
    };

    let object = api.get(&hub.name()).await?;
    Ok(serde_json::from_value(object.data)?)
}
