// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Hub configuration resources. A hub runs either a MultiClusterHub or, on a
//! bare engine install, only a MultiClusterEngine.

use kube::core::PartialObjectMeta;
use kube::{CustomResource, ResourceExt};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(
    group = "operator.open-cluster-management.io",
    version = "v1",
    kind = "MultiClusterHub",
    plural = "multiclusterhubs"
)]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct MultiClusterHubSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_config: Option<ComponentConfig>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(
    group = "multicluster.openshift.io",
    version = "v1",
    kind = "MultiClusterEngine",
    plural = "multiclusterengines"
)]
#[serde(rename_all = "camelCase")]
pub struct MultiClusterEngineSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_config: Option<ComponentConfig>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_service_account: Option<ComponentToggle>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
pub struct ComponentToggle {
    #[serde(default)]
    pub enable: bool,
}

impl ComponentConfig {
    /// Component config that turns the managed-serviceaccount feature on
    pub fn managed_service_account_enabled() -> Self {
        ComponentConfig {
            managed_service_account: Some(ComponentToggle { enable: true }),
            extra: BTreeMap::new(),
        }
    }
}

/// The hub configuration resource found on the cluster.
///
/// Only metadata is held, which is all that addressing a patch needs.
#[derive(Clone, Debug)]
pub enum HubConfig {
    Hub(PartialObjectMeta<MultiClusterHub>),
    Engine(PartialObjectMeta<MultiClusterEngine>),
}

impl HubConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            HubConfig::Hub(_) => "MultiClusterHub",
            HubConfig::Engine(_) => "MultiClusterEngine",
        }
    }

    pub fn name(&self) -> String {
        match self {
            HubConfig::Hub(mch) => mch.name_any(),
            HubConfig::Engine(mce) => mce.name_any(),
        }
    }

    /// Namespace to address the resource in; engines are cluster-scoped
    pub fn namespace(&self) -> Option<String> {
        match self {
            HubConfig::Hub(mch) => mch.namespace(),
            HubConfig::Engine(_) => None,
        }
    }
}

/// Feature-related slice of either hub config kind. A missing spec or
/// componentConfig reads as empty.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct HubFeatureView {
    #[serde(default)]
    pub spec: HubFeatureSpec,
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct HubFeatureSpec {
    #[serde(default)]
    pub component_config: Option<ComponentConfig>,
}

impl HubFeatureView {
    /// Check if spec.componentConfig.managedServiceAccount.enable is true
    pub fn is_managed_service_account_enabled(&self) -> bool {
        self.spec
            .component_config
            .as_ref()
            .and_then(|c| c.managed_service_account.as_ref())
            .is_some_and(|t| t.enable)
    }
}
