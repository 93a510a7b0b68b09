// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::conditions;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::core::{NamespaceResourceScope, TypeMeta};
use kube::Resource;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// `addon.open-cluster-management.io/v1alpha1` ManagedClusterAddOn.
///
/// Written out by hand instead of derived so that an object stored without a
/// spec still decodes, with an empty spec.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ManagedClusterAddOn {
    #[serde(flatten, default)]
    pub types: Option<TypeMeta>,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: ManagedClusterAddOnSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ManagedClusterAddOnStatus>,
}

impl Resource for ManagedClusterAddOn {
    type DynamicType = ();
    type Scope = NamespaceResourceScope;

    fn kind(_: &()) -> Cow<'_, str> {
        "ManagedClusterAddOn".into()
    }

    fn group(_: &()) -> Cow<'_, str> {
        "addon.open-cluster-management.io".into()
    }

    fn version(_: &()) -> Cow<'_, str> {
        "v1alpha1".into()
    }

    fn api_version(_: &()) -> Cow<'_, str> {
        "addon.open-cluster-management.io/v1alpha1".into()
    }

    fn plural(_: &()) -> Cow<'_, str> {
        "managedclusteraddons".into()
    }

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManagedClusterAddOnSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_namespace: Option<String>,
}

impl ManagedClusterAddOn {
    /// New add-on object carrying its apiVersion and kind
    pub fn new(name: &str, namespace: &str, spec: ManagedClusterAddOnSpec) -> Self {
        ManagedClusterAddOn {
            types: Some(TypeMeta::resource::<ManagedClusterAddOn>()),
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..Default::default()
            },
            spec,
            status: None,
        }
    }

    /// Check if the add-on reports Available=True
    pub fn is_available(&self) -> bool {
        self.condition_is_true(conditions::AVAILABLE)
    }

    /// Observed lifecycle state derived from the status conditions
    pub fn state(&self) -> AddonState {
        if self.is_available() {
            AddonState::Available
        } else if self.condition_is_true(conditions::DEGRADED) {
            AddonState::Degraded
        } else {
            AddonState::Pending
        }
    }

    fn condition_is_true(&self, condition_type: &str) -> bool {
        self.status
            .as_ref()
            .and_then(|s| s.conditions.as_ref())
            .is_some_and(|cs| {
                cs.iter().any(|c| {
                    c.condition_type == condition_type && c.status == conditions::STATUS_TRUE
                })
            })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ManagedClusterAddOnStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
}

/// Lifecycle of the add-on as seen from the hub.
///
/// Only `Absent -> Pending` (create) and `* -> Absent` (delete) are driven from
/// here; condition changes come from the add-on manager on the hub.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddonState {
    Absent,
    Pending,
    Available,
    Degraded,
}

impl fmt::Display for AddonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AddonState::Absent => "Absent",
            AddonState::Pending => "Pending",
            AddonState::Available => "Available",
            AddonState::Degraded => "Degraded",
        };
        f.write_str(s)
    }
}
