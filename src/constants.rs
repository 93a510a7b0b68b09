// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The managed-serviceaccount add-on
pub mod addon {
    /// Name of the ManagedClusterAddOn, one per managed cluster namespace
    pub const NAME: &str = "managed-serviceaccount";
    /// Namespace the add-on agent is installed into on the managed cluster
    pub const INSTALL_NAMESPACE: &str = "open-cluster-management-managed-serviceaccount";
}

/// ManagedClusterAddOn condition types and statuses
pub mod conditions {
    pub const AVAILABLE: &str = "Available";
    pub const DEGRADED: &str = "Degraded";
    pub const STATUS_TRUE: &str = "True";
}

/// Hub feature toggle written to MultiClusterHub / MultiClusterEngine
pub mod feature {
    /// JSON pointer of the component configuration in the hub config spec
    pub const COMPONENT_CONFIG_PATH: &str = "/spec/componentConfig";
}
