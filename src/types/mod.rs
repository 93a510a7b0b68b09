// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed views of the open-cluster-management resources this crate touches.

pub mod addon;
pub mod cluster;
pub mod hub;

pub use addon::{AddonState, Condition, ManagedClusterAddOn, ManagedClusterAddOnSpec};
pub use cluster::{ManagedCluster, ManagedClusterSpec};
pub use hub::{HubConfig, MultiClusterEngine, MultiClusterHub};
