// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Operations on the managed-serviceaccount add-on and its hub feature flag.

pub mod addon;
pub mod feature;

pub use addon::{
    addon_exists, addon_is_available, addon_state, create_addon_if_absent, delete_addon,
    get_addon, get_managed_cluster,
};
pub use feature::{
    enable_managed_service_account_feature, enable_managed_service_account_feature_with,
    find_hub_config, find_hub_engine, is_managed_service_account_feature_enabled,
    resolve_hub_config, PatchStrategy,
};
