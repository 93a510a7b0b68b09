// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::managed_serviceaccount::PatchStrategy;
use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;

/// Hub connection and feature patch settings loaded from environment variables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Kubeconfig of the hub cluster, falls back to kube's default inference when unset
    pub kubeconfig: Option<PathBuf>,
    pub patch_strategy: PatchStrategy,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            env::var("HUB_KUBECONFIG").ok(),
            env::var("MSA_PATCH_STRATEGY").ok(),
        )
    }

    fn from_vars(kubeconfig: Option<String>, patch_strategy: Option<String>) -> Result<Self> {
        let kubeconfig = kubeconfig.filter(|p| !p.is_empty()).map(PathBuf::from);
        let patch_strategy = match patch_strategy.filter(|s| !s.is_empty()) {
            Some(value) => value
                .parse()
                .map_err(|e| anyhow!("MSA_PATCH_STRATEGY: {}", e))?,
            None => PatchStrategy::default(),
        };

        Ok(Config {
            kubeconfig,
            patch_strategy,
        })
    }
}
