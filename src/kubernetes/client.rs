// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Hub cluster client creation

use crate::config::Config;
use crate::error::{AddonError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use std::path::Path;
use tracing::{debug, info};

/// Create a Kubernetes client for the hub cluster
pub async fn create_hub_client(config: &Config) -> Result<Client> {
    match &config.kubeconfig {
        Some(path) => create_client_from_kubeconfig_file(path).await,
        None => {
            debug!("No hub kubeconfig configured, inferring client config");
            Client::try_default().await.map_err(|e| {
                AddonError::KubeconfigError(format!("Failed to infer config: {}", e))
            })
        }
    }
}

/// Create a Kubernetes client from a kubeconfig file
async fn create_client_from_kubeconfig_file(path: &Path) -> Result<Client> {
    info!("Loading hub kubeconfig from {}", path.display());

    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        AddonError::KubeconfigError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let kubeconfig: Kubeconfig = serde_yaml::from_str(&contents)
        .map_err(|e| AddonError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))?;

    let client_config =
        kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
            .await
            .map_err(|e| {
                AddonError::KubeconfigError(format!("Failed to create config: {}", e))
            })?;

    Client::try_from(client_config)
        .map_err(|e| AddonError::KubeconfigError(format!("Failed to create client: {}", e)))
}
