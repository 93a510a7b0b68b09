// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use msa_addon::config::Config;
use msa_addon::kubernetes::create_hub_client;
use msa_addon::managed_serviceaccount::{
    addon_state, create_addon_if_absent, delete_addon, enable_managed_service_account_feature_with,
    get_managed_cluster, is_managed_service_account_feature_enabled, PatchStrategy,
};

/// Manage the managed-serviceaccount add-on from the hub cluster
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Hub kubeconfig, overrides HUB_KUBECONFIG
    #[arg(long, global = true)]
    kubeconfig: Option<PathBuf>,

    /// json-add or merge, overrides MSA_PATCH_STRATEGY
    #[arg(long, global = true)]
    patch_strategy: Option<PatchStrategy>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Turn on the managed-serviceaccount component of the hub
    EnableFeature,
    /// Show whether the managed-serviceaccount component is enabled
    FeatureStatus,
    /// Create the add-on for a managed cluster if it does not exist
    Install { cluster: String },
    /// Show the add-on state for a managed cluster
    Status { cluster: String },
    /// Delete the add-on for a managed cluster
    Uninstall { cluster: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if cli.kubeconfig.is_some() {
        config.kubeconfig = cli.kubeconfig;
    }
    if let Some(strategy) = cli.patch_strategy {
        config.patch_strategy = strategy;
    }

    let client = create_hub_client(&config).await?;
    info!("Connected to hub cluster");

    match cli.command {
        Command::EnableFeature => {
            if is_managed_service_account_feature_enabled(&client).await? {
                info!("managed-serviceaccount is already enabled on the hub");
            } else {
                enable_managed_service_account_feature_with(&client, config.patch_strategy)
                    .await?;
            }
        }
        Command::FeatureStatus => {
            let enabled = is_managed_service_account_feature_enabled(&client).await?;
            println!("managed-serviceaccount enabled: {}", enabled);
        }
        Command::Install { cluster } => {
            let cluster = get_managed_cluster(&client, &cluster).await?;
            create_addon_if_absent(&client, &cluster).await?;
        }
        Command::Status { cluster } => {
            let cluster = get_managed_cluster(&client, &cluster).await?;
            println!("{}", addon_state(&client, &cluster).await?);
        }
        Command::Uninstall { cluster } => {
            let cluster = get_managed_cluster(&client, &cluster).await?;
            delete_addon(&client, &cluster).await?;
        }
    }

    Ok(())
}
