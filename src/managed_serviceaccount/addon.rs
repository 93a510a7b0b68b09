// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Lifecycle of the managed-serviceaccount ManagedClusterAddOn

use crate::constants::addon;
use crate::error::Result;
use crate::types::{
    AddonState, ManagedCluster, ManagedClusterAddOn, ManagedClusterAddOnSpec,
};
use kube::{
    api::{DeleteParams, PostParams},
    Api, Client, ResourceExt,
};
use tracing::{debug, info, instrument};

fn addon_api(client: &Client, cluster: &ManagedCluster) -> Api<ManagedClusterAddOn> {
    Api::namespaced(client.clone(), &cluster.addon_namespace())
}

/// Fetch a ManagedCluster by name
#[instrument(skip(client))]
pub async fn get_managed_cluster(client: &Client, name: &str) -> Result<ManagedCluster> {
    let clusters: Api<ManagedCluster> = Api::all(client.clone());
    Ok(clusters.get(name).await?)
}

/// Fetch the add-on from the cluster's namespace. Errors, NotFound included,
/// are returned as-is.
#[instrument(skip(client, cluster), fields(cluster = %cluster.name_any()))]
pub async fn get_addon(client: &Client, cluster: &ManagedCluster) -> Result<ManagedClusterAddOn> {
    Ok(addon_api(client, cluster).get(addon::NAME).await?)
}

/// Check if the add-on exists.
///
/// Only a NotFound answer yields `false`; any other failure is reported as
/// existing, so only `false` can be trusted.
pub async fn addon_exists(client: &Client, cluster: &ManagedCluster) -> bool {
    match get_addon(client, cluster).await {
        Err(e) if e.is_not_found() => false,
        Err(e) => {
            debug!("Treating add-on as present after lookup error: {}", e);
            true
        }
        Ok(_) => true,
    }
}

/// Check if the add-on reports Available=True. Any lookup error yields `false`.
pub async fn addon_is_available(client: &Client, cluster: &ManagedCluster) -> bool {
    match get_addon(client, cluster).await {
        Ok(addon) => addon.is_available(),
        Err(e) => {
            debug!("Add-on not available: {}", e);
            false
        }
    }
}

/// Observed lifecycle state, `Absent` when the add-on does not exist
pub async fn addon_state(client: &Client, cluster: &ManagedCluster) -> Result<AddonState> {
    match get_addon(client, cluster).await {
        Ok(addon) => Ok(addon.state()),
        Err(e) if e.is_not_found() => Ok(AddonState::Absent),
        Err(e) => Err(e),
    }
}

fn new_addon(cluster: &ManagedCluster) -> ManagedClusterAddOn {
    ManagedClusterAddOn::new(
        addon::NAME,
        &cluster.addon_namespace(),
        ManagedClusterAddOnSpec {
            install_namespace: Some(addon::INSTALL_NAMESPACE.to_string()),
        },
    )
}

/// Create the add-on unless it already exists.
///
/// An existing add-on is returned unchanged. Lookup errors other than NotFound
/// are returned without attempting a create; a create that races with another
/// writer surfaces the API server's conflict.
#[instrument(skip(client, cluster), fields(cluster = %cluster.name_any()))]
pub async fn create_addon_if_absent(
    client: &Client,
    cluster: &ManagedCluster,
) -> Result<ManagedClusterAddOn> {
    match get_addon(client, cluster).await {
        Ok(existing) => {
            debug!(
                "Add-on {}/{} already exists",
                cluster.addon_namespace(),
                addon::NAME
            );
            Ok(existing)
        }
        Err(e) if e.is_not_found() => {
            info!(
                "Creating add-on {}/{}",
                cluster.addon_namespace(),
                addon::NAME
            );
            let created = addon_api(client, cluster)
                .create(&PostParams::default(), &new_addon(cluster))
                .await?;
            info!(
                "Add-on {}/{} created successfully",
                cluster.addon_namespace(),
                addon::NAME
            );
            Ok(created)
        }
        Err(e) => Err(e),
    }
}

/// Delete the add-on. A missing add-on is reported as a NotFound error.
#[instrument(skip(client, cluster), fields(cluster = %cluster.name_any()))]
pub async fn delete_addon(client: &Client, cluster: &ManagedCluster) -> Result<()> {
    let result = addon_api(client, cluster)
        .delete(addon::NAME, &DeleteParams::default())
        .await?;

    if result.is_left() {
        info!(
            "Deletion of add-on {}/{} started",
            cluster.addon_namespace(),
            addon::NAME
        );
    } else {
        info!(
            "Add-on {}/{} deleted",
            cluster.addon_namespace(),
            addon::NAME
        );
    }

    Ok(())
}
