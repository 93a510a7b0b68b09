// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Lookup of resources expected to exist at most once cluster-wide

use crate::error::{is_not_found, AddonError, Result};
use kube::core::PartialObjectMeta;
use kube::{api::ListParams, Api, Client, Resource, ResourceExt};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::{debug, instrument, warn};

/// List `K` across all namespaces and return the metadata of the first item.
///
/// Only metadata is fetched, so objects with a missing or unexpected spec are
/// still found. Zero items, or a 404 on the list itself (CRD not installed),
/// yield `AddonError::ResourceNotFound`. Extra items are logged and ignored.
#[instrument(skip(client), fields(kind = %K::kind(&())))]
pub async fn get_singleton<K>(client: &Client) -> Result<PartialObjectMeta<K>>
where
    K: Resource<DynamicType = ()> + Clone + DeserializeOwned + Debug,
{
    let kind = K::kind(&()).to_string();
    let api: Api<K> = Api::all(client.clone());

    let list = match api.list_metadata(&ListParams::default()).await {
        Ok(list) => list,
        Err(e) if is_not_found(&e) => {
            debug!("{} is not served by the API server", kind);
            return Err(AddonError::ResourceNotFound { kind });
        }
        Err(e) => return Err(e.into()),
    };

    let count = list.items.len();
    let Some(first) = list.items.into_iter().next() else {
        return Err(AddonError::ResourceNotFound { kind });
    };

    if count > 1 {
        warn!(
            "Found {} {} resources, using {}",
            count,
            kind,
            first.name_any()
        );
    }

    Ok(first)
}
