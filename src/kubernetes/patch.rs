// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! RFC 6902 JSON patch and RFC 7386 merge patch helpers

use crate::error::Result;
use kube::api::{Api, Patch, PatchParams};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::fmt::Debug;
use tracing::{debug, instrument};

/// JSON patch with a single `add` of `value` at the pointer `path`.
///
/// The server rejects it when the parent of `path` does not exist.
pub fn add_patch<V: Serialize>(path: &str, value: &V) -> Result<Patch<Value>> {
    let value = serde_json::to_value(value)?;
    let ops = serde_json::json!([{ "op": "add", "path": path, "value": value }]);
    Ok(Patch::Json(serde_json::from_value::<json_patch::Patch>(ops)?))
}

/// Merge patch setting `value` at the pointer `path`, creating missing parents
pub fn merge_patch_at<V: Serialize>(path: &str, value: &V) -> Result<Patch<Value>> {
    let value = serde_json::to_value(value)?;
    let nested = path
        .rsplit('/')
        .filter(|segment| !segment.is_empty())
        .fold(value, |inner, segment| {
            let mut map = Map::new();
            map.insert(segment.replace("~1", "/").replace("~0", "~"), inner);
            Value::Object(map)
        });
    Ok(Patch::Merge(nested))
}

/// Apply `patch` to the named object of `api`
#[instrument(skip(api, patch))]
pub async fn patch_named<K>(api: &Api<K>, name: &str, patch: &Patch<Value>) -> Result<K>
where
    K: Clone + DeserializeOwned + Debug,
{
    let kind = match patch {
        Patch::Json(_) => "json",
        Patch::Merge(_) => "merge",
        _ => "other",
    };
    debug!("Sending {} patch to {}", kind, name);
    Ok(api.patch(name, &PatchParams::default(), patch).await?)
}
