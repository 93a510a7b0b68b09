// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddonError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("No {kind} resource found")]
    ResourceNotFound { kind: String },

    #[error("Failed to serialize patch: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),
}

impl AddonError {
    /// True when the API server answered 404 or a singleton lookup came back empty.
    pub fn is_not_found(&self) -> bool {
        match self {
            AddonError::KubeError(err) => is_not_found(err),
            AddonError::ResourceNotFound { .. } => true,
            _ => false,
        }
    }
}

/// Check whether a kube error is a 404 from the API server
pub fn is_not_found(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(response) if response.code == 404)
}

pub type Result<T> = std::result::Result<T, AddonError>;
