// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for hub client creation, singleton lookup, and patching.

pub mod client;
pub mod patch;
pub mod singleton;

pub use client::create_hub_client;
pub use patch::{add_patch, merge_patch_at, patch_named};
pub use singleton::get_singleton;
