// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

/// Manifest version this build understands.
pub const MANIFEST_VERSION: u32 = 1;

/// `<content>/<locale>/manifest.json`: the ordered list of record files for
/// one locale. Index order follows this list.
#[derive(Deserialize, Clone, Debug)]
pub struct LocaleManifest {
    pub version: u32,
    pub documents: Vec<String>,
}
