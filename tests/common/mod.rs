// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Common test utilities for integration tests

#![allow(dead_code)]

use b1ddi::commands::RunOptions;
use std::io::Write;
use tempfile::NamedTempFile;
use wiremock::MockServer;

/// Run options pointing at the mock server with a fixed API key.
pub fn options_for(server: &MockServer) -> RunOptions {
    RunOptions {
        csp_url: Some(server.uri()),
        api_key: Some("integration-key".to_string()),
        ..Default::default()
    }
}

/// Write a parameter document to a temporary file.
pub fn params_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes())
        .expect("write params file");
    file
}

/// Absolute path of a DDI collection on the mock server.
pub fn collection(api_path: &str) -> String {
    format!("/api/ddi/v1/{api_path}")
}
