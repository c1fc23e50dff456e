// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use readerscrape::utils::telemetry;

#[test]
fn test_telemetry_initialization_is_repeatable() {
    telemetry::init_telemetry();
    // a second call must not panic
    telemetry::init_telemetry();

    tracing::info!(
        url = "https://example.com/",
        domain = "example.com",
        bytes = 42,
        "Content saved"
    );
    tracing::warn!(error = "HTTP 500", "Fetch failed");
}
