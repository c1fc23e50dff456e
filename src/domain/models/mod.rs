// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod content_record;
pub mod domain_summary;
pub mod fetch_result;
pub mod run_metrics;
pub mod url_entry;

pub use content_record::ContentRecord;
pub use domain_summary::DomainSummary;
pub use fetch_result::FetchResult;
pub use run_metrics::RunMetrics;
pub use url_entry::UrlEntry;
