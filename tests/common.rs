// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and temporary nutrition CSV fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::expect_used
)]
//! Shared test utilities for `glycemic_guard`

use std::io::Write;
use std::path::PathBuf;
use std::sync::Once;

use glycemic_guard::knowledge_base::KnowledgeBase;
use tempfile::NamedTempFile;

static INIT_LOGGER: Once = Once::new();

/// CSV header in canonical column order
pub const HEADER: &str =
    "name,glycemic_index,carbohydrates,fiber,protein,fat,processing_level,serving_size_grams";

/// Small table covering every category and the missing-data path
pub const FIXTURE_ROWS: &str = "\
rice,73,28.0,0.4,2.7,0.3,processed,158
apple,36,14.0,2.4,0.3,0.2,whole,182
cabbage cruciferous boiled,20,6.0,2.5,1.3,0.2,whole,98
arborio rice boiled,94,28.7,0.9,2.9,0.6,processed,162
deli turkey poached,0,0.3,0.0,29.0,1.0,minimally_processed,100
banana ripe raw,51,22.8,2.6,1.1,0.3,whole,118
kale leafy green raw,15,4.4,,2.9,0.4,whole,67
";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Write `HEADER` plus `rows` to a temporary CSV file
pub fn write_csv(rows: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp csv");
    writeln!(file, "{HEADER}").expect("write header");
    file.write_all(rows.as_bytes()).expect("write rows");
    file.flush().expect("flush csv");
    file
}

/// Knowledge base loaded from the fixture table through a real file
pub fn fixture_knowledge_base() -> KnowledgeBase {
    init_test_logging();
    let file = write_csv(FIXTURE_ROWS);
    KnowledgeBase::from_path(file.path()).expect("load fixture knowledge base")
}

/// Path of the bundled seed table
pub fn bundled_data_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/nutrition_data.csv")
}
