// tests/support.rs
//! Shared test utilities — tracing init and payload fixtures

use serde::{Deserialize, Serialize};

pub fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Representative structured payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doc {
    pub id: u64,
    pub title: String,
    pub tags: Vec<String>,
}

#[allow(dead_code)] // not every integration test file uses the fixture
pub fn sample_doc() -> Doc {
    Doc {
        id: 42,
        title: "meeting notes".into(),
        tags: vec!["private".into(), "q3".into()],
    }
}
