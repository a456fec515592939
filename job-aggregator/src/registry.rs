use crate::traits::Collector;
use crate::types::{AggregatorError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Source id -> collector. Adding a board means registering one more entry.
#[derive(Default, Clone)]
pub struct CollectorRegistry {
    collectors: HashMap<String, Arc<dyn Collector>>,
}

impl CollectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, source_id: impl Into<String>, collector: Arc<dyn Collector>) {
        let source_id = source_id.into();
        info!("Registering collector for {}: {}", source_id, collector.source_label());
        self.collectors.insert(source_id, collector);
    }

    pub fn with(mut self, source_id: impl Into<String>, collector: Arc<dyn Collector>) -> Self {
        self.register(source_id, collector);
        self
    }

    pub fn get(&self, source_id: &str) -> Result<Arc<dyn Collector>> {
        self.collectors
            .get(source_id)
            .cloned()
            .ok_or_else(|| AggregatorError::UnknownSource {
                id: source_id.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.collectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collectors.is_empty()
    }
}
