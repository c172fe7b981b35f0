use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Running counters for placement activity on one engine instance.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    batches: u64,
    items_placed: u64,
    prepends: u64,
    outline_resets: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_batch(&mut self, item_count: usize, is_append: bool) {
        self.batches = self.batches.saturating_add(1);
        self.items_placed = self.items_placed.saturating_add(item_count as u64);
        if !is_append {
            self.prepends = self.prepends.saturating_add(1);
        }
    }

    /// An outline arrived with the wrong number of columns and was rebuilt;
    /// this normally tracks external container resizes.
    pub fn record_outline_reset(&mut self) {
        self.outline_resets = self.outline_resets.saturating_add(1);
    }

    pub fn batches(&self) -> u64 {
        self.batches
    }

    pub fn items_placed(&self) -> u64 {
        self.items_placed
    }

    pub fn prepends(&self) -> u64 {
        self.prepends
    }

    pub fn outline_resets(&self) -> u64 {
        self.outline_resets
    }

    pub fn snapshot(&self, column_length: usize) -> MetricSnapshot {
        MetricSnapshot {
            batches: self.batches,
            items_placed: self.items_placed,
            prepends: self.prepends,
            outline_resets: self.outline_resets,
            column_length: column_length as u64,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricSnapshot {
    pub batches: u64,
    pub items_placed: u64,
    pub prepends: u64,
    pub outline_resets: u64,
    pub column_length: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target.to_string(),
            "layout_metrics".to_string(),
            self.as_fields(),
        )
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("batches".to_string(), json!(self.batches));
        map.insert("items_placed".to_string(), json!(self.items_placed));
        map.insert("prepends".to_string(), json!(self.prepends));
        map.insert("outline_resets".to_string(), json!(self.outline_resets));
        map.insert("column_length".to_string(), json!(self.column_length));
        map
    }
}
