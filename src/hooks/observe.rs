use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::{Deserialize, Serialize};

pub const STAGE_BEFORE_HOOK: &str = "before_hook";
pub const STAGE_CALL: &str = "call";
pub const STAGE_AFTER_HOOK: &str = "after_hook";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationEvent {
    pub timestamp: String,
    pub stage: String,
    pub label: Option<String>,
    pub detail: Option<String>,
}

/// Records hook and call events in the order they happen.
///
/// Clones share the same underlying buffer, so the wrapper and the delegate
/// can emit into one trace.
#[derive(Debug, Clone, Default)]
pub struct ObservationHub {
    events: Arc<Mutex<Vec<ObservationEvent>>>,
}

impl ObservationHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: ObservationEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }

    pub fn snapshot(&self) -> Vec<ObservationEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

pub fn build_event(stage: &str, label: Option<&str>, detail: Option<String>) -> ObservationEvent {
    ObservationEvent {
        timestamp: Utc::now().to_rfc3339(),
        stage: stage.to_string(),
        label: label.map(str::to_string),
        detail,
    }
}
