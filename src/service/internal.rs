use crate::errors::{ServiceError, ServiceResult};
use crate::hooks::observe::{build_event, ObservationHub, STAGE_CALL};

/// The delegate performing the real work behind the façade.
#[derive(Debug, Clone)]
pub struct InternalService {
    pub field_a: String,
    pub field_b: i64,
    observer: ObservationHub,
}

impl InternalService {
    pub fn new(field_a: impl Into<String>, field_b: i64, observer: ObservationHub) -> Self {
        Self {
            field_a: field_a.into(),
            field_b,
            observer,
        }
    }

    pub fn do_something_a(&self, a: &str) -> ServiceResult<()> {
        let detail = format!("did A with {a}");
        tracing::info!("{detail}");
        self.observer.emit(build_event(STAGE_CALL, None, Some(detail)));
        Ok(())
    }

    pub fn do_something_b(&self) -> (String, Option<ServiceError>) {
        let detail = "did B".to_string();
        tracing::info!("{detail}");
        self.observer.emit(build_event(STAGE_CALL, None, Some(detail)));
        (
            "bye".to_string(),
            Some(ServiceError::Operation("error B".to_string())),
        )
    }

    pub fn do_something_c(&self, a: i64) {
        let detail = format!("did C with {a}");
        tracing::info!("{detail}");
        self.observer.emit(build_event(STAGE_CALL, None, Some(detail)));
    }
}
