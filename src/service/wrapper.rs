use crate::errors::{ServiceError, ServiceResult};
use crate::hooks::contract::Hookable;
use crate::hooks::observe::{build_event, ObservationHub, STAGE_AFTER_HOOK, STAGE_BEFORE_HOOK};
use crate::service::internal::InternalService;

/// Wraps the delegate with the hook pair and forwards exactly the
/// operations the façade exposes. Owns the delegate for its lifetime.
#[derive(Debug, Clone)]
pub struct ServiceWrapper {
    inner: InternalService,
    observer: ObservationHub,
}

impl ServiceWrapper {
    pub fn new(inner: InternalService, observer: ObservationHub) -> Self {
        Self { inner, observer }
    }

    pub fn observer(&self) -> &ObservationHub {
        &self.observer
    }

    pub fn do_something_a(&self, a: &str) -> ServiceResult<()> {
        self.inner.do_something_a(a)
    }

    pub fn do_something_b(&self) -> (String, Option<ServiceError>) {
        self.inner.do_something_b()
    }

    pub fn do_something_c(&self, a: i64) {
        self.inner.do_something_c(a)
    }
}

impl Hookable for ServiceWrapper {
    fn before_hook(&self, label: &str) {
        tracing::info!("this is before hook {label}");
        self.observer
            .emit(build_event(STAGE_BEFORE_HOOK, Some(label), None));
    }

    fn after_hook(&self) {
        tracing::info!("this is after hook");
        self.observer.emit(build_event(STAGE_AFTER_HOOK, None, None));
    }
}
