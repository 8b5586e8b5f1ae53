use crate::errors::{ServiceError, ServiceResult};
use crate::hooks::invoke_with_hooks;
use crate::hooks::observe::ObservationHub;
use crate::service::internal::InternalService;
use crate::service::wrapper::ServiceWrapper;

const HOOK_LABEL_A: &str = "hookValueA";
const HOOK_LABEL_B: &str = "hookValueB";
const HOOK_LABEL_C: &str = "hookValueC";

/// Public façade over the delegate. Every operation goes through
/// [`invoke_with_hooks`] with a fixed per-operation label, so each call is
/// hook-bracketed without duplicating that logic at the call sites.
#[derive(Debug, Clone)]
pub struct ProxyService {
    wrapper: ServiceWrapper,
}

impl ProxyService {
    pub fn new(field_a: impl Into<String>, field_b: i64) -> Self {
        Self::with_observer(field_a, field_b, ObservationHub::new())
    }

    pub fn with_observer(
        field_a: impl Into<String>,
        field_b: i64,
        observer: ObservationHub,
    ) -> Self {
        let inner = InternalService::new(field_a, field_b, observer.clone());
        Self {
            wrapper: ServiceWrapper::new(inner, observer),
        }
    }

    pub fn observer(&self) -> &ObservationHub {
        self.wrapper.observer()
    }

    pub fn do_something_a(&self, a: &str) -> ServiceResult<()> {
        invoke_with_hooks(&self.wrapper, HOOK_LABEL_A, |w| w.do_something_a(a))
    }

    pub fn do_something_b(&self) -> (String, Option<ServiceError>) {
        invoke_with_hooks(&self.wrapper, HOOK_LABEL_B, |w| w.do_something_b())
    }

    pub fn do_something_c(&self, a: i64) {
        invoke_with_hooks(&self.wrapper, HOOK_LABEL_C, |w| w.do_something_c(a))
    }
}
