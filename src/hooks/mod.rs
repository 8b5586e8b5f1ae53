pub mod contract;
pub mod invoke;
pub mod observe;

pub use contract::Hookable;
pub use invoke::invoke_with_hooks;
