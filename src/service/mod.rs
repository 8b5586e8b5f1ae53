pub mod internal;
pub mod proxy;
pub mod wrapper;

pub use proxy::ProxyService;
