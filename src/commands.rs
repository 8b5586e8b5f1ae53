use std::path::Path;

use crate::cli::{Operation, RunArgs};
use crate::config::ServiceConfig;
use crate::errors::{ServiceError, ServiceResult};
use crate::hooks::observe::ObservationHub;
use crate::service::ProxyService;

pub fn run_demo(config: &ServiceConfig, args: &RunArgs) -> ServiceResult<()> {
    let field_a = args
        .field_a
        .clone()
        .unwrap_or_else(|| config.field_a.clone());
    let field_b = args.field_b.unwrap_or(config.field_b);
    let service = ProxyService::new(field_a, field_b);

    let err = service.do_something_a("levi").err();
    println!("A error {}", format_error(err));

    let (value, err) = service.do_something_b();
    println!("B string {} error {}", value, format_error(err));

    service.do_something_c(2023);

    if let Some(path) = &args.trace_file {
        write_trace(service.observer(), path)?;
    }

    Ok(())
}

pub fn run_call(config: &ServiceConfig, operation: &Operation) -> ServiceResult<()> {
    let service = ProxyService::new(config.field_a.clone(), config.field_b);

    match operation {
        Operation::A { arg } => {
            let err = service.do_something_a(arg).err();
            println!("A error {}", format_error(err));
        }
        Operation::B => {
            let (value, err) = service.do_something_b();
            println!("B string {} error {}", value, format_error(err));
        }
        Operation::C { arg } => service.do_something_c(*arg),
    }

    Ok(())
}

fn format_error(err: Option<ServiceError>) -> String {
    err.map(|e| e.to_string())
        .unwrap_or_else(|| "<nil>".to_string())
}

fn write_trace(observer: &ObservationHub, path: &Path) -> ServiceResult<()> {
    let mut lines = String::new();
    for event in observer.snapshot() {
        lines.push_str(&serde_json::to_string(&event)?);
        lines.push('\n');
    }
    std::fs::write(path, lines)?;
    Ok(())
}
