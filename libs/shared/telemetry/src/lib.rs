// [libs/shared/telemetry/src/lib.rs]
//! Structured tracing initialization shared by every Elydora binary:
//! the CLI and any host-process embedding the SDK directly.
//!
//! [`init_tracing`] installs an `EnvFilter` (`RUST_LOG`-driven, default
//! `debug` in debug builds / `info` in release), a compact human-readable
//! formatter in development, a JSON formatter when `EL_ENV=production`,
//! and a panic hook that logs the panic location and payload through
//! `tracing::error!` before the default hook runs.

use std::panic;

use tracing::error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber and panic hook for `service_name`.
///
/// Panics if a global subscriber has already been installed. Call this
/// exactly once, as early as possible in `main`.
pub fn init_tracing(service_name: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };
        format!("{service_name}={default_level},tower_http=warn,hyper=warn").into()
    });

    let production = std::env::var("EL_ENV").map(|v| v == "production").unwrap_or(false);

    if production {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().flatten_event(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_target(false))
            .init();
    }

    install_panic_hook(service_name);
}

fn install_panic_hook(service_name: &str) {
    let service_name = service_name.to_string();
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| panic_info.payload().downcast_ref::<String>().map(String::as_str))
            .unwrap_or("<non-string panic payload>");

        error!(target: "panic", service = %service_name, location = %location, "panicked: {payload}");
        default_hook(panic_info);
    }));
}
