use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::time::OffsetTime, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::logger::{config::LoggerConfig, error::LoggerError, format::LoggerFormat};

/// Build the subscriber for `cfg` and install it as the global default.
pub(crate) fn install(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    let filter = cfg.level.filter()?;

    match cfg.format {
        LoggerFormat::Text => {
            let layer = fmt::layer()
                .with_ansi(cfg.use_color)
                .with_target(cfg.with_targets)
                .with_timer(local_rfc3339());
            try_install(tracing_subscriber::registry().with(filter).with(layer))
        }
        LoggerFormat::Json => {
            // Event fields (status, url, instance_id) land at the top level
            // of each record; the enclosing span adds the app name.
            let layer = fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_span_list(false)
                .with_target(cfg.with_targets)
                .with_timer(local_rfc3339());
            try_install(tracing_subscriber::registry().with(filter).with(layer))
        }
        LoggerFormat::Journald => journald(filter),
    }
}

fn local_rfc3339() -> OffsetTime<Rfc3339> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(offset, Rfc3339)
}

fn try_install<S>(subscriber: S) -> Result<(), LoggerError>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber.try_init().map_err(|e| {
        let msg = e.to_string();
        if msg.contains("already") {
            LoggerError::AlreadyInitialized
        } else {
            LoggerError::InitializationFailed(msg)
        }
    })
}

#[cfg(all(target_os = "linux", feature = "journald"))]
fn journald(filter: EnvFilter) -> Result<(), LoggerError> {
    let layer = tracing_journald::layer()
        .map_err(|e| LoggerError::InitializationFailed(format!("journald: {e}")))?
        .with_syslog_identifier("eureka-client".to_string());
    try_install(tracing_subscriber::registry().with(filter).with(layer))
}

#[cfg(not(all(target_os = "linux", feature = "journald")))]
fn journald(_filter: EnvFilter) -> Result<(), LoggerError> {
    Err(LoggerError::JournaldNotSupported)
}
