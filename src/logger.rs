use std::io;

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

fn logging_level() -> LevelFilter {
    match std::env::var("MD64_DEBUG").as_deref() {
        Ok("trace") => LevelFilter::Trace,
        Ok("debug") => LevelFilter::Debug,
        Ok("info") => LevelFilter::Info,
        Ok("warn") => LevelFilter::Warn,
        Ok("error") => LevelFilter::Error,
        _ => LevelFilter::Info, // default if unset or unknown
    }
}

pub fn setup_logger() {
    let level_filter = logging_level();

    // Diagnostics go to stderr; stdout stays clean for piped decode output.
    if let Err(e) = Dispatch::new()
        .format(move |out, message, record| match level_filter {
            LevelFilter::Info => {
                out.finish(format_args!("[{}]: {}", record.level(), message));
            }
            _ => {
                out.finish(format_args!(
                    "[{}][{}]: {} <{}:{}>",
                    Local::now().format("%b-%d-%Y %H:%M:%S.%f"),
                    record.level(),
                    message,
                    record.file().unwrap_or("unknown_file"),
                    record.line().map_or(0, |l| l),
                ));
            }
        })
        .level(level_filter)
        .chain(io::stderr())
        .apply()
    {
        eprintln!("Logger initialization failed: {e}");
    }
    log::debug!("Enabled log {level_filter}.");
}
