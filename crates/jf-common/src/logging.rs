use std::panic;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initialize the tracing subscriber. `RUST_LOG` controls filtering (default
/// `info`); when `JF_LOG_DIR` is set, output goes to a daily-rotated
/// `<dir>/<app>.log` instead of stdout.
pub fn init_tracing(app_name: &'static str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match file_writer(app_name) {
        Some(writer) => {
            let _ = builder.with_writer(writer).try_init();
        }
        None => {
            let _ = builder.try_init();
        }
    }
}

fn file_writer(app_name: &'static str) -> Option<BoxMakeWriter> {
    let dir = std::path::PathBuf::from(std::env::var_os("JF_LOG_DIR")?);
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!("failed to create JF_LOG_DIR, logging to stdout: {err}");
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Some(BoxMakeWriter::new(non_blocking))
}

/// Route panics through `tracing` with thread and location context. Installed
/// once per process; repeat calls are no-ops.
pub fn install_panic_hook(app_name: &'static str) {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        panic::set_hook(Box::new(move |info| {
            let thread = std::thread::current();
            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()));
            let message = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "panic payload not string".into());

            tracing::error!(
                application = app_name,
                thread_name = thread.name().unwrap_or("unknown"),
                location = location.as_deref().unwrap_or("unknown"),
                panic_message = %message,
                "panic captured"
            );
        }));
    });
}
