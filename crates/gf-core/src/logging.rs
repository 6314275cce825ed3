use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initialize the tracing subscriber for a gigfeed binary.
///
/// Filtering comes from `RUST_LOG` (default `info`). When `GF_LOG_DIR` is
/// set, output goes to `<GF_LOG_DIR>/<app>.log` with daily rotation;
/// otherwise logs go to stdout. Safe to call more than once.
pub fn init_tracing_subscriber(app_name: &'static str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    if let Some(writer) = rotating_file_writer(app_name) {
        let _ = builder.with_writer(writer).try_init();
    } else {
        let _ = builder.try_init();
    }
}

fn rotating_file_writer(app_name: &'static str) -> Option<BoxMakeWriter> {
    let dir = std::path::PathBuf::from(std::env::var_os("GF_LOG_DIR")?);
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!("gigfeed: cannot create GF_LOG_DIR ({err}); logging to stdout");
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Some(BoxMakeWriter::new(non_blocking))
}

/// Route panics through `tracing::error!` with location context so a crash
/// in a binary still lands in the structured log. Installed once per
/// process.
pub fn install_tracing_panic_hook(app_name: &'static str) {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        std::panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                .unwrap_or_else(|| "unknown".into());
            let message = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "panic payload not string".into());

            tracing::error!(application = app_name, %location, panic_message = %message, "panic captured");
        }));
    });
}
