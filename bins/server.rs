use dotenvy::dotenv;
use tracing::{error, info};

fn main() -> std::process::ExitCode {
    // .env first so RUST_LOG, DATABASE_URL and SERVER_* take effect
    dotenv().ok();

    let cfg = match configs::AppConfig::load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("invalid configuration ({}): {e:#}", configs::config_path());
            return std::process::ExitCode::FAILURE;
        }
    };
    common::utils::logging::init_logging(cfg.log.json);

    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "server",
            event = "panic",
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "server", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "server",
        event = "start",
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "parcel server starting"
    );

    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(service = "server", event = "stop", pid, "server stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "server", event = "run_failed", error = %e, "server::run returned error");
            std::process::ExitCode::FAILURE
        }
    }
}
