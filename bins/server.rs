use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

fn init_logging() {
    // 提前加载 .env，使 RUST_LOG / LOG_FORMAT 生效
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = "contacts", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "contacts",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    // 只读取一次 config.toml；不可用时回退到环境变量
    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            warn!(service = "contacts", event = "config_fallback", error = %e, "config file not usable, using environment");
            None
        }
    };
    let settings = match server::Settings::resolve(cfg.as_ref()) {
        Ok(s) => s,
        Err(e) => {
            error!(service = "contacts", event = "invalid_settings", error = %e, "cannot resolve server settings");
            return std::process::ExitCode::FAILURE;
        }
    };

    // 线程数：优先 config.toml，其次 TOKIO_WORKER_THREADS
    let worker_threads = match &cfg {
        Some(cfg) => cfg.server.worker_threads,
        None => std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()),
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "contacts", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "contacts",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "contacts service starting"
    );

    // 收到 Ctrl+C 后 server::run 会先处理完进行中的请求再返回
    match rt.block_on(server::run(settings)) {
        Ok(()) => {
            info!(service = "contacts", event = "stop", %service_id, pid, "server stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "contacts", event = "run_failed", error = %e, "server::run returned error");
            std::process::ExitCode::FAILURE
        }
    }
}
