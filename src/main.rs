use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod routing;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg));

    Ok(())
}

async fn async_main(cfg: config::Config) {
    // Bind failure here (e.g. the port is already in use) is fatal; the
    // restart machinery is never reached
    let listener = match server::create_reusable_listener(server::LISTEN_ADDR) {
        Ok(l) => l,
        Err(e) => {
            logger::log_startup_failed(&e);
            std::process::exit(1);
        }
    };

    logger::log_server_start(&server::LISTEN_ADDR, &cfg);

    let signals = server::start_signal_handler();
    let config = Arc::new(cfg);

    // LocalSet for spawn_local support in the connection tasks
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::run_server_loop(listener, config, signals))
        .await;
}
