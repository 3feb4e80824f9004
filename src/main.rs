use std::sync::Arc;

use joke_mcp_server::{
    build_app,
    config::{Config, Transport},
    domain::{
        catalog::Catalog,
        random::{RandomSource, SeededRandom, ThreadRandom},
    },
    logging,
    mcp::stdio::serve_stdio,
    AppState,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::load()?;

    let random: Arc<dyn RandomSource> = match config.random_seed {
        Some(seed) => {
            info!(seed, "using seeded random source");
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom::new()),
    };
    let state = AppState::new(Catalog::builtin(), random);

    match config.transport {
        Transport::Stdio => {
            print_startup_lines(&config);
            serve_stdio(state).await?;
        }
        Transport::Http => {
            let bind_socket = config.bind_socket()?;
            let listener = tokio::net::TcpListener::bind(bind_socket).await?;

            info!(
                bind_addr = %config.bind_addr,
                bind_port = config.bind_port,
                "server starting"
            );
            print_startup_lines(&config);

            axum::serve(listener, build_app(state).into_make_service()).await?;
        }
    }

    Ok(())
}

fn print_startup_lines(config: &Config) {
    for line in config.startup_lines() {
        eprintln!("{line}");
    }
}
