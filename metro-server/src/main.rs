use std::net::SocketAddr;
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use metro_server::ingest;
use metro_server::web::{AppState, create_router};

/// Default bind address.
const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Network file from argv, falling back to the environment
    let network_file = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("METRO_NETWORK").ok())
        .unwrap_or_else(|| "network.txt".to_string());

    // One-time publish: the network is fully loaded before the first query
    let network = match ingest::load_network(&network_file) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("Failed to load network from {network_file}: {e}");
            return ExitCode::FAILURE;
        }
    };
    if network.is_empty() {
        eprintln!("Network file {network_file} defines no edges. Exiting.");
        return ExitCode::FAILURE;
    }

    info!(
        file = %network_file,
        stations = network.stations().len(),
        edges = network.edge_count(),
        "network loaded"
    );

    let static_dir =
        std::env::var("METRO_STATIC_DIR").unwrap_or_else(|_| "metro-server/static".to_string());

    let state = AppState::new(network);
    let app = create_router(state, &static_dir);

    let addr: SocketAddr = std::env::var("METRO_ADDR")
        .ok()
        .and_then(|a| a.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(DEFAULT_ADDR));

    println!("Metro route planner listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET /health          - Health check");
    println!("  GET /api/stations    - List known stations");
    println!("  GET /api/route       - Plan a route (?from=...&to=...)");
    println!("  GET /api/route/text  - Same, as a plain-text listing");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
    ExitCode::SUCCESS
}
