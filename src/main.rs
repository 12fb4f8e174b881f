//! prepcalc
//!
//! An MCP server exposing the catering measurement engine.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use prepcalc::build_info;
use prepcalc::mcp::PrepcalcService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr so it doesn't interfere with MCP stdio.
    // RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("prepcalc=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let service = PrepcalcService::new();

    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    tracing::info!("prepcalc ready");

    server.waiting().await?;

    Ok(())
}
