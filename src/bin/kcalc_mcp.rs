//! kcalc MCP server
//!
//! Serves the calculator tools over stdio.

use kcalc::build_info;
use kcalc::mcp::KcalcService;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("kcalc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    tracing::info!("Starting MCP server on stdio");

    let service = KcalcService::new();

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    server.waiting().await?;
    tracing::info!("MCP client disconnected, shutting down");

    Ok(())
}
