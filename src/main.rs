//! kcalc
//!
//! Prints the demonstration report for a sample profile.

use tracing_subscriber::EnvFilter;

use kcalc::tools::report;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr, the report owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("kcalc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let profile = report::demo_profile()?;
    tracing::debug!(?profile, "Rendering demo report");

    print!("{}", report::render_report(&profile)?);

    Ok(())
}
