use anyhow::{Context, Result};
use orgsite::Config;
use tracing::{info, warn};

fn main() -> Result<()> {
    orgsite::logging::init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let summary = orgsite::generate_site(&config).context("Failed to generate site")?;

    match summary.repo_count {
        Some(count) => info!(
            repositories = count,
            pages = summary.repo_pages,
            "repository table ready"
        ),
        None => warn!("repository table replaced by error message"),
    }
    info!(path = %summary.index_path.display(), "generated site");

    if !config.no_open
        && let Err(e) = open::that(&summary.index_path)
    {
        warn!(error = %e, "cannot open browser");
    }

    Ok(())
}
