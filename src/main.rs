// Gallery search terminal driver
//
// Reads commands from stdin and pages through backend search results.
// Backend location and sizes come from GALLERY_SEARCH_* environment variables.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use kodegen_tools_gallery_search::config::{client_config_from_env, session_config_from_env};
use kodegen_tools_gallery_search::driver::{Command, Driver, HELP_TEXT, Step};
use kodegen_tools_gallery_search::utils::DEFAULT_GALLERY;
use kodegen_tools_gallery_search::{HttpBackend, SearchSession};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let client_config = client_config_from_env().context("Invalid backend configuration")?;
    let session_config = session_config_from_env().context("Invalid session configuration")?;
    tracing::info!(
        endpoint = %client_config.endpoint(),
        page_size = session_config.page_size(),
        batch_size = session_config.batch_size(),
        "Starting gallery search"
    );

    let backend = HttpBackend::new(client_config).context("Failed to create HTTP client")?;
    let session = SearchSession::new(backend.clone(), session_config);
    let mut driver = Driver::new(session, backend, DEFAULT_GALLERY);

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(format!("{HELP_TEXT}\n\ngallery: {}\n", driver.gallery()).as_bytes())
        .await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let output = match line.parse::<Command>() {
            Ok(command) => match driver.execute(command).await {
                Step::Print(text) => text,
                Step::Quit => break,
            },
            Err(message) => format!("{message}\n"),
        };
        stdout.write_all(output.as_bytes()).await?;
    }

    Ok(())
}
