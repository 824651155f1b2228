use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};

use guest_users::common::config::BrowserConfig;
use guest_users::common::errors::BoxError;
use guest_users::graphql::UsersApiClient;
use guest_users::pagination::Paginator;
use guest_users::view::{render_controls, render_page, Command, USAGE};

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = BrowserConfig::from_env()?;
    let client = UsersApiClient::new(&config.graphql_url, &config.api_key, config.http_timeout)?;

    info!("Loading first page from {}", config.graphql_url);
    let mut paginator = Paginator::load(client, config.page_size).await?;

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(render_page(paginator.state()).as_bytes())
        .await?;
    stdout.write_all(format!("{USAGE}\n").as_bytes()).await?;
    stdout.flush().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = Command::parse(&line) else {
            stdout.write_all(format!("{USAGE}\n").as_bytes()).await?;
            stdout.flush().await?;
            continue;
        };

        let result = match command {
            Command::Quit => break,
            Command::Next => paginator.next_page().await,
            Command::Previous => paginator.previous_page().await,
            Command::Jump(page) => paginator.jump_to(page).await,
        };

        let output = match result {
            Ok(true) => render_page(paginator.state()),
            Ok(false) => format!("{}\n", render_controls(paginator.state())),
            Err(err) => {
                error!("Failed to load page: {}", err);
                continue;
            }
        };
        stdout.write_all(output.as_bytes()).await?;
        stdout.flush().await?;
    }

    Ok(())
}
