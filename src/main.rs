use clap::Parser;
use search_widget::controller::ENTER_KEY;
use search_widget::{HttpSearchClient, SearchController, SearchPage, UiEvent};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Run searches against a search backend and print the resulting page regions.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Base URL of the search backend (defaults to SEARCH_ENDPOINT)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Query to search for. Without one, each line of stdin is submitted.
    query: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = match args.endpoint {
        Some(endpoint) => HttpSearchClient::new(&endpoint)?,
        None => HttpSearchClient::from_config()?,
    };
    tracing::info!("using search endpoint {}", client.request_url(""));

    let controller = SearchController::new(client, SearchPage::new());

    match args.query {
        Some(query) => {
            controller.set_query(query).await;
            let outcome = controller.handle_event(UiEvent::ButtonClick).await;
            tracing::info!("search finished: {outcome:?}");
            print!("{}", controller.page().await.to_html());
        }
        None => {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                controller.set_query(line).await;
                let outcome = controller.handle_event(UiEvent::key_up(ENTER_KEY)).await;
                tracing::info!("search finished: {outcome:?}");
                println!("{}", controller.page().await.to_html());
            }
        }
    }
    Ok(())
}
