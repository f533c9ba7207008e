use std::{sync::Arc, time::Duration};

use anyhow::anyhow;
use clap::Parser;
use log::{debug, error, info};
use tokio::sync::watch;

use cards_viewer::{
    CARDS_API_ENDPOINT, CardsRequest, CardsViewModel, DEFAULT_TIMEOUT, HttpCardsService,
    RemoteCardsRepository, StdResult, ViewState,
};

/// Command line arguments for the cards viewer
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Endpoint of the cards API
    #[arg(short, long, env = "CARDS_ENDPOINT", default_value = CARDS_API_ENDPOINT)]
    endpoint: String,

    /// Page of cards to fetch
    #[arg(short, long, env = "CARDS_PAGE")]
    page: Option<u32>,

    /// Number of cards per page
    #[arg(short = 's', long, env = "CARDS_PAGE_SIZE")]
    page_size: Option<u32>,

    /// Timeout of the cards API call, in seconds
    #[arg(
        short,
        long,
        env = "CARDS_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT.as_secs()
    )]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let view_model = build_view_model(&args)?;
    let mut state = view_model.subscribe();
    info!("Fetching cards from {}", args.endpoint);
    let handle = view_model.trigger_fetch();
    let final_state = render_until_settled(&mut state).await?;
    handle.await?;

    if let Some(message) = final_state.error {
        return Err(anyhow!("Failed to fetch cards: {message}"));
    }
    for card in &final_state.cards {
        println!("{card}");
    }

    Ok(())
}

fn build_view_model(args: &Args) -> StdResult<CardsViewModel> {
    let service = Arc::new(HttpCardsService::try_new(
        &args.endpoint,
        Duration::from_secs(args.timeout_secs),
    )?);
    let repository = Arc::new(RemoteCardsRepository::with_request(
        service,
        CardsRequest::new(args.page, args.page_size),
    ));

    Ok(CardsViewModel::new(repository))
}

async fn render_until_settled(state: &mut watch::Receiver<ViewState>) -> StdResult<ViewState> {
    loop {
        state.changed().await?;
        let current = state.borrow_and_update().clone();
        render(&current);
        if current.is_settled() {
            return Ok(current);
        }
    }
}

fn render(state: &ViewState) {
    if state.show_loading {
        info!("Loading cards...");
    }
    if let Some(message) = &state.error {
        error!("Error: {message}");
    }
    if state.show_content {
        info!("Showing {} cards", state.cards.len());
    }
}
