use freebies_api::{load_free_games, CatalogClient, CatalogSource, GeminiClient, StubCatalog, Summarizer};
use std::env;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let source: Box<dyn CatalogSource> = match env::var("FREEBIES_CATALOG_URL") {
        Ok(url) => Box::new(
            CatalogClient::new(url)
                .with_rapidapi(env::var("RAPIDAPI_KEY").ok(), env::var("RAPIDAPI_HOST").ok()),
        ),
        Err(_) => {
            println!("FREEBIES_CATALOG_URL not set, using the bundled catalog.\n");
            Box::new(StubCatalog)
        }
    };

    let games = match load_free_games(source.as_ref()).await {
        Ok(games) => games,
        Err(e) => {
            eprintln!("Error fetching catalog: {}", e);
            return;
        }
    };

    println!("Currently free ({}):", games.current_games.len());
    for (i, offer) in games.current_games.iter().enumerate() {
        println!("{}. {} ({})", i + 1, offer.title, offer.seller.name);
    }
    println!("\nComing soon ({}):", games.next_games.len());
    for (i, offer) in games.next_games.iter().enumerate() {
        println!("{}. {} ({})", i + 1, offer.title, offer.seller.name);
    }

    let Some(first) = games.current_games.first() else {
        return;
    };

    let summarizer = GeminiClient::new(
        env::var("GOOGLE_GENAI_API_KEY").ok(),
        freebies_api::summary::DEFAULT_MODEL,
    );
    println!("\nSummarizing {}...", first.title);
    match summarizer.summarize(&first.description).await {
        Ok(summary) => println!("{}", summary),
        Err(e) => eprintln!("Error generating summary: {}", e),
    }
}
