//! library-client - prints the dashboard counters of a library backend
//!
//! Configuration comes from `config/`, `.env` and `LIBRARY_*` variables.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_client::{config::AppConfig, models::ListQuery, LibraryService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_client={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Library client v{} against {}", env!("CARGO_PKG_VERSION"), config.api.base_url);

    let service = LibraryService::new(&config.api)?;

    let stats = service.get_dashboard_stats().await?.into_data();
    println!("Books:     {} total, {} available", stats.total_books, stats.available_books);
    println!("Checkouts: {} total, {} active", stats.total_checkouts, stats.active_checkouts);

    let search = std::env::args().nth(1);
    if let Some(search) = search {
        let books = service
            .list_books(&ListQuery::default().search(search))
            .await?
            .into_data();

        println!(
            "\nMatching books (page {}/{}, {} total):",
            books.pagination.current_page, books.pagination.total_pages, books.pagination.total_items
        );
        for book in &books.data {
            println!("  {:<24} {} by {} ({} available)", book.id, book.title, book.author, book.available_copies);
        }
    }

    Ok(())
}
