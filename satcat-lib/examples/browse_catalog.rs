//! Fetch the satellite catalog and browse it from the terminal.
//!
//! Run with: cargo run --example browse_catalog
//!
//! Requires .env file with:
//! - SATCAT_URL
//!
//! Optional:
//! - SATCAT_NAME_PREFIX (search the catalog by name prefix)

use std::env;

use satcat_lib::browse::CatalogBrowser;
use satcat_lib::query::SearchCriteria;
use satcat_lib::SatcatClient;
use simplelog::{Config, LevelFilter, SimpleLogger};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let _ = SimpleLogger::init(LevelFilter::Debug, Config::default());

    let url = env::var("SATCAT_URL").expect("SATCAT_URL not set");

    let client = SatcatClient::builder().url(url).build();

    let mut browser = CatalogBrowser::new();

    println!("Fetching catalog...\n");
    browser.initialize(&client).await;

    if let Some(failure) = browser.fetch_failure() {
        println!("Fetch failed: {failure}");
        return Ok(());
    }

    println!("Fetched {} records", browser.records().len());

    if let Ok(prefix) = env::var("SATCAT_NAME_PREFIX") {
        browser.apply_search(SearchCriteria::new().with_name(&prefix));
        println!(
            "{} records match name prefix {:?}",
            browser.shown_count(),
            prefix
        );
    }

    println!();
    for record in browser.displayed().iter().take(20) {
        println!(
            "  {:>9}  {:<24} {:<12} {}",
            record.norad_cat_id,
            record.name,
            record.object_type.as_str(),
            record.orbital_code
        );
    }
    if browser.shown_count() > 20 {
        println!("  ... and {} more", browser.shown_count() - 20);
    }

    Ok(())
}
