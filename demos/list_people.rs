//! List people example.
//!
//! Streams every person in the organization, one page at a time, and prints
//! their calling details.
//!
//! Run with: WEBEX_ACCESS_TOKEN=... cargo run --example list_people

use futures_util::StreamExt;
use webex_rs::api::PeopleQuery;
use webex_rs::WebexClient;

#[tokio::main]
async fn main() -> webex_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = WebexClient::from_env()?;

    let me = client.people().me().await?;
    println!("Signed in as {}", me.display_name.as_deref().unwrap_or("?"));

    let mut people = client.people().list(PeopleQuery {
        calling_data: Some(true),
        ..Default::default()
    });

    let mut count = 0;
    while let Some(person) = people.next().await {
        let person = person?;
        count += 1;
        println!(
            "  - {:<30} {:<40} ext={}",
            person.display_name.as_deref().unwrap_or(""),
            person.primary_email().unwrap_or(""),
            person.extension.as_deref().unwrap_or("-"),
        );
    }

    println!("\n{} people in {} page(s)", count, people.pages_fetched());
    Ok(())
}
