//! Calling report example.
//!
//! Summarizes the Webex Calling setup of every location: call queues, hunt
//! groups, call parks and unassigned numbers.
//!
//! Run with: WEBEX_ACCESS_TOKEN=... cargo run --example calling_report

use webex_rs::api::{CallingQuery, LocationsQuery, NumbersQuery};
use webex_rs::WebexClient;

#[tokio::main]
async fn main() -> webex_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = WebexClient::from_env()?;
    let telephony = client.telephony();

    let locations = client
        .locations()
        .list(LocationsQuery::default())
        .collect_vec()
        .await?;
    println!("Found {} location(s)\n", locations.len());

    for location in &locations {
        let by_location = CallingQuery {
            location_id: Some(location.id.clone()),
            ..Default::default()
        };

        let queues = telephony.call_queues(by_location.clone()).collect_vec().await?;
        let hunt_groups = telephony.hunt_groups(by_location).collect_vec().await?;
        let parks = telephony
            .call_parks(&location.id, CallingQuery::default())
            .collect_vec()
            .await?;
        let numbers = telephony
            .phone_numbers(NumbersQuery {
                location_id: Some(location.id.clone()),
                ..Default::default()
            })
            .collect_vec()
            .await?;
        let unassigned = numbers.iter().filter(|n| n.is_unassigned()).count();

        println!("{}", location.name);
        println!("  call queues:  {}", queues.len());
        for queue in &queues {
            println!(
                "    - {} ({})",
                queue.name,
                queue.extension.as_deref().or(queue.phone_number.as_deref()).unwrap_or("-")
            );
        }
        println!("  hunt groups:  {}", hunt_groups.len());
        println!("  call parks:   {}", parks.len());
        println!("  numbers:      {} ({} unassigned)\n", numbers.len(), unassigned);
    }

    Ok(())
}
