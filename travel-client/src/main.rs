use std::process::ExitCode;

use chrono::NaiveDate;

use travel_client::api::GatewayConfig;
use travel_client::app::App;
use travel_client::directory::{DirectorySnapshot, SnapshotConfig};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Usage: travel-client <origin-code> <destination-code> <YYYY-MM-DD>
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [origin, destination, date] = args.as_slice() else {
        eprintln!("Usage: travel-client <origin-code> <destination-code> <YYYY-MM-DD>");
        return ExitCode::FAILURE;
    };

    let date = match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(date) => date,
        Err(e) => {
            eprintln!("Invalid date {date:?}: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Get backend coordinates from environment
    let base_url = std::env::var("TRAVEL_API_URL")
        .unwrap_or_else(|_| "http://localhost:8080/api".to_string());
    let username = std::env::var("TRAVEL_USERNAME").unwrap_or_else(|_| {
        eprintln!("Warning: TRAVEL_USERNAME not set. Login will fail.");
        String::new()
    });
    let password = std::env::var("TRAVEL_PASSWORD").unwrap_or_default();

    let config = GatewayConfig::new().with_base_url(base_url);
    let mut app = App::new(config).expect("Failed to create travel client");

    // Authenticate
    if let Err(e) = app.auth().login(&username, &password).await {
        eprintln!("Login failed: {e}");
        return ExitCode::FAILURE;
    }

    // Warm-start the directory from the snapshot if a fresh one exists,
    // otherwise drain the location pages and write a new snapshot.
    let snapshot = DirectorySnapshot::new(SnapshotConfig::default());
    match snapshot.load() {
        Some(locations) => {
            app.directory().seed(locations).await;
            println!(
                "Loaded {} locations from snapshot ({})",
                app.directory().len().await,
                snapshot.path().display()
            );
        }
        None => {
            match app.directory().refresh().await {
                Ok(count) => println!("Loaded {count} locations"),
                Err(e) => {
                    eprintln!("Failed to load locations: {e}");
                    return ExitCode::FAILURE;
                }
            }
            let locations = app.directory().all().await;
            if let Err(e) = snapshot.save(&locations) {
                eprintln!("Warning: could not write snapshot: {e}");
            }
        }
    }

    // Search and rank
    let origin_name = app.directory().resolve(origin).await;
    let destination_name = app.directory().resolve(destination).await;
    println!();
    println!("Routes {origin_name} -> {destination_name} on {date}:");

    match app.search(origin, destination, date).await {
        Ok(0) => {
            println!("  (no routes found)");
            return ExitCode::SUCCESS;
        }
        Ok(_) => {}
        Err(e) => {
            eprintln!("Search failed: {e}");
            return ExitCode::FAILURE;
        }
    }

    for (i, itinerary) in app.results().items().iter().enumerate() {
        let legs = itinerary.leg_count;
        let noun = if legs == 1 { "leg" } else { "legs" };
        println!("  {}. {} [{} {}]", i + 1, itinerary.display_name, legs, noun);
    }

    // Show the best itinerary's stop chain
    app.results_mut().select(0);
    if let Some(best) = app.results().selected() {
        println!();
        println!("{}:", best.display_name);
        for stop in &best.route.stops {
            let location = &stop.location;
            println!(
                "  {} - {} ({}, {})",
                location.location_code, location.name, location.city, location.country
            );
            if let Some(mode) = stop.transportation_type_to_next {
                println!("      | {mode}");
            }
        }
    }

    ExitCode::SUCCESS
}
