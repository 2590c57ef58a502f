//! Airport departures board
//!
//! Wires the in-memory stores into the services, optionally seeds them from a
//! schedule document and logs a board snapshot.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use airport_service::adapters::{
    InMemoryAirplaneRepository, InMemoryDestinationRepository, InMemoryFlightRepository,
    InMemoryStewardRepository,
};
use airport_service::app::{
    AirplaneService, BoardService, DestinationService, FlightService, ScheduleLoader,
    StewardService,
};
use airport_service::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Invalid AIRPORT_BOARD_AT")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting airport board...");

    // Create adapters
    let flight_repo = Arc::new(InMemoryFlightRepository::new());
    let destination_repo = Arc::new(InMemoryDestinationRepository::new());
    let steward_repo = Arc::new(InMemoryStewardRepository::new());
    let airplane_repo = Arc::new(InMemoryAirplaneRepository::new());

    // Create application services
    let flight_service = Arc::new(FlightService::new(flight_repo.clone()));
    let destination_service = Arc::new(DestinationService::new(
        destination_repo.clone(),
        flight_repo.clone(),
    ));
    let steward_service = Arc::new(StewardService::new(steward_repo.clone()));
    let airplane_service = Arc::new(AirplaneService::new(airplane_repo.clone()));

    if let Some(path) = &config.schedule_path {
        let loader = ScheduleLoader::new(
            destination_service.clone(),
            flight_service.clone(),
            steward_service.clone(),
            airplane_service.clone(),
        );
        loader
            .load_file(path)
            .await
            .with_context(|| format!("Failed to load schedule from {}", path.display()))?;
    } else {
        tracing::info!("No AIRPORT_SCHEDULE_PATH set, board will be empty");
    }

    let board = BoardService::new(flight_service.clone(), destination_service.clone());
    let snapshot = board.snapshot(config.board_instant()).await?;

    tracing::info!(at = %snapshot.at, airborne = snapshot.airborne.len(), "Board snapshot");
    for flight in &snapshot.airborne {
        tracing::info!(
            flight_id = %flight.id,
            departure = %flight.departure_time,
            arrival = %flight.arrival_time,
            remaining_minutes = (flight.arrival_time - snapshot.at).num_minutes(),
            "In the air"
        );
    }
    for traffic in &snapshot.traffic {
        tracing::info!(
            destination = %traffic.destination,
            incoming = traffic.incoming,
            outgoing = traffic.outgoing,
            "Traffic"
        );
    }

    Ok(())
}
