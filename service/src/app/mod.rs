//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and repository ports.

pub mod airplane_service;
pub mod board;
pub mod destination_service;
pub mod flight_service;
pub mod schedule_loader;
pub mod steward_service;
pub mod validation;

pub use airplane_service::AirplaneService;
pub use board::{BoardService, BoardSnapshot, DestinationTraffic};
pub use destination_service::DestinationService;
pub use flight_service::FlightService;
pub use schedule_loader::{LoadedSchedule, ScheduleDocument, ScheduleLoader};
pub use steward_service::StewardService;
