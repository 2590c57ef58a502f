//! In-memory adapters
//!
//! Implementations of repository traits backed by `HashMap`s behind async locks.
//! Used by the board runner and by tests.

pub mod airplane_repo;
pub mod destination_repo;
pub mod flight_repo;
pub mod steward_repo;

pub use airplane_repo::InMemoryAirplaneRepository;
pub use destination_repo::InMemoryDestinationRepository;
pub use flight_repo::InMemoryFlightRepository;
pub use steward_repo::InMemoryStewardRepository;
