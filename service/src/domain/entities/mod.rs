//! Domain entities
//!
//! Flights, destinations, stewards and airplanes as the service layer sees them.

pub mod airplane;
pub mod destination;
pub mod flight;
pub mod steward;

pub use airplane::{Airplane, AirplaneId, NewAirplane};
pub use destination::{Destination, DestinationId, NewDestination};
pub use flight::{duplicate_steward, Flight, FlightId, NewFlight};
pub use steward::{NewSteward, Steward, StewardId};
