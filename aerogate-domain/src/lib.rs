pub mod events;
pub mod luggage;
pub mod passenger;

pub use events::CheckinEvent;
pub use luggage::Luggage;
pub use passenger::{CheckInState, FlightInfo, Passenger};
