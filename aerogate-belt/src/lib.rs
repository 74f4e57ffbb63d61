pub mod baggage_queue;
pub mod cart;
pub mod passenger_queue;

pub use baggage_queue::{BaggageQueue, BaggageQueueError};
pub use cart::{CartError, CartStack};
pub use passenger_queue::{PassengerQueue, PassengerQueueError};
