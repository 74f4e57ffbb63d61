use serde::{Deserialize, Serialize};

use aerogate_domain::{Luggage, Passenger};

/// Registration details captured at the counter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassengerRegistration {
    pub name: String,
    pub bag_count: i32,
    pub airline: String,
    pub terminal: i32,
}

/// Luggage details captured during check-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LuggageSpec {
    pub size: String,
    pub weight_kg: f64,
}

/// Snapshot returned by a completed check-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInResult {
    pub passenger: Passenger,
    pub luggage: Luggage,
    pub remaining_in_queue: usize,
}

/// Outcome of moving one bag from the belt onto the cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnloadResult {
    pub owner_name: String,
    pub belt_now_empty: bool,
}

/// One bag taken off the cart during final unloading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartRemoval {
    pub owner_name: String,
}
