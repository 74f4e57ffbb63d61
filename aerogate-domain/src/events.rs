use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PassengerRegisteredEvent {
    pub passenger_id: Uuid,
    pub name: String,
    pub timestamp: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LuggageCheckedInEvent {
    pub luggage_id: Uuid,
    pub passenger_id: Uuid,
    pub owner_name: String,
    pub timestamp: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LuggageLoadedEvent {
    pub luggage_id: Uuid,
    pub owner_name: String,
    pub timestamp: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LuggageRemovedEvent {
    pub luggage_id: Uuid,
    pub owner_name: String,
    pub timestamp: i64,
}

/// Every pipeline transition, for the in-memory event log
#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum CheckinEvent {
    PassengerRegistered(PassengerRegisteredEvent),
    LuggageCheckedIn(LuggageCheckedInEvent),
    LuggageLoaded(LuggageLoadedEvent),
    LuggageRemoved(LuggageRemovedEvent),
}
