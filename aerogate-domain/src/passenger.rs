use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flight the passenger is checking in for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightInfo {
    pub airline: String,
    pub terminal: i32,
}

/// Check-in lifecycle state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckInState {
    Registered,
    LuggageCaptured,
    Queued,
    Loaded,
    Removed,
}

impl std::fmt::Display for CheckInState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CheckInState::Registered => "REGISTERED",
            CheckInState::LuggageCaptured => "LUGGAGE_CAPTURED",
            CheckInState::Queued => "QUEUED",
            CheckInState::Loaded => "LOADED",
            CheckInState::Removed => "REMOVED",
        };
        f.pad(s)
    }
}

/// A registered passenger awaiting (or having completed) check-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    pub id: Uuid,
    pub name: String,
    /// Intentionally permissive: any integer, including 0 or negative.
    pub bag_count: i32,
    pub flight: FlightInfo,
    /// Set once check-in completes. A lookup key, never a second owner:
    /// the luggage record itself lives in whichever collection holds it.
    pub luggage_id: Option<Uuid>,
    pub state: CheckInState,
    pub registered_at: DateTime<Utc>,
}

impl Passenger {
    pub fn new(name: String, bag_count: i32, airline: String, terminal: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            bag_count,
            flight: FlightInfo { airline, terminal },
            luggage_id: None,
            state: CheckInState::Registered,
            registered_at: Utc::now(),
        }
    }

    /// Update lifecycle state
    pub fn update_state(&mut self, new_state: CheckInState) {
        self.state = new_state;
    }

    /// Bind the passenger to their luggage record
    pub fn attach_luggage(&mut self, luggage_id: Uuid) {
        self.luggage_id = Some(luggage_id);
    }
}
