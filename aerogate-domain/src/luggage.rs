use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::passenger::Passenger;

/// A luggage record captured during check-in.
///
/// Owned by exactly one collection at a time (baggage belt or cart).
/// `owner_id` is a non-owning back-reference used for lookups only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Luggage {
    pub id: Uuid,
    pub size: String,
    /// Accepted as given; callers coerce at the boundary.
    pub weight_kg: f64,
    /// Denormalized copy of the owner's name
    pub owner_name: String,
    pub owner_id: Uuid,
    pub checked_in_at: DateTime<Utc>,
}

impl Luggage {
    pub fn new(owner: &Passenger, size: String, weight_kg: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            size,
            weight_kg,
            owner_name: owner.name.clone(),
            owner_id: owner.id,
            checked_in_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luggage_copies_owner_details() {
        let owner = Passenger::new("Alice".to_string(), 1, "AirCo".to_string(), 3);
        let luggage = Luggage::new(&owner, "Medium".to_string(), 12.5);
        assert_eq!(luggage.owner_name, "Alice");
        assert_eq!(luggage.owner_id, owner.id);
        assert!((luggage.weight_kg - 12.5).abs() < f64::EPSILON);
    }
}
