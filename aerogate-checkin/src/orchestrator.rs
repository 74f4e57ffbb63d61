use chrono::Utc;
use uuid::Uuid;

use aerogate_belt::{BaggageQueue, CartStack, PassengerQueue};
use aerogate_domain::events::{
    LuggageCheckedInEvent, LuggageLoadedEvent, LuggageRemovedEvent, PassengerRegisteredEvent,
};
use aerogate_domain::{CheckInState, CheckinEvent, Luggage, Passenger};

use crate::models::{CartRemoval, CheckInResult, LuggageSpec, PassengerRegistration, UnloadResult};

/// Drives the check-in pipeline end to end.
///
/// Owns the passenger line, the baggage belt, the cart, the roster of
/// completed check-ins and the event log. A luggage record lives in exactly
/// one of the belt or the cart at any time; moving it between them is a
/// transfer of ownership, not a copy. Not safe for concurrent invocation;
/// callers thread a single value through all operations.
pub struct CheckinPipeline {
    passengers: PassengerQueue,
    belt: BaggageQueue,
    cart: CartStack,
    roster: Vec<Passenger>,
    events: Vec<CheckinEvent>,
}

impl CheckinPipeline {
    pub fn new() -> Self {
        Self {
            passengers: PassengerQueue::new(),
            belt: BaggageQueue::new(),
            cart: CartStack::new(),
            roster: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Register a passenger and place them at the back of the line
    pub fn register_passenger(&mut self, reg: PassengerRegistration) -> Passenger {
        let passenger = Passenger::new(reg.name, reg.bag_count, reg.airline, reg.terminal);

        tracing::info!(
            "Passenger {} registered for {} terminal {}",
            passenger.name,
            passenger.flight.airline,
            passenger.flight.terminal
        );

        self.events
            .push(CheckinEvent::PassengerRegistered(PassengerRegisteredEvent {
                passenger_id: passenger.id,
                name: passenger.name.clone(),
                timestamp: Utc::now().timestamp(),
            }));

        self.passengers.enqueue(passenger.clone());
        passenger
    }

    /// Peek at the passenger who will be served next
    pub fn next_passenger(&self) -> Option<&Passenger> {
        self.passengers.front()
    }

    /// Serve the front of the line: capture luggage, place it on the belt
    /// and move the passenger record to the roster.
    pub fn process_next_check_in(
        &mut self,
        spec: LuggageSpec,
    ) -> Result<CheckInResult, CheckinError> {
        let mut passenger = match self.passengers.dequeue_front() {
            Ok(p) => p,
            Err(_) => {
                tracing::warn!("Check-in requested with no passengers waiting");
                return Err(CheckinError::NoPassengers);
            }
        };

        if passenger.state != CheckInState::Registered {
            return Err(CheckinError::InvalidTransition {
                from: passenger.state.to_string(),
                to: "LUGGAGE_CAPTURED".to_string(),
            });
        }

        let luggage = Luggage::new(&passenger, spec.size, spec.weight_kg);
        passenger.attach_luggage(luggage.id);
        passenger.update_state(CheckInState::LuggageCaptured);

        self.events
            .push(CheckinEvent::LuggageCheckedIn(LuggageCheckedInEvent {
                luggage_id: luggage.id,
                passenger_id: passenger.id,
                owner_name: passenger.name.clone(),
                timestamp: Utc::now().timestamp(),
            }));

        self.belt.enqueue(luggage.clone());
        passenger.update_state(CheckInState::Queued);

        tracing::info!(
            "Checked in {}: luggage {} placed on belt",
            passenger.name,
            luggage.id
        );

        self.roster.push(passenger.clone());

        Ok(CheckInResult {
            passenger,
            luggage,
            remaining_in_queue: self.passengers.len(),
        })
    }

    /// Move the bag at the front of the belt onto the cart
    pub fn unload_one_from_belt(&mut self) -> Result<UnloadResult, CheckinError> {
        let owner_id = match self.belt.front() {
            Some(luggage) => luggage.owner_id,
            None => {
                tracing::warn!("Belt unload requested while the belt is empty");
                return Err(CheckinError::EmptyBelt);
            }
        };

        // Guard before touching the belt so a rejected transition leaves
        // the bag where it was.
        let idx = self.roster_index(owner_id)?;
        if self.roster[idx].state != CheckInState::Queued {
            return Err(CheckinError::InvalidTransition {
                from: self.roster[idx].state.to_string(),
                to: "LOADED".to_string(),
            });
        }

        let luggage = self.belt.dequeue_front().map_err(|_| CheckinError::EmptyBelt)?;
        let owner_name = luggage.owner_name.clone();
        let luggage_id = luggage.id;

        self.cart.push(luggage);
        self.roster[idx].update_state(CheckInState::Loaded);

        self.events
            .push(CheckinEvent::LuggageLoaded(LuggageLoadedEvent {
                luggage_id,
                owner_name: owner_name.clone(),
                timestamp: Utc::now().timestamp(),
            }));

        tracing::info!("Loaded {}'s luggage onto the cart", owner_name);

        Ok(UnloadResult {
            owner_name,
            belt_now_empty: self.belt.is_empty(),
        })
    }

    /// Move every bag on the belt onto the cart, front first.
    ///
    /// Returns an empty vec when there was nothing to move.
    pub fn drain_belt_to_cart(&mut self) -> Vec<UnloadResult> {
        let mut moved = Vec::new();
        while !self.belt.is_empty() {
            match self.unload_one_from_belt() {
                Ok(result) => moved.push(result),
                Err(e) => {
                    tracing::warn!("Belt drain stopped early: {}", e);
                    break;
                }
            }
        }
        moved
    }

    /// Empty the cart top-down, retiring each bag and its owner
    pub fn unload_cart(&mut self) -> Result<Vec<CartRemoval>, CheckinError> {
        if self.cart.is_empty() {
            tracing::warn!("Cart unload requested while the cart is empty");
            return Err(CheckinError::EmptyCart);
        }

        let mut removals = Vec::new();
        loop {
            let owner_id = match self.cart.top() {
                Some(luggage) => luggage.owner_id,
                None => break,
            };

            let idx = self.roster_index(owner_id)?;
            if self.roster[idx].state != CheckInState::Loaded {
                return Err(CheckinError::InvalidTransition {
                    from: self.roster[idx].state.to_string(),
                    to: "REMOVED".to_string(),
                });
            }

            let luggage = self.cart.pop().map_err(|_| CheckinError::EmptyCart)?;
            self.roster[idx].update_state(CheckInState::Removed);

            self.events
                .push(CheckinEvent::LuggageRemoved(LuggageRemovedEvent {
                    luggage_id: luggage.id,
                    owner_name: luggage.owner_name.clone(),
                    timestamp: Utc::now().timestamp(),
                }));

            tracing::info!("Removed {}'s luggage from the cart", luggage.owner_name);

            removals.push(CartRemoval {
                owner_name: luggage.owner_name,
            });
        }

        Ok(removals)
    }

    /// Passengers still waiting in line, front to back
    pub fn queued_passengers(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.iter()
    }

    /// Completed check-ins, oldest first
    pub fn roster(&self) -> &[Passenger] {
        &self.roster
    }

    /// Bags currently on the belt, front to back
    pub fn belt_contents(&self) -> impl Iterator<Item = &Luggage> {
        self.belt.iter()
    }

    /// Bags currently on the cart, top to bottom
    pub fn cart_contents(&self) -> impl Iterator<Item = &Luggage> {
        self.cart.iter()
    }

    /// Everything that has happened so far, in order
    pub fn events(&self) -> &[CheckinEvent] {
        &self.events
    }

    fn roster_index(&self, owner_id: Uuid) -> Result<usize, CheckinError> {
        self.roster
            .iter()
            .position(|p| p.id == owner_id)
            .ok_or_else(|| CheckinError::UnknownOwner(owner_id.to_string()))
    }
}

impl Default for CheckinPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CheckinError {
    #[error("No passengers waiting for check-in")]
    NoPassengers,

    #[error("Baggage belt is empty")]
    EmptyBelt,

    #[error("Baggage cart is empty")]
    EmptyCart,

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("No completed check-in for owner: {0}")]
    UnknownOwner(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(name: &str) -> PassengerRegistration {
        PassengerRegistration {
            name: name.to_string(),
            bag_count: 1,
            airline: "AirCo".to_string(),
            terminal: 3,
        }
    }

    fn medium_bag() -> LuggageSpec {
        LuggageSpec {
            size: "Medium".to_string(),
            weight_kg: 12.5,
        }
    }

    #[test]
    fn test_check_in_lifecycle() {
        let mut pipeline = CheckinPipeline::new();

        pipeline.register_passenger(registration("Alice"));
        assert_eq!(pipeline.next_passenger().unwrap().name, "Alice");

        let result = pipeline.process_next_check_in(medium_bag()).unwrap();
        assert_eq!(result.passenger.state, CheckInState::Queued);
        assert_eq!(result.luggage.owner_name, "Alice");
        assert_eq!(result.passenger.luggage_id, Some(result.luggage.id));
        assert_eq!(result.remaining_in_queue, 0);

        // Queue drained, roster populated, belt holds the bag
        assert!(pipeline.next_passenger().is_none());
        assert_eq!(pipeline.roster().len(), 1);
        assert_eq!(pipeline.belt_contents().count(), 1);

        let unload = pipeline.unload_one_from_belt().unwrap();
        assert_eq!(unload.owner_name, "Alice");
        assert!(unload.belt_now_empty);
        assert_eq!(pipeline.roster()[0].state, CheckInState::Loaded);

        let removals = pipeline.unload_cart().unwrap();
        assert_eq!(removals.len(), 1);
        assert_eq!(pipeline.roster()[0].state, CheckInState::Removed);
        assert!(pipeline.cart_contents().next().is_none());
    }

    #[test]
    fn test_check_in_with_no_passengers_fails() {
        let mut pipeline = CheckinPipeline::new();
        assert!(matches!(
            pipeline.process_next_check_in(medium_bag()),
            Err(CheckinError::NoPassengers)
        ));
    }

    #[test]
    fn test_unload_empty_belt_fails() {
        let mut pipeline = CheckinPipeline::new();
        assert!(matches!(
            pipeline.unload_one_from_belt(),
            Err(CheckinError::EmptyBelt)
        ));
    }

    #[test]
    fn test_unload_empty_cart_fails() {
        let mut pipeline = CheckinPipeline::new();
        assert!(matches!(
            pipeline.unload_cart(),
            Err(CheckinError::EmptyCart)
        ));
    }

    #[test]
    fn test_drain_empty_belt_returns_nothing() {
        let mut pipeline = CheckinPipeline::new();
        assert!(pipeline.drain_belt_to_cart().is_empty());
    }

    #[test]
    fn test_events_record_transitions_in_order() {
        let mut pipeline = CheckinPipeline::new();
        pipeline.register_passenger(registration("Alice"));
        pipeline.process_next_check_in(medium_bag()).unwrap();
        pipeline.unload_one_from_belt().unwrap();
        pipeline.unload_cart().unwrap();

        let events = pipeline.events();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], CheckinEvent::PassengerRegistered(_)));
        assert!(matches!(events[1], CheckinEvent::LuggageCheckedIn(_)));
        assert!(matches!(events[2], CheckinEvent::LuggageLoaded(_)));
        assert!(matches!(events[3], CheckinEvent::LuggageRemoved(_)));
    }
}
