use aerogate_checkin::{CheckinPipeline, LuggageSpec, PassengerRegistration};
use aerogate_domain::CheckInState;

fn registration(name: &str, terminal: i32) -> PassengerRegistration {
    PassengerRegistration {
        name: name.to_string(),
        bag_count: 1,
        airline: "AirCo".to_string(),
        terminal,
    }
}

fn bag(size: &str, weight_kg: f64) -> LuggageSpec {
    LuggageSpec {
        size: size.to_string(),
        weight_kg,
    }
}

#[test]
fn single_passenger_flows_to_belt() {
    let mut pipeline = CheckinPipeline::new();
    pipeline.register_passenger(registration("Alice", 3));

    let result = pipeline
        .process_next_check_in(bag("Medium", 12.5))
        .unwrap();

    assert_eq!(result.passenger.name, "Alice");
    assert_eq!(result.luggage.owner_id, result.passenger.id);
    assert_eq!(result.remaining_in_queue, 0);

    // Exactly one Alice-owned bag on the belt, nobody left in line
    let belt: Vec<_> = pipeline.belt_contents().collect();
    assert_eq!(belt.len(), 1);
    assert_eq!(belt[0].owner_name, "Alice");
    assert_eq!(pipeline.queued_passengers().count(), 0);

    // The record survives queue removal on the roster, in Queued state
    assert_eq!(pipeline.roster().len(), 1);
    assert_eq!(pipeline.roster()[0].state, CheckInState::Queued);
}

#[test]
fn belt_is_fifo_and_cart_is_lifo() {
    let mut pipeline = CheckinPipeline::new();
    pipeline.register_passenger(registration("Alice", 3));
    pipeline.register_passenger(registration("Bob", 1));

    pipeline.process_next_check_in(bag("Medium", 12.5)).unwrap();
    pipeline.process_next_check_in(bag("Large", 20.0)).unwrap();

    // Belt is FIFO: Alice's bag loads first, then Bob's
    assert_eq!(pipeline.unload_one_from_belt().unwrap().owner_name, "Alice");
    assert_eq!(pipeline.unload_one_from_belt().unwrap().owner_name, "Bob");

    // Cart is LIFO: Bob's bag (loaded last) comes off first
    let removals = pipeline.unload_cart().unwrap();
    let owners: Vec<&str> = removals.iter().map(|r| r.owner_name.as_str()).collect();
    assert_eq!(owners, vec!["Bob", "Alice"]);

    for passenger in pipeline.roster() {
        assert_eq!(passenger.state, CheckInState::Removed);
    }
}

#[test]
fn drain_moves_every_bag_front_first() {
    let mut pipeline = CheckinPipeline::new();
    for name in ["Alice", "Bob", "Carol"] {
        pipeline.register_passenger(registration(name, 2));
        pipeline.process_next_check_in(bag("Small", 8.0)).unwrap();
    }

    let moved = pipeline.drain_belt_to_cart();
    let owners: Vec<&str> = moved.iter().map(|m| m.owner_name.as_str()).collect();
    assert_eq!(owners, vec!["Alice", "Bob", "Carol"]);
    assert_eq!(pipeline.belt_contents().count(), 0);

    // Cart top is the last bag loaded
    let cart: Vec<&str> = pipeline
        .cart_contents()
        .map(|l| l.owner_name.as_str())
        .collect();
    assert_eq!(cart, vec!["Carol", "Bob", "Alice"]);
}

#[test]
fn roster_listing_keeps_completion_order() {
    let mut pipeline = CheckinPipeline::new();
    pipeline.register_passenger(registration("Alice", 3));
    pipeline.register_passenger(registration("Bob", 1));
    pipeline.register_passenger(registration("Carol", 2));

    pipeline.process_next_check_in(bag("Medium", 10.0)).unwrap();
    pipeline.process_next_check_in(bag("Medium", 11.0)).unwrap();

    let names: Vec<&str> = pipeline.roster().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);

    // Carol is still in line, untouched
    assert_eq!(pipeline.queued_passengers().count(), 1);
    assert_eq!(pipeline.next_passenger().unwrap().name, "Carol");
}

#[test]
fn snapshots_serialize_round_trip() {
    let mut pipeline = CheckinPipeline::new();
    pipeline.register_passenger(registration("Alice", 3));
    let result = pipeline
        .process_next_check_in(bag("Medium", 12.5))
        .unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let back: aerogate_checkin::CheckInResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back.passenger.id, result.passenger.id);
    assert_eq!(back.luggage.id, result.luggage.id);
    assert_eq!(back.passenger.state, CheckInState::Queued);
}
