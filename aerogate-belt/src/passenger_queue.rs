use std::collections::VecDeque;

use aerogate_domain::Passenger;

/// FIFO line of passengers waiting for check-in.
///
/// Owns its records outright. Arrival order is insertion order and
/// `dequeue_front` always hands back the longest-waiting passenger.
pub struct PassengerQueue {
    queue: VecDeque<Passenger>,
}

impl PassengerQueue {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Add a passenger to the back of the line
    pub fn enqueue(&mut self, passenger: Passenger) {
        self.queue.push_back(passenger);
    }

    /// Remove and return the passenger at the front of the line
    pub fn dequeue_front(&mut self) -> Result<Passenger, PassengerQueueError> {
        self.queue.pop_front().ok_or(PassengerQueueError::Empty)
    }

    /// Peek at the front of the line without removing anyone
    pub fn front(&self) -> Option<&Passenger> {
        self.queue.front()
    }

    /// Walk the line front to back
    pub fn iter(&self) -> impl Iterator<Item = &Passenger> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl Default for PassengerQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PassengerQueueError {
    #[error("Passenger queue is empty")]
    Empty,
}
