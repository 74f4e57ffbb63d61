pub mod models;
pub mod orchestrator;

pub use models::{CartRemoval, CheckInResult, LuggageSpec, PassengerRegistration, UnloadResult};
pub use orchestrator::{CheckinError, CheckinPipeline};
