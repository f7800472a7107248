pub mod client;
pub mod commands;
pub mod controller;
pub mod events;
pub mod export;
pub mod state;


pub use client::GenerationClient;
pub use controller::SessionController;
pub use state::{SessionPhase, SessionSnapshot, SessionState};
