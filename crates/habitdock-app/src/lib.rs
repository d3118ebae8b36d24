// Application layer and CLI presentation for HabitDock.
// Depends on the domain and infrastructure crates.

pub mod application;
pub mod presentation;
