mod habit_access;
mod log_id;

pub(crate) use habit_access::load_owned_habit;
pub use log_id::derive_log_id;
