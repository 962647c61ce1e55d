pub mod database_drivers;
pub mod handle_state;
