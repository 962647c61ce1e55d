/// Free-form error type used during boot and configuration handling.
pub mod custom_error;
