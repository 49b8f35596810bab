//! Application layer - Command handlers orchestrating the domain.

pub mod handlers;
