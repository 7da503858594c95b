// Domain layer - Dashboard model and error types
pub mod dashboard;
pub mod error;
