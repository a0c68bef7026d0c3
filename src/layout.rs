pub mod badge;
pub mod metrics;
pub mod viewport;
