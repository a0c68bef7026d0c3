pub mod core;
pub mod debounce;
pub mod error;
