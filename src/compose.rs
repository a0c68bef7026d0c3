pub mod chrome;
pub mod scene;
pub mod tables;
pub mod templates;
