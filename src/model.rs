pub mod data;
pub mod theme;
