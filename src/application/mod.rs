pub mod engine;
pub mod menu;
pub mod router;
