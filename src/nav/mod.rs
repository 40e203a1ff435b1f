pub mod history;
pub mod registry;
pub mod router;
