pub mod listeners;
pub mod timers;
