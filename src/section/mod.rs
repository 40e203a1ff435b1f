pub mod controller;
pub mod decorations;
pub mod gallery;
