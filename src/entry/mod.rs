pub mod door;
