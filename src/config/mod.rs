pub mod build;
pub mod site;
