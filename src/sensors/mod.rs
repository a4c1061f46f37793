pub mod catalog;
pub mod readings;
