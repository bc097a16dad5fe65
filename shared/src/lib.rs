pub mod dictionary;
pub mod filter;
pub mod tables;
