pub mod config;
pub mod profile;
pub mod recent;
pub mod search;
pub mod servers;
