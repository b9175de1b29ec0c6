//! Terminal rendering for profiles and tables

mod profile;

pub use profile::render_profile;
