//! Route modules for the Smart PDF Companion server

pub mod health;
pub mod maestra;
pub mod pdf;
