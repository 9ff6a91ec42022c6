//! Bookish Atelier catalog service: a small product catalog API backed by
//! MongoDB, with a fixed category list, one-time demo seeding, and a
//! connectivity diagnostic endpoint.

pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
