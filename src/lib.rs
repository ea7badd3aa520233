pub mod check;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod scenario;

pub use client::{create_subscription, LoadTestClient};
pub use error::Error;
