pub mod cli;
pub mod config;
pub mod cycle;
pub mod error;
pub mod exit;
pub mod propagate;
pub mod render;
pub mod seed;
pub mod store;
pub mod types;
