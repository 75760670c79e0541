//! VideoTube API Library
//!
//! This library provides the core functionality for the VideoTube API:
//! the subscription and playlist HTTP surface, domain logic, repository
//! ports, and the storage adapters behind them.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
