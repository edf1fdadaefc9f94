#![recursion_limit = "256"]

pub mod config;
pub mod context;
pub mod handler;
pub mod ingest;
pub mod model;
pub mod service;
