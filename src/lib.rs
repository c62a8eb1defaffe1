pub mod api;
pub mod cli;
pub mod color;
pub mod config;
pub mod cost;
pub mod errors;
pub mod glossary;
pub mod models;
pub mod reporting;
pub mod scan;
pub mod utils;
