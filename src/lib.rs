//! AI Cartoon Video Generator form service.
//!
//! Serves the marketing form UI and the submission proxy that validates a
//! photo-plus-text submission and relays it to the external n8n workflow
//! which performs the actual video generation.

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
