//! Integration test modules

mod config;
mod form_flow;
mod stale_responses;
