//! HTTP route handlers

pub mod contact;
pub mod health;
pub mod metrics;
pub mod projects;
pub mod routes;
