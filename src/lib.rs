//! Quant HUD: estimating backend for structural-steel fabrication shops.
//!
//! Projects, their takeoff line items and bid calendar events live in
//! Postgres; [`estimate`] turns labor minutes into man-hours and dollars.

pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod estimate;
pub mod logging;
pub mod middleware;
pub mod routes;
