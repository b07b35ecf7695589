//! RUTA journey planner server.
//!
//! A web application that turns an origin, destination, date and a few
//! preference toggles into an accessible three-step travel plan.

pub mod config;
pub mod content;
pub mod domain;
pub mod planner;
pub mod web;
