//! HTTP request handlers

pub mod health;
pub mod page;
pub mod weather_api;
