//! HTTP handlers for the Media domain

pub mod uploads;
