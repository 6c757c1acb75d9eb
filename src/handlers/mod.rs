//! HTTP handlers

pub mod form;
pub mod health;
