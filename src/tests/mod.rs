//! gnss-db lib test modules
pub mod toolkit;

mod batch;
mod calendar;
mod processed;
