//! Command-line front end for the calendar store.

pub mod cli;
pub mod commands;
