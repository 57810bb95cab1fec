//! Prompts for an AWS access key id and secret, then prints them back as
//! export lines for the user to apply in their own shell.
//!
//! Nothing is validated, masked, stored, or exported into the environment.

pub mod cli;
pub mod config;
pub mod credentials;
pub mod error;
pub mod prompt;
