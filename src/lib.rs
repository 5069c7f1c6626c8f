#![deny(clippy::style)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod app;
pub mod config;
