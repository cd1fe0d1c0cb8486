//! A terminal counter: one integer, an Increment button and a Reset button.
//!
//! The component lives in [`ui::counter`]. Everything else is the shell that
//! hosts it: configuration, logging, the terminal runtime and a headless
//! driver for scripted runs.

pub mod cli;
pub mod config;
pub mod error;
pub mod headless;
pub mod logging;
pub mod ui;
