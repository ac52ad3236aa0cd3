pub mod binary;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod handlers;
pub mod logger;
pub mod process;
pub mod registry;
pub mod runner;
pub mod utils;
pub mod workitems;

pub use error::MoldError;
