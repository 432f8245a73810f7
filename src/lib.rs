pub mod cli;
pub mod core;
pub mod fs;
pub mod models;
pub mod openers;
pub mod output;
pub mod session;
