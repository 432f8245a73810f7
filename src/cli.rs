use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "repotree")]
#[command(about = "Interactive repo tree generator and file opener", long_about = None)]
pub struct Cli {
    /// Root directory to manage (defaults to the current directory)
    pub path: Option<PathBuf>,
}
