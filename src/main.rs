use std::process::ExitCode;

use clap::Parser;

use repotree::cli::Cli;
use repotree::fs::OsDirLister;
use repotree::session::Session;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let raw_root = match cli.path {
        Some(path) => path,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(err) => {
                eprintln!("repotree: cannot determine current directory: {err}");
                return ExitCode::from(1);
            }
        },
    };

    // Absolutize up front so the artifact name has a real base component
    // even for roots like "." or "..".
    let root = match std::path::absolute(&raw_root) {
        Ok(root) => root,
        Err(err) => {
            eprintln!("repotree: {}: {}", raw_root.display(), err);
            return ExitCode::from(1);
        }
    };

    let metadata = match std::fs::symlink_metadata(&root) {
        Ok(metadata) => metadata,
        Err(err) => {
            eprintln!("repotree: {}: {}", root.display(), err);
            return ExitCode::from(1);
        }
    };
    if !metadata.is_dir() {
        eprintln!("repotree: {}: not a directory", root.display());
        return ExitCode::from(1);
    }

    let session = Session::new(root);
    match session.run(&OsDirLister).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("\nAborted: {err:#}");
            ExitCode::from(1)
        }
    }
}
