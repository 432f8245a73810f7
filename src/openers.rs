use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Editor commands probed on the search path, in order.
const EDITOR_COMMANDS: [&str; 3] = ["code", "code.cmd", "code.exe"];

/// Hand a file to the OS default application. Failure is reported and
/// swallowed; the run carries on either way.
pub fn open_with_default_app(path: &Path) {
    if let Err(err) = open::that(path) {
        println!("Could not open file automatically: {err}");
    }
}

/// Open the given paths in VS Code. Requested paths that do not exist are
/// reported individually and dropped; a missing editor command skips the
/// whole request with a diagnostic.
pub fn open_in_editor(paths: &[PathBuf]) {
    let Some(editor) = locate_editor() else {
        println!("VS Code command 'code' not found on PATH. Install VS Code or add 'code' to PATH.");
        return;
    };

    let (existing, missing): (Vec<PathBuf>, Vec<PathBuf>) =
        paths.iter().cloned().partition(|path| path.exists());
    for path in &missing {
        println!("Ignored (not found): {}", path.display());
    }
    if existing.is_empty() {
        println!("No valid paths to open in VS Code.");
        return;
    }

    match Command::new(&editor).args(&existing).status() {
        Ok(_) => {
            let opened: Vec<String> = existing
                .iter()
                .map(|path| path.display().to_string())
                .collect();
            println!("Opened in VS Code: {}", opened.join(", "));
        }
        Err(err) => println!("Could not open in VS Code: {err}"),
    }
}

pub fn locate_editor() -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    let dirs: Vec<PathBuf> = env::split_paths(&path_var).collect();
    locate_command(&dirs, &EDITOR_COMMANDS)
}

fn locate_command(dirs: &[PathBuf], commands: &[&str]) -> Option<PathBuf> {
    for command in commands {
        for dir in dirs {
            let candidate = dir.join(command);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}
