use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Base name the tree is titled with. Falls back to the whole path string
/// for roots like `/` that have no final component.
pub fn root_base_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.as_os_str().to_string_lossy().into_owned())
}

pub fn artifact_name(root: &Path) -> String {
    format!("{} repo.txt", root_base_name(root))
}

/// Write the rendered lines next to the tree they describe, joined with
/// `\n` and newline-terminated regardless of platform.
pub fn write_artifact(root: &Path, lines: &[String]) -> Result<PathBuf> {
    let outfile = root.join(artifact_name(root));
    let mut text = lines.join("\n");
    text.push('\n');
    std::fs::write(&outfile, text)
        .with_context(|| format!("writing {}", outfile.display()))?;
    Ok(outfile)
}
