use std::io::{self, BufRead, Write};
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::core::{render_lines, walk_root};
use crate::fs::DirLister;
use crate::openers;
use crate::output;

const TITLE: &str = "REPO MANAGER AND DISPLAY";

/// Parsed depth prompt answer. Blank means unlimited; anything that is not
/// a non-negative integer is invalid and falls back to unlimited after a
/// warning, never an abort.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DepthChoice {
    Unlimited,
    Limit(usize),
    Invalid,
}

pub fn parse_depth(input: &str) -> DepthChoice {
    let input = input.trim();
    if input.is_empty() {
        return DepthChoice::Unlimited;
    }
    match input.parse::<usize>() {
        Ok(limit) => DepthChoice::Limit(limit),
        Err(_) => DepthChoice::Invalid,
    }
}

/// Split a comma-separated path list, trimming whitespace and surrounding
/// quotes, dropping empty segments.
pub fn parse_path_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .trim_matches(|c| c == '"' || c == '\'')
                .to_owned()
        })
        .filter(|part| !part.is_empty())
        .collect()
}

/// Resolve a user-supplied path against the session root: absolute paths
/// are taken as-is, relative ones join the root. Both are normalized
/// lexically, without touching the filesystem.
pub fn resolve_path(root: &Path, part: &str) -> PathBuf {
    let candidate = Path::new(part);
    let joined = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        root.join(candidate)
    };
    normalize(&joined)
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// One interactive run. The root directory every operation works against
/// is carried here explicitly instead of being re-read from the ambient
/// working directory at each step.
pub struct Session {
    root: PathBuf,
}

impl Session {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Menu loop. Returns `Ok` on a normal quit; a closed or failing input
    /// stream is the one error that aborts the whole run.
    pub async fn run<L: DirLister>(&self, lister: &L) -> Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        loop {
            print_menu();
            let choice = prompt(&mut input, "> ")?;
            match choice.trim().to_lowercase().as_str() {
                "q" => {
                    println!("Goodbye!");
                    return Ok(());
                }
                "h" => print_help(),
                "1" => self.generate_tree(lister, &mut input).await?,
                "2" => self.open_files(&mut input)?,
                _ => println!("Unknown option. Choose h, 1, 2, or q."),
            }
        }
    }

    async fn generate_tree<L: DirLister>(
        &self,
        lister: &L,
        input: &mut impl BufRead,
    ) -> Result<()> {
        let answer = prompt(input, "Enter depth (blank for unlimited): ")?;
        let max_depth = match parse_depth(&answer) {
            DepthChoice::Unlimited => None,
            DepthChoice::Limit(limit) => Some(limit),
            DepthChoice::Invalid => {
                println!("Invalid depth. Using unlimited.");
                None
            }
        };

        let children = match walk_root(lister, &self.root, max_depth).await {
            Ok(children) => children,
            Err(err) => {
                eprintln!("Error while generating tree: {err:#}");
                return Ok(());
            }
        };
        let lines = render_lines(&output::root_base_name(&self.root), &children);
        let outfile = match output::write_artifact(&self.root, &lines) {
            Ok(outfile) => outfile,
            Err(err) => {
                eprintln!("Error while writing tree: {err:#}");
                return Ok(());
            }
        };

        println!(
            "Done! Wrote repo tree to \"{}\". Opening...",
            output::artifact_name(&self.root)
        );
        openers::open_with_default_app(&outfile);

        if prompt_yes_no(input, "Save txt? (y/n): ")? {
            println!("File saved.");
        } else {
            match std::fs::remove_file(&outfile) {
                Ok(()) => println!("File deleted."),
                Err(err) => println!("Could not delete file: {err}"),
            }
        }
        Ok(())
    }

    fn open_files(&self, input: &mut impl BufRead) -> Result<()> {
        let raw = prompt(
            input,
            "Enter file path(s) like \"apps/server/prisma/seed.ts\" (comma-separated): ",
        )?;
        let parts = parse_path_list(&raw);
        if parts.is_empty() {
            println!("No paths provided.");
            return Ok(());
        }

        let paths: Vec<PathBuf> = parts
            .iter()
            .map(|part| resolve_path(&self.root, part))
            .collect();
        openers::open_in_editor(&paths);
        Ok(())
    }
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().context("flushing prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading input")?;
    if read == 0 {
        bail!("input stream closed");
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_owned())
}

fn prompt_yes_no(input: &mut impl BufRead, message: &str) -> Result<bool> {
    let answer = prompt(input, message)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn print_menu() {
    println!("\n{}", "=".repeat(48));
    println!("{TITLE}");
    println!("{}", "=".repeat(48));
    println!("How to use (h)");
    println!("generate repo tree (1)");
    println!("open file in repo (2)");
    println!("Quit (q)");
}

fn print_help() {
    println!(
        "\n{TITLE} help

- Press '1' to generate a repo tree of the root folder.
  You will be asked for a depth:
    - Leave blank for unlimited depth
    - Or enter a number (e.g. 2) to limit nesting
  The tree is saved to \"<root folder> repo.txt\" and opened automatically.
  Then you are asked \"Save txt? (y/n)\":
    y -> keep the file
    n -> delete the file

- Press '2' to open one or more files in VS Code:
  Enter relative or absolute paths
  Separate multiple paths with commas
  Missing or invalid paths are ignored

- Press 'h' to see this help again.
- Press 'q' to quit.

Notes:
- Symlinks are indicated and not followed to avoid cycles.
- Permission-restricted directories are displayed as [permission denied]."
    );
}
