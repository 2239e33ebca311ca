//! gitbrama - pick local git branches to clean up
//!
//! Lists the local branches of the current repository (minus the one
//! checked out) and lets you mark some of them with the keyboard. The
//! marked names are printed on exit, one per line (or written to the
//! `--output` file), so they can be fed to `git branch -D`. Nothing is
//! deleted by gitbrama itself.
//!
//! # Usage
//!
//! ```bash
//! gitbrama                          # Run in current directory
//! gitbrama /path/to/repo            # Run in specified repository
//! gitbrama -o gone.txt && xargs git branch -D < gone.txt
//! ```

mod app;
mod config;
mod error;
mod git;
mod logging;
mod selection;
mod ui;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::Config;
use crate::git::{BranchLister, RepoLister};
use crate::selection::Selection;

/// Pick local git branches to clean up
#[derive(Parser, Debug)]
#[command(name = "gitbrama")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path inside the repository (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the selected branch names to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log to the data directory; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(dir) = config::data_dir() {
        logging::init(args.verbose, &dir)?;
    }

    let config = Config::load(args.config.as_deref())?;

    // Resolve the repository path
    let repo_path = args.path.canonicalize()
        .unwrap_or_else(|_| args.path.clone());

    let lister = RepoLister::new(repo_path);
    tracing::info!(path = %lister.path().display(), "listing branches");

    let selection = load_session(&lister, &config)?;
    let app = app::App::new(selection, config.title, lister.current_branch());
    let selection = app.run().context("Error running program")?;

    let contents = format_selection(&selection.selected_items());
    match args.output {
        Some(path) => {
            fs::write(&path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => print!("{}", contents),
    }

    Ok(())
}

/// Build the initial session from the lister, before any terminal setup
fn load_session(lister: &impl BranchLister, config: &Config) -> Result<Selection> {
    let branches = lister
        .list_branches()
        .context("Error getting branches")?;
    let branches = git::filter_branches(branches, &config.protected_branches, config.sort);
    Ok(Selection::new(branches))
}

/// One branch name per line
fn format_selection(names: &[&str]) -> String {
    names.iter().map(|name| format!("{}\n", name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Sort;
    use crate::error::ListError;

    /// In-memory lister; `None` fails like an unreadable repository
    struct FakeLister(Option<Vec<&'static str>>);

    impl BranchLister for FakeLister {
        fn list_branches(&self) -> Result<Vec<String>, ListError> {
            match &self.0 {
                Some(names) => Ok(names.iter().map(|s| s.to_string()).collect()),
                None => Err(ListError::InvalidName),
            }
        }
    }

    #[test]
    fn test_load_session_reports_list_error() {
        let err = load_session(&FakeLister(None), &Config::default()).unwrap_err();

        let message = format!("{err:#}");
        assert!(message.starts_with("Error getting branches"));
        assert!(message.contains("branch name is not valid UTF-8"));
        assert!(err.downcast_ref::<ListError>().is_some());
    }

    #[test]
    fn test_load_session_filters_and_sorts() {
        let config = Config {
            protected_branches: vec!["main".to_string()],
            sort: Sort::Name,
            ..Config::default()
        };
        let lister = FakeLister(Some(vec!["zeta", "main", "alpha"]));

        let selection = load_session(&lister, &config).unwrap();
        assert_eq!(selection.items(), ["alpha", "zeta"]);
        assert_eq!(selection.cursor(), 0);
        assert!(selection.selected().is_empty());
    }

    #[test]
    fn test_load_session_keeps_backend_order() {
        let lister = FakeLister(Some(vec!["zeta", "alpha"]));
        let selection = load_session(&lister, &Config::default()).unwrap();
        assert_eq!(selection.items(), ["zeta", "alpha"]);
    }

    #[test]
    fn test_load_session_empty() {
        let selection = load_session(&FakeLister(Some(Vec::new())), &Config::default()).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_format_selection() {
        assert_eq!(format_selection(&[]), "");
        assert_eq!(format_selection(&["dev"]), "dev\n");
        assert_eq!(format_selection(&["dev", "feature-x"]), "dev\nfeature-x\n");
    }
}
