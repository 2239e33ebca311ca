//! Local branch listing
//!
//! Enumerates the local branches of a repository, leaving out the
//! branch that is currently checked out.

use std::path::{Path, PathBuf};

use git2::{BranchType, Repository};

use crate::config::Sort;
use crate::error::ListError;

/// Source of deletable branch names
pub trait BranchLister {
    /// List local branch short names, without the checked-out branch
    fn list_branches(&self) -> Result<Vec<String>, ListError>;

    /// Name of the checked-out branch, if known
    fn current_branch(&self) -> Option<String> {
        None
    }
}

/// Lists branches from the repository containing `path`
#[derive(Debug, Clone)]
pub struct RepoLister {
    path: PathBuf,
}

impl RepoLister {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> Result<Repository, ListError> {
        Repository::discover(&self.path).map_err(|source| ListError::NotARepository {
            path: self.path.clone(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BranchLister for RepoLister {
    fn list_branches(&self) -> Result<Vec<String>, ListError> {
        let repo = self.open()?;
        let mut names = Vec::new();

        for entry in repo.branches(Some(BranchType::Local))? {
            let (branch, _) = entry?;
            if branch.is_head() {
                continue;
            }
            let name = branch.name()?.ok_or(ListError::InvalidName)?;
            names.push(name.to_string());
        }

        tracing::debug!(count = names.len(), path = %self.path.display(), "listed local branches");
        Ok(names)
    }

    fn current_branch(&self) -> Option<String> {
        let repo = self.open().ok()?;
        let head = repo.head().ok()?;
        if head.is_branch() {
            head.shorthand().map(|s| s.to_string())
        } else {
            // Detached HEAD
            None
        }
    }
}

/// Drop protected names and apply the configured ordering
pub fn filter_branches(names: Vec<String>, protected: &[String], sort: Sort) -> Vec<String> {
    let mut names: Vec<String> = names
        .into_iter()
        .filter(|name| !protected.iter().any(|p| p == name))
        .collect();

    if sort == Sort::Name {
        names.sort();
    }

    names
}
