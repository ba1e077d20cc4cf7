use std::collections::BTreeSet;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Ordered mapping from a top-level directory to the files planned inside it.
///
/// File names are relative to their directory and may contain `/` to reach
/// into a subdirectory (`components/Home.js`). Order is preserved: it is the
/// order directories are created and files are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructurePlan {
    directories: Vec<PlannedDirectory>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedDirectory {
    pub name: String,
    pub files: Vec<String>,
}

impl StructurePlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory with its files.
    pub fn with_directory<I, S>(mut self, name: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.directories.push(PlannedDirectory {
            name: name.into(),
            files: files.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Append files to an existing directory, adding the directory if it is
    /// not planned yet. This is how a template variant layers its delta on
    /// the baseline.
    pub fn extend_directory<I, S>(mut self, name: &str, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.directories.iter().position(|d| d.name == name) {
            Some(index) => {
                self.directories[index]
                    .files
                    .extend(files.into_iter().map(Into::into));
                self
            }
            None => self.with_directory(name, files),
        }
    }

    pub fn directories(&self) -> impl Iterator<Item = &PlannedDirectory> {
        self.directories.iter()
    }

    /// Every planned file as a root-relative path, in write order.
    pub fn file_paths(&self) -> Vec<String> {
        self.directories
            .iter()
            .flat_map(|d| d.files.iter().map(move |f| format!("{}/{}", d.name, f)))
            .collect()
    }

    /// Every directory that must exist before writing, parents first.
    ///
    /// Includes nested directories implied by file names such as
    /// `src/components`.
    pub fn directory_paths(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut ordered = Vec::new();

        for dir in &self.directories {
            if seen.insert(dir.name.clone()) {
                ordered.push(dir.name.clone());
            }
            for file in &dir.files {
                let mut parent = dir.name.clone();
                let segments: Vec<&str> = file.split('/').collect();
                for segment in &segments[..segments.len().saturating_sub(1)] {
                    parent = format!("{parent}/{segment}");
                    if seen.insert(parent.clone()) {
                        ordered.push(parent.clone());
                    }
                }
            }
        }

        ordered
    }

    pub fn contains(&self, path: &str) -> bool {
        self.file_paths().iter().any(|p| p == path)
    }

    pub fn file_count(&self) -> usize {
        self.directories.iter().map(|d| d.files.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.file_count() == 0
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::EmptyStructure);
        }

        let mut seen = BTreeSet::new();
        for path in self.file_paths() {
            RelativePath::try_new(&path)?;
            if !seen.insert(path.clone()) {
                return Err(DomainError::DuplicatePath { path });
            }
        }

        Ok(())
    }
}
