//! Project materializer: turns a plan into directories and files.
//!
//! Ordering: the root and every planned directory are created before the
//! first file write. Failure policy: the first error aborts and is reported
//! as `MaterializationFailed` at the offending path. Nothing is rolled back.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DomainValidator as validator, ProjectStructure, StructurePlan},
    error::CmraResult,
};

/// What a successful materialization produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeSummary {
    pub root: PathBuf,
    pub directories_created: usize,
    pub files_written: usize,
}

/// Writes plans through a [`Filesystem`] port.
pub struct Materializer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> Materializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Resolve each planned file with `resolve`, then write the result
    /// under `root`.
    #[instrument(skip_all, fields(root = %root.display(), files = plan.file_count()))]
    pub fn materialize<F>(
        &self,
        root: &Path,
        plan: &StructurePlan,
        resolve: F,
    ) -> CmraResult<MaterializeSummary>
    where
        F: Fn(&str) -> String,
    {
        validator::validate_plan(plan)?;
        let structure = ProjectStructure::from_plan(root, plan, resolve)?;
        self.write_structure(&structure)
    }

    /// Write an already-resolved structure.
    pub fn write_structure(&self, structure: &ProjectStructure) -> CmraResult<MaterializeSummary> {
        validator::validate_project_structure(structure)?;
        let root = structure.root();

        self.create_dir(root)?;
        let mut directories_created = 0;
        for dir in structure.directories() {
            self.create_dir(&root.join(dir.path.as_path()))?;
            directories_created += 1;
        }

        let mut files_written = 0;
        for file in structure.files() {
            let path = root.join(file.path.as_path());
            self.filesystem
                .write_file(&path, &file.content)
                .map_err(|e| ApplicationError::materialization(&path, e))?;
            debug!(path = %path.display(), bytes = file.size(), "file written");
            files_written += 1;
        }

        info!(directories_created, files_written, "project materialized");
        Ok(MaterializeSummary {
            root: root.to_path_buf(),
            directories_created,
            files_written,
        })
    }

    fn create_dir(&self, path: &Path) -> CmraResult<()> {
        self.filesystem
            .create_dir_all(path)
            .map_err(|e| ApplicationError::materialization(path, e))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{
        application::ports::MockFilesystem,
        domain::{TemplateKind, content, planner},
        error::CmraError,
    };

    /// Records every port call in order.
    fn recording_fs(log: Arc<Mutex<Vec<String>>>) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        let dirs = Arc::clone(&log);
        fs.expect_create_dir_all().returning(move |p| {
            dirs.lock().unwrap().push(format!("mkdir {}", p.display()));
            Ok(())
        });
        fs.expect_write_file().returning(move |p, _| {
            log.lock().unwrap().push(format!("write {}", p.display()));
            Ok(())
        });
        fs
    }

    #[test]
    fn all_directories_are_created_before_any_write() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let fs = recording_fs(Arc::clone(&log));

        let summary = Materializer::new(&fs)
            .materialize(
                Path::new("my-app"),
                &planner::plan(TemplateKind::WithRouter),
                |p| content::resolve(p, TemplateKind::WithRouter),
            )
            .unwrap();

        assert_eq!(summary.files_written, 9);
        assert_eq!(summary.directories_created, 3);

        let log = log.lock().unwrap();
        let last_mkdir = log.iter().rposition(|l| l.starts_with("mkdir")).unwrap();
        let first_write = log.iter().position(|l| l.starts_with("write")).unwrap();
        assert!(last_mkdir < first_write, "{log:?}");
        assert_eq!(log[0], "mkdir my-app");
    }

    #[test]
    fn first_write_failure_aborts_remaining_writes() {
        let plan = StructurePlan::new()
            .with_directory("a", ["one.txt", "two.txt"])
            .with_directory("b", ["three.txt", "four.txt", "five.txt"]);

        let writes = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&writes);

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(move |p, _| {
            let mut seen = seen.lock().unwrap();
            seen.push(p.to_path_buf());
            if seen.len() == 3 {
                Err(CmraError::Internal {
                    message: "injected".into(),
                })
            } else {
                Ok(())
            }
        });

        let err = Materializer::new(&fs)
            .materialize(Path::new("root"), &plan, |_| String::new())
            .unwrap_err();

        match err {
            CmraError::Application(ApplicationError::MaterializationFailed { path, .. }) => {
                assert_eq!(path, Path::new("root").join("b").join("three.txt"));
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(writes.lock().unwrap().len(), 3);
    }

    #[test]
    fn directory_failure_prevents_all_writes() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|p| {
            Err(ApplicationError::MaterializationFailed {
                path: p.to_path_buf(),
                reason: "read-only filesystem".into(),
            }
            .into())
        });
        fs.expect_write_file().never();

        let result = Materializer::new(&fs).materialize(
            Path::new("my-app"),
            &planner::plan(TemplateKind::Basic),
            |p| content::resolve(p, TemplateKind::Basic),
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_plan_is_rejected_before_io() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let result = Materializer::new(&fs).materialize(
            Path::new("my-app"),
            &StructurePlan::new(),
            |_| String::new(),
        );
        assert!(result.is_err());
    }
}
