// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Writing generated units to disk.
//!
//! Unit `Note_MongoRepo` of `crate::model` lands in
//! `<root>/model/Note_MongoRepo.rs`. Existing files are overwritten.

use std::{
    fs,
    path::{Path, PathBuf}
};

use tracing::debug;

use crate::{GenError, GeneratedUnit};

/// Write one unit below `root`, returning the file path.
///
/// # Errors
///
/// [`GenError::Io`] when the directory cannot be created or the file cannot
/// be written.
pub fn write_unit(root: &Path, unit: &GeneratedUnit) -> Result<PathBuf, GenError> {
    let dir = root.join(unit.module.to_relative_dir());
    fs::create_dir_all(&dir).map_err(|e| GenError::io(&dir, e))?;
    let path = root.join(unit.relative_path());
    fs::write(&path, &unit.source).map_err(|e| GenError::io(&path, e))?;
    debug!(path = %path.display(), "unit written");
    Ok(path)
}

/// Write every unit below `root`, in order.
///
/// # Errors
///
/// The first [`GenError::Io`]; units after it are not written.
pub fn write_units(root: &Path, units: &[GeneratedUnit]) -> Result<Vec<PathBuf>, GenError> {
    units.iter().map(|unit| write_unit(root, unit)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        marker::MarkerArgs,
        naming::NamingPolicy,
        target::{DeclKind, ModulePath, TargetDecl}
    };

    fn unit(module: &str, name: &str, source: &str) -> GeneratedUnit {
        let target = TargetDecl::new(name, ModulePath::parse(module), DeclKind::Struct);
        GeneratedUnit {
            module:  target.module.clone(),
            names:   NamingPolicy::SimpleName.derive(name, "x"),
            args:    MarkerArgs::new("x"),
            target,
            source:  source.to_owned()
        }
    }

    #[test]
    fn writes_into_module_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_unit(dir.path(), &unit("crate::model", "Note", "// note")).unwrap();
        assert_eq!(path, dir.path().join("model").join("Note_MongoRepo.rs"));
        assert_eq!(fs::read_to_string(path).unwrap(), "// note");
    }

    #[test]
    fn root_module_writes_into_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_unit(dir.path(), &unit("crate", "Model", "")).unwrap();
        assert_eq!(path, dir.path().join("Model_MongoRepo.rs"));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        write_unit(dir.path(), &unit("crate::a::b", "Note", "old")).unwrap();
        let path = write_unit(dir.path(), &unit("crate::a::b", "Note", "new")).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn unwritable_root_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("occupied");
        fs::write(&file, "").unwrap();
        let err = write_units(&file, &[unit("crate::model", "Note", "")]).unwrap_err();
        assert!(matches!(err, GenError::Io { .. }));
    }
}
