// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator configuration.
//!
//! # Build Script Variables
//!
//! | Variable | Required | Meaning |
//! |----------|----------|---------|
//! | `CARGO_MANIFEST_DIR` | yes | crate being built, `src/lib.rs` or `src/main.rs` is scanned |
//! | `OUT_DIR` | yes, unless overridden | generated sources root |
//! | `EXPOSED_MODEL_GENERATED_DIR` | no | replaces `OUT_DIR` as the root |
//! | `EXPOSED_MODEL_NAMING` | no | `simple-name` (default) or `mapping-root` |

use std::{
    env,
    path::{Path, PathBuf}
};

use crate::{
    GenError,
    naming::NamingPolicy,
    render::{DEFAULT_RUNTIME_CRATE, RenderOptions}
};

/// Overrides the generated sources root in build scripts.
pub const GENERATED_DIR_ENV: &str = "EXPOSED_MODEL_GENERATED_DIR";

/// Selects the naming policy in build scripts.
pub const NAMING_ENV: &str = "EXPOSED_MODEL_NAMING";

/// Settings of one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    crate_root:    PathBuf,
    out_dir:       PathBuf,
    naming:        NamingPolicy,
    runtime_crate: String,
    dry_run:       bool
}

impl GeneratorConfig {
    /// Scan `crate_root` and write units below `out_dir`.
    pub fn new(crate_root: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            crate_root:    crate_root.into(),
            out_dir:       out_dir.into(),
            naming:        NamingPolicy::default(),
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_owned(),
            dry_run:       false
        }
    }

    /// Configuration from the variables Cargo sets for build scripts.
    ///
    /// # Errors
    ///
    /// See [`from_lookup`](Self::from_lookup).
    pub fn from_build_env() -> Result<Self, GenError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// - [`GenError::MissingEnv`] without `CARGO_MANIFEST_DIR`, or without
    ///   both `OUT_DIR` and the override
    /// - [`GenError::InvalidConfig`] when the crate has neither `src/lib.rs`
    ///   nor `src/main.rs`, or the naming policy is unknown
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GenError>
    where
        F: Fn(&str) -> Option<String>
    {
        let manifest_dir = lookup("CARGO_MANIFEST_DIR")
            .map(PathBuf::from)
            .ok_or(GenError::MissingEnv("CARGO_MANIFEST_DIR"))?;
        let out_dir = lookup(GENERATED_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .or_else(|| lookup("OUT_DIR"))
            .map(PathBuf::from)
            .ok_or(GenError::MissingEnv("OUT_DIR"))?;

        let mut config = Self::new(locate_crate_root(&manifest_dir)?, out_dir);
        if let Some(naming) = lookup(NAMING_ENV) {
            config.naming = naming.parse().map_err(GenError::InvalidConfig)?;
        }
        Ok(config)
    }

    /// Naming policy for derived names.
    #[must_use]
    pub fn with_naming(mut self, naming: NamingPolicy) -> Self {
        self.naming = naming;
        self
    }

    /// Crate path generated code imports runtime types from.
    #[must_use]
    pub fn with_runtime_crate(mut self, runtime_crate: impl Into<String>) -> Self {
        self.runtime_crate = runtime_crate.into();
        self
    }

    /// Render units without writing them.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// File the scan starts from.
    #[must_use]
    pub fn crate_root(&self) -> &Path {
        &self.crate_root
    }

    /// Generated sources root.
    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Active naming policy.
    #[must_use]
    pub fn naming(&self) -> NamingPolicy {
        self.naming
    }

    /// Crate path generated code imports from.
    #[must_use]
    pub fn runtime_crate(&self) -> &str {
        &self.runtime_crate
    }

    /// Whether units are rendered but not written.
    #[must_use]
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Options handed to [`render`](crate::render::render).
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            runtime_crate: self.runtime_crate.clone()
        }
    }

    /// Check settings that can be judged without touching the filesystem.
    ///
    /// # Errors
    ///
    /// [`GenError::InvalidConfig`] when the runtime crate is not a path.
    pub fn validate(&self) -> Result<(), GenError> {
        syn::parse_str::<syn::Path>(&self.runtime_crate)
            .map(|_| ())
            .map_err(|e| {
                GenError::InvalidConfig(format!(
                    "runtime crate `{}` is not a path: {e}",
                    self.runtime_crate
                ))
            })
    }
}

/// `src/lib.rs` if present, else `src/main.rs`.
///
/// # Errors
///
/// [`GenError::InvalidConfig`] when neither exists.
pub fn locate_crate_root(manifest_dir: &Path) -> Result<PathBuf, GenError> {
    let src = manifest_dir.join("src");
    ["lib.rs", "main.rs"]
        .into_iter()
        .map(|name| src.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| {
            GenError::InvalidConfig(format!(
                "no src/lib.rs or src/main.rs under {}",
                manifest_dir.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, fs};

    use super::*;

    fn crate_dir(root: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src").join(root), "").unwrap();
        dir
    }

    fn lookup(vars: HashMap<&'static str, String>) -> impl Fn(&str) -> Option<String> {
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = GeneratorConfig::new("src/lib.rs", "out");
        assert_eq!(config.naming(), NamingPolicy::SimpleName);
        assert_eq!(config.runtime_crate(), "exposed_model");
        assert!(!config.dry_run());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn build_env_prefers_lib_rs() {
        let dir = crate_dir("lib.rs");
        fs::write(dir.path().join("src/main.rs"), "").unwrap();
        let manifest = dir.path().display().to_string();

        let config = GeneratorConfig::from_lookup(lookup(HashMap::from([
            ("CARGO_MANIFEST_DIR", manifest),
            ("OUT_DIR", "/tmp/out".to_owned())
        ])))
        .unwrap();

        assert_eq!(config.crate_root(), dir.path().join("src").join("lib.rs"));
        assert_eq!(config.out_dir(), Path::new("/tmp/out"));
    }

    #[test]
    fn build_env_falls_back_to_main_rs() {
        let dir = crate_dir("main.rs");
        let config = GeneratorConfig::from_lookup(lookup(HashMap::from([
            ("CARGO_MANIFEST_DIR", dir.path().display().to_string()),
            ("OUT_DIR", "/tmp/out".to_owned())
        ])))
        .unwrap();
        assert_eq!(config.crate_root(), dir.path().join("src").join("main.rs"));
    }

    #[test]
    fn override_replaces_out_dir() {
        let dir = crate_dir("lib.rs");
        let config = GeneratorConfig::from_lookup(lookup(HashMap::from([
            ("CARGO_MANIFEST_DIR", dir.path().display().to_string()),
            ("OUT_DIR", "/tmp/out".to_owned()),
            (GENERATED_DIR_ENV, "/tmp/generated".to_owned()),
            (NAMING_ENV, "mapping-root".to_owned())
        ])))
        .unwrap();
        assert_eq!(config.out_dir(), Path::new("/tmp/generated"));
        assert_eq!(config.naming(), NamingPolicy::MappingRoot);
    }

    #[test]
    fn missing_variables() {
        let err = GeneratorConfig::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, GenError::MissingEnv("CARGO_MANIFEST_DIR")));

        let dir = crate_dir("lib.rs");
        let err = GeneratorConfig::from_lookup(lookup(HashMap::from([(
            "CARGO_MANIFEST_DIR",
            dir.path().display().to_string()
        )])))
        .unwrap_err();
        assert!(matches!(err, GenError::MissingEnv("OUT_DIR")));
    }

    #[test]
    fn crate_without_root_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = locate_crate_root(dir.path()).unwrap_err();
        assert!(matches!(err, GenError::InvalidConfig(_)));
    }

    #[test]
    fn unknown_naming_policy() {
        let dir = crate_dir("lib.rs");
        let err = GeneratorConfig::from_lookup(lookup(HashMap::from([
            ("CARGO_MANIFEST_DIR", dir.path().display().to_string()),
            ("OUT_DIR", "/tmp/out".to_owned()),
            (NAMING_ENV, "kebab".to_owned())
        ])))
        .unwrap_err();
        assert!(matches!(err, GenError::InvalidConfig(_)));
    }

    #[test]
    fn runtime_crate_must_be_a_path() {
        let config = GeneratorConfig::new("src/lib.rs", "out").with_runtime_crate("two words");
        assert!(matches!(config.validate(), Err(GenError::InvalidConfig(_))));
        let config = config.with_runtime_crate("::my_app::runtime");
        assert!(config.validate().is_ok());
    }
}
