//! Bundle configuration from `web-assets.toml` and CLI arguments.
//!
//! # Example
//!
//! ```toml
//! [bundle]
//! input_dir = "web"                              # Flat directory of assets
//! output_c = "build/generated/web_assets.c"      # Generated source
//! output_h = "include/web/web_assets.h"          # Optional companion header
//! header_include = "web/web_assets.h"            # Path in the generated #include
//! ```
//!
//! Relative paths in the file are resolved against the file's directory.
//! CLI arguments take precedence over file values.

mod error;

pub use error::ConfigError;

use crate::{cli::Cli, codegen::DEFAULT_HEADER_INCLUDE, log};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "web-assets.toml";

// ============================================================================
// file configuration
// ============================================================================

/// Root structure of `web-assets.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// `[bundle]` section
    pub bundle: BundleSection,
}

/// `[bundle]` section: every field may also come from the CLI.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BundleSection {
    pub input_dir: Option<PathBuf>,
    pub output_c: Option<PathBuf>,
    pub output_h: Option<PathBuf>,
    pub header_include: Option<String>,
}

impl FileConfig {
    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Load from file, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {} ignored: {}", path.display(), ignored.join(", "));
        }

        let base = path.parent().unwrap_or(Path::new(""));
        config.bundle.resolve_relative(base);
        Ok(config)
    }
}

impl BundleSection {
    /// Anchor relative paths at `base`.
    fn resolve_relative(&mut self, base: &Path) {
        for path in [&mut self.input_dir, &mut self.output_c, &mut self.output_h]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

// ============================================================================
// resolved configuration
// ============================================================================

/// Fully resolved settings for one bundle run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleConfig {
    /// Flat directory of assets
    pub input_dir: PathBuf,
    /// Generated `.c` file
    pub output_c: PathBuf,
    /// Optional companion header
    pub output_h: Option<PathBuf>,
    /// Path used in the generated `#include`
    pub header_include: String,
}

impl BundleConfig {
    /// Load configuration from CLI arguments.
    ///
    /// An explicit `--config` must exist; the default file is optional.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::from_path(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    FileConfig::from_path(path)?
                } else {
                    FileConfig::default()
                }
            }
        };
        Self::merge(cli, file.bundle)
    }

    /// Combine CLI and file values, CLI first.
    fn merge(cli: &Cli, file: BundleSection) -> Result<Self, ConfigError> {
        let input_dir = cli.input_dir.clone().or(file.input_dir).ok_or_else(|| {
            ConfigError::Validation(
                "missing input directory: pass --input-dir or set bundle.input_dir".to_string(),
            )
        })?;
        let output_c = cli.output_c.clone().or(file.output_c).ok_or_else(|| {
            ConfigError::Validation(
                "missing output file: pass --output-c or set bundle.output_c".to_string(),
            )
        })?;

        let header_include = cli
            .header_include
            .clone()
            .or(file.header_include)
            .unwrap_or_else(|| DEFAULT_HEADER_INCLUDE.to_string());
        if header_include.is_empty() || header_include.contains(['"', '\n']) {
            return Err(ConfigError::Validation(format!(
                "invalid header include `{header_include}`"
            )));
        }

        let output_h = cli.output_h.clone().or(file.output_h);
        if output_h.as_ref() == Some(&output_c) {
            return Err(ConfigError::Validation(format!(
                "header output and source output are the same file: {}",
                output_c.display()
            )));
        }

        Ok(Self {
            input_dir,
            output_c,
            output_h,
            header_include,
        })
    }
}

/// Parse a config snippet for tests (asserts no unknown fields).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> FileConfig {
    let (parsed, ignored) = FileConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli() -> Cli {
        Cli::default()
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = FileConfig::parse_with_ignored("[bundle\ninput_dir = \"web\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_parse_bundle_section() {
        let config = test_parse_config(
            "[bundle]\ninput_dir = \"web\"\noutput_c = \"out/web_assets.c\"\nheader_include = \"fw/web.h\"",
        );
        assert_eq!(config.bundle.input_dir, Some(PathBuf::from("web")));
        assert_eq!(config.bundle.output_c, Some(PathBuf::from("out/web_assets.c")));
        assert_eq!(config.bundle.output_h, None);
        assert_eq!(config.bundle.header_include.as_deref(), Some("fw/web.h"));
    }

    #[test]
    fn test_parse_empty() {
        let config = test_parse_config("");
        assert!(config.bundle.input_dir.is_none());
    }

    #[test]
    fn test_unknown_fields_collected() {
        let (_, ignored) =
            FileConfig::parse_with_ignored("[bundle]\ninput_dir = \"web\"\ncompress = true")
                .unwrap();
        assert_eq!(ignored, vec!["bundle.compress".to_string()]);
    }

    #[test]
    fn test_merge_cli_only() {
        let cli = Cli {
            input_dir: Some("web".into()),
            output_c: Some("out.c".into()),
            ..cli()
        };
        let config = BundleConfig::merge(&cli, BundleSection::default()).unwrap();

        assert_eq!(config.input_dir, PathBuf::from("web"));
        assert_eq!(config.output_c, PathBuf::from("out.c"));
        assert_eq!(config.output_h, None);
        assert_eq!(config.header_include, DEFAULT_HEADER_INCLUDE);
    }

    #[test]
    fn test_merge_cli_overrides_file() {
        let cli = Cli {
            input_dir: Some("cli_web".into()),
            ..cli()
        };
        let file = BundleSection {
            input_dir: Some("file_web".into()),
            output_c: Some("file.c".into()),
            output_h: Some("file.h".into()),
            header_include: Some("file.h".into()),
        };
        let config = BundleConfig::merge(&cli, file).unwrap();

        assert_eq!(config.input_dir, PathBuf::from("cli_web"));
        assert_eq!(config.output_c, PathBuf::from("file.c"));
        assert_eq!(config.output_h, Some(PathBuf::from("file.h")));
        assert_eq!(config.header_include, "file.h");
    }

    #[test]
    fn test_merge_missing_required() {
        let err = BundleConfig::merge(&cli(), BundleSection::default()).unwrap_err();
        assert!(err.to_string().contains("--input-dir"));

        let cli = Cli {
            input_dir: Some("web".into()),
            ..cli()
        };
        let err = BundleConfig::merge(&cli, BundleSection::default()).unwrap_err();
        assert!(err.to_string().contains("--output-c"));
    }

    #[test]
    fn test_merge_rejects_bad_header_include() {
        let cli = Cli {
            input_dir: Some("web".into()),
            output_c: Some("out.c".into()),
            header_include: Some("web\".h".into()),
            ..cli()
        };
        assert!(matches!(
            BundleConfig::merge(&cli, BundleSection::default()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_merge_rejects_header_over_source() {
        let cli = Cli {
            input_dir: Some("web".into()),
            output_c: Some("build/web_assets.c".into()),
            ..cli()
        };
        let file = BundleSection {
            output_h: Some("build/web_assets.c".into()),
            ..BundleSection::default()
        };
        let err = BundleConfig::merge(&cli, file).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("same file"));
    }

    #[test]
    fn test_load_explicit_config_relative_paths() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assets.toml");
        fs::write(
            &path,
            "[bundle]\ninput_dir = \"web\"\noutput_c = \"build/web_assets.c\"\noutput_h = \"/abs/web_assets.h\"",
        )
        .unwrap();

        let cli = Cli {
            config: Some(path),
            ..cli()
        };
        let config = BundleConfig::load(&cli).unwrap();

        assert_eq!(config.input_dir, dir.path().join("web"));
        assert_eq!(config.output_c, dir.path().join("build/web_assets.c"));
        assert_eq!(config.output_h, Some(PathBuf::from("/abs/web_assets.h")));
    }

    #[test]
    fn test_load_explicit_config_missing() {
        let dir = TempDir::new().unwrap();
        let cli = Cli {
            config: Some(dir.path().join("nope.toml")),
            input_dir: Some("web".into()),
            output_c: Some("out.c".into()),
            ..cli()
        };
        assert!(matches!(BundleConfig::load(&cli), Err(ConfigError::Io(..))));
    }
}
