// Thu Feb 12 2026 - Alex

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

// Immutable run configuration. Built and validated once up front; the core
// stages receive it by reference and never re-check paths themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub methods_file: PathBuf,
    pub fields_file: PathBuf,
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub report_dir: PathBuf,
    pub overwrite_output: bool,
}

impl Config {
    pub fn new(input_file: PathBuf, methods_file: PathBuf, fields_file: PathBuf) -> Self {
        let output_file = Self::default_output_for(&input_file);
        Self {
            methods_file,
            fields_file,
            input_file,
            output_file,
            report_dir: PathBuf::from("logs"),
            overwrite_output: false,
        }
    }

    // The two correspondence files live under a single MCP config directory
    // with fixed names.
    pub fn from_mcp_dir(input_file: PathBuf, mcp_dir: &Path) -> Self {
        Self::new(
            input_file,
            mcp_dir.join("methods.csv"),
            mcp_dir.join("fields.csv"),
        )
    }

    pub fn with_output_file(mut self, output_file: PathBuf) -> Self {
        self.output_file = output_file;
        self
    }

    pub fn with_report_dir(mut self, report_dir: PathBuf) -> Self {
        self.report_dir = report_dir;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite_output = overwrite;
        self
    }

    // Input stem with "-PARSED" inserted before the extension, next to the
    // input file.
    pub fn default_output_for(input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");

        let name = match input.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}-PARSED.{}", stem, ext),
            None => format!("{}-PARSED", stem),
        };

        input.with_file_name(name)
    }

    pub fn unresolved_report_path(&self) -> PathBuf {
        let output_name = self
            .output_file
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("output");

        self.report_dir
            .join(format!("ParseData-{}-{}.log", output_name, epoch_seconds()))
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.methods_file.is_file() {
            return Err(format!(
                "Methods mapping file not found: {}",
                self.methods_file.display()
            ));
        }
        if !self.fields_file.is_file() {
            return Err(format!(
                "Fields mapping file not found: {}",
                self.fields_file.display()
            ));
        }
        if !self.input_file.is_file() {
            return Err(format!(
                "Input log not found: {}",
                self.input_file.display()
            ));
        }
        if self.output_file == self.input_file {
            return Err("Output file must differ from the input file".to_string());
        }
        if self.output_file.exists() && !self.overwrite_output {
            return Err(format!(
                "Output file already exists (pass --overwrite to replace): {}",
                self.output_file.display()
            ));
        }
        Ok(())
    }
}

fn epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "srg-log-translator-{}-{}",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            Config::default_output_for(Path::new("/tmp/crash.log")),
            PathBuf::from("/tmp/crash-PARSED.log")
        );
        assert_eq!(
            Config::default_output_for(Path::new("crash")),
            PathBuf::from("crash-PARSED")
        );
    }

    #[test]
    fn test_from_mcp_dir_resolves_fixed_names() {
        let config = Config::from_mcp_dir(PathBuf::from("crash.log"), Path::new("/mcp/conf"));
        assert_eq!(config.methods_file, PathBuf::from("/mcp/conf/methods.csv"));
        assert_eq!(config.fields_file, PathBuf::from("/mcp/conf/fields.csv"));
    }

    #[test]
    fn test_validate_rejects_missing_sources() {
        let config = Config::new(
            PathBuf::from("/nonexistent/crash.log"),
            PathBuf::from("/nonexistent/methods.csv"),
            PathBuf::from("/nonexistent/fields.csv"),
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_existing_output_without_overwrite() {
        let methods = temp_file("cfg-methods.csv", "searge,name,side\n");
        let fields = temp_file("cfg-fields.csv", "searge,name,side\n");
        let input = temp_file("cfg-crash.log", "line\n");
        let output = temp_file("cfg-crash-PARSED.log", "old\n");

        let config = Config::new(input.clone(), methods.clone(), fields.clone())
            .with_output_file(output.clone());
        assert!(config.validate().is_err());

        let config = config.with_overwrite(true);
        assert!(config.validate().is_ok());

        for path in [methods, fields, input, output] {
            fs::remove_file(path).ok();
        }
    }

    #[test]
    fn test_unresolved_report_path_shape() {
        let config = Config::new(
            PathBuf::from("crash.log"),
            PathBuf::from("methods.csv"),
            PathBuf::from("fields.csv"),
        )
        .with_report_dir(PathBuf::from("logs"));

        let path = config.unresolved_report_path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("ParseData-crash-PARSED.log-"));
        assert!(name.ends_with(".log"));
        assert_eq!(path.parent(), Some(Path::new("logs")));
    }
}
