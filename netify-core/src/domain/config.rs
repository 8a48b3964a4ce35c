// netify-core/src/domain/config.rs

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_APPLICATIONS_FILE: &str = "applications.csv";
pub const DEFAULT_DOMAINS_FILE: &str = "domains.csv";
pub const DEFAULT_IPS_FILE: &str = "ips.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "netify.csv";

/// Table consumed by the generated file.
pub const DOWNSTREAM_TABLE: &str = "netify_data";

/// File locations of one conversion run. Relative paths resolve against `data_dir`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PipelineConfig {
    #[serde(skip)]
    pub data_dir: PathBuf,

    #[serde(default = "default_applications")]
    pub applications: PathBuf,

    #[serde(default = "default_domains")]
    pub domains: PathBuf,

    #[serde(default = "default_ips")]
    pub ips: PathBuf,

    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            applications: default_applications(),
            domains: default_domains(),
            ips: default_ips(),
            output: default_output(),
        }
    }
}

impl PipelineConfig {
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn applications_path(&self) -> PathBuf {
        self.resolve(&self.applications)
    }

    pub fn domains_path(&self) -> PathBuf {
        self.resolve(&self.domains)
    }

    pub fn ips_path(&self) -> PathBuf {
        self.resolve(&self.ips)
    }

    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output)
    }

    // Path::join already keeps absolute paths as they are.
    fn resolve(&self, path: &Path) -> PathBuf {
        self.data_dir.join(path)
    }
}

fn default_applications() -> PathBuf {
    PathBuf::from(DEFAULT_APPLICATIONS_FILE)
}
fn default_domains() -> PathBuf {
    PathBuf::from(DEFAULT_DOMAINS_FILE)
}
fn default_ips() -> PathBuf {
    PathBuf::from(DEFAULT_IPS_FILE)
}
fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}
