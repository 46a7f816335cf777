//! # Configuration
//!
//! Included here are methods to set up and configure the tool.
//!
//! The defaults cover the two deployment shapes the tool runs in: inside the
//! Radicale container, where `/etc/radicale` is the live configuration
//! directory, and on a development host, where records land in a
//! project-local `config/` directory instead. An optional YAML file can
//! override the file locations and the bcrypt cost; when none is found the
//! built-in defaults apply.

use serde_yaml;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use errors::*;
use hashing;

/// Users file inside the Radicale container image.
pub const PRIMARY_USERS_FILE: &'static str = "/etc/radicale/users";
/// Users file relative to a development checkout.
pub const FALLBACK_USERS_FILE: &'static str = "config/users";

lazy_static! {
    /// Candidate configuration files, probed in order.
    static ref CONFIG_FILES: [PathBuf; 2] = [
        PathBuf::from("/etc/radicale/useradd.yaml"),
        PathBuf::from("config/useradd.yaml"),
    ];
}

/// Holds the tool's configurable options.
/// See the [module level documentation](index.html) for more information.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Location of the live users file, preferred whenever it exists.
    pub users_file: PathBuf,
    /// Location written when `users_file` is absent.
    pub fallback_file: PathBuf,
    /// Bcrypt cost factor for newly hashed passwords.
    pub cost: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            users_file: PathBuf::from(PRIMARY_USERS_FILE),
            fallback_file: PathBuf::from(FALLBACK_USERS_FILE),
            cost: hashing::DEFAULT_COST,
        }
    }
}

impl Config {
    /// Reads configuration from a YAML file.
    ///
    /// Missing fields keep their default values; unknown fields are ignored.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Probes the default configuration locations, first hit wins.
    ///
    /// Returns the built-in defaults when no configuration file exists.
    pub fn load() -> Result<Self> {
        for path in CONFIG_FILES.iter() {
            if path.exists() {
                debug!("loading configuration from {}", path.display());
                return Self::from_file(path);
            }
        }
        debug!("no configuration file found, using defaults");
        Ok(Self::default())
    }
}
