//! Service configuration types.

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "0.0.0.0:4567";
pub const DEFAULT_FILE: &str = "n_query_file.txt";
pub const DEFAULT_BODY_LIMIT: usize = 16 * 1024;

pub const BIND_VAR: &str = "NQUERY_BIND";
pub const FILE_VAR: &str = "NQUERY_FILE";
pub const BODY_LIMIT_VAR: &str = "NQUERY_BODY_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind: SocketAddr,
    /// Append-only file holding one stored value per line.
    pub data_file: PathBuf,
    /// Maximum request body size in bytes.
    pub body_limit: usize,
}

impl ServiceConfig {
    /// Config pointing at `data_file`, other fields defaulted.
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            ..Self::default()
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 4567)),
            data_file: PathBuf::from(DEFAULT_FILE),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}
