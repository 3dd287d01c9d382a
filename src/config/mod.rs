//! Configuration parsing
//!
//! Handles the optional YAML configuration file and the overrides layered on
//! top of it.
//!
//! ## Configuration Format
//!
//! ```yaml
//! target:
//!   base_url: http://localhost:8001/api
//!   timeout: 10s
//!
//! client_name_prefix: test_client
//! ```
//!
//! ## Precedence
//!
//! `--base-url` flag, then `STATUSPROBE_BASE_URL`, then `target.base_url`,
//! then [`DEFAULT_BASE_URL`].

mod target;

pub use target::{BASE_URL_ENV, Config, ConfigError, DEFAULT_BASE_URL, TargetConfig};
