//! Utility module for ui-utils.
//!
//! Config file locations.

mod paths;

pub use paths::{config_dir, global_config_file, local_config_file, LOCAL_CONFIG_NAME};
