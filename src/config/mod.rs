//! Configuration file management and CLI/file/default resolution.

mod manager;

pub use manager::{
    ConfigFile, DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG, DltConfig, ResolveOptions,
    ResolvedConfig, load_config_file, resolve_config,
};
