use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::RoiConfig;
use crate::errors::RoiError;

pub const CONFIG_FILE_NAME: &str = ".roimap.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<RoiConfig, RoiError> {
    toml::from_str::<RoiConfig>(contents)
        .map_err(|e| RoiError::config(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))
}

/// Load a config file from an explicit path; a missing file is an error.
pub fn load_config_from_path(path: &Path) -> Result<RoiConfig, RoiError> {
    let contents = read_config_file(path)
        .map_err(|e| RoiError::io("Failed to read config file", path, e))?;

    let config = parse_config_at(&contents, path)?;

    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Parse file contents, attaching the file's path to parse errors.
fn parse_config_at(contents: &str, path: &Path) -> Result<RoiConfig, RoiError> {
    parse_config(contents).map_err(|e| match e {
        RoiError::Config { message, .. } => RoiError::config_with_path(message, path),
        other => other,
    })
}

/// Try one candidate path during discovery.
///
/// A missing file is `Ok(None)` so the search continues upward. A file that
/// exists but cannot be read or parsed is an error.
pub(crate) fn try_load_config_from_path(
    config_path: &Path,
) -> Result<Option<RoiConfig>, RoiError> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) if is_missing(&e) => return Ok(None),
        Err(e) => return Err(RoiError::io("Failed to read config file", config_path, e)),
    };

    let config = parse_config_at(&contents, config_path)?;

    debug!(path = %config_path.display(), "loaded config");
    Ok(Some(config))
}

/// Only "file not found" lets discovery move on to the parent directory.
pub(crate) fn is_missing(error: &std::io::Error) -> bool {
    error.kind() == std::io::ErrorKind::NotFound
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.roimap.toml`.
///
/// The nearest file wins; if it is broken the search stops with its error.
pub fn discover_config(start: PathBuf) -> Result<Option<RoiConfig>, RoiError> {
    for dir in directory_ancestors(start, MAX_TRAVERSAL_DEPTH) {
        if let Some(config) = try_load_config_from_path(&dir.join(CONFIG_FILE_NAME))? {
            return Ok(Some(config));
        }
    }
    Ok(None)
}

/// Load the config for this run.
///
/// An explicit path must exist and parse. Without one, the current directory
/// and its ancestors are searched, falling back to defaults only when no
/// file is found.
pub fn load_config(explicit: Option<&Path>) -> Result<RoiConfig, RoiError> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            warn!("Failed to get current directory: {e}. Using default config.");
            return Ok(RoiConfig::default());
        }
    };

    Ok(discover_config(current)?.unwrap_or_else(|| {
        debug!(
            depth = MAX_TRAVERSAL_DEPTH,
            "No config found. Using default config."
        );
        RoiConfig::default()
    }))
}
