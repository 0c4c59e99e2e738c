//! Reading catalogs and match policies from disk or stdin.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use amenity_map::MatchPolicy;
use anyhow::{Context, Result, bail};
use tracing::debug;

/// Largest catalog accepted by default (1 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;

/// Path that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Reads one catalog, rejecting anything over `max_bytes`.
///
/// # Errors
///
/// Fails when the source cannot be read, is not UTF-8, or is too large.
pub fn read_catalog(path: &Path, max_bytes: u64) -> Result<String> {
    let text = if is_stdin(path) {
        read_limited(io::stdin().lock(), max_bytes).context("read catalog from stdin")?
    } else {
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        read_limited(file, max_bytes).with_context(|| format!("read {}", path.display()))?
    };
    debug!(source = %path.display(), bytes = text.len(), "catalog loaded");
    Ok(text)
}

/// Reads UTF-8 text from `reader`, failing once more than `max_bytes` arrive.
///
/// # Errors
///
/// Fails on I/O errors, oversized input, or invalid UTF-8.
pub fn read_limited<R: Read>(reader: R, max_bytes: u64) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut bytes)?;
    if bytes.len() as u64 > max_bytes {
        bail!("input exceeds the {max_bytes} byte limit");
    }
    String::from_utf8(bytes).context("input is not valid UTF-8")
}

/// Command-line adjustments layered over a policy file.
#[derive(Debug, Clone, Default)]
pub struct PolicyOverrides {
    pub threshold: Option<f64>,
    /// Replaces the stopword list when non-empty.
    pub stopwords: Vec<String>,
    /// Enables plural folding when set; never disables it.
    pub fold_plurals: bool,
}

/// Builds the effective policy: defaults, then the optional JSON file, then
/// overrides. The result is validated.
///
/// # Errors
///
/// Fails when the policy file cannot be read or parsed, or the final policy
/// is invalid.
pub fn resolve_policy(file: Option<&Path>, overrides: PolicyOverrides) -> Result<MatchPolicy> {
    let mut policy = match file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read policy {}", path.display()))?;
            serde_json::from_str::<MatchPolicy>(&text)
                .with_context(|| format!("parse policy {}", path.display()))?
        }
        None => MatchPolicy::default(),
    };
    if let Some(threshold) = overrides.threshold {
        policy.threshold = threshold;
    }
    if !overrides.stopwords.is_empty() {
        policy.stopwords = overrides.stopwords;
    }
    if overrides.fold_plurals {
        policy.fold_plurals = true;
    }
    policy.validate().context("invalid match policy")?;
    debug!(
        threshold = policy.threshold,
        stopwords = policy.stopwords.len(),
        aliases = policy.aliases.len(),
        fold_plurals = policy.fold_plurals,
        "match policy resolved"
    );
    Ok(policy)
}
