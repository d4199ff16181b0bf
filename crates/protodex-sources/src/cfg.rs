//! Server `.cfg` parsing
//!
//! The server config is an INI-like text file:
//!
//! ```text
//! # comment
//! [paths]
//! server = /srv/game/server
//!
//! [parsing]
//! critter_lst = proto/critter.lst
//! ```
//!
//! Section names are case-insensitive; keys and values are trimmed. Lines
//! outside a section or without `=` are skipped rather than rejected, since
//! the file is hand-maintained and the game server itself is this lenient.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Parsed `[section]` / `key=value` server configuration.
#[derive(Debug, Default)]
pub struct ServerConfig {
    sections: HashMap<String, HashMap<String, String>>,
}

impl ServerConfig {
    /// Parse config text. Never fails; malformed lines are skipped.
    pub fn parse(content: &str) -> Self {
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                let name = name.to_lowercase();
                sections.entry(name.clone()).or_default();
                current = Some(name);
            } else if let (Some(section), Some((key, value))) = (&current, line.split_once('=')) {
                sections
                    .entry(section.clone())
                    .or_default()
                    .insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Self { sections }
    }

    /// Load and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(path = %path.display(), "loaded server config");
        Ok(Self::parse(&content))
    }

    /// Look up a value, if the section and key exist.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    /// Look up a value that must be present.
    pub fn require(&self, section: &str, key: &str) -> Result<&str> {
        self.get(section, key).ok_or_else(|| Error::MissingKey {
            section: section.to_string(),
            key: key.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
# game server config
[Paths]
server = /srv/game/server
client=/srv/game/client

[parsing]
critter_lst = proto/critter.lst

stray line without equals
";

    #[test]
    fn test_parse_sections_and_keys() {
        let config = ServerConfig::parse(SAMPLE);
        assert_eq!(config.get("paths", "server"), Some("/srv/game/server"));
        assert_eq!(config.get("paths", "client"), Some("/srv/game/client"));
        assert_eq!(
            config.get("parsing", "critter_lst"),
            Some("proto/critter.lst")
        );
    }

    #[test]
    fn test_parse_skips_comments_and_stray_lines() {
        let config = ServerConfig::parse(SAMPLE);
        assert_eq!(config.get("parsing", "stray line without equals"), None);
        assert_eq!(config.get("paths", "# game server config"), None);
    }

    #[test]
    fn test_require_missing_key() {
        let config = ServerConfig::parse(SAMPLE);
        let err = config.require("parsing", "items_lst").unwrap_err();
        assert!(matches!(err, Error::MissingKey { .. }));
        assert_eq!(err.to_string(), "config key missing: [parsing] items_lst");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = ServerConfig::load(&temp.path().join("server.cfg")).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }
}
