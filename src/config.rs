// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Fallible;
use crate::session::FileToken;
use crate::session::StaticToken;
use crate::session::TokenProvider;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client configuration, loaded from a TOML file. Every field is optional;
/// a missing file yields the defaults.
#[derive(Default, Debug, Deserialize)]
pub struct Config {
    /// Base URL of the ticketing backend.
    pub base_url: Option<String>,
    /// A fixed access token.
    pub access_token: Option<String>,
    /// Path to a file holding the access token. Takes precedence over
    /// `access_token` when both are set.
    pub token_file: Option<PathBuf>,
}

impl Config {
    pub fn load(path: &Path) -> Fallible<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn token_provider(&self) -> Box<dyn TokenProvider + Send + Sync> {
        match &self.token_file {
            Some(path) => Box::new(FileToken::new(path.clone())),
            None => Box::new(StaticToken::new(self.access_token.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() -> Fallible<()> {
        let config = Config::load(Path::new("./does-not-exist.toml"))?;
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert!(config.token_provider().access_token().is_none());
        Ok(())
    }

    #[test]
    fn test_load() -> Fallible<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "base_url = \"https://tickets.example.com\"")?;
        writeln!(file, "access_token = \"sekrit\"")?;
        let config = Config::load(file.path())?;
        assert_eq!(config.base_url(), "https://tickets.example.com");
        assert_eq!(
            config.token_provider().access_token(),
            Some("sekrit".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_an_error() -> Fallible<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "base_url = [")?;
        assert!(Config::load(file.path()).is_err());
        Ok(())
    }
}
