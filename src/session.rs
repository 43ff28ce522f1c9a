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

use std::path::PathBuf;

/// A read-only source for the session's access token. The client reads the
/// token before each authenticated request and never writes it.
pub trait TokenProvider {
    /// The current access token, or `None` when the session has none.
    fn access_token(&self) -> Option<String>;
}

/// A fixed token (possibly absent), handed over at construction time.
pub struct StaticToken {
    token: Option<String>,
}

impl StaticToken {
    pub const fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

impl TokenProvider for StaticToken {
    fn access_token(&self) -> Option<String> {
        self.token.clone()
    }
}

/// Reads the token from a file on every request, so an external login flow
/// can rotate it under a running process. A missing, unreadable, or empty
/// file means no token.
pub struct FileToken {
    path: PathBuf,
}

impl FileToken {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenProvider for FileToken {
    fn access_token(&self) -> Option<String> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        let token = contents.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }
}
