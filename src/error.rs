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

use thiserror::Error;

pub type Fallible<T> = Result<T, ErrorReport>;

#[derive(Debug, Error)]
pub enum ErrorReport {
    /// A free-form error message.
    #[error("error: {0}")]
    Message(String),
    /// Transport-level failure: connection refused, timeout, or a response
    /// body that could not be decoded.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered, but with a non-success status or envelope code.
    #[error("api error {code}: {msg}")]
    Api { code: u16, msg: String },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Shorthand for returning a free-form error.
pub fn fail<T>(msg: impl Into<String>) -> Fallible<T> {
    Err(ErrorReport::Message(msg.into()))
}
