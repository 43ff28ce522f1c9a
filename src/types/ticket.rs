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

use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

/// A ticket as returned by the backend. The client treats it as an opaque
/// payload and never looks inside.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticket(serde_json::Value);

impl Ticket {
    pub const fn new(payload: serde_json::Value) -> Self {
        Self(payload)
    }
}

/// An opaque pagination token, echoed back to the server to request the
/// page following the one it came from.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Cursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One page of the user's tickets.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPage {
    pub data: Vec<Ticket>,
    /// Token for the next page, or `None` on the last page.
    #[serde(default)]
    pub next_cursor: Option<Cursor>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_page_wire_format() -> Fallible<()> {
        let json = r#"{ "data": [{ "ticketId": 7 }], "nextCursor": "abc" }"#;
        let page: TicketPage = serde_json::from_str(json)?;
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.next_cursor, Some(Cursor::new("abc")));
        Ok(())
    }

    /// The last page may carry a null cursor, or omit it entirely.
    #[test]
    fn test_last_page_cursor() -> Fallible<()> {
        let page: TicketPage = serde_json::from_str(r#"{ "data": [], "nextCursor": null }"#)?;
        assert_eq!(page.next_cursor, None);
        let page: TicketPage = serde_json::from_str(r#"{ "data": [] }"#)?;
        assert_eq!(page.next_cursor, None);
        Ok(())
    }
}
