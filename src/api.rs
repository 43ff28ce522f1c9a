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

use serde::Deserialize;

use crate::config::Config;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::seat_availability::AvailabilitySource;
use crate::session::TokenProvider;
use crate::tickets::TicketSource;
use crate::types::date_key::DateKey;
use crate::types::schedule::Schedule;
use crate::types::ticket::Cursor;
use crate::types::ticket::TicketPage;

/// The live ticketing backend. Implements both store source traits.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Box<dyn TokenProvider + Send + Sync>,
}

/// Response envelope of the seats-availability endpoint.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AvailabilityEnvelope {
    result_code: u16,
    result_msg: Option<String>,
    #[serde(default)]
    result: Option<Vec<Schedule>>,
}

/// Response envelope of the tickets endpoint.
#[derive(Deserialize)]
struct TicketsEnvelope {
    result: TicketPage,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: Box<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            tokens,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url(), config.token_provider())
    }
}

impl AvailabilitySource for ApiClient {
    /// `GET /api/musicals/{musical_id}/seats-availability?date=YYYY-MM-DD`.
    /// The envelope's `resultCode` must be 200; any other code, a non-2xx
    /// status, or an undecodable body is an error.
    async fn seat_availability(&self, musical_id: i64, date: DateKey) -> Fallible<Vec<Schedule>> {
        let url = format!("{}/api/musicals/{musical_id}/seats-availability", self.base_url);
        log::debug!("GET {url}?date={date}");
        let response = self
            .http
            .get(&url)
            .query(&[("date", date.to_string())])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ErrorReport::Api {
                code: status.as_u16(),
                msg: status.to_string(),
            });
        }
        let envelope: AvailabilityEnvelope = response.json().await?;
        if envelope.result_code != 200 {
            return Err(ErrorReport::Api {
                code: envelope.result_code,
                msg: envelope
                    .result_msg
                    .unwrap_or_else(|| "seats-availability request failed".to_string()),
            });
        }
        Ok(envelope.result.unwrap_or_default())
    }
}

impl TicketSource for ApiClient {
    /// `GET /api/tickets[?cursor=...]` with a bearer token when the session
    /// has one. Without a token the request is still sent; rejecting it is
    /// the server's call.
    async fn ticket_page(&self, cursor: Option<&Cursor>) -> Fallible<TicketPage> {
        let url = format!("{}/api/tickets", self.base_url);
        log::debug!("GET {url}");
        let mut request = self.http.get(&url);
        if let Some(cursor) = cursor {
            request = request.query(&[("cursor", cursor.as_str())]);
        }
        if let Some(token) = self.tokens.access_token() {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ErrorReport::Api {
                code: status.as_u16(),
                msg: status.to_string(),
            });
        }
        let envelope: TicketsEnvelope = response.json().await?;
        Ok(envelope.result)
    }
}
