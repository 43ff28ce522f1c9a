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

use clap::Parser;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Fallible;
use crate::seat_availability::SeatAvailabilityStore;
use crate::tickets::TicketStore;
use crate::types::date_key::DateKey;

/// Config file looked up in the working directory.
const CONFIG_FILE: &str = "boxoffice.toml";

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Show seat availability for a musical on a date.
    Seats {
        /// Musical identifier.
        musical_id: i64,
        /// Date in `YYYY-MM-DD` form. Defaults to today.
        date: Option<String>,
    },
    /// List the tickets belonging to the authenticated user.
    Tickets {
        /// Follow pagination cursors until the last page.
        #[arg(long)]
        all: bool,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    let config = Config::load(Path::new(CONFIG_FILE))?;
    let client = ApiClient::from_config(&config);
    match cli {
        Command::Seats { musical_id, date } => {
            let date: DateKey = match date {
                Some(date) => date.parse()?,
                None => DateKey::today(),
            };
            let mut store = SeatAvailabilityStore::new(client);
            store.fetch_seat_availability(musical_id, date).await;
            if let Some(error) = store.error() {
                log::warn!("live data unavailable ({error}), showing catalog data");
            }
            if store.history_list().is_empty() {
                println!("No schedules for {date}.");
            }
            for schedule in store.history_list() {
                println!(
                    "{} {}  [{}]",
                    date,
                    schedule.time,
                    schedule.actor_names.join(", ")
                );
                for section in &schedule.sections {
                    println!(
                        "  {}: {} seats available",
                        section.section, section.available_seats
                    );
                }
            }
        }
        Command::Tickets { all } => {
            let mut store = TicketStore::new(client);
            let mut page = store.fetch_tickets(None).await?;
            loop {
                for ticket in &page {
                    println!("{}", serde_json::to_string(ticket)?);
                }
                if !all {
                    break;
                }
                let Some(cursor) = store.next_cursor().cloned() else {
                    break;
                };
                page = store.fetch_tickets(Some(&cursor)).await?;
            }
            println!("{} tickets.", store.tickets().len());
        }
    }
    Ok(())
}
