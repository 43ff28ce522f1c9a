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

use crate::catalog;
use crate::catalog::Catalog;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::date_key::DateKey;
use crate::types::schedule::Schedule;
use crate::types::schedule::ScheduleId;

/// A source of seat-section availability for a musical on a date.
#[allow(async_fn_in_trait)]
pub trait AvailabilitySource {
    async fn seat_availability(&self, musical_id: i64, date: DateKey) -> Fallible<Vec<Schedule>>;
}

/// Holds the seat availability shown on the ticket-browsing screen. Fetches
/// from the injected source; when the source fails, degrades to the fallback
/// catalog rather than surfacing the failure to the caller.
pub struct SeatAvailabilityStore<S> {
    source: S,
    fallback: Option<&'static Catalog>,
    selected_date: Option<DateKey>,
    history_list: Vec<Schedule>,
    loading: bool,
    error: Option<ErrorReport>,
}

impl<S: AvailabilitySource> SeatAvailabilityStore<S> {
    /// A store that degrades to the embedded catalog when the source fails.
    pub fn new(source: S) -> Self {
        Self::with_fallback(source, Some(catalog::embedded()))
    }

    /// A store with no fallback: a failed fetch leaves the schedule list
    /// empty. Catalog-backed lookups return nothing.
    pub fn without_fallback(source: S) -> Self {
        Self::with_fallback(source, None)
    }

    fn with_fallback(source: S, fallback: Option<&'static Catalog>) -> Self {
        Self {
            source,
            fallback,
            selected_date: None,
            history_list: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Fetch availability for a musical on a date, replacing the schedule
    /// list. Exactly one request is made, with no retries. On any failure
    /// (transport, non-success envelope, malformed response) the schedule
    /// list is taken from the fallback catalog instead, empty when the
    /// catalog has no entry for the date, and `error` records the failure.
    pub async fn fetch_seat_availability(&mut self, musical_id: i64, date: DateKey) {
        self.selected_date = Some(date);
        self.loading = true;
        self.error = None;
        match self.source.seat_availability(musical_id, date).await {
            Ok(schedules) => {
                // Live data is authoritative over the catalog.
                self.history_list = schedules;
            }
            Err(e) => {
                log::warn!("seat availability request failed, using the catalog: {e}");
                self.history_list = self
                    .fallback
                    .and_then(|catalog| catalog.schedules_for(date))
                    .map(<[Schedule]>::to_vec)
                    .unwrap_or_default();
                self.error = Some(e);
            }
        }
        self.loading = false;
    }

    /// The date whose catalog entry contains the given schedule. This scans
    /// the fallback catalog only, never live-fetched data, matching the
    /// source system's behavior.
    pub fn date_by_schedule_id(&self, schedule_id: ScheduleId) -> Option<DateKey> {
        self.fallback.and_then(|catalog| catalog.date_of(schedule_id))
    }

    /// All booked seat codes for a schedule, in section order. The catalog
    /// is consulted first and a catalog match short-circuits, even when it
    /// contributes no seats; otherwise the live schedule list is searched.
    /// No match at all yields an empty list.
    pub fn booked_seats(&self, schedule_id: ScheduleId) -> Vec<String> {
        if let Some(schedule) = self.fallback.and_then(|catalog| catalog.schedule(schedule_id)) {
            return schedule.booked_seats();
        }
        if let Some(schedule) = self
            .history_list
            .iter()
            .find(|s| s.schedule_id == schedule_id)
        {
            return schedule.booked_seats();
        }
        Vec::new()
    }

    pub fn selected_date(&self) -> Option<DateKey> {
        self.selected_date
    }

    pub fn history_list(&self) -> &[Schedule] {
        &self.history_list
    }

    pub const fn loading(&self) -> bool {
        self.loading
    }

    pub const fn error(&self) -> Option<&ErrorReport> {
        self.error.as_ref()
    }
}
