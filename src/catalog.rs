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

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::types::date_key::DateKey;
use crate::types::schedule::Schedule;
use crate::types::schedule::ScheduleId;

/// A static mapping from date key to schedule list, used as a substitute
/// data source when the live API is unavailable.
pub struct Catalog {
    entries: BTreeMap<DateKey, Vec<Schedule>>,
}

impl Catalog {
    /// The schedules for a date, if the catalog has an entry for it.
    pub fn schedules_for(&self, date: DateKey) -> Option<&[Schedule]> {
        self.entries.get(&date).map(Vec::as_slice)
    }

    /// The date whose schedule list contains the given schedule, scanning
    /// dates in ascending order.
    pub fn date_of(&self, schedule_id: ScheduleId) -> Option<DateKey> {
        for (date, schedules) in &self.entries {
            if schedules.iter().any(|s| s.schedule_id == schedule_id) {
                return Some(*date);
            }
        }
        None
    }

    /// The first schedule with the given id, scanning dates in ascending
    /// order.
    pub fn schedule(&self, schedule_id: ScheduleId) -> Option<&Schedule> {
        self.entries
            .values()
            .flatten()
            .find(|s| s.schedule_id == schedule_id)
    }
}

/// The catalog compiled into the binary.
pub fn embedded() -> &'static Catalog {
    static EMBEDDED: OnceLock<Catalog> = OnceLock::new();
    EMBEDDED.get_or_init(|| {
        let entries = serde_json::from_str(include_str!("catalog.json"))
            .expect("embedded catalog is well-formed");
        Catalog { entries }
    })
}
