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

/// Identifies a performance time slot. Unique within the mock catalog and
/// within any one API response.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleId(i64);

impl ScheduleId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl Display for ScheduleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One performance time slot with its cast and seating sections.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub schedule_id: ScheduleId,
    pub time: String,
    pub actor_names: Vec<String>,
    pub sections: Vec<Section>,
}

impl Schedule {
    /// All booked seat codes across this schedule's sections, concatenated
    /// in section order. Sections that don't track booked seats contribute
    /// nothing.
    pub fn booked_seats(&self) -> Vec<String> {
        let mut booked = Vec::new();
        for section in &self.sections {
            if let Some(seats) = &section.booked_seats {
                booked.extend(seats.iter().cloned());
            }
        }
        booked
    }
}

/// A seating block within a schedule.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Section name, e.g. "R", "S", "A".
    pub section: String,
    pub available_seats: u32,
    /// Booked seat codes. Absent means unknown/not tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booked_seats: Option<Vec<String>>,
}
