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

//! Client-side data access for a musical ticketing service: a seat
//! availability store that degrades to an embedded catalog when the backend
//! is unreachable, and a cursor-paginated ticket store.

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod seat_availability;
pub mod session;
pub mod tickets;
pub mod types;
