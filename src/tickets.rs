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

use crate::error::Fallible;
use crate::types::ticket::Cursor;
use crate::types::ticket::Ticket;
use crate::types::ticket::TicketPage;

/// A source of cursor-paginated ticket pages for the authenticated user.
#[allow(async_fn_in_trait)]
pub trait TicketSource {
    /// Fetch the first page (`cursor` is `None`) or the page starting at a
    /// cursor returned by an earlier page.
    async fn ticket_page(&self, cursor: Option<&Cursor>) -> Fallible<TicketPage>;
}

/// Accumulates the user's tickets across pages and tracks a cyclic card
/// index for the card-browsing screen.
pub struct TicketStore<S> {
    source: S,
    current_card: usize,
    next_cursor: Option<Cursor>,
    tickets: Vec<Ticket>,
}

impl<S: TicketSource> TicketStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            current_card: 0,
            next_cursor: None,
            tickets: Vec::new(),
        }
    }

    /// Fetch one page of tickets. On success the page's items are appended
    /// to the accumulated list (never deduplicated: re-fetching a cursor
    /// appends duplicates), `next_cursor` is replaced with the page's
    /// cursor, and the page's items are returned. On failure the error is
    /// returned and the store is left exactly as it was.
    pub async fn fetch_tickets(&mut self, cursor: Option<&Cursor>) -> Fallible<Vec<Ticket>> {
        let page = self.source.ticket_page(cursor).await?;
        self.tickets.extend(page.data.iter().cloned());
        self.next_cursor = page.next_cursor;
        Ok(page.data)
    }

    /// The cursor of the most recently fetched page.
    pub const fn next_cursor(&self) -> Option<&Cursor> {
        self.next_cursor.as_ref()
    }

    /// All tickets accumulated so far, in fetch order.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub const fn current_card(&self) -> usize {
        self.current_card
    }

    /// Advance the card index, wrapping past the last ticket back to the
    /// first. With no tickets, logs an error and does nothing.
    pub fn next_card(&mut self) {
        if self.tickets.is_empty() {
            log::error!("no tickets to page through");
            return;
        }
        self.current_card = (self.current_card + 1) % self.tickets.len();
    }

    /// Retreat the card index, wrapping before the first ticket back to the
    /// last. With no tickets, logs an error and does nothing.
    pub fn prev_card(&mut self) {
        if self.tickets.is_empty() {
            log::error!("no tickets to page through");
            return;
        }
        self.current_card = (self.current_card + self.tickets.len() - 1) % self.tickets.len();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use serde_json::json;

    use super::*;
    use crate::error::ErrorReport;
    use crate::error::fail;

    /// Serves a scripted sequence of results, one per call.
    struct ScriptedSource {
        pages: RefCell<VecDeque<Fallible<TicketPage>>>,
    }

    impl ScriptedSource {
        fn new(pages: Vec<Fallible<TicketPage>>) -> Self {
            Self {
                pages: RefCell::new(pages.into()),
            }
        }
    }

    impl TicketSource for ScriptedSource {
        async fn ticket_page(&self, _: Option<&Cursor>) -> Fallible<TicketPage> {
            match self.pages.borrow_mut().pop_front() {
                Some(result) => result,
                None => fail("no more scripted pages"),
            }
        }
    }

    fn ticket(id: i64) -> Ticket {
        Ticket::new(json!({ "ticketId": id }))
    }

    fn page(ids: &[i64], next_cursor: Option<&str>) -> TicketPage {
        TicketPage {
            data: ids.iter().copied().map(ticket).collect(),
            next_cursor: next_cursor.map(Cursor::new),
        }
    }

    /// Two pages accumulate in order, nothing dropped.
    #[tokio::test]
    async fn test_pages_accumulate() -> Fallible<()> {
        let source = ScriptedSource::new(vec![
            Ok(page(&[1, 2], Some("abc"))),
            Ok(page(&[3], None)),
        ]);
        let mut store = TicketStore::new(source);

        let first = store.fetch_tickets(None).await?;
        assert_eq!(first, vec![ticket(1), ticket(2)]);
        assert_eq!(store.next_cursor(), Some(&Cursor::new("abc")));

        let cursor = store.next_cursor().cloned().unwrap();
        let second = store.fetch_tickets(Some(&cursor)).await?;
        assert_eq!(second, vec![ticket(3)]);
        assert_eq!(store.next_cursor(), None);

        assert_eq!(store.tickets(), vec![ticket(1), ticket(2), ticket(3)]);
        Ok(())
    }

    /// A failed fetch returns the error and leaves the store untouched.
    #[tokio::test]
    async fn test_failure_leaves_state_unchanged() -> Fallible<()> {
        let source = ScriptedSource::new(vec![
            Ok(page(&[1], Some("abc"))),
            Err(ErrorReport::Message("boom".to_string())),
        ]);
        let mut store = TicketStore::new(source);
        store.fetch_tickets(None).await?;

        let result = store.fetch_tickets(None).await;
        assert!(result.is_err());
        assert_eq!(store.tickets(), vec![ticket(1)]);
        assert_eq!(store.next_cursor(), Some(&Cursor::new("abc")));
        Ok(())
    }

    /// Re-fetching a page appends duplicates; the store never deduplicates.
    #[tokio::test]
    async fn test_duplicates_are_kept() -> Fallible<()> {
        let source = ScriptedSource::new(vec![
            Ok(page(&[1], Some("abc"))),
            Ok(page(&[1], Some("abc"))),
        ]);
        let mut store = TicketStore::new(source);
        store.fetch_tickets(None).await?;
        store.fetch_tickets(None).await?;
        assert_eq!(store.tickets(), vec![ticket(1), ticket(1)]);
        Ok(())
    }

    /// Three `next_card` calls over three tickets return to the start; one
    /// `prev_card` from the start wraps to the end.
    #[tokio::test]
    async fn test_card_navigation_wraps() -> Fallible<()> {
        let source = ScriptedSource::new(vec![Ok(page(&[1, 2, 3], None))]);
        let mut store = TicketStore::new(source);
        store.fetch_tickets(None).await?;

        assert_eq!(store.current_card(), 0);
        store.next_card();
        assert_eq!(store.current_card(), 1);
        store.next_card();
        assert_eq!(store.current_card(), 2);
        store.next_card();
        assert_eq!(store.current_card(), 0);

        store.prev_card();
        assert_eq!(store.current_card(), 2);
        Ok(())
    }

    /// Card navigation on an empty store is a logged no-op.
    #[test]
    fn test_card_navigation_empty() {
        let mut store = TicketStore::new(ScriptedSource::new(vec![]));
        store.next_card();
        assert_eq!(store.current_card(), 0);
        store.prev_card();
        assert_eq!(store.current_card(), 0);
    }
}
