use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use parking_lot::RwLock;
use tracing::trace;

use crate::release::Release;

/**
    Ticket handed out when a refresh starts, used to
    order the results of overlapping refreshes.

    Tickets handed out later always compare greater.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

#[derive(Debug, Default)]
struct Slot {
    release: Option<Arc<Release>>,
    ticket: u64,
}

/**
    Cache for the most recently fetched release.

    The release is stored as an immutable snapshot that is swapped out
    as a whole, so readers only ever see a complete release or nothing.
    The lock is held just long enough to clone or swap a pointer.

    Can be cheaply cloned while still referring to the same underlying data.
*/
#[derive(Debug, Default, Clone)]
pub struct ReleaseCache {
    slot: Arc<RwLock<Slot>>,
    tickets: Arc<AtomicU64>,
}

impl ReleaseCache {
    /**
        Create a new, **empty** `ReleaseCache`.
    */
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /**
        Get the current release, or `None` if no release has been fetched yet.
    */
    #[must_use]
    pub fn read(&self) -> Option<Arc<Release>> {
        self.slot.read().release.clone()
    }

    /**
        Unconditionally install `release` as the current release.

        Concurrent calls race, and whichever one runs last wins.
    */
    pub fn replace(&self, release: Release) {
        let ticket = self.begin_refresh();
        let release = Arc::new(release);
        let mut slot = self.slot.write();
        slot.release = Some(release);
        slot.ticket = slot.ticket.max(ticket.0);
    }

    /**
        Hand out a ticket for a refresh that is about to start.
    */
    #[must_use]
    pub fn begin_refresh(&self) -> RefreshTicket {
        RefreshTicket(self.tickets.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /**
        Install `release` as the current release, unless a refresh
        that started after the one holding `ticket` already stored
        its result.

        Returns `true` if the release was installed.
    */
    pub fn replace_if_newer(&self, ticket: RefreshTicket, release: Release) -> bool {
        let release = Arc::new(release);
        let mut slot = self.slot.write();
        if ticket.0 < slot.ticket {
            trace!(
                ticket = ticket.0,
                current = slot.ticket,
                "Discarding result of outdated refresh"
            );
            return false;
        }
        slot.release = Some(release);
        slot.ticket = ticket.0;
        true
    }
}
