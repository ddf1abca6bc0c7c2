//! Bookkeeping for asynchronous base-image loads.
//!
//! Decoding is the only boundary where work may complete out of order. Each
//! load is tagged with a [`LoadTicket`]; only the most recently issued ticket
//! may apply its result, and the owner counts as ready only while no ticket
//! is outstanding.

/// Identifies one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Tracks the newest load request and whether it has completed.
#[derive(Debug, Default)]
pub struct LoadTracker {
    generation: u64,
    pending: Option<LoadTicket>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new load, superseding any load still in flight.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        let ticket = LoadTicket(self.generation);
        if let Some(stale) = self.pending.replace(ticket) {
            log::debug!("Load {:?} superseded by {:?}", stale, ticket);
        }
        ticket
    }

    /// Marks `ticket` finished. Returns false for a stale or unknown ticket,
    /// whose result must then be discarded.
    pub fn complete(&mut self, ticket: LoadTicket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            log::debug!("Ignoring completion of stale load {:?}", ticket);
            false
        }
    }

    /// True when no load is outstanding.
    pub fn is_ready(&self) -> bool {
        self.pending.is_none()
    }
}
