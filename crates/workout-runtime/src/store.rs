//! Single-owner container for the published chart result.
//!
//! There is exactly one consumer of the pipeline's output at a time, so the
//! store is plain owned state with an explicit replace operation. Loads are
//! generation-tagged: starting a new load supersedes any in-flight one, and
//! a superseded load's result is refused at publish time so partial or stale
//! data never replaces a newer result.

use tracing::debug;
use workout_data::pipeline::ChartData;

// ── LoadTicket ────────────────────────────────────────────────────────────────

/// Proof that a load was started, carrying the generation it belongs to.
///
/// Obtained from [`ChartStore::begin_load`] and handed back to
/// [`ChartStore::publish`] together with the finished result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

// ── ChartStore ────────────────────────────────────────────────────────────────

/// Holds the current result set and enforces all-or-nothing replacement.
#[derive(Debug, Default)]
pub struct ChartStore {
    /// The most recently published result, if any.
    current: Option<ChartData>,
    /// Generation of the newest load that was started.
    generation: u64,
}

impl ChartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the start of a load event.
    ///
    /// Any ticket issued earlier becomes stale immediately: its eventual
    /// publish will be refused.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        debug!(generation = self.generation, "load started");
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Replace the current result with `data`, if `ticket` is still current.
    ///
    /// Returns `true` when the result was published. A stale ticket (a newer
    /// load has started since it was issued) drops `data` untouched and
    /// returns `false`, keeping whatever was published before.
    pub fn publish(&mut self, ticket: LoadTicket, data: ChartData) -> bool {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "stale load result dropped"
            );
            return false;
        }
        self.current = Some(data);
        debug!(generation = self.generation, "result published");
        true
    }

    /// The currently published result, if any load has completed.
    pub fn current(&self) -> Option<&ChartData> {
        self.current.as_ref()
    }

    /// Drop the published result, e.g. when the view goes away.
    pub fn clear(&mut self) {
        self.current = None;
        debug!("store cleared");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
