//! Per-kind "latest wins" bookkeeping.
//!
//! Every new intent of a kind bumps that kind's generation. A handler may
//! only publish while its ticket still carries the current generation.

use parking_lot::Mutex;

use crate::mvi::IntentKind;

/// Proof that a handler was started for a given generation of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    kind: IntentKind,
    generation: u64,
}

impl Ticket {
    pub fn kind(&self) -> IntentKind {
        self.kind
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
pub struct LatestWins {
    generations: [Mutex<u64>; IntentKind::ALL.len()],
}

impl LatestWins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation for `kind`, superseding any earlier ticket.
    pub fn begin(&self, kind: IntentKind) -> Ticket {
        let mut generation = self.generations[kind.index()].lock();
        *generation += 1;
        Ticket {
            kind,
            generation: *generation,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        *self.generations[ticket.kind.index()].lock() == ticket.generation
    }

    /// Runs `f` if `ticket` is still the newest for its kind.
    ///
    /// The kind's lock is held while `f` runs, so no `begin` for the same
    /// kind can slip in between the check and the publish. `f` must not call
    /// `begin` for that kind itself.
    pub fn commit<R>(&self, ticket: &Ticket, f: impl FnOnce() -> R) -> Option<R> {
        let generation = self.generations[ticket.kind.index()].lock();
        if *generation != ticket.generation {
            return None;
        }
        Some(f())
    }
}
