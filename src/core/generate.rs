//! The generate control: an `Idle -> Generating -> Idle` gate around one
//! selection, with the cosmetic delay in between.

use crate::catalog::Catalog;
use crate::core::random::RandomSource;
use crate::core::state::AppState;
use crate::core::timer::OneShotTimer;
use crate::errors::AppResult;
use crate::models::{Category, ExcuseRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Generating,
}

/// Admission of one generate request. Consumed by `complete` or `abandon`.
#[must_use]
#[derive(Debug)]
pub struct Ticket(());

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed(ExcuseRecord),
    /// A request was already in flight.
    Ignored,
    /// The timer was cancelled before it fired; state is untouched.
    Cancelled,
}

pub struct GenerateRequest<'a> {
    pub catalog: &'a Catalog,
    pub category: Option<Category>,
}

#[derive(Debug)]
pub struct GenerateControl {
    phase: Phase,
}

impl Default for GenerateControl {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerateControl {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `None` while another request is generating.
    pub fn begin(&mut self) -> Option<Ticket> {
        match self.phase {
            Phase::Generating => None,
            Phase::Idle => {
                self.phase = Phase::Generating;
                Some(Ticket(()))
            }
        }
    }

    /// Finish the request. The gate reopens even when selection fails.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        state: &mut AppState,
        request: &GenerateRequest<'_>,
        rng: &mut dyn RandomSource,
        now: i64,
    ) -> AppResult<ExcuseRecord> {
        let Ticket(()) = ticket;
        self.phase = Phase::Idle;
        state.generate(request.catalog, request.category, rng, now)
    }

    pub fn abandon(&mut self, ticket: Ticket) {
        let Ticket(()) = ticket;
        self.phase = Phase::Idle;
    }
}

/// Run one full cycle: admit, wait out `timer`, select and record.
///
/// `clock` is read only once the timer fires.
pub fn run_cycle(
    control: &mut GenerateControl,
    timer: OneShotTimer,
    state: &mut AppState,
    request: &GenerateRequest<'_>,
    rng: &mut dyn RandomSource,
    clock: &dyn Fn() -> i64,
) -> AppResult<Outcome> {
    let Some(ticket) = control.begin() else {
        return Ok(Outcome::Ignored);
    };

    if !timer.wait() {
        control.abandon(ticket);
        return Ok(Outcome::Cancelled);
    }

    control
        .complete(ticket, state, request, rng, clock())
        .map(Outcome::Completed)
}
