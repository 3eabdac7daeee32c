//! The driver-facing simulation trait.

use crate::grid::GridDims;

/// Result of advancing a simulation by one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The simulation may still change on later steps.
    Running,
    /// The step found nothing to do; further steps are no-ops until the
    /// state is changed from outside.
    Settled,
}

impl StepOutcome {
    /// `true` for [`StepOutcome::Settled`].
    pub fn is_settled(self) -> bool {
        matches!(self, StepOutcome::Settled)
    }
}

/// A grid simulation that an external driver (typically a render loop)
/// steps once per frame and reads back for rasterization.
///
/// Implementations are single-threaded from the caller's point of view:
/// [`advance`](Simulation::advance) takes `&mut self`, so no read can
/// overlap a step in progress.
pub trait Simulation {
    /// Per-cell state exposed to the driver.
    type Cell;

    /// Grid dimensions, fixed for the lifetime of the simulation.
    fn dims(&self) -> GridDims;

    /// Advance by exactly one step.
    fn advance(&mut self) -> StepOutcome;

    /// Current cell state, row-major, `dims().cell_count()` long.
    fn cells(&self) -> &[Self::Cell];
}

/// Step `sim` until it reports [`StepOutcome::Settled`] or `max_steps`
/// steps have run. Returns the number of steps taken, including the
/// settling one.
pub fn run_for<S: Simulation + ?Sized>(sim: &mut S, max_steps: u64) -> u64 {
    let mut taken = 0;
    while taken < max_steps {
        taken += 1;
        if sim.advance().is_settled() {
            break;
        }
    }
    taken
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts down to zero, then settles.
    struct Countdown {
        dims: GridDims,
        cells: Vec<u32>,
    }

    impl Simulation for Countdown {
        type Cell = u32;

        fn dims(&self) -> GridDims {
            self.dims
        }

        fn advance(&mut self) -> StepOutcome {
            if self.cells[0] == 0 {
                return StepOutcome::Settled;
            }
            self.cells[0] -= 1;
            StepOutcome::Running
        }

        fn cells(&self) -> &[u32] {
            &self.cells
        }
    }

    fn countdown(from: u32) -> Countdown {
        Countdown {
            dims: GridDims::new(1, 1).unwrap(),
            cells: vec![from],
        }
    }

    #[test]
    fn run_for_stops_at_settle() {
        let mut sim = countdown(3);
        // Three decrements, then one settling step.
        assert_eq!(run_for(&mut sim, 100), 4);
        assert_eq!(sim.cells(), &[0]);
    }

    #[test]
    fn run_for_respects_budget() {
        let mut sim = countdown(10);
        assert_eq!(run_for(&mut sim, 4), 4);
        assert_eq!(sim.cells(), &[6]);
    }

    #[test]
    fn run_for_zero_budget_does_nothing() {
        let mut sim = countdown(2);
        assert_eq!(run_for(&mut sim, 0), 0);
        assert_eq!(sim.cells(), &[2]);
    }

    #[test]
    fn works_through_trait_object() {
        let mut sim = countdown(1);
        let dyn_sim: &mut dyn Simulation<Cell = u32> = &mut sim;
        assert_eq!(run_for(dyn_sim, 10), 2);
    }
}
