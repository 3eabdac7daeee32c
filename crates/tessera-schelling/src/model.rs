//! The segregation model and its relocation step.

use crate::occupant::{Group, Occupant};
use crate::params::SchellingParams;
use log::{debug, info, trace};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use tessera_core::{ConfigError, EdgeBehavior, GridDims, Simulation, StepOutcome};

/// Two-group Schelling model on a grid with wrapped edges.
///
/// The grid stores one [`Occupant`] per cell. Alongside it the model keeps
/// an unordered list of the empty cells, so that choosing a destination is
/// a single uniform draw and a relocation is an in-place overwrite of the
/// consumed entry with the vacated cell. The list always holds exactly the
/// indices of empty cells.
///
/// # Examples
///
/// ```
/// use tessera_schelling::{SchellingParams, SegregationModel};
///
/// let mut model = SegregationModel::new(20, 20, SchellingParams::default(), 7).unwrap();
/// assert_eq!(model.occupied_count(), 200);
/// for _ in 0..50 {
///     if model.step() {
///         break;
///     }
/// }
/// assert!((0.0..=1.0).contains(&model.segregation()));
/// ```
#[derive(Clone, Debug)]
pub struct SegregationModel {
    dims: GridDims,
    params: SchellingParams,
    grid: Vec<Occupant>,
    empty_spots: Vec<usize>,
    rng: ChaCha8Rng,
    generation: u64,
    relocations: usize,
    settled: bool,
}

impl SegregationModel {
    /// Create a model with `floor(width * height * density)` agents at
    /// random cells, each in group A or B with equal probability.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either dimension is zero or too large, or if a
    /// parameter lies outside `[0, 1]`.
    pub fn new(
        width: u32,
        height: u32,
        params: SchellingParams,
        rng_seed: u64,
    ) -> Result<Self, ConfigError> {
        let mut model = Self::empty(width, height, params, rng_seed)?;
        let agents = (model.dims.cell_count() as f64 * params.density).floor() as usize;
        for _ in 0..agents {
            let slot = model.rng.random_range(0..model.empty_spots.len());
            let cell = model.empty_spots.swap_remove(slot);
            let group = if model.rng.random_bool(0.5) {
                Group::A
            } else {
                Group::B
            };
            model.grid[cell] = Occupant::Agent(group);
        }
        let (a, b) = model.group_counts();
        debug!(
            "segregation {width}x{height}: {a} + {b} agents, want_similar={}",
            params.want_similar
        );
        Ok(model)
    }

    /// Create a model from a fixed row-major layout of integer labels
    /// (`-1` empty, `0` group A, `1` group B).
    ///
    /// `params.density` is validated but otherwise unused; the layout
    /// decides the population. `rng_seed` drives relocation only.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LayoutMismatch`] if `layout` does not have
    /// one label per cell, and [`ConfigError::InvalidParameter`] for a
    /// label outside `-1..=1`.
    pub fn from_layout(
        width: u32,
        height: u32,
        params: SchellingParams,
        layout: &[i8],
        rng_seed: u64,
    ) -> Result<Self, ConfigError> {
        let mut model = Self::empty(width, height, params, rng_seed)?;
        let expected = model.dims.cell_count();
        if layout.len() != expected {
            return Err(ConfigError::LayoutMismatch {
                expected,
                actual: layout.len(),
            });
        }
        for (cell, &label) in model.grid.iter_mut().zip(layout) {
            *cell = Occupant::from_label(label).ok_or(ConfigError::InvalidParameter {
                name: "layout",
                value: f64::from(label),
                reason: "labels must be -1, 0 or 1",
            })?;
        }
        model.empty_spots = (0..expected).filter(|&i| model.grid[i].is_empty()).collect();
        debug!(
            "segregation {width}x{height} from layout: {} agents, {} empty",
            model.occupied_count(),
            model.empty_spots.len()
        );
        Ok(model)
    }

    fn empty(
        width: u32,
        height: u32,
        params: SchellingParams,
        rng_seed: u64,
    ) -> Result<Self, ConfigError> {
        let dims = GridDims::new(width, height)?;
        params.validate()?;
        let n = dims.cell_count();
        Ok(Self {
            dims,
            params,
            grid: vec![Occupant::Empty; n],
            empty_spots: (0..n).collect(),
            rng: ChaCha8Rng::seed_from_u64(rng_seed),
            generation: 0,
            relocations: 0,
            settled: false,
        })
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// The parameters fixed at construction.
    pub fn params(&self) -> &SchellingParams {
        &self.params
    }

    /// Steps taken since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Agents moved by the most recent step.
    pub fn relocations(&self) -> usize {
        self.relocations
    }

    /// The grid, row-major.
    pub fn state(&self) -> &[Occupant] {
        &self.grid
    }

    /// The grid as integer labels, row-major.
    pub fn labels(&self) -> impl Iterator<Item = i8> + '_ {
        self.grid.iter().map(|cell| cell.label())
    }

    /// Indices of the empty cells, in no particular order.
    pub fn empty_spots(&self) -> &[usize] {
        &self.empty_spots
    }

    /// Number of agents on the grid.
    pub fn occupied_count(&self) -> usize {
        self.grid.len() - self.empty_spots.len()
    }

    /// Agents per group, `(a, b)`.
    pub fn group_counts(&self) -> (usize, usize) {
        self.grid
            .iter()
            .fold((0, 0), |(a, b), cell| match cell.group() {
                Some(Group::A) => (a + 1, b),
                Some(Group::B) => (a, b + 1),
                None => (a, b),
            })
    }

    /// Groups of the occupied cells among the 8 wrapped neighbours of
    /// `index`. Order is unspecified.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn neighbours(&self, index: usize) -> SmallVec<[Group; 8]> {
        self.dims
            .moore_indices(index, EdgeBehavior::Wrap)
            .into_iter()
            .filter_map(|n| self.grid[n].group())
            .collect()
    }

    /// Same-group neighbour count and occupied neighbour count of the
    /// agent at `index`, or `None` for an empty cell.
    fn similarity(&self, index: usize) -> Option<(usize, usize)> {
        let group = self.grid[index].group()?;
        let neighbours = self.neighbours(index);
        let same = neighbours.iter().filter(|&&g| g == group).count();
        Some((same, neighbours.len()))
    }

    /// Whether the cell at `index` is content to stay.
    ///
    /// Empty cells and agents without occupied neighbours are happy.
    /// Otherwise the same-group share must reach `want_similar`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn is_happy(&self, index: usize) -> bool {
        match self.similarity(index) {
            None | Some((_, 0)) => true,
            Some((same, total)) => same as f64 / total as f64 >= self.params.want_similar,
        }
    }

    /// Move every unhappy agent to a random empty cell.
    ///
    /// Unhappy agents are found in one scan of the pre-step grid, then
    /// relocated in a uniformly shuffled order. Returns `true` if the scan
    /// found no unhappy agent, in which case nothing moved. The flag
    /// describes the grid as it was before this step's moves.
    pub fn step(&mut self) -> bool {
        let mut unhappy: Vec<usize> = (0..self.grid.len())
            .filter(|&i| !self.grid[i].is_empty() && !self.is_happy(i))
            .collect();
        let settled = unhappy.is_empty();
        unhappy.shuffle(&mut self.rng);

        self.relocations = 0;
        for from in unhappy {
            if self.empty_spots.is_empty() {
                break;
            }
            let slot = self.rng.random_range(0..self.empty_spots.len());
            let to = self.empty_spots[slot];
            self.grid[to] = self.grid[from];
            self.grid[from] = Occupant::Empty;
            self.empty_spots[slot] = from;
            self.relocations += 1;
        }

        self.generation += 1;
        trace!(
            "segregation generation {}: {} relocated",
            self.generation,
            self.relocations
        );
        if settled && !self.settled {
            info!("segregation model settled at generation {}", self.generation);
        }
        self.settled = settled;
        settled
    }

    /// Mean same-group share over agents with at least one occupied
    /// neighbour. `0.0` if there are none.
    pub fn segregation(&self) -> f64 {
        let (sum, counted) = (0..self.grid.len())
            .filter_map(|i| self.similarity(i))
            .filter(|&(_, total)| total > 0)
            .fold((0.0, 0usize), |(sum, counted), (same, total)| {
                (sum + same as f64 / total as f64, counted + 1)
            });
        if counted == 0 {
            0.0
        } else {
            sum / counted as f64
        }
    }

    /// Fraction of agents that are happy. `0.0` with no agents.
    pub fn happiness(&self) -> f64 {
        let occupied = self.occupied_count();
        if occupied == 0 {
            return 0.0;
        }
        let happy = (0..self.grid.len())
            .filter(|&i| !self.grid[i].is_empty() && self.is_happy(i))
            .count();
        happy as f64 / occupied as f64
    }
}

impl Simulation for SegregationModel {
    type Cell = Occupant;

    fn dims(&self) -> GridDims {
        self.dims
    }

    fn advance(&mut self) -> StepOutcome {
        if self.step() {
            StepOutcome::Settled
        } else {
            StepOutcome::Running
        }
    }

    fn cells(&self) -> &[Occupant] {
        self.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn params(density: f64, want_similar: f64) -> SchellingParams {
        SchellingParams {
            density,
            want_similar,
        }
    }

    fn layout(rows: &[&str]) -> (u32, u32, Vec<i8>) {
        let labels = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(|ch| match ch {
                'a' => 0,
                'b' => 1,
                _ => -1,
            })
            .collect();
        (rows[0].len() as u32, rows.len() as u32, labels)
    }

    fn assert_consistent(model: &SegregationModel) {
        let listed: HashSet<usize> = model.empty_spots().iter().copied().collect();
        assert_eq!(listed.len(), model.empty_spots().len(), "duplicate empty spot");
        for (i, cell) in model.state().iter().enumerate() {
            assert_eq!(cell.is_empty(), listed.contains(&i), "cell {i}");
        }
    }

    #[test]
    fn places_floor_of_density() {
        let model = SegregationModel::new(10, 10, params(0.5, 0.5), 1).unwrap();
        assert_eq!(model.occupied_count(), 50);
        assert_eq!(model.empty_spots().len(), 50);
        assert_consistent(&model);

        let model = SegregationModel::new(3, 3, params(0.5, 0.5), 1).unwrap();
        assert_eq!(model.occupied_count(), 4);

        let model = SegregationModel::new(4, 4, params(0.0, 0.5), 1).unwrap();
        assert_eq!(model.occupied_count(), 0);
        let model = SegregationModel::new(4, 4, params(1.0, 0.5), 1).unwrap();
        assert!(model.empty_spots().is_empty());
    }

    #[test]
    fn both_groups_appear() {
        let model = SegregationModel::new(20, 20, params(0.8, 0.5), 3).unwrap();
        let (a, b) = model.group_counts();
        assert_eq!(a + b, 320);
        assert!(a > 100 && b > 100, "a={a} b={b}");
    }

    #[test]
    fn rejects_bad_config() {
        assert_eq!(
            SegregationModel::new(0, 5, params(0.5, 0.5), 0).unwrap_err(),
            ConfigError::EmptyGrid
        );
        assert!(matches!(
            SegregationModel::new(5, 5, params(-0.1, 0.5), 0),
            Err(ConfigError::InvalidParameter {
                name: "density",
                ..
            })
        ));
        assert_eq!(
            SegregationModel::from_layout(2, 2, params(0.5, 0.5), &[0, 1, -1], 0).unwrap_err(),
            ConfigError::LayoutMismatch {
                expected: 4,
                actual: 3
            }
        );
        assert!(matches!(
            SegregationModel::from_layout(2, 2, params(0.5, 0.5), &[0, 1, -1, 4], 0),
            Err(ConfigError::InvalidParameter { name: "layout", .. })
        ));
    }

    #[test]
    fn neighbours_wrap_and_skip_empty() {
        let (w, h, labels) = layout(&["a...b", ".....", ".....", ".....", "b...a"]);
        let model = SegregationModel::from_layout(w, h, params(0.5, 0.5), &labels, 0).unwrap();
        let mut n = model.neighbours(0);
        n.sort_by_key(|g| g.label());
        assert_eq!(n.as_slice(), &[Group::A, Group::B, Group::B]);
        assert!(model.neighbours(12).is_empty());
    }

    #[test]
    fn happiness_rules() {
        let (w, h, labels) = layout(&[".....", ".aa..", "..b..", ".....", "....a"]);
        let model = SegregationModel::from_layout(w, h, params(0.5, 0.5), &labels, 0).unwrap();
        let dims = model.dims();
        assert!(model.is_happy(dims.index(0, 0)), "empty cell");
        assert!(model.is_happy(dims.index(4, 4)), "isolated agent");
        assert!(model.is_happy(dims.index(1, 1)), "exactly at threshold");
        assert!(model.is_happy(dims.index(2, 1)));
        assert!(!model.is_happy(dims.index(2, 2)));

        // (4, 4) has no neighbours and is excluded from segregation.
        assert!((model.segregation() - 1.0 / 3.0).abs() < 1e-12);
        assert!((model.happiness() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn empty_grid_metrics_are_zero() {
        let model = SegregationModel::new(4, 4, params(0.0, 0.5), 0).unwrap();
        assert_eq!(model.segregation(), 0.0);
        assert_eq!(model.happiness(), 0.0);
    }

    #[test]
    fn flag_reflects_pre_move_scan() {
        let (w, h, labels) = layout(&[".....", ".ab..", ".....", ".....", "....."]);
        let mut model =
            SegregationModel::from_layout(w, h, params(0.5, 0.5), &labels, 11).unwrap();
        assert!(!model.step());
        assert_eq!(model.relocations(), 2);
        assert_eq!(model.occupied_count(), 2);
        assert_consistent(&model);
    }

    #[test]
    fn happy_model_does_not_move() {
        let (w, h, labels) = layout(&["aa.bb", "aa.bb", "aa.bb"]);
        let mut model = SegregationModel::from_layout(w, h, params(0.5, 0.5), &labels, 0).unwrap();
        let before = model.state().to_vec();
        assert_eq!(model.happiness(), 1.0);
        assert!(model.step());
        assert_eq!(model.relocations(), 0);
        assert_eq!(model.state(), &before[..]);
        assert_eq!(model.advance(), StepOutcome::Settled);
    }

    #[test]
    fn full_grid_cannot_relocate() {
        let (w, h, labels) = layout(&["abab", "baba", "abab", "baba"]);
        let mut model = SegregationModel::from_layout(w, h, params(0.5, 0.9), &labels, 0).unwrap();
        let before = model.state().to_vec();
        assert!(!model.step());
        assert_eq!(model.relocations(), 0);
        assert_eq!(model.state(), &before[..]);
    }

    #[test]
    fn same_seed_same_run() {
        let run = |seed| {
            let mut model = SegregationModel::new(16, 16, params(0.6, 0.6), seed).unwrap();
            for _ in 0..20 {
                model.step();
            }
            model.labels().collect::<Vec<_>>()
        };
        assert_eq!(run(4), run(4));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn steps_conserve_agents(
            w in 1u32..12,
            h in 1u32..12,
            density in 0.0f64..=1.0,
            want_similar in 0.0f64..=1.0,
            seed in any::<u64>(),
            steps in 1usize..10,
        ) {
            let params = params(density, want_similar);
            let mut model = SegregationModel::new(w, h, params, seed).unwrap();
            let counts = model.group_counts();
            let cells = model.dims().cell_count();
            for _ in 0..steps {
                model.step();
                prop_assert_eq!(model.group_counts(), counts);
                prop_assert_eq!(model.empty_spots().len() + model.occupied_count(), cells);
                assert_consistent(&model);
                prop_assert!((0.0..=1.0).contains(&model.segregation()));
                prop_assert!((0.0..=1.0).contains(&model.happiness()));
            }
        }

        #[test]
        fn flag_matches_happiness(
            w in 3u32..10,
            h in 3u32..10,
            density in 0.0f64..=1.0,
            want_similar in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let params = params(density, want_similar);
            let mut model = SegregationModel::new(w, h, params, seed).unwrap();
            let all_happy = (0..model.dims().cell_count()).all(|i| model.is_happy(i));
            prop_assert_eq!(model.step(), all_happy);
            if all_happy {
                prop_assert_eq!(model.relocations(), 0);
            }
        }
    }
}
