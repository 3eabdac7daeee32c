//! Test utilities and fixtures for Tessera development.
//!
//! Provides fixed RNG seeds, hand-written agent layouts for the
//! segregation model, and assertion helpers shared by the engine crates'
//! integration tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessera_core::GridDims;

/// Seeds used by determinism tests. Arbitrary but fixed.
pub const SEEDS: [u64; 4] = [0, 1, 42, 0xDEAD_BEEF];

/// A 10x10 mixed layout with 25 agents of each group and 50 empty cells.
///
/// `a` is group 0, `b` is group 1, `.` is empty.
pub const MIXED_10X10: &str = "\
ab..ba.a..
.b.ab..b.a
a..b.a.b.b
..aab..b.a
b.a..ab.b.
.ab.a..ba.
a.b.b.a..b
.a..b.aab.
b..a.b.a.b
.ba..a.b.a";

/// A 6x4 layout already fully sorted into two halves.
pub const SORTED_6X4: &str = "\
aa..bb
aa..bb
aa..bb
aa..bb";

/// A parsed layout: dimensions plus row-major integer labels
/// (`-1` empty, `0` group A, `1` group B).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub dims: GridDims,
    pub labels: Vec<i8>,
}

impl Layout {
    pub fn width(&self) -> u32 {
        self.dims.width()
    }

    pub fn height(&self) -> u32 {
        self.dims.height()
    }

    pub fn occupied(&self) -> usize {
        self.labels.iter().filter(|&&l| l >= 0).count()
    }

    pub fn empty(&self) -> usize {
        self.labels.len() - self.occupied()
    }
}

/// Parse an ASCII layout.
///
/// # Panics
///
/// Panics on ragged rows, an empty layout, or characters other than
/// `a`, `b` and `.`. Fixtures are trusted input.
pub fn parse_layout(text: &str) -> Layout {
    let rows: Vec<&str> = text.lines().map(str::trim).filter(|r| !r.is_empty()).collect();
    assert!(!rows.is_empty(), "empty layout");
    let width = rows[0].len();
    let mut labels = Vec::with_capacity(width * rows.len());
    for row in &rows {
        assert_eq!(row.len(), width, "ragged layout row {row:?}");
        for ch in row.chars() {
            labels.push(match ch {
                '.' => -1,
                'a' => 0,
                'b' => 1,
                other => panic!("unexpected layout character {other:?}"),
            });
        }
    }
    let dims = GridDims::new(width as u32, rows.len() as u32).expect("layout dimensions");
    Layout { dims, labels }
}

/// Assert every value is finite and within `[0, 1]`.
pub fn assert_unit_interval(values: &[f32], what: &str) {
    for (i, &v) in values.iter().enumerate() {
        assert!(
            v.is_finite() && (0.0..=1.0).contains(&v),
            "{what}[{i}] = {v} outside [0, 1]"
        );
    }
}

/// Count each label in a label slice: `(empty, group_a, group_b)`.
pub fn label_counts(labels: impl IntoIterator<Item = i8>) -> (usize, usize, usize) {
    labels
        .into_iter()
        .fold((0, 0, 0), |(e, a, b), label| match label {
            0 => (e, a + 1, b),
            1 => (e, a, b + 1),
            _ => (e + 1, a, b),
        })
}
