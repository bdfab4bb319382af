//! Pattern dispatch tables and the interpreter that runs them.
//!
//! For every 8-bit edge pattern a table holds one [`Entry`]: a short list of
//! secondary neighbor comparisons followed by one [`Cell`] per output pixel
//! of the N×N block. A cell is either a fixed [`Recipe`] or a choice between
//! two recipes decided by one of the entry's comparisons. Comparisons are
//! only needed where the pattern alone cannot tell which way a diagonal
//! edge runs.
//!
//! Tables are plain static data (see `hq3x.rs` and `hq4x.rs`). Both factors
//! share the interpreter in [`PatternTable::expand`].

mod hq3x;
mod hq4x;

use crate::classify::{Neighborhood, CENTER};
use crate::magnify::Scale;
use crate::mix::{Blend2, Blend3};

/// Upper bound on secondary comparisons in a single entry.
pub const MAX_TESTS: usize = 4;

/// How one output pixel is computed from the neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    /// Copy the center pixel.
    Center,
    /// Blend two neighborhood pixels, first index weighted by the first weight.
    Mix2(Blend2, u8, u8),
    /// Blend three neighborhood pixels.
    Mix3(Blend3, u8, u8, u8),
}

impl Recipe {
    #[inline]
    pub fn eval(self, w: &Neighborhood) -> u32 {
        match self {
            Recipe::Center => w[CENTER],
            Recipe::Mix2(blend, a, b) => blend.apply(w[a as usize], w[b as usize]),
            Recipe::Mix3(blend, a, b, c) => {
                blend.apply(w[a as usize], w[b as usize], w[c as usize])
            }
        }
    }
}

/// One output pixel of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Put(Recipe),
    /// Use `differ` when comparison `test` reports a difference, else `same`.
    Pick { test: u8, differ: Recipe, same: Recipe },
}

/// Output program for one edge pattern.
#[derive(Debug)]
pub struct Entry {
    /// Neighbor index pairs compared with the classifier's `differs`.
    pub tests: &'static [(u8, u8)],
    /// Row-major cells of the N×N output block.
    pub cells: &'static [Cell],
}

/// The 256 entries for one magnification factor.
#[derive(Debug)]
pub struct PatternTable {
    factor: usize,
    entries: &'static [Entry; 256],
}

static HQ3X: PatternTable = PatternTable { factor: 3, entries: &hq3x::ENTRIES };
static HQ4X: PatternTable = PatternTable { factor: 4, entries: &hq4x::ENTRIES };

impl PatternTable {
    pub fn for_scale(scale: Scale) -> &'static PatternTable {
        match scale {
            Scale::Hq3x => &HQ3X,
            Scale::Hq4x => &HQ4X,
        }
    }

    pub fn factor(&self) -> usize {
        self.factor
    }

    pub fn entry(&self, pattern: u8) -> &Entry {
        &self.entries[pattern as usize]
    }

    /// Run the entry for `pattern` over a neighborhood.
    ///
    /// Each secondary comparison is evaluated once through `differs`, then
    /// `emit` receives every cell index in row-major order with its color.
    #[inline]
    pub fn expand<D, E>(&self, pattern: u8, w: &Neighborhood, mut differs: D, mut emit: E)
    where
        D: FnMut(u32, u32) -> bool,
        E: FnMut(usize, u32),
    {
        let entry = &self.entries[pattern as usize];

        let mut outcomes = [false; MAX_TESTS];
        for (outcome, &(a, b)) in outcomes.iter_mut().zip(entry.tests) {
            *outcome = differs(w[a as usize], w[b as usize]);
        }

        for (index, cell) in entry.cells.iter().enumerate() {
            let recipe = match *cell {
                Cell::Put(recipe) => recipe,
                Cell::Pick { test, differ, same } => {
                    if outcomes[test as usize] {
                        differ
                    } else {
                        same
                    }
                }
            };
            emit(index, recipe.eval(w));
        }
    }
}

// Short constructors keep the table files readable.

const X: Recipe = Recipe::Center;

const fn put(recipe: Recipe) -> Cell {
    Cell::Put(recipe)
}

const fn pick(test: u8, differ: Recipe, same: Recipe) -> Cell {
    Cell::Pick { test, differ, same }
}

const fn m31(a: u8, b: u8) -> Recipe {
    Recipe::Mix2(Blend2::ThreeToOne, a, b)
}

const fn m71(a: u8, b: u8) -> Recipe {
    Recipe::Mix2(Blend2::SevenToOne, a, b)
}

const fn m11(a: u8, b: u8) -> Recipe {
    Recipe::Mix2(Blend2::Even, a, b)
}

const fn m53(a: u8, b: u8) -> Recipe {
    Recipe::Mix2(Blend2::FiveToThree, a, b)
}

const fn m211(a: u8, b: u8, c: u8) -> Recipe {
    Recipe::Mix3(Blend3::TwoToOneToOne, a, b, c)
}

const fn m277(a: u8, b: u8, c: u8) -> Recipe {
    Recipe::Mix3(Blend3::TwoToSevenToSeven, a, b, c)
}

const fn m521(a: u8, b: u8, c: u8) -> Recipe {
    Recipe::Mix3(Blend3::FiveToTwoToOne, a, b, c)
}

const fn m611(a: u8, b: u8, c: u8) -> Recipe {
    Recipe::Mix3(Blend3::SixToOneToOne, a, b, c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell as Counter;

    fn tables() -> [&'static PatternTable; 2] {
        [PatternTable::for_scale(Scale::Hq3x), PatternTable::for_scale(Scale::Hq4x)]
    }

    fn inputs(recipe: Recipe) -> Vec<u8> {
        match recipe {
            Recipe::Center => vec![CENTER as u8],
            Recipe::Mix2(_, a, b) => vec![a, b],
            Recipe::Mix3(_, a, b, c) => vec![a, b, c],
        }
    }

    fn recipes(cell: &Cell) -> Vec<Recipe> {
        match *cell {
            Cell::Put(recipe) => vec![recipe],
            Cell::Pick { differ, same, .. } => vec![differ, same],
        }
    }

    #[test]
    fn test_factors() {
        assert_eq!(PatternTable::for_scale(Scale::Hq3x).factor(), 3);
        assert_eq!(PatternTable::for_scale(Scale::Hq4x).factor(), 4);
    }

    #[test]
    fn test_every_entry_covers_the_block() {
        for table in tables() {
            let n = table.factor();
            for pattern in 0..=255u8 {
                assert_eq!(table.entry(pattern).cells.len(), n * n, "pattern {}", pattern);
            }
        }
    }

    #[test]
    fn test_recipe_inputs_are_in_range() {
        for table in tables() {
            for pattern in 0..=255u8 {
                for cell in table.entry(pattern).cells {
                    for recipe in recipes(cell) {
                        assert!(inputs(recipe).iter().all(|&i| i < 9), "pattern {}", pattern);
                    }
                }
            }
        }
    }

    #[test]
    fn test_secondary_tests_are_well_formed() {
        for table in tables() {
            for pattern in 0..=255u8 {
                let entry = table.entry(pattern);
                assert!(entry.tests.len() <= MAX_TESTS);
                for &(a, b) in entry.tests {
                    assert!(a < 9 && b < 9 && a != b);
                    assert_ne!(a as usize, CENTER);
                    assert_ne!(b as usize, CENTER);
                }

                // every declared comparison is consumed by at least one cell
                for t in 0..entry.tests.len() {
                    let used = entry
                        .cells
                        .iter()
                        .any(|cell| matches!(cell, Cell::Pick { test, .. } if *test as usize == t));
                    assert!(used, "pattern {} test {} unused", pattern, t);
                }
                for cell in entry.cells {
                    if let Cell::Pick { test, differ, same } = *cell {
                        assert!((test as usize) < entry.tests.len());
                        assert_ne!(differ, same);
                    }
                }
            }
        }
    }

    #[test]
    fn test_ambiguous_pattern_count() {
        for table in tables() {
            let ambiguous = (0..=255u8).filter(|&p| !table.entry(p).tests.is_empty()).count();
            assert_eq!(ambiguous, 144);
        }
    }

    #[test]
    fn test_hq3x_center_cell_is_center() {
        let table = PatternTable::for_scale(Scale::Hq3x);
        for pattern in 0..=255u8 {
            assert_eq!(table.entry(pattern).cells[4], Cell::Put(Recipe::Center));
        }
    }

    #[test]
    fn test_pattern_zero_needs_no_tests() {
        for table in tables() {
            assert!(table.entry(0).tests.is_empty());
            assert!(table.entry(0).cells.iter().all(|c| matches!(c, Cell::Put(_))));
        }
    }

    #[test]
    fn test_pattern_255_at_3x() {
        let entry = PatternTable::for_scale(Scale::Hq3x).entry(255);
        assert_eq!(entry.tests, &[(3, 1), (1, 5), (7, 3), (5, 7)]);
        assert_eq!(entry.cells[0], Cell::Pick { test: 0, differ: X, same: m211(4, 3, 1) });
        assert_eq!(entry.cells[2], Cell::Pick { test: 1, differ: X, same: m211(4, 1, 5) });
        for edge in [1, 3, 5, 7] {
            assert_eq!(entry.cells[edge], Cell::Put(X));
        }
    }

    /// Entries whose corners and edges depend on different diagonal tests,
    /// written out cell by cell from the classic hq3x program.
    #[test]
    fn test_hq3x_mixed_corner_entries() {
        #[rustfmt::skip]
        let expected: [(u8, &[(u8, u8)], [Cell; 9]); 16] = [
            (59, &[(3, 1), (1, 5)], [
                pick(0, X, m277(4, 3, 1)), pick(0, X, m71(4, 1)), pick(1, m31(4, 2), m211(4, 1, 5)),
                pick(0, X, m71(4, 3)), put(X), put(X),
                put(m31(4, 7)), put(m31(4, 7)), put(m31(4, 8)),
            ]),
            (79, &[(3, 1), (7, 3)], [
                pick(0, X, m277(4, 3, 1)), pick(0, X, m71(4, 1)), put(m31(4, 5)),
                pick(0, X, m71(4, 3)), put(X), put(m31(4, 5)),
                pick(1, m31(4, 6), m211(4, 7, 3)), put(X), put(m31(4, 8)),
            ]),
            (87, &[(1, 5), (5, 7)], [
                put(m31(4, 3)), pick(0, X, m71(4, 1)), pick(0, X, m277(4, 1, 5)),
                put(m31(4, 3)), put(X), pick(0, X, m71(4, 5)),
                put(m31(4, 6)), put(X), pick(1, m31(4, 8), m211(4, 5, 7)),
            ]),
            (91, &[(3, 1), (1, 5), (7, 3), (5, 7)], [
                pick(0, X, m277(4, 3, 1)), pick(0, X, m71(4, 1)), pick(1, m31(4, 2), m211(4, 1, 5)),
                pick(0, X, m71(4, 3)), put(X), put(X),
                pick(2, m31(4, 6), m211(4, 7, 3)), put(X), pick(3, m31(4, 8), m211(4, 5, 7)),
            ]),
            (94, &[(3, 1), (1, 5), (7, 3), (5, 7)], [
                pick(0, m31(4, 0), m211(4, 3, 1)), pick(1, X, m71(4, 1)), pick(1, X, m277(4, 1, 5)),
                put(X), put(X), pick(1, X, m71(4, 5)),
                pick(2, m31(4, 6), m211(4, 7, 3)), put(X), pick(3, m31(4, 8), m211(4, 5, 7)),
            ]),
            (121, &[(7, 3), (5, 7)], [
                put(m31(4, 1)), put(m31(4, 1)), put(m31(4, 2)),
                pick(0, X, m71(4, 3)), put(X), put(X),
                pick(0, X, m277(4, 7, 3)), pick(0, X, m71(4, 7)), pick(1, m31(4, 8), m211(4, 5, 7)),
            ]),
            (122, &[(3, 1), (1, 5), (7, 3), (5, 7)], [
                pick(0, m31(4, 0), m211(4, 3, 1)), put(X), pick(1, m31(4, 2), m211(4, 1, 5)),
                pick(2, X, m71(4, 3)), put(X), put(X),
                pick(2, X, m277(4, 7, 3)), pick(2, X, m71(4, 7)), pick(3, m31(4, 8), m211(4, 5, 7)),
            ]),
            (127, &[(3, 1), (1, 5), (7, 3)], [
                pick(0, X, m211(4, 3, 1)), pick(0, X, m71(4, 1)), pick(1, X, m277(4, 1, 5)),
                pick(0, X, m71(4, 3)), put(X), pick(1, X, m71(4, 5)),
                pick(2, X, m277(4, 7, 3)), pick(2, X, m71(4, 7)), put(m31(4, 8)),
            ]),
            (158, &[(3, 1), (1, 5)], [
                pick(0, m31(4, 0), m211(4, 3, 1)), pick(1, X, m71(4, 1)), pick(1, X, m277(4, 1, 5)),
                put(X), put(X), pick(1, X, m71(4, 5)),
                put(m31(4, 6)), put(m31(4, 7)), put(m31(4, 7)),
            ]),
            (218, &[(3, 1), (1, 5), (7, 3), (5, 7)], [
                pick(0, m31(4, 0), m211(4, 3, 1)), put(X), pick(1, m31(4, 2), m211(4, 1, 5)),
                put(X), put(X), pick(3, X, m71(4, 5)),
                pick(2, m31(4, 6), m211(4, 7, 3)), pick(3, X, m71(4, 7)), pick(3, X, m277(4, 5, 7)),
            ]),
            (220, &[(7, 3), (5, 7)], [
                put(m31(4, 0)), put(m31(4, 1)), put(m31(4, 1)),
                put(X), put(X), pick(1, X, m71(4, 5)),
                pick(0, m31(4, 6), m211(4, 7, 3)), pick(1, X, m71(4, 7)), pick(1, X, m277(4, 5, 7)),
            ]),
            (223, &[(3, 1), (1, 5), (5, 7)], [
                pick(0, X, m277(4, 3, 1)), pick(1, X, m71(4, 1)), pick(1, X, m211(4, 1, 5)),
                pick(0, X, m71(4, 3)), put(X), pick(1, X, m71(4, 5)),
                put(m31(4, 6)), pick(2, X, m71(4, 7)), pick(2, X, m277(4, 5, 7)),
            ]),
            (234, &[(3, 1), (7, 3)], [
                pick(0, m31(4, 0), m211(4, 3, 1)), put(X), put(m31(4, 2)),
                pick(1, X, m71(4, 3)), put(X), put(m31(4, 5)),
                pick(1, X, m277(4, 7, 3)), pick(1, X, m71(4, 7)), put(m31(4, 5)),
            ]),
            (242, &[(1, 5), (5, 7)], [
                put(m31(4, 0)), put(X), pick(0, m31(4, 2), m211(4, 1, 5)),
                put(m31(4, 3)), put(X), pick(1, X, m71(4, 5)),
                put(m31(4, 3)), pick(1, X, m71(4, 7)), pick(1, X, m277(4, 5, 7)),
            ]),
            (251, &[(3, 1), (7, 3), (5, 7)], [
                pick(0, X, m277(4, 3, 1)), pick(0, X, m71(4, 1)), put(m31(4, 2)),
                pick(1, X, m71(4, 3)), put(X), pick(2, X, m71(4, 5)),
                pick(1, X, m211(4, 7, 3)), pick(1, X, m71(4, 7)), pick(2, X, m277(4, 5, 7)),
            ]),
            (254, &[(1, 5), (7, 3), (5, 7)], [
                put(m31(4, 0)), pick(0, X, m71(4, 1)), pick(0, X, m277(4, 1, 5)),
                pick(1, X, m71(4, 3)), put(X), pick(2, X, m71(4, 5)),
                pick(1, X, m277(4, 7, 3)), pick(2, X, m71(4, 7)), pick(2, X, m211(4, 5, 7)),
            ]),
        ];

        let table = PatternTable::for_scale(Scale::Hq3x);
        for (pattern, tests, cells) in expected {
            let entry = table.entry(pattern);
            assert_eq!(entry.tests, tests, "pattern {}", pattern);
            for (index, cell) in cells.iter().enumerate() {
                assert_eq!(&entry.cells[index], cell, "pattern {} cell {}", pattern, index);
            }
        }
    }

    #[test]
    fn test_uniform_neighborhood_reproduces_color() {
        let w = [0x80123456; 9];
        for table in tables() {
            for pattern in 0..=255u8 {
                for verdict in [false, true] {
                    table.expand(pattern, &w, |_, _| verdict, |_, color| {
                        assert_eq!(color, 0x80123456, "pattern {}", pattern);
                    });
                }
            }
        }
    }

    #[test]
    fn test_expand_runs_each_test_once() {
        let w = [
            0xFF000000, 0xFFFFFFFF, 0xFF000000, //
            0xFFFFFFFF, 0xFF000000, 0xFFFFFFFF, //
            0xFF000000, 0xFFFFFFFF, 0xFF000000,
        ];
        for table in tables() {
            for pattern in 0..=255u8 {
                let calls = Counter::new(0);
                let mut emitted = 0;
                table.expand(
                    pattern,
                    &w,
                    |_, _| {
                        calls.set(calls.get() + 1);
                        true
                    },
                    |index, _| {
                        assert_eq!(index, emitted);
                        emitted += 1;
                    },
                );
                assert_eq!(calls.get(), table.entry(pattern).tests.len());
                assert_eq!(emitted, table.factor() * table.factor());
            }
        }
    }

    #[test]
    fn test_expand_selects_branch() {
        // pattern 18 at 3x: top edge is the center when (1, 5) differ
        let mut w = [0xFF000000; 9];
        w[CENTER] = 0xFFFFFFFF;
        let table = PatternTable::for_scale(Scale::Hq3x);

        let mut differ = [0u32; 9];
        table.expand(18, &w, |_, _| true, |i, c| differ[i] = c);
        assert_eq!(differ[1], 0xFFFFFFFF);

        let mut same = [0u32; 9];
        table.expand(18, &w, |_, _| false, |i, c| same[i] = c);
        assert_eq!(same[1], m71(4, 1).eval(&w));
        assert_eq!(same[1], 0xFFDFDFDF);
    }
}
