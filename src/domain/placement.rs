//! Row placement for buttons attached through [`TreeBuilder::attach`].
//!
//! Rules, evaluated in order:
//! 1. no rows yet: seed row 0, ignoring the requested index
//! 2. `requested == row_count + 1`: append one new row
//! 3. `requested < row_count`: use that existing row
//! 4. anything else (skips ahead, negative): row 0
//!
//! Rule 2 compares against `row_count + 1`, not `row_count`, so asking for the
//! index right after the last row falls through to rule 4.
//!
//! [`TreeBuilder::attach`]: crate::domain::TreeBuilder::attach

/// Where a newly attached button goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    SeedFirstRow,
    AppendRow,
    ExistingRow(usize),
    FallbackFirstRow,
}

impl Placement {
    /// Index of the row the button ends up in, given the row count before placement.
    pub fn target_index(&self, row_count: usize) -> usize {
        match self {
            Placement::SeedFirstRow | Placement::FallbackFirstRow => 0,
            Placement::AppendRow => row_count,
            Placement::ExistingRow(index) => *index,
        }
    }
}

/// Resolve the placement for a button requested at `requested` in a tree of `row_count` rows.
pub fn resolve_placement(row_count: usize, requested: isize) -> Placement {
    if row_count == 0 {
        return Placement::SeedFirstRow;
    }
    match usize::try_from(requested) {
        Ok(index) if index == row_count + 1 => Placement::AppendRow,
        Ok(index) if index < row_count => Placement::ExistingRow(index),
        _ => Placement::FallbackFirstRow,
    }
}
