// Region merge policy
//
// Decides, for two consecutive number words, whether the second extends
// the region of the first. Rules are checked in order; the first that
// applies wins:
//
//   1. a non-number word between them               split
//   2. next is a separator, point already reached   split
//   3. next is a separator                          merge (point)
//   4. either word is a connector                   merge
//   5. blank tokens between them                    split
//   6. point reached                                merge units only
//   7. unit-unit, unit-ten, ten-ten                 split
//      magnitude-magnitude                          merge only on a descending scale
//   8. any other value pair                         merge

use numwords_core::WordClass;

use crate::grammar::Terminal;

/// What lies between two consecutive number words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gap {
    /// Neighbouring tokens (one separator apart).
    Adjacent,
    /// Only empty tokens between (repeated separators).
    Spaced,
    /// At least one word outside the vocabulary between.
    Interrupted,
}

/// Outcome of the merge policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Extend the current region.
    Merge,
    /// Extend the current region with a decimal separator.
    MergePoint,
    /// Close the current region and open a new one.
    Split,
}

/// Decide whether `next` joins the region that ends with `prev`.
pub fn decide(prev: Terminal, next: Terminal, gap: Gap, point_reached: bool) -> Decision {
    use WordClass::{Connector, Magnitude, Point, Ten, Unit};

    if gap == Gap::Interrupted {
        return Decision::Split;
    }
    if next.class == Point {
        return if point_reached {
            Decision::Split
        } else {
            Decision::MergePoint
        };
    }
    if next.class == Connector || prev.class == Connector {
        return Decision::Merge;
    }
    if gap == Gap::Spaced {
        return Decision::Split;
    }
    if point_reached {
        return if next.class == Unit {
            Decision::Merge
        } else {
            Decision::Split
        };
    }

    match (prev.class, next.class) {
        (Unit, Unit) | (Unit, Ten) | (Ten, Ten) => Decision::Split,
        (Magnitude, Magnitude) if next.value >= prev.value => Decision::Split,
        (Unit | Ten | Magnitude, Unit | Ten | Magnitude) => Decision::Merge,
        _ => Decision::Split,
    }
}
