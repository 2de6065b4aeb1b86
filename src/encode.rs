use thiserror::Error;
use unordered_pair::UnorderedPair;

use crate::instance::EntityId;

/// Positive identifier of one pair variable, in `[1, N * (N - 1) / 2]`.
pub type VarId = i32;

/// A signed, DIMACS-style reference to a pair variable. A positive literal
/// for the pair `{lo, hi}` means "`lo` comes earlier than `hi`"; the negation
/// means the reverse.
pub type Lit = i32;

/// Reasons a pair query is rejected by the encoder. These indicate misuse by
/// the caller and are always fatal; a well-formed [`Instance`](crate::Instance)
/// can never trigger them through the normal pipeline.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// An entity index outside `[1, N]`.
    #[error("entity index {index} out of range 1..={count}")]
    IndexOutOfRange {
        /// The offending index.
        index: EntityId,
        /// Entity count of the instance being encoded.
        count: usize,
    },
    /// Both indices name the same entity; there is no pair variable for that.
    #[error("({index}, {index}) does not name a pair of distinct entities")]
    DegeneratePair {
        /// The repeated index.
        index: EntityId,
    },
}

/// The bijection between unordered entity pairs `{lo, hi}` (with `lo < hi`)
/// and pair-variable ids.
///
/// Ids are assigned to all pairs up front in lexicographic `(lo, hi)` order,
/// so the numbering is deterministic and independent of query order. The
/// forward direction is a closed-form triangular offset; the reverse
/// direction is a flat array lookup. Neither allocates per query.
#[derive(Clone, Debug)]
pub struct PairEncoder {
    entity_count: usize,
    // pairs[id - 1] is the pair for variable id, smaller index first
    pairs: Vec<UnorderedPair<EntityId>>,
}

impl PairEncoder {
    /// Build the encoder for `entity_count` entities, numbering all
    /// `N * (N - 1) / 2` pairs.
    pub fn new(entity_count: usize) -> Self {
        let mut pairs = Vec::with_capacity(entity_count * entity_count.saturating_sub(1) / 2);
        for lo in 1..=entity_count {
            for hi in (lo + 1)..=entity_count {
                pairs.push(UnorderedPair(lo, hi));
            }
        }

        Self { entity_count, pairs }
    }

    /// Number of entities this encoder covers.
    #[inline]
    pub fn entity_count(&self) -> usize {
        self.entity_count
    }

    /// Number of pair variables, `N * (N - 1) / 2`.
    #[inline]
    pub fn variable_count(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    fn check(&self, index: EntityId) -> Result<(), EncodeError> {
        if (1..=self.entity_count).contains(&index) {
            Ok(())
        } else {
            Err(EncodeError::IndexOutOfRange { index, count: self.entity_count })
        }
    }

    /// The positive variable id for the unordered pair `{lo, hi}`.
    ///
    /// With `lo < hi`, pairs are numbered lexicographically, so the id is the
    /// count of pairs in all blocks before `lo`'s plus the offset of `hi`
    /// within the block.
    pub fn variable(&self, pair: UnorderedPair<EntityId>) -> Result<VarId, EncodeError> {
        let (lo, hi) = (pair.0.min(pair.1), pair.0.max(pair.1));
        self.check(lo)?;
        self.check(hi)?;
        if lo == hi {
            return Err(EncodeError::DegeneratePair { index: lo });
        }

        let before = (lo - 1) * self.entity_count - lo * (lo - 1) / 2;
        Ok((before + hi - lo) as VarId)
    }

    /// The literal for querying the pair `(first, second)` in that order.
    ///
    /// Returns the positive id when `first < second`, its negation otherwise,
    /// so `literal(p, q) == -literal(q, p)` for every valid pair. The literal
    /// being true means `first` comes earlier than `second`.
    pub fn literal(&self, first: EntityId, second: EntityId) -> Result<Lit, EncodeError> {
        let var = self.variable(UnorderedPair(first, second))?;
        Ok(if first < second { var } else { -var })
    }

    /// Recover the pair for a variable id, smaller entity index in field `.0`.
    ///
    /// Returns `None` for ids outside `[1, variable_count()]`.
    pub fn pair_of(&self, var: VarId) -> Option<UnorderedPair<EntityId>> {
        usize::try_from(var)
            .ok()
            .and_then(|v| v.checked_sub(1))
            .and_then(|i| self.pairs.get(i))
            .copied()
    }
}
