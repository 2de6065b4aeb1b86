use itertools::Itertools;

use crate::encode::{EncodeError, Lit, PairEncoder};
use crate::instance::Instance;

/// One CNF clause, a disjunction of nonzero literals over pair variables.
pub type Clause = Vec<Lit>;

/// The two clause families of the reduction, kept disjoint.
///
/// Their relative order is irrelevant to correctness; they are stored apart so
/// the per-family counts (`2m` hint clauses, `N(N-1)(N-2)/3` transitivity
/// clauses) stay observable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClauseSet {
    /// Two clauses per well-formed hint, encoding the biconditional between
    /// the two pair literals the hint relates.
    pub hint: Vec<Clause>,
    /// Two clauses per entity triple `i < j < k`, ruling out the two
    /// orientations of the triple that no total order produces.
    pub transitivity: Vec<Clause>,
    /// How many malformed (repeated-entity) hints were skipped.
    pub skipped_hints: usize,
}

impl ClauseSet {
    /// Generate both clause families for `instance` under `encoder`.
    ///
    /// Hints with a repeated entity contribute no clauses; each skip is logged
    /// and counted but is not an error. An [`EncodeError`] here means the
    /// instance and encoder disagree about the entity count, which the normal
    /// pipeline cannot produce.
    pub fn generate(instance: &Instance, encoder: &PairEncoder) -> Result<Self, EncodeError> {
        let mut set = Self::default();

        for hint in instance.hints() {
            if !hint.is_well_formed() {
                log::warn!("hint ({}, {}, {}) repeats an entity; skipped", hint.0, hint.1, hint.2);
                set.skipped_hints += 1;
                continue;
            }

            // the relative order of (a, c) must match that of (b, c):
            // l1 <=> l2, in CNF (l1 + !l2)(!l1 + l2)
            let l1 = encoder.literal(hint.0, hint.2)?;
            let l2 = encoder.literal(hint.1, hint.2)?;
            set.hint.push(vec![l1, -l2]);
            set.hint.push(vec![-l1, l2]);
        }

        for (i, j, k) in (1..=encoder.entity_count()).tuple_combinations() {
            let l_ij = encoder.literal(i, j)?;
            let l_jk = encoder.literal(j, k)?;
            let l_ik = encoder.literal(i, k)?;

            // (i < j) * (j < k) => (i < k), and the contrapositive chain for
            // the reversed orientation; together these exclude exactly the two
            // cyclic configurations of the triple
            set.transitivity.push(vec![-l_ij, -l_jk, l_ik]);
            set.transitivity.push(vec![l_ij, l_jk, -l_ik]);
        }

        Ok(set)
    }

    /// Total clause count across both families.
    #[inline]
    pub fn len(&self) -> usize {
        self.hint.len() + self.transitivity.len()
    }

    /// Whether no clauses were generated (N < 3 and no well-formed hints).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hint.is_empty() && self.transitivity.is_empty()
    }

    /// Iterate over all clauses, hint family first.
    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.hint.iter().chain(self.transitivity.iter())
    }
}
