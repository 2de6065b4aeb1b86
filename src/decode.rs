use thiserror::Error;

use crate::encode::{Lit, PairEncoder};
use crate::instance::Instance;
use crate::linearize::{Linearization, Linearize};

/// Reasons decoding a satisfying assignment fails. Both variants are internal
/// invariant violations and are never retried.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The assignment does not have one entry per pair variable.
    #[error("assignment has {got} entries, expected {expected}")]
    AssignmentSize {
        /// `N * (N - 1) / 2` for the instance being decoded.
        expected: usize,
        /// Entries actually supplied.
        got: usize,
    },
    /// The linearization backend reported a cycle. A satisfying assignment
    /// orients every pair and the transitivity clauses forbid 3-cycles, so
    /// this contradicts the reduction and signals a bug.
    #[error("decoded order relation contains a cycle on a satisfying assignment")]
    GraphCycle,
}

/// Turns a satisfying assignment back into the total order it encodes.
#[derive(Clone, Copy, Debug)]
pub struct Decoder<'a> {
    instance: &'a Instance,
    encoder: &'a PairEncoder,
}

impl<'a> Decoder<'a> {
    /// A decoder over the instance and the encoder that numbered its pairs.
    pub fn new(instance: &'a Instance, encoder: &'a PairEncoder) -> Self {
        Self { instance, encoder }
    }

    /// Decode `assignment` into entity names, earliest first.
    ///
    /// Every variable id `v` recovers its pair `{lo, hi}`; a positive entry
    /// orients the edge `lo -> hi`, a negative entry `hi -> lo`. The edges
    /// form a complete tournament over the entities, which `linearizer` turns
    /// into the unique linear extension.
    pub fn decode<L: Linearize>(
        &self,
        assignment: &[Lit],
        linearizer: &L,
    ) -> Result<Vec<String>, DecodeError> {
        let expected = self.encoder.variable_count();
        if assignment.len() != expected {
            return Err(DecodeError::AssignmentSize { expected, got: assignment.len() });
        }

        let mut edges = Vec::with_capacity(expected);
        for (index, &value) in assignment.iter().enumerate() {
            // pair_of covers every id in [1, expected] by construction
            let pair = self.encoder.pair_of(index as i32 + 1).unwrap();
            edges.push(if value > 0 { (pair.0, pair.1) } else { (pair.1, pair.0) });
        }

        match linearizer.linearize(self.instance.entity_count(), &edges) {
            Linearization::Ordered(order) => Ok(order
                .into_iter()
                .map(|id| {
                    // ids come straight from the node count above
                    self.instance.name_of(id).unwrap().to_owned()
                })
                .collect()),
            Linearization::Cyclic => Err(DecodeError::GraphCycle),
        }
    }
}
