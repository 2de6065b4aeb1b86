use std::collections::HashMap;
use std::str::FromStr;

use thiserror::Error;

/// Canonical index of an entity, in `[1, N]`, assigned in order of first
/// appearance in the input.
pub type EntityId = usize;

/// Reasons an instance text fails to parse. All of these are fatal for the
/// instance; no clauses are generated from a partially parsed input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The first line is missing or is not a positive integer.
    #[error("missing or malformed entity count")]
    BadEntityCount,
    /// The second line is missing or is not a non-negative integer.
    #[error("missing or malformed hint count")]
    BadHintCount,
    /// Fewer hint lines than the declared hint count.
    #[error("expected {expected} hint lines, found {found}")]
    MissingHints {
        /// Declared hint count.
        expected: usize,
        /// Hint lines actually present.
        found: usize,
    },
    /// A hint line with fewer than three tokens.
    #[error("hint line {line} has fewer than three tokens")]
    TruncatedHint {
        /// 1-based index among the hint lines.
        line: usize,
    },
    /// A hint names an entity outside the registered set. This can only occur
    /// once name discovery has stopped at the declared entity count.
    #[error("hint line {line} references unknown entity {name:?}")]
    UnknownEntity {
        /// 1-based index among the hint lines.
        line: usize,
        /// The offending token.
        name: String,
    },
}

/// An ordered triple `(a, b, c)` of entity indices asserting that `a` and `b`
/// fall on the same side of `c` in the recovered order.
///
/// A triple with any repeated entity is malformed; it is kept on the
/// [`Instance`] but contributes no clauses (see
/// [`ClauseSet::generate`](crate::clauses::ClauseSet::generate)).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Hint(
    /// The entity constrained to `c`'s side together with `b`.
    pub EntityId,
    /// The entity constrained to `c`'s side together with `a`.
    pub EntityId,
    /// The pivot entity, `c`.
    pub EntityId,
);

impl Hint {
    /// Whether all three entities are distinct.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.0 != self.1 && self.1 != self.2 && self.0 != self.2
    }
}

/// One ordering problem: a canonical, ordered entity set and the ordering
/// hints over it. Immutable once built.
#[derive(Clone, Debug)]
pub struct Instance {
    // names[i] is the entity with canonical index i + 1
    names: Vec<String>,
    hints: Vec<Hint>,
}

impl Instance {
    /// Assemble an instance directly from an entity list (in canonical order)
    /// and hints over their 1-based indices.
    pub fn new(names: Vec<String>, hints: Vec<Hint>) -> Self {
        Self { names, hints }
    }

    /// Number of distinct entities, N.
    #[inline]
    pub fn entity_count(&self) -> usize {
        self.names.len()
    }

    /// Number of boolean variables the pair encoding needs, `N * (N - 1) / 2`.
    #[inline]
    pub fn variable_count(&self) -> usize {
        self.names.len() * self.names.len().saturating_sub(1) / 2
    }

    /// The name of the entity with canonical index `id`.
    ///
    /// Returns `None` if `id` is outside `[1, N]`.
    pub fn name_of(&self, id: EntityId) -> Option<&str> {
        id.checked_sub(1).and_then(|i| self.names.get(i)).map(String::as_str)
    }

    /// Entity names in canonical index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// All hints, malformed ones included.
    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }
}

impl FromStr for Instance {
    type Err = ParseError;

    /// Parse the instance text format:
    ///
    /// ```text
    /// N                -- entity count, positive
    /// M                -- hint count, non-negative
    /// <M lines of 3 or more whitespace-separated name tokens>
    /// ```
    ///
    /// Entity indices are assigned to names in order of first distinct
    /// appearance while scanning hint lines, stopping once N distinct names
    /// have been seen. Only the first three tokens of a line form the hint
    /// triple; later tokens still participate in name discovery.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();

        let declared_entities = lines
            .next()
            .and_then(|l| l.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .ok_or(ParseError::BadEntityCount)?;
        let hint_count = lines
            .next()
            .and_then(|l| l.trim().parse::<usize>().ok())
            .ok_or(ParseError::BadHintCount)?;

        let hint_lines = lines.take(hint_count).collect::<Vec<_>>();
        if hint_lines.len() < hint_count {
            return Err(ParseError::MissingHints {
                expected: hint_count,
                found: hint_lines.len(),
            });
        }

        let mut names: Vec<String> = Vec::with_capacity(declared_entities);
        let mut index: HashMap<String, EntityId> = HashMap::with_capacity(declared_entities);

        for line in &hint_lines {
            for token in line.split_whitespace() {
                if names.len() == declared_entities {
                    break;
                }
                if !index.contains_key(token) {
                    names.push(token.to_owned());
                    index.insert(token.to_owned(), names.len());
                }
            }
        }

        if names.len() < declared_entities {
            log::warn!(
                "declared {} entities but only {} distinct names appear; using {}",
                declared_entities,
                names.len(),
                names.len()
            );
        }

        let mut hints = Vec::with_capacity(hint_count);
        for (lineno, line) in hint_lines.iter().enumerate() {
            let mut resolve = line.split_whitespace().map(|token| {
                index.get(token).copied().ok_or_else(|| ParseError::UnknownEntity {
                    line: lineno + 1,
                    name: token.to_owned(),
                })
            });

            match (resolve.next(), resolve.next(), resolve.next()) {
                (Some(a), Some(b), Some(c)) => hints.push(Hint(a?, b?, c?)),
                _ => return Err(ParseError::TruncatedHint { line: lineno + 1 }),
            }
        }

        Ok(Self { names, hints })
    }
}
