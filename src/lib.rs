#![warn(missing_docs)]

//! # `seriate`
//!
//! Recovers a total order over a set of named entities from partial,
//! triple-based ordering hints by reducing the problem to Boolean
//! satisfiability and decoding the result.
//!
//! Parse an [`Instance`] from the text format (or assemble one with
//! [`Instance::new`]), then call [`solve_instance`](pipeline::solve_instance)
//! with a SAT backend such as [`Varisat`](solve::Varisat).
//!
//! # Internals
//!
//! Each unordered entity pair `{lo, hi}` becomes one Boolean variable whose
//! truth means "`lo` comes earlier than `hi`"; [`PairEncoder`] numbers these
//! pairs deterministically with a closed-form triangular offset. Two clause
//! families are generated over the pair literals: each hint `(a, b, c)`
//! asserts that `a` and `b` fall on the same side of `c`, a biconditional
//! between two literals, and every entity triple `i < j < k` gets the two
//! clauses that forbid its cyclic orientations. Any satisfying assignment
//! therefore orients the complete pair tournament acyclically, and a
//! topological sort of the oriented edges reads the order back out.
//!
//! The SAT and linearization procedures are injected behind the
//! [`SatSolve`](solve::SatSolve) and [`Linearize`](linearize::Linearize)
//! traits, so a brute-force reference backend can replace
//! [varisat](https://docs.rs/varisat) when exhaustively checking the
//! reduction on small instances.

pub use clauses::ClauseSet;
pub use decode::Decoder;
pub use encode::PairEncoder;
pub use instance::{Hint, Instance};
pub use pipeline::{solve_instance, Outcome};

pub mod clauses;
pub mod decode;
pub mod encode;
pub mod instance;
pub mod linearize;
pub mod pipeline;
pub mod solve;
