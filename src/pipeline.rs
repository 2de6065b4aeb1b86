use std::time::Instant;

use thiserror::Error;

use crate::clauses::ClauseSet;
use crate::decode::{DecodeError, Decoder};
use crate::encode::{EncodeError, PairEncoder};
use crate::instance::Instance;
use crate::linearize::Toposort;
use crate::solve::{SatSolve, Satisfaction};

/// Internal failures of the reduce-solve-decode pipeline. Solver verdicts are
/// not errors; see [`Outcome`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// Propagated from the encoder.
    #[error(transparent)]
    Encode(#[from] EncodeError),
    /// Propagated from the decoder.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// The typed result of one instance. The driver decides what each variant
/// means for the rest of a batch; the pipeline never aborts the process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The recovered total order, entity names earliest first.
    Solved(Vec<String>),
    /// The hints admit no total order.
    Unsatisfiable,
    /// The SAT backend gave up before reaching a verdict.
    Timeout,
}

/// Run the full pipeline on one instance: encode its pairs, generate both
/// clause families, hand them to `solver`, and decode any satisfying
/// assignment through a topological sort.
///
/// Each call owns its encoder and clause set; nothing is shared between
/// instances, so a batch driver may run many calls in parallel with one
/// solver handle each.
pub fn solve_instance<S: SatSolve>(
    instance: &Instance,
    solver: &mut S,
) -> Result<Outcome, PipelineError> {
    let started = Instant::now();

    let encoder = PairEncoder::new(instance.entity_count());
    let clauses = ClauseSet::generate(instance, &encoder)?;

    log::info!(
        "{} entities, {} variables, {} hint clauses ({} hints skipped), {} transitivity clauses",
        instance.entity_count(),
        encoder.variable_count(),
        clauses.hint.len(),
        clauses.skipped_hints,
        clauses.transitivity.len(),
    );

    let outcome = match solver.solve(encoder.variable_count(), &clauses) {
        Satisfaction::Satisfiable(assignment) => {
            let order = Decoder::new(instance, &encoder).decode(&assignment, &Toposort)?;
            Outcome::Solved(order)
        }
        Satisfaction::Unsatisfiable => Outcome::Unsatisfiable,
        Satisfaction::Timeout => Outcome::Timeout,
    };

    log::info!("verdict in {:.3}s", started.elapsed().as_secs_f64());
    Ok(outcome)
}
