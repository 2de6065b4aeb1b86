use varisat::{CnfFormula, ExtendFormula, Solver};

use crate::clauses::ClauseSet;
use crate::encode::Lit;

/// Verdict of a SAT backend on one instance's clause set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Satisfaction {
    /// A satisfying assignment was found. One entry per variable id, in id
    /// order; the entry for id `v` is `v` if the variable is true, `-v` if
    /// false.
    Satisfiable(Vec<Lit>),
    /// No assignment satisfies the clauses.
    Unsatisfiable,
    /// The backend gave up before reaching a verdict.
    Timeout,
}

/// A SAT decision procedure, injected into the pipeline so that the
/// production backend can be swapped for a reference one in tests.
///
/// Implementations must treat an empty clause set as trivially satisfiable
/// and must cover all `var_count` variables in any returned assignment.
pub trait SatSolve {
    /// Decide the clause set over `var_count` variables.
    fn solve(&mut self, var_count: usize, clauses: &ClauseSet) -> Satisfaction;
}

/// The production backend, one fresh [`varisat`] solver per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct Varisat;

impl SatSolve for Varisat {
    fn solve(&mut self, var_count: usize, clauses: &ClauseSet) -> Satisfaction {
        let mut formula = CnfFormula::new();
        formula.set_var_count(var_count);
        for clause in clauses.iter() {
            let lits = clause
                .iter()
                .map(|&l| varisat::Lit::from_dimacs(l as isize))
                .collect::<Vec<_>>();
            formula.add_clause(&lits);
        }

        let mut solver = Solver::new();
        solver.add_formula(&formula);

        match solver.solve() {
            Ok(true) => {}
            Ok(false) => return Satisfaction::Unsatisfiable,
            Err(_) => return Satisfaction::Timeout,
        }

        // variables the solver never had to decide default to true
        let mut assignment: Vec<Lit> = (1..=var_count as Lit).collect();
        if let Some(model) = solver.model() {
            for lit in model {
                let index = lit.var().index();
                if index < var_count {
                    assignment[index] = lit.to_dimacs() as Lit;
                }
            }
        }

        Satisfaction::Satisfiable(assignment)
    }
}

/// A brute-force reference backend for small variable counts, used to verify
/// clause correctness against ground truth in tests.
///
/// Enumerates all `2^var_count` assignments; instances over its variable
/// budget get a [`Timeout`](Satisfaction::Timeout) verdict instead.
#[derive(Clone, Copy, Debug)]
pub struct Exhaustive {
    /// Largest variable count this backend will attempt.
    pub max_vars: u32,
}

impl Default for Exhaustive {
    fn default() -> Self {
        Self { max_vars: 20 }
    }
}

impl SatSolve for Exhaustive {
    fn solve(&mut self, var_count: usize, clauses: &ClauseSet) -> Satisfaction {
        if var_count as u32 > self.max_vars {
            return Satisfaction::Timeout;
        }

        'mask: for mask in 0u64..(1u64 << var_count) {
            let truth = |l: Lit| {
                let bit = (mask >> (l.unsigned_abs() - 1)) & 1 == 1;
                if l > 0 { bit } else { !bit }
            };

            for clause in clauses.iter() {
                if !clause.iter().any(|&l| truth(l)) {
                    continue 'mask;
                }
            }

            return Satisfaction::Satisfiable(
                (1..=var_count as Lit).map(|v| if truth(v) { v } else { -v }).collect(),
            );
        }

        Satisfaction::Unsatisfiable
    }
}
