use std::fmt::Display;

use serde::Serialize;

use crate::solver::solution::working_solution::WorkingSolution;

use super::{
    cheapest_insertion::CheapestInsertion, recreate_context::RecreateContext,
    recreate_solution::RecreateSolution, regret_insertion::RegretInsertion,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecreateStrategy {
    CheapestInsertion,
    RegretInsertion(usize),
}

impl RecreateSolution for RecreateStrategy {
    fn recreate_solution(&self, solution: &mut WorkingSolution, context: &RecreateContext) {
        match self {
            RecreateStrategy::CheapestInsertion => {
                CheapestInsertion.recreate_solution(solution, context);
            }
            RecreateStrategy::RegretInsertion(k) => {
                RegretInsertion::new(*k).recreate_solution(solution, context);
            }
        }
    }
}

impl Display for RecreateStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecreateStrategy::CheapestInsertion => write!(f, "cheapest_insertion"),
            RecreateStrategy::RegretInsertion(k) => write!(f, "regret_insertion({k})"),
        }
    }
}

impl Serialize for RecreateStrategy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
