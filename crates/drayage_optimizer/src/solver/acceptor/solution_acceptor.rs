use rand::RngCore;

use crate::problem::routing_problem::Cost;

use super::{
    accept_solution::{AcceptSolution, AcceptSolutionContext},
    annealing_acceptor::AnnealingAcceptor,
    greedy_acceptor::GreedyAcceptor,
};

pub enum SolutionAcceptor {
    Greedy(GreedyAcceptor),
    Annealing(AnnealingAcceptor),
}

impl AcceptSolution for SolutionAcceptor {
    fn accept<R>(
        &self,
        current_cost: Cost,
        candidate_cost: Cost,
        context: AcceptSolutionContext<R>,
    ) -> bool
    where
        R: RngCore,
    {
        match self {
            SolutionAcceptor::Greedy(acceptor) => {
                acceptor.accept(current_cost, candidate_cost, context)
            }
            SolutionAcceptor::Annealing(acceptor) => {
                acceptor.accept(current_cost, candidate_cost, context)
            }
        }
    }
}
