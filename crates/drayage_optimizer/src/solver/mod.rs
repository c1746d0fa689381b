pub mod acceptor;
pub mod constraints;
pub mod construction;
pub mod insertion;
pub mod insertion_cost;
pub mod recreate;
pub mod ruin;
pub mod search;
pub mod solution;
pub mod solver;
pub mod solver_params;
