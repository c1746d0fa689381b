pub mod accept_solution;
pub mod annealing_acceptor;
pub mod greedy_acceptor;
pub mod solution_acceptor;
