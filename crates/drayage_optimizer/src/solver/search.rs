use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Instant,
};

use parking_lot::RwLock;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::debug;

use crate::{
    problem::routing_problem::{Cost, RoutingProblem},
    solver::{
        acceptor::{
            accept_solution::{AcceptSolution, AcceptSolutionContext},
            annealing_acceptor::AnnealingAcceptor,
            greedy_acceptor::GreedyAcceptor,
            solution_acceptor::SolutionAcceptor,
        },
        constraints::constraint::{Constraint, default_constraints},
        construction::construct_solution,
        recreate::{recreate_context::RecreateContext, recreate_solution::RecreateSolution},
        ruin::{ruin_context::RuinContext, ruin_solution::RuinSolution},
        solution::working_solution::WorkingSolution,
        solver_params::{AcceptorStrategy, SolverParams, Termination},
    },
};

/// A solution frozen at submission time, with its cost alongside.
pub struct EvaluatedSolution {
    pub solution: WorkingSolution,
    pub cost: Cost,
}

impl EvaluatedSolution {
    fn new(solution: WorkingSolution) -> Self {
        let cost = solution.total_cost();
        EvaluatedSolution { solution, cost }
    }
}

/// Ruin-and-recreate search over independent trajectories. Trajectories
/// share only the read-only problem, the stop flag and the best-solution
/// pool; everything else is thread local.
pub struct Search {
    problem: Arc<RoutingProblem>,
    params: SolverParams,
    constraints: Vec<Constraint>,
    best_solutions: Arc<RwLock<Vec<EvaluatedSolution>>>,
    stop_requested: AtomicBool,
}

struct TrajectoryState {
    trajectory: usize,
    iteration: usize,
    iterations_without_improvement: usize,
    best_cost: Cost,
}

impl Search {
    pub fn new(problem: Arc<RoutingProblem>, params: SolverParams) -> Self {
        Search {
            problem,
            params,
            constraints: default_constraints(),
            best_solutions: Arc::new(RwLock::new(Vec::new())),
            stop_requested: AtomicBool::new(false),
        }
    }

    pub fn stop(&self) {
        self.stop_requested.store(true, Ordering::Relaxed);
    }

    pub fn run(&self) {
        let num_trajectories = self.params.num_trajectories.max(1);
        debug!(
            trajectories = num_trajectories,
            seed = self.params.seed,
            "starting search"
        );

        thread::scope(|scope| {
            for trajectory in 0..num_trajectories {
                let builder = thread::Builder::new().name(format!("trajectory-{trajectory}"));
                builder
                    .spawn_scoped(scope, move || self.run_trajectory(trajectory))
                    .expect("failed to spawn trajectory thread");
            }
        });
    }

    /// Snapshot of the pool, best solution first.
    pub fn solutions(&self) -> Vec<WorkingSolution> {
        self.best_solutions
            .read()
            .iter()
            .map(|evaluated| evaluated.solution.clone())
            .collect()
    }

    pub fn best_cost(&self) -> Option<Cost> {
        self.best_solutions
            .read()
            .first()
            .map(|evaluated| evaluated.cost)
    }

    fn trajectory_rng(&self, trajectory: usize) -> SmallRng {
        // Distinct deterministic streams per trajectory.
        let stream = (trajectory as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        SmallRng::seed_from_u64(self.params.seed ^ stream)
    }

    fn run_trajectory(&self, trajectory: usize) {
        let start = Instant::now();
        let mut rng = self.trajectory_rng(trajectory);

        let context = RecreateContext {
            problem: &self.problem,
            constraints: &self.constraints,
        };

        let mut current = construct_solution(Arc::clone(&self.problem));
        let acceptor = self.build_acceptor(&current, &context, &mut rng);

        let max_iterations = self.params.max_iterations(self.problem.jobs().len());
        let mut state = TrajectoryState {
            trajectory,
            iteration: 0,
            iterations_without_improvement: 0,
            best_cost: Cost::INFINITY,
        };
        self.submit(&mut state, &current);

        while state.iteration < max_iterations && !self.should_terminate(&state, start) {
            let candidate = self.ruin_and_recreate(&current, &context, &mut state, &mut rng);

            let accepted = acceptor.accept(
                current.total_cost(),
                candidate.total_cost(),
                AcceptSolutionContext {
                    iteration: state.iteration,
                    max_iterations,
                    rng: &mut rng,
                },
            );

            if self.submit(&mut state, &candidate) {
                state.iterations_without_improvement = 0;
            } else {
                state.iterations_without_improvement += 1;
            }

            if accepted {
                current = candidate;
            }

            state.iteration += 1;
        }

        debug!(
            trajectory,
            iterations = state.iteration,
            best_cost = state.best_cost,
            "trajectory finished"
        );
    }

    fn build_acceptor(
        &self,
        initial: &WorkingSolution,
        context: &RecreateContext,
        rng: &mut SmallRng,
    ) -> SolutionAcceptor {
        match self.params.acceptor {
            AcceptorStrategy::Greedy => SolutionAcceptor::Greedy(GreedyAcceptor),
            AcceptorStrategy::Annealing => {
                let deltas = self.warmup_deltas(initial, context, rng);
                let acceptor = AnnealingAcceptor::from_warmup(&deltas);
                debug!(
                    temperature = acceptor.initial_temperature(),
                    probes = deltas.len(),
                    "calibrated annealing temperature"
                );
                SolutionAcceptor::Annealing(acceptor)
            }
        }
    }

    /// Cost deltas from a batch of throwaway ruin/recreate probes against
    /// the initial solution. The probes never replace it.
    fn warmup_deltas(
        &self,
        initial: &WorkingSolution,
        context: &RecreateContext,
        rng: &mut SmallRng,
    ) -> Vec<Cost> {
        let mut state = TrajectoryState {
            trajectory: 0,
            iteration: 0,
            iterations_without_improvement: 0,
            best_cost: Cost::INFINITY,
        };

        (0..self.params.warmup_iterations)
            .map(|_| {
                let probe = self.ruin_and_recreate(initial, context, &mut state, rng);
                probe.total_cost() - initial.total_cost()
            })
            .collect()
    }

    fn ruin_and_recreate(
        &self,
        current: &WorkingSolution,
        context: &RecreateContext,
        state: &mut TrajectoryState,
        rng: &mut SmallRng,
    ) -> WorkingSolution {
        let mut candidate = current.clone();

        let strategy =
            self.params.ruin_strategies[state.iteration % self.params.ruin_strategies.len()];
        let num_jobs_to_remove = self
            .params
            .num_jobs_to_remove(candidate.assigned_count().max(1), rng.random::<f64>());

        strategy.ruin_solution(
            &mut candidate,
            RuinContext {
                problem: &self.problem,
                rng,
                num_jobs_to_remove,
            },
        );
        self.params
            .recreate_strategy
            .recreate_solution(&mut candidate, context);

        candidate
    }

    fn should_terminate(&self, state: &TrajectoryState, start: Instant) -> bool {
        if self.stop_requested.load(Ordering::Relaxed) {
            return true;
        }

        self.params
            .terminations
            .iter()
            .any(|termination| match termination {
                Termination::Iterations(_) => false, // folded into max_iterations
                Termination::IterationsWithoutImprovement(limit) => {
                    state.iterations_without_improvement >= *limit
                }
                Termination::Duration(limit) => start.elapsed() >= *limit,
            })
    }

    /// Offers the candidate to the shared pool. Returns whether it
    /// improved on this trajectory's best cost.
    fn submit(&self, state: &mut TrajectoryState, candidate: &WorkingSolution) -> bool {
        let cost = candidate.total_cost();
        let improved = cost < state.best_cost;
        if improved {
            state.best_cost = cost;
            debug!(
                trajectory = state.trajectory,
                iteration = state.iteration,
                cost,
                "new trajectory best"
            );
        }

        let pool = self.best_solutions.read();
        let worst_kept = pool.last().map(|evaluated| evaluated.cost);
        let pool_full = pool.len() >= self.params.max_solutions;
        drop(pool);

        if pool_full && worst_kept.is_some_and(|worst| cost >= worst) {
            return improved;
        }

        let mut pool = self.best_solutions.write();
        if pool
            .iter()
            .any(|evaluated| evaluated.solution.is_identical(candidate))
        {
            return improved;
        }

        pool.push(EvaluatedSolution::new(candidate.clone()));
        pool.sort_by(|a, b| {
            a.cost.total_cmp(&b.cost).then_with(|| {
                a.solution
                    .unassigned_jobs()
                    .len()
                    .cmp(&b.solution.unassigned_jobs().len())
                    .then(
                        a.solution
                            .non_empty_routes_count()
                            .cmp(&b.solution.non_empty_routes_count()),
                    )
            })
        });
        pool.truncate(self.params.max_solutions);

        improved
    }
}
