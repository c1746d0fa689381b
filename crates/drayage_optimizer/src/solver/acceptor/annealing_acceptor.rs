use rand::{Rng, RngCore};

use crate::problem::routing_problem::Cost;

use super::accept_solution::{AcceptSolution, AcceptSolutionContext};

/// Simulated-annealing style thresholding. Worse candidates are accepted
/// with probability `exp(-delta / temperature)`, where the temperature
/// starts at a value calibrated from warm-up trials and cools linearly to
/// zero over the iteration budget.
pub struct AnnealingAcceptor {
    initial_temperature: f64,
}

/// Fallback temperature when warm-up produced no uphill moves.
const DEFAULT_INITIAL_TEMPERATURE: f64 = 1.0;

impl AnnealingAcceptor {
    pub fn new(initial_temperature: f64) -> Self {
        AnnealingAcceptor {
            initial_temperature,
        }
    }

    /// Calibrates the initial temperature as the mean cost increase across
    /// the warm-up deltas. Improvements carry no information about how
    /// much uphill slack the search needs, so they are ignored.
    pub fn from_warmup(cost_deltas: &[Cost]) -> Self {
        let uphill: Vec<Cost> = cost_deltas
            .iter()
            .copied()
            .filter(|delta| *delta > 0.0)
            .collect();

        let initial_temperature = if uphill.is_empty() {
            DEFAULT_INITIAL_TEMPERATURE
        } else {
            uphill.iter().sum::<Cost>() / uphill.len() as f64
        };

        AnnealingAcceptor {
            initial_temperature,
        }
    }

    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    fn temperature(&self, iteration: usize, max_iterations: usize) -> f64 {
        if max_iterations == 0 {
            return 0.0;
        }
        let progress = (iteration as f64 / max_iterations as f64).min(1.0);
        self.initial_temperature * (1.0 - progress)
    }
}

impl AcceptSolution for AnnealingAcceptor {
    fn accept<R>(
        &self,
        current_cost: Cost,
        candidate_cost: Cost,
        context: AcceptSolutionContext<R>,
    ) -> bool
    where
        R: RngCore,
    {
        if candidate_cost <= current_cost {
            return true;
        }

        let temperature = self.temperature(context.iteration, context.max_iterations);
        if temperature <= 0.0 {
            return false;
        }

        let probability = (-(candidate_cost - current_cost) / temperature).exp();
        context.rng.random::<f64>() < probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockRng;

    #[test]
    fn test_warmup_temperature_averages_uphill_deltas() {
        let acceptor = AnnealingAcceptor::from_warmup(&[4.0, -2.0, 8.0, 0.0]);
        assert_eq!(acceptor.initial_temperature(), 6.0);
    }

    #[test]
    fn test_warmup_without_uphill_moves_falls_back() {
        let acceptor = AnnealingAcceptor::from_warmup(&[-1.0, -5.0, 0.0]);
        assert_eq!(acceptor.initial_temperature(), DEFAULT_INITIAL_TEMPERATURE);
    }

    #[test]
    fn test_improvements_are_always_accepted() {
        let acceptor = AnnealingAcceptor::new(0.0);
        let mut rng = MockRng::new(vec![u64::MAX]);
        assert!(acceptor.accept(
            10.0,
            9.0,
            AcceptSolutionContext {
                iteration: 50,
                max_iterations: 100,
                rng: &mut rng,
            }
        ));
    }

    #[test]
    fn test_uphill_moves_are_rejected_once_cooled() {
        let acceptor = AnnealingAcceptor::new(5.0);
        let mut rng = MockRng::new(vec![0]);
        // At the iteration budget the temperature has reached zero.
        assert!(!acceptor.accept(
            10.0,
            11.0,
            AcceptSolutionContext {
                iteration: 100,
                max_iterations: 100,
                rng: &mut rng,
            }
        ));
    }

    #[test]
    fn test_hot_temperature_accepts_small_uphill_moves() {
        let acceptor = AnnealingAcceptor::new(1000.0);
        // MockRng yielding zero draws the smallest possible probe.
        let mut rng = MockRng::new(vec![0]);
        assert!(acceptor.accept(
            10.0,
            11.0,
            AcceptSolutionContext {
                iteration: 0,
                max_iterations: 100,
                rng: &mut rng,
            }
        ));
    }
}
