use log::debug;

use crate::agent::Agent;
use crate::direction::Direction;
use crate::error::Result;
use crate::maze::Maze;
use crate::strategy::{StepOutcome, Strategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalState {
    AtStart,
    Moving,
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalReport {
    pub steps: usize,
    pub reached_exit: bool,
    pub state: TraversalState,
}

/// Une partie : un agent, sa stratégie, et le labyrinthe emprunté
/// (en lecture seule) le temps de la traversée.
#[derive(Debug)]
pub struct Traversal<'a> {
    maze: &'a Maze,
    agent: Agent,
    strategy: Strategy,
    state: TraversalState,
    steps: usize,
}

impl<'a> Traversal<'a> {
    pub fn new(maze: &'a Maze, agent: Agent, strategy: Strategy) -> Self {
        Self {
            maze,
            agent,
            strategy,
            state: TraversalState::AtStart,
            steps: 0,
        }
    }

    /// Place un nouvel agent sur l'entrée, tourné vers l'intérieur (Sud).
    pub fn from_entrance(maze: &'a Maze, crest: &str, strategy: Strategy) -> Self {
        let agent = Agent::new(crest, maze.entrance(), Direction::South);
        Self::new(maze, agent, strategy)
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn state(&self) -> TraversalState {
        self.state
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Un pas de la stratégie. Une erreur (blocage, case manquante)
    /// termine la partie.
    pub fn step(&mut self) -> Result<StepOutcome> {
        if self.state == TraversalState::Stopped {
            return Ok(StepOutcome::Stopped);
        }

        match self.strategy.step(&mut self.agent, self.maze) {
            Ok(StepOutcome::Moved(position)) => {
                self.steps += 1;
                self.state = TraversalState::Moving;
                Ok(StepOutcome::Moved(position))
            }
            Ok(StepOutcome::Stopped) => {
                self.state = TraversalState::Stopped;
                Ok(StepOutcome::Stopped)
            }
            Err(e) => {
                self.state = TraversalState::Stopped;
                Err(e)
            }
        }
    }

    /// Enchaîne les pas jusqu'à l'arrêt ou `max_steps` appels.
    pub fn run(&mut self, max_steps: usize) -> Result<TraversalReport> {
        for _ in 0..max_steps {
            if self.step()? == StepOutcome::Stopped {
                break;
            }
        }

        let report = self.report();
        debug!(
            "[Traversal] {} ({}): steps={} reached_exit={} state={:?}",
            self.agent.crest(),
            self.strategy.name(),
            report.steps,
            report.reached_exit,
            report.state
        );
        Ok(report)
    }

    pub fn report(&self) -> TraversalReport {
        TraversalReport {
            steps: self.steps,
            reached_exit: self.agent.location() == self.maze.exit(),
            state: self.state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::solve;
    use crate::error::MazeError;
    use crate::generator::generate_seeded;
    use crate::maze::Position;
    use crate::strategy::Hand;

    #[test]
    fn test_wall_follower_reaches_the_exit() {
        for seed in 0..20 {
            for (w, h) in [(2, 2), (6, 4), (10, 10), (1, 7), (7, 1)] {
                let maze = generate_seeded(w, h, seed).unwrap();
                for hand in [Hand::Right, Hand::Left] {
                    let mut run = Traversal::from_entrance(&maze, "green", Strategy::wall_follower(hand));
                    let report = run.run((4 * w * h) as usize + 1).unwrap();
                    assert!(
                        report.reached_exit,
                        "seed {} {}x{} {:?} did not reach the exit",
                        seed, w, h, hand
                    );
                    assert!(report.steps <= (2 * w * h) as usize);
                    assert_eq!(report.state, TraversalState::Stopped);
                }
            }
        }
    }

    #[test]
    fn test_path_walker_follows_the_solution() {
        let maze = generate_seeded(9, 7, 11).unwrap();
        let solution = solve(&maze).unwrap();
        let mut run = Traversal::from_entrance(&maze, "blue", Strategy::path_walker(solution.path.clone()));

        let report = run.run(1_000).unwrap();
        assert!(report.reached_exit);
        assert_eq!(report.steps, solution.path.len());
        assert_eq!(run.agent().trail()[1..], solution.path[..]);
    }

    #[test]
    fn test_wanderer_never_leaves_open_passages() {
        let maze = generate_seeded(8, 8, 5).unwrap();
        let mut run = Traversal::from_entrance(&maze, "red", Strategy::Wanderer);
        let report = run.run(256).unwrap();

        assert!(report.steps <= 256);
        for pair in run.agent().trail().windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let d = Direction::from_offset(b.x - a.x, b.y - a.y).unwrap();
            assert!(maze.cell(a).unwrap().is_open(d));
        }
    }

    #[test]
    fn test_single_cell_maze_stops_immediately() {
        let maze = generate_seeded(1, 1, 0).unwrap();
        let mut run = Traversal::from_entrance(&maze, "grey", Strategy::wall_follower(Hand::Right));
        assert_eq!(run.state(), TraversalState::AtStart);

        let report = run.run(10).unwrap();
        assert_eq!(report.steps, 0);
        assert!(report.reached_exit);
        assert_eq!(report.state, TraversalState::Stopped);
    }

    #[test]
    fn test_deadlock_ends_the_run() {
        let maze = Maze::new(3, 3).unwrap();
        let agent = Agent::new("stuck", Position::new(1, 1), Direction::North);
        let mut run = Traversal::new(&maze, agent, Strategy::Wanderer);

        assert!(matches!(run.run(5), Err(MazeError::StrategyDeadlock(_))));
        assert_eq!(run.state(), TraversalState::Stopped);
        assert_eq!(run.step().unwrap(), StepOutcome::Stopped);
    }
}
