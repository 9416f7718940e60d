//! Stratégies de déplacement pas à pas.
//!
//! Les deux stratégies locales ne voient que la case courante et
//! l'orientation de l'agent. Elles tiennent compte des ouvertures vers
//! l'extérieur : si la règle choisit une ouverture de bord, l'agent
//! ressort du labyrinthe et la stratégie s'arrête sans déplacement.

use log::{debug, trace};

use crate::agent::Agent;
use crate::direction::{Direction, RelativeDirection};
use crate::error::{MazeError, Result};
use crate::maze::{Maze, Position};

/// Main gardée contre le mur par le suiveur de mur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hand {
    Left,
    #[default]
    Right,
}

impl Hand {
    fn preference(self) -> [RelativeDirection; 4] {
        match self {
            Hand::Right => [
                RelativeDirection::Right,
                RelativeDirection::Front,
                RelativeDirection::Left,
                RelativeDirection::Back,
            ],
            Hand::Left => [
                RelativeDirection::Left,
                RelativeDirection::Front,
                RelativeDirection::Right,
                RelativeDirection::Back,
            ],
        }
    }
}

/// Tout droit d'abord, puis droite, puis gauche, et demi-tour en dernier.
const WANDERER_PREFERENCE: [RelativeDirection; 4] = [
    RelativeDirection::Front,
    RelativeDirection::Right,
    RelativeDirection::Left,
    RelativeDirection::Back,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved(Position),
    Stopped,
}

/// Rejoue un chemin précalculé, une position par pas.
#[derive(Debug, Clone)]
pub struct PathWalker {
    path: Vec<Position>,
    cursor: usize,
}

impl PathWalker {
    pub fn new(path: Vec<Position>) -> Self {
        Self { path, cursor: 0 }
    }

    fn advance(&mut self, agent: &mut Agent) -> StepOutcome {
        let Some(&next) = self.path.get(self.cursor) else {
            return StepOutcome::Stopped;
        };
        self.cursor += 1;

        if let Some(direction) = Direction::between(agent.location(), next) {
            agent.face(direction);
        }
        agent.move_to(next);
        StepOutcome::Moved(next)
    }
}

/// Ensemble fermé des stratégies, appelées via `step`.
#[derive(Debug, Clone)]
pub enum Strategy {
    WallFollower(Hand),
    Wanderer,
    PathWalker(PathWalker),
}

impl Strategy {
    pub fn wall_follower(hand: Hand) -> Self {
        Strategy::WallFollower(hand)
    }

    pub fn path_walker(path: Vec<Position>) -> Self {
        Strategy::PathWalker(PathWalker::new(path))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::WallFollower(Hand::Right) => "wall-follower (right hand)",
            Strategy::WallFollower(Hand::Left) => "wall-follower (left hand)",
            Strategy::Wanderer => "wanderer",
            Strategy::PathWalker(_) => "path-walker",
        }
    }

    /// Fait faire au plus un déplacement à l'agent.
    ///
    /// Sur la sortie, c'est toujours un no-op. Une case sans aucun côté
    /// ouvert donne `MazeError::StrategyDeadlock` : impossible sur un
    /// labyrinthe issu du générateur.
    pub fn step(&mut self, agent: &mut Agent, maze: &Maze) -> Result<StepOutcome> {
        if agent.location() == maze.exit() {
            return Ok(StepOutcome::Stopped);
        }

        match self {
            Strategy::WallFollower(hand) => local_step(agent, maze, &hand.preference()),
            Strategy::Wanderer => local_step(agent, maze, &WANDERER_PREFERENCE),
            Strategy::PathWalker(walker) => Ok(walker.advance(agent)),
        }
    }
}

fn local_step(
    agent: &mut Agent,
    maze: &Maze,
    preference: &[RelativeDirection; 4],
) -> Result<StepOutcome> {
    let here = agent.location();
    let cell = maze.cell(here).ok_or(MazeError::MissingCell(here))?;
    let facing = agent.facing();

    let direction = preference
        .iter()
        .map(|&relative| facing.relative_to_absolute(relative))
        .find(|&d| cell.is_open(d))
        .ok_or(MazeError::StrategyDeadlock(here))?;

    let next = maze.neighbor(here, direction);
    if !maze.in_bounds(next) {
        debug!(
            "[Strategy] {} leaves the maze through {} at ({},{})",
            agent.crest(),
            direction.as_str(),
            here.x,
            here.y
        );
        return Ok(StepOutcome::Stopped);
    }

    trace!(
        "[Strategy] {} ({},{}) -> ({},{}) facing {}",
        agent.crest(),
        here.x,
        here.y,
        next.x,
        next.y,
        direction.as_str()
    );
    agent.face(direction);
    agent.move_to(next);
    Ok(StepOutcome::Moved(next))
}
