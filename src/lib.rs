//! # rusty-maze
//!
//! Génération de labyrinthes parfaits et agents qui les parcourent.
//!
//! - [`generator`] : parcours en profondeur aléatoire, graine reproductible
//! - [`astar`] : plus court chemin (A*) avec une file de priorité adaptable
//! - [`strategy`] : suiveur de mur, promeneur, rejoueur de chemin
//! - [`traversal`] : boucle de pas d'un agent sur un labyrinthe
//!
//! ```rust,no_run
//! use rusty_maze::{generate_seeded, solve, Hand, Strategy, Traversal};
//!
//! let maze = generate_seeded(12, 12, 42)?;
//! let solution = solve(&maze)?;
//! let mut run = Traversal::from_entrance(&maze, "green", Strategy::wall_follower(Hand::Right));
//! let report = run.run(4 * 12 * 12)?;
//! println!("{} steps, shortest is {}", report.steps, solution.length());
//! # Ok::<(), rusty_maze::MazeError>(())
//! ```

pub mod agent;
pub mod ascii_utils;
pub mod astar;
pub mod cell;
pub mod codec;
pub mod direction;
pub mod error;
pub mod generator;
pub mod json_utils;
pub mod maze;
pub mod priority_queue;
pub mod strategy;
pub mod traversal;
pub mod walls;

pub use agent::Agent;
pub use astar::{find_path, solve, PathResult};
pub use direction::{Direction, RelativeDirection};
pub use error::{MazeError, Result};
pub use generator::{generate, generate_seeded};
pub use maze::{Maze, Position};
pub use strategy::{Hand, StepOutcome, Strategy};
pub use traversal::{Traversal, TraversalReport, TraversalState};

pub const DEFAULT_WIDTH: i32 = 12;
pub const DEFAULT_HEIGHT: i32 = 12;
/// Plafond de pas d'une traversée, en multiple de `width * height`.
pub const DEFAULT_MAX_STEPS_FACTOR: usize = 4;
