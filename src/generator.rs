//! Génération de labyrinthe par parcours en profondeur aléatoire.
//!
//! Version itérative (pile explicite) du "recursive backtracker" :
//!
//! 1. Choisir l'entrée au hasard sur la rangée du haut, ouvrir son mur Nord.
//! 2. Choisir la sortie au hasard sur la rangée du bas, ouvrir son mur Sud.
//! 3. Marquer l'entrée visitée et l'empiler.
//! 4. Tant que la pile n'est pas vide : dépiler la cellule courante. Si elle a
//!    des voisines non visitées, en choisir une au hasard, abattre le mur entre
//!    les deux, la marquer visitée, puis ré-empiler la courante et empiler la
//!    voisine. Sinon la cellule est abandonnée (retour arrière).
//!
//! Le résultat est un arbre couvrant : un seul chemin entre deux cellules.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::direction::Direction;
use crate::error::{MazeError, Result};
use crate::maze::{Maze, Position};

/// Génère un labyrinthe parfait à partir d'une source d'aléa fournie.
///
/// Toute l'aléa (entrée, sortie, choix des voisines) passe par `rng` :
/// une même graine et de mêmes dimensions donnent le même labyrinthe.
pub fn generate<R: Rng + ?Sized>(width: i32, height: i32, rng: &mut R) -> Result<Maze> {
    let mut maze = Maze::new(width, height)?;

    let entrance_x = rng.random_range(0..width);
    maze.set_entrance(entrance_x)?;
    let exit_x = rng.random_range(0..width);
    maze.set_exit(exit_x)?;

    let start = maze.entrance();
    visit(&mut maze, start)?;
    let mut stack: Vec<Position> = vec![start];
    let mut carved = 0usize;

    while let Some(current) = stack.pop() {
        let unvisited: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&d| {
                maze.cell(maze.neighbor(current, d))
                    .is_some_and(|cell| !cell.is_visited())
            })
            .collect();

        let Some(&direction) = unvisited.choose(&mut *rng) else {
            trace!("[Generator] backtrack from ({},{})", current.x, current.y);
            continue;
        };
        let chosen = maze.neighbor(current, direction);
        maze.carve(current, direction);
        visit(&mut maze, chosen)?;
        carved += 1;

        stack.push(current);
        stack.push(chosen);
    }

    debug!(
        "[Generator] {}x{} maze: entrance=({},{}) exit=({},{}) passages={}",
        width,
        height,
        maze.entrance().x,
        maze.entrance().y,
        maze.exit().x,
        maze.exit().y,
        carved
    );

    Ok(maze)
}

/// Raccourci : génère avec un `StdRng` initialisé depuis `seed`.
pub fn generate_seeded(width: i32, height: i32, seed: u64) -> Result<Maze> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(width, height, &mut rng)
}

fn visit(maze: &mut Maze, position: Position) -> Result<()> {
    maze.cell_mut(position)
        .map(|cell| cell.visit())
        .ok_or(MazeError::MissingCell(position))
}
