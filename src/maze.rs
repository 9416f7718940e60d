use std::fmt;

use crate::ascii_utils::visualize_maze_ascii;
use crate::cell::Cell;
use crate::direction::Direction;
use crate::error::{MazeError, Result};

/// Coordonnées d'une cellule. Origine en haut à gauche,
/// `x` croît vers la droite, `y` vers le bas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Distance de Manhattan, heuristique admissible sur cette grille.
    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// Position voisine dans une direction. Aucune vérification de bornes.
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.offset();
        Position::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position::new(x, y)
    }
}

/// Carte du labyrinthe : une grille rectangulaire `width x height` de cellules,
/// stockée ligne par ligne, avec une entrée (rangée du haut) et une sortie
/// (rangée du bas).
#[derive(Debug, Clone)]
pub struct Maze {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    entrance: Position,
    exit: Position,
}

impl Maze {
    /// Crée une grille dont tous les murs sont fermés.
    ///
    /// L'entrée et la sortie pointent par défaut sur la colonne 0 des rangées
    /// du haut et du bas, sans ouverture ; le générateur les repositionne.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(Position::new(x, y))))
            .collect();

        Ok(Self {
            width,
            height,
            cells,
            entrance: Position::new(0, 0),
            exit: Position::new(0, height - 1),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        if self.in_bounds(position) {
            Some((position.y * self.width + position.x) as usize)
        } else {
            None
        }
    }

    /// Récupère une cellule en lecture seule, `None` hors de la grille.
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).and_then(|i| self.cells.get(i))
    }

    pub(crate) fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.index(position).and_then(move |i| self.cells.get_mut(i))
    }

    /// Coordonnée adjacente, calcul pur : l'appelant vérifie les bornes.
    pub fn neighbor(&self, position: Position, direction: Direction) -> Position {
        position.step(direction)
    }

    /// Retire un seul mur d'une seule cellule. Renvoie `false` hors grille.
    pub fn remove_wall(&mut self, position: Position, direction: Direction) -> bool {
        match self.cell_mut(position) {
            Some(cell) => {
                cell.remove_wall(direction);
                true
            }
            None => false,
        }
    }

    /// Ouvre le passage entre `position` et sa voisine des deux côtés.
    /// Ne fait rien (et renvoie `false`) si l'une des deux est hors grille.
    pub fn carve(&mut self, position: Position, direction: Direction) -> bool {
        let next = self.neighbor(position, direction);
        if !self.in_bounds(position) || !self.in_bounds(next) {
            return false;
        }
        self.remove_wall(position, direction);
        self.remove_wall(next, direction.opposite());
        true
    }

    /// Place l'entrée sur la rangée du haut et ouvre son mur Nord vers l'extérieur.
    pub fn set_entrance(&mut self, x: i32) -> Result<()> {
        let position = Position::new(x, 0);
        if !self.remove_wall(position, Direction::North) {
            return Err(MazeError::MissingCell(position));
        }
        self.entrance = position;
        Ok(())
    }

    /// Place la sortie sur la rangée du bas et ouvre son mur Sud vers l'extérieur.
    pub fn set_exit(&mut self, x: i32) -> Result<()> {
        let position = Position::new(x, self.height - 1);
        if !self.remove_wall(position, Direction::South) {
            return Err(MazeError::MissingCell(position));
        }
        self.exit = position;
        Ok(())
    }

    pub fn entrance(&self) -> Position {
        self.entrance
    }

    pub fn exit(&self) -> Position {
        self.exit
    }

    /// Toutes les cellules, ligne par ligne depuis le coin haut gauche.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Directions ouvertes d'une case menant à une autre case de la grille.
    /// Les ouvertures vers l'extérieur (entrée, sortie) sont exclues.
    pub fn passable_sides(&self, position: Position) -> Option<Vec<Direction>> {
        self.cell(position).map(|cell| {
            cell.open_sides()
                .into_iter()
                .filter(|&d| self.in_bounds(position.step(d)))
                .collect()
        })
    }

    /// Nombre de passages internes ouverts (paires de murs retirées).
    /// Chaque paire est comptée une fois, depuis son côté Est ou Sud.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&d| cell.is_open(d) && self.in_bounds(cell.position.step(d)))
                    .count()
            })
            .sum()
    }

    /// Vérifie que chaque passage interne est ouvert des deux côtés.
    pub fn walls_are_symmetric(&self) -> bool {
        self.cells.iter().all(|cell| {
            Direction::ALL.into_iter().all(|d| {
                match self.cell(cell.position.step(d)) {
                    Some(other) => cell.is_open(d) == other.is_open(d.opposite()),
                    None => true,
                }
            })
        })
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", visualize_maze_ascii(self, &[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_dimensions() {
        assert!(matches!(
            Maze::new(0, 3),
            Err(MazeError::InvalidDimensions { width: 0, height: 3 })
        ));
        assert!(Maze::new(3, -1).is_err());
    }

    #[test]
    fn test_cell_lookup_and_bounds() {
        let maze = Maze::new(3, 2).unwrap();
        assert_eq!(maze.cells().count(), 6);
        assert_eq!(maze.cell(Position::new(2, 1)).unwrap().position, Position::new(2, 1));
        assert!(maze.cell(Position::new(3, 0)).is_none());
        assert!(maze.cell(Position::new(0, -1)).is_none());
    }

    #[test]
    fn test_neighbor_does_not_check_bounds() {
        let maze = Maze::new(2, 2).unwrap();
        let outside = maze.neighbor(Position::new(0, 0), Direction::North);
        assert_eq!(outside, Position::new(0, -1));
        assert!(!maze.in_bounds(outside));
    }

    #[test]
    fn test_remove_wall_touches_a_single_cell() {
        let mut maze = Maze::new(2, 1).unwrap();
        assert!(maze.remove_wall(Position::new(0, 0), Direction::East));
        assert!(maze.cell(Position::new(0, 0)).unwrap().is_open(Direction::East));
        assert!(!maze.cell(Position::new(1, 0)).unwrap().is_open(Direction::West));
        assert!(!maze.walls_are_symmetric());
        assert!(!maze.remove_wall(Position::new(5, 5), Direction::East));
    }

    #[test]
    fn test_carve_is_symmetric() {
        let mut maze = Maze::new(2, 2).unwrap();
        assert!(maze.carve(Position::new(0, 0), Direction::South));
        assert!(maze.cell(Position::new(0, 1)).unwrap().is_open(Direction::North));
        assert!(maze.walls_are_symmetric());
        assert_eq!(maze.passage_count(), 1);
        assert!(!maze.carve(Position::new(0, 0), Direction::West));
    }

    #[test]
    fn test_outward_openings_are_not_passable() {
        let mut maze = Maze::new(1, 2).unwrap();
        maze.set_entrance(0).unwrap();
        maze.set_exit(0).unwrap();
        maze.carve(Position::new(0, 0), Direction::South);
        assert_eq!(
            maze.passable_sides(Position::new(0, 0)),
            Some(vec![Direction::South])
        );
        assert_eq!(maze.passage_count(), 1);
        assert!(maze.set_entrance(4).is_err());
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(Position::new(0, 0).manhattan_distance(Position::new(3, -4)), 7);
        assert_eq!(Position::new(2, 2).manhattan_distance(Position::new(2, 2)), 0);
        let far = Position::new(i32::MIN, i32::MIN);
        assert_eq!(far.manhattan_distance(Position::new(i32::MAX, i32::MAX)), u32::MAX);
    }
}
