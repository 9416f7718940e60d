use crate::direction::Direction;
use crate::maze::Position;
use crate::walls::Walls;

/// État de visite d'une cellule, utilisé uniquement pendant la génération.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    NotVisited,
    Visited,
}

/// Représente une cellule du labyrinthe.
///
/// Une cellule possède sa position, une configuration de murs et un état
/// indiquant si le générateur l'a déjà visitée.
#[derive(Debug, Clone)]
pub struct Cell {
    pub position: Position,
    /// Les murs délimitant la cellule.
    pub walls: Walls,
    /// L'état de la cellule.
    pub state: CellState,
}

impl Cell {
    /// Crée une cellule fermée sur ses quatre côtés, `NotVisited`.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            walls: Walls::default(),
            state: CellState::NotVisited,
        }
    }

    pub fn open_sides(&self) -> Vec<Direction> {
        self.walls.open_sides()
    }

    pub fn is_open(&self, direction: Direction) -> bool {
        !self.walls.has_wall(direction)
    }

    pub fn remove_wall(&mut self, direction: Direction) {
        self.walls.remove(direction);
    }

    pub fn visit(&mut self) {
        self.state = CellState::Visited;
    }

    pub fn is_visited(&self) -> bool {
        self.state == CellState::Visited
    }
}
