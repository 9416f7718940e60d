use crate::maze::Position;

/// Les quatre directions absolues de la grille.
///
/// L'origine est en haut à gauche : `North` fait décroître `y`,
/// `South` le fait croître.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Direction relative à l'orientation courante d'un agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeDirection {
    Front,
    Right,
    Back,
    Left,
}

impl Direction {
    /// Ordre canonique N, E, S, W (ordre d'énumération des murs).
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Tourne à gauche (par ex. North -> West)
    pub fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Tourne à droite (par ex. North -> East)
    pub fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Direction opposée (par ex. North -> South)
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Convertit une direction relative (Front/Right/Back/Left)
    /// en direction absolue, en fonction de l'orientation actuelle.
    pub fn relative_to_absolute(self, relative: RelativeDirection) -> Self {
        match relative {
            RelativeDirection::Front => self,
            RelativeDirection::Right => self.turn_right(),
            RelativeDirection::Back => self.opposite(),
            RelativeDirection::Left => self.turn_left(),
        }
    }

    /// Décalage (dx, dy) d'un pas dans cette direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Retrouve la direction d'un pas unitaire, `None` si le décalage
    /// n'est pas celui de deux cases adjacentes.
    pub fn from_offset(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::North),
            (1, 0) => Some(Direction::East),
            (0, 1) => Some(Direction::South),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }

    /// Direction du pas de `from` vers `to`, `None` si les deux cases
    /// ne sont pas adjacentes.
    pub fn between(from: Position, to: Position) -> Option<Self> {
        Self::from_offset(to.x.checked_sub(from.x)?, to.y.checked_sub(from.y)?)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotations_are_consistent() {
        for dir in Direction::ALL {
            assert_eq!(dir.turn_left().turn_right(), dir);
            assert_eq!(dir.turn_right().turn_right(), dir.opposite());
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.turn_left(), dir.turn_right());
        }
    }

    #[test]
    fn test_relative_to_absolute_facing_east() {
        let facing = Direction::East;
        assert_eq!(facing.relative_to_absolute(RelativeDirection::Front), Direction::East);
        assert_eq!(facing.relative_to_absolute(RelativeDirection::Right), Direction::South);
        assert_eq!(facing.relative_to_absolute(RelativeDirection::Back), Direction::West);
        assert_eq!(facing.relative_to_absolute(RelativeDirection::Left), Direction::North);
    }

    #[test]
    fn test_offset_round_trips_through_from_offset() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            assert_eq!(Direction::from_offset(dx, dy), Some(dir));
        }
        assert_eq!(Direction::from_offset(1, 1), None);
        assert_eq!(Direction::from_offset(0, 0), None);
    }

    #[test]
    fn test_between_adjacent_positions() {
        let here = Position::new(2, 2);
        for dir in Direction::ALL {
            assert_eq!(Direction::between(here, here.step(dir)), Some(dir));
        }
        assert_eq!(Direction::between(here, here), None);
        assert_eq!(Direction::between(here, Position::new(4, 2)), None);
        assert_eq!(
            Direction::between(Position::new(i32::MIN, 0), Position::new(i32::MAX, 0)),
            None
        );
    }
}
