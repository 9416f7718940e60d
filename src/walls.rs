use crate::direction::Direction;

/// Ensemble des 4 murs d'une cellule.
///
/// `true` = mur présent (infranchissable), `false` = passage ouvert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Default for Walls {
    fn default() -> Self {
        Self {
            north: true,
            east: true,
            south: true,
            west: true,
        }
    }
}

impl Walls {
    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Ouvre un seul côté. Le côté symétrique de la voisine n'est pas touché.
    pub fn remove(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.north = false,
            Direction::East => self.east = false,
            Direction::South => self.south = false,
            Direction::West => self.west = false,
        }
    }

    /// Côtés sans mur, dans l'ordre N, E, S, W.
    pub fn open_sides(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| !self.has_wall(d))
            .collect()
    }

    /// Encodage sur 4 bits : bit0 N, bit1 E, bit2 S, bit3 W (1 = mur).
    pub fn to_bits(&self) -> u8 {
        Direction::ALL
            .into_iter()
            .enumerate()
            .filter(|&(_, d)| self.has_wall(d))
            .fold(0u8, |acc, (i, _)| acc | (1 << i))
    }

    pub fn from_bits(bits: u8) -> Self {
        Self {
            north: bits & 0b0001 != 0,
            east: bits & 0b0010 != 0,
            south: bits & 0b0100 != 0,
            west: bits & 0b1000 != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_walls_are_closed() {
        let walls = Walls::default();
        assert!(walls.open_sides().is_empty());
        assert_eq!(walls.to_bits(), 0b1111);
    }

    #[test]
    fn test_remove_opens_only_one_side() {
        let mut walls = Walls::default();
        walls.remove(Direction::East);
        assert_eq!(walls.open_sides(), vec![Direction::East]);
        assert!(walls.has_wall(Direction::West));
        assert_eq!(Walls::from_bits(walls.to_bits()), walls);
    }
}
