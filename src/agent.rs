use crate::direction::Direction;
use crate::maze::Position;

/// Représente l'état d'un agent : position, position précédente, orientation.
///
/// Aucune validation : c'est la stratégie appelante qui garantit qu'un
/// déplacement passe par un côté ouvert.
#[derive(Debug, Clone)]
pub struct Agent {
    location: Position,
    last_location: Position,
    facing: Direction,
    /// Étiquette d'identité (par ex. une couleur pour l'affichage)
    crest: String,
    /// Chemin parcouru: positions successives
    trail: Vec<Position>,
}

impl Agent {
    pub fn new(crest: impl Into<String>, location: Position, facing: Direction) -> Self {
        Self {
            location,
            last_location: location,
            facing,
            crest: crest.into(),
            trail: vec![location],
        }
    }

    pub fn location(&self) -> Position {
        self.location
    }

    pub fn last_location(&self) -> Position {
        self.last_location
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn crest(&self) -> &str {
        &self.crest
    }

    pub fn trail(&self) -> &[Position] {
        &self.trail
    }

    pub fn move_to(&mut self, location: Position) {
        self.last_location = self.location;
        self.location = location;
        self.trail.push(location);
    }

    pub fn face(&mut self, direction: Direction) {
        self.facing = direction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_to_keeps_last_location() {
        let mut agent = Agent::new("blue", Position::new(0, 0), Direction::South);
        assert_eq!(agent.last_location(), agent.location());

        agent.move_to(Position::new(0, 1));
        agent.move_to(Position::new(1, 1));
        assert_eq!(agent.location(), Position::new(1, 1));
        assert_eq!(agent.last_location(), Position::new(0, 1));
        assert_eq!(agent.trail().len(), 3);
        assert_eq!(agent.crest(), "blue");
    }

    #[test]
    fn test_face_does_not_move() {
        let mut agent = Agent::new("red", Position::new(2, 0), Direction::South);
        agent.face(Direction::North);
        assert_eq!(agent.facing(), Direction::North);
        assert_eq!(agent.location(), Position::new(2, 0));
        assert_eq!(agent.trail(), &[Position::new(2, 0)]);
    }
}
