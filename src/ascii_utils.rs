/*!
 * # Module de visualisation ASCII du labyrinthe
 *
 * Chaque cellule occupe trois colonnes (`+--` / `|  `) et deux lignes.
 * Les ouvertures de l'entrée et de la sortie apparaissent comme des trous
 * dans la bordure.
 */

use crate::agent::Agent;
use crate::direction::Direction;
use crate::maze::{Maze, Position};

/// Génère une représentation ASCII du labyrinthe avec ses agents.
///
/// Un agent est représenté par la première lettre de son étiquette.
pub fn visualize_maze_ascii(maze: &Maze, agents: &[&Agent]) -> String {
    render(maze, |position| {
        agents
            .iter()
            .find(|agent| agent.location() == position)
            .map(|agent| agent.crest().chars().next().unwrap_or('@'))
    })
}

/// Génère une représentation ASCII d'un chemin : un point par case traversée.
pub fn visualize_path_ascii(maze: &Maze, path: &[Position]) -> String {
    render(maze, |position| path.contains(&position).then_some('.'))
}

fn render<F>(maze: &Maze, marker: F) -> String
where
    F: Fn(Position) -> Option<char>,
{
    let mut out = String::new();

    for y in 0..maze.height() {
        // mur Nord de la rangée
        for x in 0..maze.width() {
            out.push('+');
            out.push_str(if has_wall(maze, Position::new(x, y), Direction::North) {
                "--"
            } else {
                "  "
            });
        }
        out.push_str("+\n");

        // murs Ouest et contenu des cases
        for x in 0..maze.width() {
            let position = Position::new(x, y);
            out.push(if has_wall(maze, position, Direction::West) { '|' } else { ' ' });
            out.push(marker(position).unwrap_or(' '));
            out.push(' ');
        }
        let last = Position::new(maze.width() - 1, y);
        out.push(if has_wall(maze, last, Direction::East) { '|' } else { ' ' });
        out.push('\n');
    }

    // bordure Sud
    for x in 0..maze.width() {
        out.push('+');
        out.push_str(if has_wall(maze, Position::new(x, maze.height() - 1), Direction::South) {
            "--"
        } else {
            "  "
        });
    }
    out.push_str("+\n");
    out
}

fn has_wall(maze: &Maze, position: Position, direction: Direction) -> bool {
    maze.cell(position)
        .map(|cell| !cell.is_open(direction))
        .unwrap_or(true)
}
