//! Format binaire compact d'un labyrinthe généré.
//!
//! En-tête de quatre `u32` little-endian : largeur, hauteur, colonne de
//! l'entrée, colonne de la sortie. Puis un octet par cellule, ligne par
//! ligne : bit0 Nord, bit1 Est, bit2 Sud, bit3 Ouest (1 = mur).

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

use crate::direction::Direction;
use crate::error::{MazeError, Result};
use crate::maze::{Maze, Position};
use crate::walls::Walls;

/// Garde-fou contre un en-tête corrompu qui réclamerait une grille énorme.
pub const MAX_CELLS: u64 = 1 << 22;

/// Écrit le labyrinthe dans `writer`.
fn write_maze<W: Write>(writer: &mut W, maze: &Maze) -> Result<()> {
    writer.write_u32::<LittleEndian>(maze.width() as u32)?;
    writer.write_u32::<LittleEndian>(maze.height() as u32)?;
    writer.write_u32::<LittleEndian>(maze.entrance().x as u32)?;
    writer.write_u32::<LittleEndian>(maze.exit().x as u32)?;
    for cell in maze.cells() {
        writer.write_u8(cell.walls.to_bits())?;
    }
    Ok(())
}

/// Relit un labyrinthe et vérifie sa cohérence : murs symétriques,
/// ouvertures vers l'extérieur uniquement à l'entrée (Nord) et à la sortie (Sud).
fn read_maze<R: Read>(reader: &mut R) -> Result<Maze> {
    let width = reader.read_u32::<LittleEndian>()?;
    let height = reader.read_u32::<LittleEndian>()?;
    let entrance_x = reader.read_u32::<LittleEndian>()?;
    let exit_x = reader.read_u32::<LittleEndian>()?;

    let cell_count = u64::from(width) * u64::from(height);
    if width == 0 || height == 0 || cell_count > MAX_CELLS {
        return Err(MazeError::Codec(format!(
            "unsupported dimensions {}x{}",
            width, height
        )));
    }
    if entrance_x >= width || exit_x >= width {
        return Err(MazeError::Codec(format!(
            "entrance column {} or exit column {} outside width {}",
            entrance_x, exit_x, width
        )));
    }

    let mut bits = vec![0u8; cell_count as usize];
    reader.read_exact(&mut bits)?;

    let mut maze = Maze::new(width as i32, height as i32)?;
    for (i, &b) in bits.iter().enumerate() {
        if b > 0x0F {
            return Err(MazeError::Codec(format!("invalid wall byte {:#04x}", b)));
        }
        let position = Position::new((i as u32 % width) as i32, (i as u32 / width) as i32);
        let cell = maze.cell_mut(position).ok_or(MazeError::MissingCell(position))?;
        cell.walls = Walls::from_bits(b);
    }

    let entrance = Position::new(entrance_x as i32, 0);
    let exit = Position::new(exit_x as i32, height as i32 - 1);
    check_outward_openings(&maze, entrance, exit)?;
    if !maze.walls_are_symmetric() {
        return Err(MazeError::Codec("one-sided passage in wall data".to_string()));
    }

    maze.set_entrance(entrance.x)?;
    maze.set_exit(exit.x)?;
    Ok(maze)
}

pub fn encode(maze: &Maze) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(16 + maze.cells().count());
    write_maze(&mut bytes, maze)?;
    Ok(bytes)
}

pub fn decode(mut bytes: &[u8]) -> Result<Maze> {
    read_maze(&mut bytes)
}

fn check_outward_openings(maze: &Maze, entrance: Position, exit: Position) -> Result<()> {
    for cell in maze.cells() {
        for direction in cell.open_sides() {
            if maze.in_bounds(cell.position.step(direction)) {
                continue;
            }
            let allowed = (cell.position == entrance && direction == Direction::North)
                || (cell.position == exit && direction == Direction::South);
            if !allowed {
                return Err(MazeError::Codec(format!(
                    "unexpected opening {} at ({},{})",
                    direction.as_str(),
                    cell.position.x,
                    cell.position.y
                )));
            }
        }
    }

    let entrance_open = maze.cell(entrance).is_some_and(|c| c.is_open(Direction::North));
    let exit_open = maze.cell(exit).is_some_and(|c| c.is_open(Direction::South));
    if !entrance_open || !exit_open {
        return Err(MazeError::Codec("entrance or exit is walled off".to_string()));
    }
    Ok(())
}
