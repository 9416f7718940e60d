//! Vues JSON en lecture seule pour les moteurs de rendu.

use serde_json::{json, Value};

use crate::agent::Agent;
use crate::maze::{Maze, Position};

pub fn position_to_json(position: Position) -> Value {
    json!({ "x": position.x, "y": position.y })
}

/// Toutes les cellules avec leurs quatre murs, plus l'entrée et la sortie.
pub fn maze_to_json(maze: &Maze) -> Value {
    let cells: Vec<Value> = maze
        .cells()
        .map(|cell| {
            json!({
                "x": cell.position.x,
                "y": cell.position.y,
                "walls": {
                    "north": cell.walls.north,
                    "east": cell.walls.east,
                    "south": cell.walls.south,
                    "west": cell.walls.west,
                }
            })
        })
        .collect();

    json!({
        "width": maze.width(),
        "height": maze.height(),
        "entrance": position_to_json(maze.entrance()),
        "exit": position_to_json(maze.exit()),
        "cells": cells,
    })
}

pub fn agent_to_json(agent: &Agent) -> Value {
    json!({
        "crest": agent.crest(),
        "location": position_to_json(agent.location()),
        "facing": agent.facing().as_str(),
    })
}

pub fn path_to_json(path: &[Position]) -> Value {
    Value::Array(path.iter().map(|&p| position_to_json(p)).collect())
}
