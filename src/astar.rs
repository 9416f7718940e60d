//! Recherche du plus court chemin (A*) dans un labyrinthe.
//!
//! Les waypoints vivent dans une arène (`Vec<Waypoint>`) ; le prédécesseur
//! est un indice dans cette arène, jamais une référence. La reconstruction
//! du chemin est une simple remontée d'indices.

use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

use log::{debug, trace};

use crate::error::{MazeError, Result};
use crate::maze::{Maze, Position};
use crate::priority_queue::PriorityQueue;

type WaypointId = usize;

/// Candidat de la recherche : une position, son coût depuis le départ,
/// l'estimation restante et le waypoint d'où l'on vient.
#[derive(Debug, Clone, Copy)]
struct Waypoint {
    position: Position,
    cost_from_start: u32,
    cost_to_target: u32,
    predecessor: Option<WaypointId>,
}

impl Waypoint {
    fn total_cost(&self) -> u32 {
        self.cost_from_start + self.cost_to_target
    }
}

// Identité purement positionnelle : coût et prédécesseur ignorés.
impl PartialEq for Waypoint {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Waypoint {}

impl Hash for Waypoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}

/// Résultat d'une recherche.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResult {
    /// Vrai si la cible a été atteinte
    pub found: bool,
    /// Positions du départ à la cible incluses (vide si `found == false`)
    pub path: Vec<Position>,
    /// Nombre de waypoints extraits de la file
    pub nodes_expanded: usize,
}

impl PathResult {
    fn not_found(nodes_expanded: usize) -> Self {
        Self {
            found: false,
            path: Vec::new(),
            nodes_expanded,
        }
    }

    /// Longueur du chemin en nombre de pas (arêtes).
    pub fn length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Heuristique : distance de Manhattan (coûts unitaires, moves axiaux).
pub fn heuristic(from: Position, to: Position) -> u32 {
    from.manhattan_distance(to)
}

/// Cherche le plus court chemin de `start` à `target`.
///
/// Un départ ou une cible sans cellule, ou une case atteinte sans cellule, est une
/// violation de contrat (`MazeError::MissingCell`). L'absence de chemin est
/// un résultat normal : `found == false` et chemin vide.
pub fn find_path(maze: &Maze, start: Position, target: Position) -> Result<PathResult> {
    trace!(
        "[AStar] find_path: start=({},{}) target=({},{})",
        start.x,
        start.y,
        target.x,
        target.y
    );

    for endpoint in [start, target] {
        if maze.cell(endpoint).is_none() {
            return Err(MazeError::MissingCell(endpoint));
        }
    }

    let mut arena: Vec<Waypoint> = Vec::new();
    let mut open_set: PriorityQueue<Position, WaypointId> = PriorityQueue::new();
    let mut closed_set: HashSet<Position> = HashSet::new();
    let mut best_costs: HashMap<Position, u32> = HashMap::new();

    let origin = Waypoint {
        position: start,
        cost_from_start: 0,
        cost_to_target: heuristic(start, target),
        predecessor: None,
    };
    arena.push(origin);
    best_costs.insert(start, 0);
    open_set.push(start, 0, origin.total_cost());

    let mut nodes_expanded = 0;

    while !open_set.is_empty() {
        let (_, position, id) = open_set.pop()?;
        nodes_expanded += 1;

        if position == target {
            let path = build_path(&arena, id);
            debug!(
                "[AStar] SUCCESS: path length={} steps, nodes_expanded={}",
                path.len().saturating_sub(1),
                nodes_expanded
            );
            return Ok(PathResult {
                found: true,
                path,
                nodes_expanded,
            });
        }

        closed_set.insert(position);

        let current = arena[id];
        let cell = maze.cell(position).ok_or(MazeError::MissingCell(position))?;
        let came_from = current.predecessor.map(|p| arena[p]);

        for direction in cell.open_sides() {
            let next = maze.neighbor(position, direction);
            if !maze.in_bounds(next) {
                continue;
            }

            let candidate = Waypoint {
                position: next,
                cost_from_start: current.cost_from_start + 1,
                cost_to_target: heuristic(next, target),
                predecessor: Some(id),
            };

            // Pas de demi-tour immédiat
            if came_from == Some(candidate) {
                continue;
            }

            let improves = best_costs
                .get(&next)
                .map_or(true, |&cost| candidate.cost_from_start < cost);

            if closed_set.contains(&next) {
                // Une case finalisée n'est rouverte que pour un g strictement meilleur
                if !improves {
                    continue;
                }
                closed_set.remove(&next);
                trace!("[AStar] reopening ({},{})", next.x, next.y);
            } else if !improves {
                continue;
            } else if open_set.contains(&next) {
                trace!(
                    "[AStar] cheaper route to ({},{}): g={}",
                    next.x,
                    next.y,
                    candidate.cost_from_start
                );
            }

            let next_id = arena.len();
            arena.push(candidate);
            best_costs.insert(next, candidate.cost_from_start);
            open_set.push(next, next_id, candidate.total_cost());
        }
    }

    debug!(
        "[AStar] FAILED: NoPath after expanding {} nodes",
        nodes_expanded
    );
    Ok(PathResult::not_found(nodes_expanded))
}

/// Chemin de l'entrée à la sortie du labyrinthe.
pub fn solve(maze: &Maze) -> Result<PathResult> {
    find_path(maze, maze.entrance(), maze.exit())
}

/// Remonte les prédécesseurs depuis `endpoint` puis inverse.
/// Un prédécesseur a toujours un indice plus petit : la boucle termine.
fn build_path(arena: &[Waypoint], endpoint: WaypointId) -> Vec<Position> {
    let mut path = Vec::new();
    let mut cursor = Some(endpoint);

    while let Some(id) = cursor {
        let waypoint = &arena[id];
        path.push(waypoint.position);
        cursor = waypoint.predecessor.filter(|&p| p < id);
    }

    path.reverse();
    path
}
