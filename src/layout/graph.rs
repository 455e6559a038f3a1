use crate::grid::Grid;
use crate::tile::Tile;
use petgraph::graph::{NodeIndex, UnGraph};

/// Граф смежности клеток пола: ребро между 4-соседними клетками `Floor`
#[must_use]
pub fn build_floor_graph(grid: &Grid) -> UnGraph<u32, ()> {
    let mut graph = UnGraph::new_undirected();
    let width = grid.width as usize;
    let mut cell_to_node: Vec<Option<NodeIndex>> =
        vec![None; (grid.width * grid.height) as usize];

    for (x, y, tile) in grid.iter() {
        if tile == Tile::Floor {
            let id = y * grid.width + x;
            cell_to_node[id as usize] = Some(graph.add_node(id));
        }
    }

    // Рёбра только вправо и вниз — каждая пара соседей встречается один раз
    for (x, y, tile) in grid.iter() {
        if tile != Tile::Floor {
            continue;
        }
        let idx = (y * grid.width + x) as usize;
        let Some(node) = cell_to_node[idx] else { continue };
        if x + 1 < grid.width && let Some(right) = cell_to_node[idx + 1] {
            graph.add_edge(node, right, ());
        }
        if y + 1 < grid.height && let Some(below) = cell_to_node[idx + width] {
            graph.add_edge(node, below, ());
        }
    }
    graph
}

/// Количество компонент связности пола (для готовой планировки всегда 0 или 1)
#[must_use]
pub fn floor_component_count(grid: &Grid) -> usize {
    petgraph::algo::connected_components(&build_floor_graph(grid))
}
