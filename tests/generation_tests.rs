use dungen::layout::graph::floor_component_count;
use dungen::{DungeonMap, DungeonParams, MapError, Tile};

fn params(seed: u64, width: u32, height: u32) -> DungeonParams {
    DungeonParams {
        seed,
        width,
        height,
        ..DungeonParams::default()
    }
}

#[test]
fn generate_150x35_covers_every_cell() {
    let mut map = DungeonMap::new();
    map.generate(&params(42, 150, 35)).unwrap();

    assert_eq!(map.width().unwrap(), 150);
    assert_eq!(map.height().unwrap(), 35);
    // Ровно width × height клеток, каждая с определённым тайлом
    assert_eq!(map.iter().unwrap().count(), 150 * 35);
}

#[test]
fn floor_forms_single_connected_component() {
    let mut map = DungeonMap::new();
    map.generate(&params(7, 150, 35)).unwrap();

    let grid = map.current().unwrap();
    assert!(grid.iter().any(|(_, _, t)| t == Tile::Floor));
    assert_eq!(floor_component_count(grid), 1);
}

#[test]
fn iteration_is_row_major() {
    let mut map = DungeonMap::new();
    map.generate(&params(1, 10, 4)).unwrap();

    let coords: Vec<(u32, u32)> = map.iter().unwrap().map(|(x, y, _)| (x, y)).collect();
    assert_eq!(coords[0], (0, 0));
    assert_eq!(coords[1], (1, 0));
    // y внешний, x внутренний: после конца строки обход переходит на следующую
    assert_eq!(coords[9], (9, 0));
    assert_eq!(coords[10], (0, 1));
    assert_eq!(coords.last().copied(), Some((9, 3)));
}

#[test]
fn tile_access_respects_bounds() {
    let mut map = DungeonMap::new();
    map.generate(&params(3, 150, 35)).unwrap();

    assert!(map.tile_at(149, 34).is_ok());
    // x == width уже вне диапазона
    assert_eq!(
        map.tile_at(150, 0),
        Err(MapError::OutOfBounds {
            x: 150,
            y: 0,
            width: 150,
            height: 35,
        })
    );
    assert!(map.tile_at(0, 35).is_err());
}

#[test]
fn repeated_queries_return_same_tile() {
    let mut map = DungeonMap::new();
    map.generate(&params(99, 60, 20)).unwrap();

    let first: Vec<Tile> = map.iter().unwrap().map(|(_, _, t)| t).collect();
    for (i, (x, y, _)) in map.iter().unwrap().enumerate() {
        assert_eq!(map.tile_at(x, y).unwrap(), first[i]);
    }
}

#[test]
fn second_generate_fails_and_keeps_first_grid() {
    let mut map = DungeonMap::new();
    map.generate(&params(5, 40, 15)).unwrap();
    let before = map.current().unwrap().to_ascii();

    assert_eq!(map.generate(&params(6, 40, 15)), Err(MapError::AlreadyGenerated));
    assert_eq!(map.current().unwrap().to_ascii(), before);
}

#[test]
fn generate_rejects_zero_dimensions() {
    let mut map = DungeonMap::new();
    assert_eq!(
        map.generate(&params(1, 0, 10)),
        Err(MapError::InvalidDimensions { width: 0, height: 10 })
    );
    assert!(map.current().is_err());
}

#[test]
fn access_before_generate_fails() {
    let map = DungeonMap::new();
    assert_eq!(map.current().err(), Some(MapError::NotGenerated));
    assert_eq!(map.tile_at(0, 0), Err(MapError::NotGenerated));
    assert_eq!(map.width(), Err(MapError::NotGenerated));
}

#[test]
fn destroy_lifecycle() {
    let mut map = DungeonMap::new();
    // destroy до генерации — нарушение предусловия
    assert_eq!(map.destroy(), Err(MapError::NotGenerated));

    map.generate(&params(11, 30, 12)).unwrap();
    map.destroy().unwrap();
    assert_eq!(map.current().err(), Some(MapError::NotGenerated));

    // После destroy карту можно генерировать заново
    map.generate(&params(12, 10, 10)).unwrap();
    assert_eq!(map.width().unwrap(), 10);
}

#[test]
fn fixed_seed_reproduces_layout() {
    let mut first = DungeonMap::new();
    let mut second = DungeonMap::new();
    first.generate(&params(1234, 80, 30)).unwrap();
    second.generate(&params(1234, 80, 30)).unwrap();

    assert_eq!(
        first.current().unwrap().to_ascii(),
        second.current().unwrap().to_ascii()
    );
}

#[test]
fn tiny_grid_stays_walled() {
    // Карта без внутренней области — сплошная стена, без паники
    let mut map = DungeonMap::new();
    map.generate(&params(8, 2, 2)).unwrap();
    assert!(map.iter().unwrap().all(|(_, _, t)| t == Tile::Wall));
}
