use dungen::layout::graph::floor_component_count;
use dungen::layout::partition::split_axis;
use dungen::{DungeonMap, DungeonParams, Tile};
use proptest::prelude::*;

fn generated(seed: u64, width: u32, height: u32) -> DungeonMap {
    let mut map = DungeonMap::new();
    map.generate(&DungeonParams {
        seed,
        width,
        height,
        ..DungeonParams::default()
    })
    .unwrap();
    map
}

proptest! {
    // Полное покрытие: каждая клетка существует и несёт определённый тайл
    #[test]
    fn grid_is_fully_defined(seed in any::<u64>(), width in 1u32..=160, height in 1u32..=60) {
        let map = generated(seed, width, height);
        let grid = map.current().unwrap();
        prop_assert_eq!(grid.iter().count(), (width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                prop_assert!(grid.get(x, y).is_ok());
            }
        }
        prop_assert!(grid.get(width, 0).is_err());
        prop_assert!(grid.get(0, height).is_err());
    }

    // Связность: весь пол — одна компонента по 4-соседству
    #[test]
    fn floor_is_one_component(seed in any::<u64>(), width in 3u32..=200, height in 3u32..=80) {
        let map = generated(seed, width, height);
        let grid = map.current().unwrap();
        prop_assert!(grid.iter().any(|(_, _, t)| t == Tile::Floor));
        prop_assert_eq!(floor_component_count(grid), 1);
    }

    // Комнаты не задевают рамку карты
    #[test]
    fn border_stays_walled(seed in any::<u64>(), width in 3u32..=160, height in 3u32..=60) {
        let map = generated(seed, width, height);
        let grid = map.current().unwrap();
        for (x, y, tile) in grid.iter() {
            if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                prop_assert_eq!(tile, Tile::Wall);
            }
        }
    }

    #[test]
    fn split_axis_invariants(interior in 1u32..=5000, min_extent in 1u32..=16) {
        let p = split_axis(interior, min_extent);
        prop_assert!(p.count >= 1);
        prop_assert_eq!(p.extent * p.count + p.pad, interior);
        if p.count > 1 {
            prop_assert!(p.pad >= p.count - 1);
        }
    }

    #[test]
    fn same_seed_same_layout(seed in any::<u64>()) {
        let first = generated(seed, 80, 30);
        let second = generated(seed, 80, 30);
        prop_assert_eq!(
            first.current().unwrap().to_ascii(),
            second.current().unwrap().to_ascii()
        );
    }
}
