// src/layout/carve.rs
//! Вырезание комнат и коридоров в сетке
//!
//! Комната занимает больше половины своей зоны по каждой оси, но не всю
//! зону — оставшийся запас гарантирует коридорам место между комнатами.
//! После вырезания зона сужается ровно до прямоугольника комнаты, и
//! коридоры считаются уже от комнат, а не от исходного разбиения.

use crate::grid::Grid;
use crate::layout::{Region, RegionTable};
use crate::tile::Tile;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Вырезает все комнаты и коридоры по готовой таблице зон
///
/// Зоны обходятся в порядке строк; флаг `visited` здесь означает «комната
/// уже вырезана». Перед прокладкой коридора комната соседа вырезается,
/// если её ещё нет.
pub fn carve_layout(grid: &mut Grid, table: &mut RegionTable, rng: &mut ChaCha8Rng) {
    let tabh = table.len();
    let tabw = table[0].len();
    for y in 0..tabh {
        for x in 0..tabw {
            if !table[y][x].visited {
                carve_room(grid, &mut table[y][x], rng);
            }
            if x < tabw - 1 && table[y][x].right {
                if !table[y][x + 1].visited {
                    carve_room(grid, &mut table[y][x + 1], rng);
                }
                let first = table[y][x].clone();
                let second = table[y][x + 1].clone();
                carve_passage(grid, &first, &second, rng);
            }
            if y < tabh - 1 && table[y][x].bottom {
                if !table[y + 1][x].visited {
                    carve_room(grid, &mut table[y + 1][x], rng);
                }
                let first = table[y][x].clone();
                let second = table[y + 1][x].clone();
                carve_passage(grid, &first, &second, rng);
            }
        }
    }
}

/// Размер комнаты вдоль одной оси зоны: `[extent/2 + 1, extent - 1]`
///
/// Вырожденные зоны в одну-две клетки отдаются комнате целиком.
fn room_extent(extent: u32, rng: &mut ChaCha8Rng) -> u32 {
    let min = extent / 2 + 1;
    let max = extent.saturating_sub(1).max(min);
    rng.gen_range(min..=max)
}

/// Вырезает комнату внутри зоны и сужает зону до неё
fn carve_room(grid: &mut Grid, region: &mut Region, rng: &mut ChaCha8Rng) {
    let height = room_extent(region.h, rng);
    let width = room_extent(region.w, rng);
    // Случайное смещение комнаты внутри зоны
    let iy = rng.gen_range(0..=region.h - height);
    let ix = rng.gen_range(0..=region.w - width);

    region.y += iy;
    region.x += ix;
    region.h = height;
    region.w = width;

    grid.fill_rect(region.x, region.y, region.w, region.h, Tile::Floor);
    region.visited = true;
}

/// Прокладывает коридор между двумя уже вырезанными комнатами
///
/// Комнаты одного ряда зон всегда пересекаются по вертикали хотя бы на одну
/// клетку (каждая выше половины своей зоны), комнаты одного столбца — по
/// горизонтали; при пересечении ровно в одну клетку случайная толщина
/// вырождается в фиксированную полосу.
fn carve_passage(grid: &mut Grid, first: &Region, second: &Region, rng: &mut ChaCha8Rng) {
    // Горизонтальный коридор: вторая комната строго правее и между ними есть зазор
    let (x, y, w, h) = if second.x > first.x && second.x - first.x > first.w {
        let x = first.x + first.w;
        let w = second.x - x;
        let top = first.y.max(second.y);
        let overlap = (first.y + first.h).min(second.y + second.h) - top;
        let h = rng.gen_range(1..=overlap);
        let y = top + rng.gen_range(0..=overlap - h);
        (x, y, w, h)
    } else {
        // Вертикальный — от нижней грани верхней комнаты до верхней грани нижней
        let y = first.y + first.h;
        let h = second.y - y;
        let left = first.x.max(second.x);
        let overlap = (first.x + first.w).min(second.x + second.w) - left;
        let w = rng.gen_range(1..=overlap);
        let x = left + rng.gen_range(0..=overlap - w);
        (x, y, w, h)
    };
    grid.fill_rect(x, y, w, h, Tile::Floor);
}
