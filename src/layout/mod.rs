// src/layout/mod.rs
//! Генерация планировки подземелья
//!
//! Планировка строится в четыре прохода над таблицей зон:
//! 1. **Разбиение** ([`partition`]) — внутренняя область карты делится на
//!    таблицу прямоугольных зон почти одинакового размера.
//! 2. **Связывание** ([`links`]) — случайный обход в глубину расставляет
//!    проходы между соседними зонами, затем ремонтный проход гарантирует,
//!    что достижимы все зоны.
//! 3. **Вырезание** ([`carve`]) — в каждой зоне вырезается комната, по
//!    каждой связи — коридор между комнатами.
//! 4. Таблица зон — рабочее состояние: после вырезания она отбрасывается,
//!    наружу уходит только готовая сетка.

pub mod carve;
pub mod graph;
pub mod links;
pub mod partition;

use crate::config::LayoutSettings;
use crate::grid::Grid;
use rand_chacha::ChaCha8Rng;

/// Зона разбиения — промежуточная запись, не попадающая в итоговую сетку
///
/// Сначала хранит прямоугольник зоны из разбиения; после вырезания комнаты
/// сужается ровно до её прямоугольника (коридоры прокладываются уже между
/// комнатами, а не между зонами). Флаги `top..left` отмечают проход к
/// соседней зоне, `visited` — рабочий флаг обходов, сбрасываемый между
/// проходами.
#[derive(Debug, Clone)]
pub struct Region {
    pub y: u32,
    pub x: u32,
    pub h: u32,
    pub w: u32,
    pub visited: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Region {
    #[must_use]
    pub fn new(y: u32, x: u32, h: u32, w: u32) -> Self {
        Self {
            y,
            x,
            h,
            w,
            visited: false,
            top: false,
            right: false,
            bottom: false,
            left: false,
        }
    }
}

/// Таблица зон: `table[ry][rx]`, соседство чисто позиционное
pub type RegionTable = Vec<Vec<Region>>;

/// Генерирует готовую планировку: стены, комнаты и коридоры
///
/// Карты уже, чем 3 клетки по любой оси, не имеют внутренней области и
/// остаются сплошной стеной.
#[must_use]
pub fn generate_layout(width: u32, height: u32, settings: &LayoutSettings, rng: &mut ChaCha8Rng) -> Grid {
    let mut grid = Grid::new(width, height);
    if width < 3 || height < 3 {
        return grid;
    }

    let mut table = partition::build_region_table(width, height, settings);
    links::bind_regions(&mut table, rng);
    links::make_coherent(&mut table);
    carve::carve_layout(&mut grid, &mut table, rng);
    grid
}
