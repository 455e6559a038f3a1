// src/layout/partition.rs
//! Разбиение внутренней области карты на таблицу зон
//!
//! Оси считаются независимо по одной и той же схеме: подбирается размер
//! зоны `extent` и количество `count` так, чтобы остаток `pad` можно было
//! распределить промежутками между зонами — между соседними зонами должна
//! оставаться хотя бы одна клетка стены, иначе комнаты слипнутся.

use crate::config::LayoutSettings;
use crate::layout::{Region, RegionTable};

/// Результат разбиения одной оси
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisPartition {
    /// Размер зоны вдоль оси
    pub extent: u32,
    /// Количество зон вдоль оси (всегда >= 1)
    pub count: u32,
    /// Свободные клетки, распределяемые промежутками между зонами
    pub pad: u32,
}

/// Подбирает разбиение оси длиной `interior` клеток
///
/// Инвариант результата: `pad >= count - 1` при `count > 1` — на каждый
/// промежуток между зонами приходится хотя бы одна клетка.
///
/// # Алгоритм
/// Начиная с минимального размера зоны: `count = interior / extent`,
/// `pad = interior % extent`; если промежутков не хватает — уменьшаем
/// количество зон, возвращая освободившийся размер в `pad`; если и этого
/// мало — увеличиваем размер зоны и пересчитываем. Рост `extent` ограничен
/// `interior`, поэтому цикл всегда завершается (в пределе остаётся одна
/// зона во всю ось).
#[must_use]
pub fn split_axis(interior: u32, min_extent: u32) -> AxisPartition {
    debug_assert!(interior > 0);
    let mut extent = min_extent.clamp(1, interior);
    loop {
        let mut count = interior / extent;
        let mut pad = interior % extent;
        // При count == 1 промежутки не нужны, условие выполнено тривиально
        if pad >= count - 1 {
            return AxisPartition { extent, count, pad };
        }
        count -= 1;
        pad += extent;
        if pad >= count - 1 {
            return AxisPartition { extent, count, pad };
        }
        extent += 1;
    }
}

/// Строит таблицу зон для карты `width × height`
///
/// По краю карты остаётся рамка в одну клетку; отступ каждой зоны —
/// `extent * i + pad / (count - 1) * i + 1`, то есть накопленный размер зон
/// плюс равномерно распределённые промежутки. При единственной зоне на оси
/// слагаемое промежутка равно нулю.
#[must_use]
pub fn build_region_table(width: u32, height: u32, settings: &LayoutSettings) -> RegionTable {
    debug_assert!(width >= 3 && height >= 3);
    let hor = split_axis(width - 2, settings.min_rect_width);
    let ver = split_axis(height - 2, settings.min_rect_height);

    let hor_gap = if hor.count > 1 { hor.pad / (hor.count - 1) } else { 0 };
    let ver_gap = if ver.count > 1 { ver.pad / (ver.count - 1) } else { 0 };

    let mut table = Vec::with_capacity(ver.count as usize);
    for ry in 0..ver.count {
        let mut row = Vec::with_capacity(hor.count as usize);
        for rx in 0..hor.count {
            row.push(Region::new(
                ver.extent * ry + ver_gap * ry + 1,
                hor.extent * rx + hor_gap * rx + 1,
                ver.extent,
                hor.extent,
            ));
        }
        table.push(row);
    }
    table
}
