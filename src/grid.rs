// src/grid.rs
//! Тайловая сетка подземелья
//!
//! Хранение — один плоский буфер `Vec<Tile>` размером `width × height`,
//! индекс клетки вычисляется как `y * width + x`. После завершения генерации
//! сетка через публичный API не изменяется: мутация (`set`, `fill_rect`)
//! доступна только генератору внутри крейта.

use crate::error::MapError;
use crate::tile::Tile;
use image::{ImageBuffer, Rgba};

/// Прямоугольная сетка тайлов
///
/// # Гарантии
/// - `data.len() == width * height`, каждая клетка всегда содержит ровно один `Tile`
/// - после генерации множество клеток `Floor` образует одну компоненту
///   связности по 4-соседству
#[derive(Debug, Clone)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
    data: Vec<Tile>,
}

impl Grid {
    /// Создаёт сетку, целиком заполненную стенами
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![Tile::Wall; (width * height) as usize],
        }
    }

    /// Возвращает тайл по координатам
    ///
    /// # Ошибки
    /// `MapError::OutOfBounds`, если `x >= width` или `y >= height`.
    pub fn get(&self, x: u32, y: u32) -> Result<Tile, MapError> {
        if x >= self.width || y >= self.height {
            return Err(MapError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.data[(y * self.width + x) as usize])
    }

    pub(crate) fn set(&mut self, x: u32, y: u32, tile: Tile) {
        debug_assert!(x < self.width && y < self.height);
        self.data[(y * self.width + x) as usize] = tile;
    }

    /// Перезаписывает прямоугольник клеток одним типом тайла
    pub(crate) fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, tile: Tile) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, tile);
            }
        }
    }

    /// Ленивый итератор по всем клеткам в порядке строк (y внешний, x внутренний)
    ///
    /// Выдаёт ровно `width × height` элементов `(x, y, Tile)`; повторный вызов
    /// начинает обход заново.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, Tile)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &tile)| (i as u32 % self.width, i as u32 / self.width, tile))
    }

    /// Текстовое представление сетки (строка на ряд клеток)
    #[must_use]
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for (x, _, tile) in self.iter() {
            out.push(tile.to_char());
            if x == self.width - 1 {
                out.push('\n');
            }
        }
        out
    }

    #[must_use]
    pub fn to_rgba_image(&self) -> Vec<u8> {
        self.data
            .iter()
            .flat_map(|&tile| {
                let rgb = tile.to_rgb();
                [rgb[0], rgb[1], rgb[2], 255] // RGBA
            })
            .collect()
    }

    /// Сохраняет превью планировки в PNG-файл (пиксель на клетку)
    pub fn save_as_png(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_raw(self.width, self.height, self.to_rgba_image())
                .ok_or("Failed to create image buffer")?;
        img.save(path)?;
        Ok(())
    }
}
