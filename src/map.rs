// src/map.rs
//! Владелец сгенерированной карты
//!
//! [`DungeonMap`] — явный владелец одной сетки с двумя состояниями:
//! пусто ⇄ сгенерировано. Правило «одна активная карта» обеспечивается
//! самим экземпляром, который передаётся потребителям по ссылке — никакого
//! скрытого глобального состояния. Доступ до генерации и повторная
//! генерация без `destroy` возвращают ошибку, а не неопределённое
//! поведение.

use crate::config::DungeonParams;
use crate::error::MapError;
use crate::grid::Grid;
use crate::layout;
use crate::tile::Tile;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Default)]
pub struct DungeonMap {
    grid: Option<Grid>,
}

impl DungeonMap {
    #[must_use]
    pub fn new() -> Self {
        Self { grid: None }
    }

    /// Генерирует планировку и переводит карту в состояние «сгенерировано»
    ///
    /// Вся генерация — один синхронный вызов: читать сетку можно только
    /// после его возврата.
    ///
    /// # Ошибки
    /// - `MapError::AlreadyGenerated` — карта уже есть; она остаётся нетронутой
    /// - `MapError::InvalidDimensions` — ширина или высота меньше 1
    pub fn generate(&mut self, params: &DungeonParams) -> Result<(), MapError> {
        if self.grid.is_some() {
            return Err(MapError::AlreadyGenerated);
        }
        if params.width < 1 || params.height < 1 {
            return Err(MapError::InvalidDimensions {
                width: params.width,
                height: params.height,
            });
        }
        let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
        self.grid = Some(layout::generate_layout(
            params.width,
            params.height,
            &params.layout,
            &mut rng,
        ));
        Ok(())
    }

    /// Освобождает сетку и возвращает карту в пустое состояние
    pub fn destroy(&mut self) -> Result<(), MapError> {
        if self.grid.take().is_none() {
            return Err(MapError::NotGenerated);
        }
        Ok(())
    }

    /// Ссылка на готовую сетку
    pub fn current(&self) -> Result<&Grid, MapError> {
        self.grid.as_ref().ok_or(MapError::NotGenerated)
    }

    pub fn width(&self) -> Result<u32, MapError> {
        Ok(self.current()?.width)
    }

    pub fn height(&self) -> Result<u32, MapError> {
        Ok(self.current()?.height)
    }

    /// Тайл по координатам с тем же контрактом границ, что у [`Grid::get`]
    pub fn tile_at(&self, x: u32, y: u32) -> Result<Tile, MapError> {
        self.current()?.get(x, y)
    }

    /// Итератор по всем клеткам в порядке строк — для потокового вывода
    pub fn iter(&self) -> Result<impl Iterator<Item = (u32, u32, Tile)> + '_, MapError> {
        Ok(self.current()?.iter())
    }
}
