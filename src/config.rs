// src/config.rs
//! Конфигурация генерации подземелья
//!
//! Все параметры, управляющие процедурной генерацией планировки:
//! - Размеры карты и сид генератора случайных чисел
//! - Настройки разбиения внутренней области на зоны
//!
//! Структуры поддерживают сериализацию в TOML для настройки через
//! конфигурационные файлы.

use serde::{Deserialize, Serialize};
use std::fs;

/// Настройки разбиения внутренней области карты
///
/// Внутренняя область (карта минус рамка в одну клетку) делится на таблицу
/// прямоугольных зон почти одинакового размера; в каждой зоне позже
/// вырезается комната.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutSettings {
    /// Минимальная ширина зоны разбиения в клетках
    #[serde(default = "default_min_rect_width")]
    pub min_rect_width: u32,

    /// Минимальная высота зоны разбиения в клетках
    #[serde(default = "default_min_rect_height")]
    pub min_rect_height: u32,
}

fn default_min_rect_width() -> u32 {
    6
}
fn default_min_rect_height() -> u32 {
    5
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            min_rect_width: 6,
            min_rect_height: 5,
        }
    }
}

/// Основные параметры генерации подземелья
///
/// Полная конфигурация одной карты. Поддерживает загрузку из TOML-файлов.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DungeonParams {
    /// Сид генератора случайных чисел (детерминированная генерация)
    pub seed: u64,

    /// Ширина карты в клетках (по умолчанию 150)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Высота карты в клетках (по умолчанию 35)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Настройки разбиения на зоны
    #[serde(default)]
    pub layout: LayoutSettings,
}

impl DungeonParams {
    /// Загружает параметры из TOML-файла
    ///
    /// # Ошибки
    /// Возвращает ошибку, если файл не найден или содержит недопустимый формат.
    ///
    /// # Пример
    /// ```toml
    /// # dungeon.toml
    /// seed = 42
    /// width = 150
    /// height = 35
    /// ```
    pub fn from_toml_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let params: Self = toml::from_str(&contents)?;
        Ok(params)
    }
}

fn default_width() -> u32 {
    150
}
fn default_height() -> u32 {
    35
}

impl Default for DungeonParams {
    fn default() -> Self {
        Self {
            seed: 0,
            width: 150,
            height: 35,
            layout: LayoutSettings::default(),
        }
    }
}
