use thiserror::Error;

/// Ошибки доступа к карте и её жизненного цикла
///
/// Нарушения предусловий и выход за границы всегда возвращаются вызывающему
/// как `Err` — никаких сигнальных значений вроде null-указателей.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("invalid map dimensions {width}x{height}, both must be at least 1")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("map has already been generated, destroy it first")]
    AlreadyGenerated,

    #[error("map has not been generated yet")]
    NotGenerated,
}
