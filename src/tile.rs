/// Тип клетки подземелья
///
/// Клетка неизменяема после создания: генератор не правит клетку на месте,
/// а заменяет её целиком (`Grid::set`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Wall,
    Floor,
    Entrance,
    Exit,
}

impl Tile {
    /// Символ для текстового вывода в терминал
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Entrance => 'I',
            Tile::Exit => 'O',
        }
    }

    #[must_use]
    pub fn to_rgb(self) -> [u8; 3] {
        match self {
            Tile::Wall => [40, 40, 48],
            Tile::Floor => [200, 190, 160],
            Tile::Entrance => [80, 200, 120],
            Tile::Exit => [200, 80, 80],
        }
    }
}
