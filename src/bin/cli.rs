use clap::Parser;
use dungen::layout::graph::floor_component_count;
use dungen::{DungeonMap, DungeonParams, Tile};
use std::path::PathBuf;

/// Генератор подземелий для Chronicles of Realms
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Путь к конфигурационному файлу в формате TOML
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ширина карты в клетках
    #[arg(long, default_value_t = 150)]
    width: u32,

    /// Высота карты в клетках
    #[arg(long, default_value_t = 35)]
    height: u32,

    /// Сид генерации (по умолчанию — случайный на каждый запуск)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Путь для сохранения PNG-превью (опционально)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let params = if let Some(config) = &cli.config {
        println!("🔍 Загрузка конфигурации...");
        DungeonParams::from_toml_file(config.to_str().ok_or("Invalid config path")?)?
    } else {
        DungeonParams {
            seed: cli.seed.unwrap_or_else(rand::random),
            width: cli.width,
            height: cli.height,
            ..DungeonParams::default()
        }
    };

    println!(
        "Генерация подземелья (размер: {}×{}, сид: {})...",
        params.width, params.height, params.seed
    );
    let mut map = DungeonMap::new();
    map.generate(&params)?;
    let grid = map.current()?;

    print!("{}", grid.to_ascii());

    let floor_tiles = grid.iter().filter(|&(_, _, t)| t == Tile::Floor).count();
    println!(
        "\nПол: {} клеток из {}, компонент связности: {}",
        floor_tiles,
        grid.width * grid.height,
        floor_component_count(grid)
    );

    if let Some(output) = &cli.output {
        println!("Сохранение превью в {output:?}");
        grid.save_as_png(output.to_str().ok_or("Invalid output path")?)?;
    }

    println!("\nГотово!");
    Ok(())
}
