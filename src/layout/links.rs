// src/layout/links.rs
//! Расстановка проходов между зонами
//!
//! Два прохода над таблицей. Сначала случайный обход в глубину раздаёт
//! каждой зоне от одного до четырёх проходов к соседям. Один такой обход
//! полной связности не гарантирует: между перезапусками обхода отдельные
//! зоны могут остаться отрезанными. Поэтому вторым проходом считаем
//! достижимость и принудительно пришиваем отрезанные куски к посещённой
//! части таблицы.

use crate::layout::RegionTable;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Кадр случайного обхода: зона, выпавшие направления, следующий бит
struct WalkFrame {
    y: usize,
    x: usize,
    dirs: u8,
    next: u8,
}

/// Пытается открыть проход из зоны `(y, x)` в направлении `dir`
/// (0 — вверх, 1 — вправо, 2 — вниз, 3 — влево)
///
/// Возвращает координаты соседа, если связь поставлена: сосед существует и
/// проход ещё не был открыт. Флаги ставятся парой с обеих сторон.
fn try_link(table: &mut RegionTable, y: usize, x: usize, dir: u8) -> Option<(usize, usize)> {
    let tabh = table.len();
    let tabw = table[0].len();
    match dir {
        0 if y > 0 && !table[y][x].top => {
            table[y][x].top = true;
            table[y - 1][x].bottom = true;
            Some((y - 1, x))
        }
        1 if x < tabw - 1 && !table[y][x].right => {
            table[y][x].right = true;
            table[y][x + 1].left = true;
            Some((y, x + 1))
        }
        2 if y < tabh - 1 && !table[y][x].bottom => {
            table[y][x].bottom = true;
            table[y + 1][x].top = true;
            Some((y + 1, x))
        }
        3 if x > 0 && !table[y][x].left => {
            table[y][x].left = true;
            table[y][x - 1].right = true;
            Some((y, x - 1))
        }
        _ => None,
    }
}

/// Случайный остовный обход от зоны `(start_y, start_x)`
///
/// Каждой впервые посещённой зоне выпадает 4-битное число 1..=15 (никогда
/// не ноль): бит разрешает попытку прохода в своём направлении. Обход
/// углубляется в ещё не посещённого соседа сразу после установки связи и
/// возвращается к оставшимся битам зоны, когда ветка исчерпана — явный
/// стек воспроизводит этот порядок в точности, поэтому при фиксированном
/// сиде планировка повторяется.
fn walk(table: &mut RegionTable, start_y: usize, start_x: usize, rng: &mut ChaCha8Rng) {
    table[start_y][start_x].visited = true;
    let mut stack = vec![WalkFrame {
        y: start_y,
        x: start_x,
        dirs: rng.gen_range(1..=15),
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        if frame.next == 4 {
            stack.pop();
            continue;
        }
        let (y, x) = (frame.y, frame.x);
        let dir = frame.next;
        frame.next += 1;
        if frame.dirs & (1 << dir) == 0 {
            continue;
        }
        if let Some((ny, nx)) = try_link(table, y, x, dir)
            && !table[ny][nx].visited
        {
            table[ny][nx].visited = true;
            stack.push(WalkFrame {
                y: ny,
                x: nx,
                dirs: rng.gen_range(1..=15),
                next: 0,
            });
        }
    }
}

/// Первый проход: раздаёт проходы случайным обходом от случайного корня
///
/// После возврата из корня таблица сканируется в порядке строк: от каждой
/// зоны, до которой обход не добрался, он перезапускается. Рабочие флаги
/// `visited` в конце сбрасываются.
pub fn bind_regions(table: &mut RegionTable, rng: &mut ChaCha8Rng) {
    let tabh = table.len();
    let tabw = table[0].len();
    let root_y = rng.gen_range(0..tabh);
    let root_x = rng.gen_range(0..tabw);
    walk(table, root_y, root_x, rng);

    for y in 0..tabh {
        for x in 0..tabw {
            if !table[y][x].visited {
                walk(table, y, x, rng);
            }
        }
    }
    clear_visited(table);
}

/// Второй проход: гарантирует достижимость каждой зоны
///
/// Считаем достижимость от `(0, 0)`. Пока счёт меньше размера таблицы,
/// сканируем в порядке строк: первой непосещённой зоне с посещённым соседом
/// (приоритет: верх, право, низ, лево) принудительно открываем проход и
/// дозаполняем счёт обходом от неё. Первая непосещённая зона в порядке
/// строк всегда имеет посещённого соседа сверху или слева, так что одного
/// прохода по таблице достаточно.
pub fn make_coherent(table: &mut RegionTable) {
    let tabh = table.len();
    let tabw = table[0].len();
    let total = tabh * tabw;
    let mut distance = traverse(table, 0, 0);

    'scan: for y in 0..tabh {
        for x in 0..tabw {
            if distance == total {
                break 'scan;
            }
            if table[y][x].visited {
                continue;
            }
            if y > 0 && table[y - 1][x].visited {
                table[y][x].top = true;
                table[y - 1][x].bottom = true;
            } else if x < tabw - 1 && table[y][x + 1].visited {
                table[y][x].right = true;
                table[y][x + 1].left = true;
            } else if y < tabh - 1 && table[y + 1][x].visited {
                table[y][x].bottom = true;
                table[y + 1][x].top = true;
            } else if x > 0 && table[y][x - 1].visited {
                table[y][x].left = true;
                table[y][x - 1].right = true;
            } else {
                continue;
            }
            distance += traverse(table, y, x);
        }
    }
    clear_visited(table);
}

/// Обход в глубину по открытым проходам
///
/// Помечает достижимые зоны посещёнными и возвращает их количество, включая
/// стартовую. Флаги связей ставятся только парами на существующих соседях,
/// поэтому проверка границ здесь не нужна.
pub fn traverse(table: &mut RegionTable, start_y: usize, start_x: usize) -> usize {
    table[start_y][start_x].visited = true;
    let mut stack = vec![(start_y, start_x)];
    let mut distance = 1;

    while let Some((y, x)) = stack.pop() {
        let (top, right, bottom, left) = {
            let region = &table[y][x];
            (region.top, region.right, region.bottom, region.left)
        };
        if top && !table[y - 1][x].visited {
            table[y - 1][x].visited = true;
            distance += 1;
            stack.push((y - 1, x));
        }
        if right && !table[y][x + 1].visited {
            table[y][x + 1].visited = true;
            distance += 1;
            stack.push((y, x + 1));
        }
        if bottom && !table[y + 1][x].visited {
            table[y + 1][x].visited = true;
            distance += 1;
            stack.push((y + 1, x));
        }
        if left && !table[y][x - 1].visited {
            table[y][x - 1].visited = true;
            distance += 1;
            stack.push((y, x - 1));
        }
    }
    distance
}

fn clear_visited(table: &mut RegionTable) {
    for row in table.iter_mut() {
        for region in row.iter_mut() {
            region.visited = false;
        }
    }
}
