pub type Cursor = (u16, u16);

pub const DIRS_8: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub fn xy_i((x, y): Cursor, w: u16, h: u16) -> Option<usize> {
    if w <= x || h <= y {
        None
    } else {
        Some(y as usize * w as usize + x as usize)
    }
}

/// Narrows signed coordinates to a cursor inside a `w` by `h` grid.
pub fn in_bounds(x: i64, y: i64, w: u16, h: u16) -> Option<Cursor> {
    if (0..w as i64).contains(&x) && (0..h as i64).contains(&y) {
        Some((x as u16, y as u16))
    } else {
        None
    }
}

pub fn valid_neighbors(
    dirs: &[(i8, i8)],
    (x, y): Cursor,
    w: u16,
    h: u16,
) -> impl Iterator<Item = Cursor> {
    dirs.iter()
        .map(|(dx, dy)| (*dx as i16, *dy as i16))
        .filter_map(move |(dx, dy)| Some((x.checked_add_signed(dx)?, y.checked_add_signed(dy)?)))
        .filter(move |(i, j)| w > *i && h > *j)
}
