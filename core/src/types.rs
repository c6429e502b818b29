/// Single grid axis used for the number of rows and columns.
pub type Dim = u8;

/// Count type used for deck sizes and matched-card counts.
pub type CardCount = u16;

/// Identifies the pair a card belongs to, drawn from `1..=images`.
pub type CardValue = u16;

/// Grid position `(row, column)`.
pub type Position = (Dim, Dim);

pub const fn mult(a: Dim, b: Dim) -> CardCount {
    let a = a as CardCount;
    let b = b as CardCount;
    a.saturating_mul(b)
}

/// Row-major position of the card at `index` in a grid with `columns` columns.
pub const fn position_of(index: usize, columns: Dim) -> Position {
    let columns = columns as usize;
    ((index / columns) as Dim, (index % columns) as Dim)
}

/// Inverse of [`position_of`].
pub const fn index_of((row, column): Position, columns: Dim) -> usize {
    row as usize * columns as usize + column as usize
}
