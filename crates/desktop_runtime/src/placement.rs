//! Free-cell search for newly created items.

use std::collections::HashSet;

use crate::model::{DesktopItem, ItemScope, ItemStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

/// Returns the first unoccupied cell in column-major order starting at `(1, 1)`.
///
/// `y` runs from 1 to `rows` before wrapping into the next column; columns are unbounded, so a
/// free cell always exists. `items` must all belong to the same scope.
pub fn find_free_cell<'a>(items: impl IntoIterator<Item = &'a DesktopItem>, rows: i32) -> GridCell {
    let occupied: HashSet<(i32, i32)> = items.into_iter().map(|item| (item.x, item.y)).collect();
    let rows = rows.max(1);
    let (mut x, mut y) = (1, 1);
    while occupied.contains(&(x, y)) {
        y += 1;
        if y > rows {
            y = 1;
            x += 1;
        }
    }
    GridCell { x, y }
}

pub fn free_cell_in_scope(items: &ItemStore, scope: &ItemScope, rows: i32) -> GridCell {
    find_free_cell(items.in_scope(scope), rows)
}
