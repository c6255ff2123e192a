//! Wall layout generation.

use rat_core::Rect;

/// Tile a `width × height` arena with evenly spaced wall blocks.
///
/// Blocks are `block_width × block_height` cells, separated from each other
/// and from the top/left border by `gap` cells, and laid out row-major.
/// Only whole blocks that fit are emitted, so the result never crosses the
/// arena border and every block is ringed by corridors at least `gap` cells
/// wide on its top and left.
pub fn grid_walls(
    width:        i32,
    height:       i32,
    cell:         i32,
    block_width:  i32,
    block_height: i32,
    gap:          i32,
) -> Vec<Rect> {
    if cell <= 0 || block_width <= 0 || block_height <= 0 || gap < 0 {
        return Vec::new();
    }
    let pitch_x = (block_width + gap) * cell;
    let pitch_y = (block_height + gap) * cell;
    let rows = height / pitch_y;
    let cols = width / pitch_x;

    (0..rows * cols)
        .map(|i| {
            Rect::new(
                cell * (gap + (block_width + gap) * (i % cols)),
                cell * (gap + (block_height + gap) * (i / cols)),
                cell * block_width,
                cell * block_height,
            )
        })
        .collect()
}
