/// Color of the image background.
pub const BACKGROUND: [u8; 3] = [255, 255, 255];

/// Color of the plot frame and tick marks.
pub const FRAME: [u8; 3] = [0, 0, 0];

/// Color of the horizontal line at zero, when zero is in range.
pub const ZERO_LINE: [u8; 3] = [200, 200, 200];

/// Returns the color of the curve at `index` in a plot.
pub fn curve(index: usize) -> [u8; 3] {
    let color = colorous::CATEGORY10[index % colorous::CATEGORY10.len()];
    [color.r, color.g, color.b]
}

/// Formats a color as a hex triplet.
pub fn hex([r, g, b]: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
