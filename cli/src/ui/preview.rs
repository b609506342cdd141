//! Terminal preview of an extracted module grid.

use qr2cad_core::ModuleGrid;

/// Print the grid as it will be extruded.
///
/// Uses Unicode block characters for compact display where
/// each character represents 2 vertical modules.
pub fn print_grid(grid: &ModuleGrid) {
    let quiet = "  ";
    println!("{}{}", quiet, " ".repeat(grid.cols() + 4));

    for y in (0..grid.rows()).step_by(2) {
        let line: String = (0..grid.cols())
            .map(|x| half_block(grid.is_set(y, x), grid.is_set(y + 1, x)))
            .collect();
        println!("{}  {}  ", quiet, line);
    }

    println!("{}{}", quiet, " ".repeat(grid.cols() + 4));
}

/// ▀ = top set, ▄ = bottom set, █ = both, space = neither
fn half_block(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (true, true) => '█',
        (true, false) => '▀',
        (false, true) => '▄',
        (false, false) => ' ',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_block() {
        assert_eq!(half_block(true, true), '█');
        assert_eq!(half_block(true, false), '▀');
        assert_eq!(half_block(false, true), '▄');
        assert_eq!(half_block(false, false), ' ');
    }
}
