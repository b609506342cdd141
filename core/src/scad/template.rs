//! Fixed OpenSCAD templates appended after the parameter block.
//!
//! Both templates expect `is_2d`, `fudge`, `block_z`, `block_size`,
//! `base_z`, `scale_factor`, `matrix_rows`, `matrix_cols` and `matrix`
//! to be declared. Blocks grow by `fudge` toward their neighbours so
//! adjacent blocks overlap and union into one solid.

/// Shared block primitive and placement frame; `{CELL}` is replaced with
/// the per-cell body of a fudge style.
const FRAME: &str = r#"
module block(bit, x, y) {
	if (is_2d) {
		square([x, y]);
	} else {
		cube([x, y, block_z * bit]);
	}
}

scale([scale_factor, scale_factor, 1]) {
	translate([-block_size * matrix_cols / 2, block_size * matrix_rows / 2 - block_size, 0]) {
		if (!is_2d) {
			translate([0, -block_size * (matrix_rows - 1), 0]) {
				cube([block_size * matrix_cols, block_size * matrix_rows, base_z]);
			}
		}
		translate([0, 0, is_2d ? 0 : base_z]) {
			for (i = [0 : matrix_rows - 1]) {
				for (j = [0 : matrix_cols - 1]) {
					if (matrix[i][j] != 0) {
						translate([block_size * j, -block_size * i, 0]) {
{CELL}
						}
					}
				}
			}
		}
	}
}
"#;

/// Edge rule: every block grows right and up, except along the top row
/// and right column where there is nothing to reach.
const EDGE_CELL: &str = r#"							if (i == 0 && j == matrix_cols - 1) {
								// Top right corner
								block(matrix[i][j], block_size, block_size);
							} else if (i == 0) {
								// Top row
								block(matrix[i][j], block_size + fudge, block_size);
							} else if (j == matrix_cols - 1) {
								// Right column
								block(matrix[i][j], block_size, block_size + fudge);
							} else {
								block(matrix[i][j], block_size + fudge, block_size + fudge);
							}"#;

/// Neighbourhood rule: look at the left, below and below-left cells.
const NEIGHBORHOOD_CELL: &str = r#"							left = ink(i, j - 1);
							below = ink(i + 1, j);
							diagonal = ink(i + 1, j - 1);
							if (diagonal && !left && !below) {
								// Corner contact only
								translate([-fudge, -fudge, 0]) {
									block(matrix[i][j], block_size + fudge, block_size + fudge);
								}
							} else if (left || below) {
								translate([left ? -fudge : 0, below ? -fudge : 0, 0]) {
									block(matrix[i][j], block_size + (left ? fudge : 0), block_size + (below ? fudge : 0));
								}
							} else {
								block(matrix[i][j], block_size, block_size);
							}"#;

const INK_FN: &str = r#"
function ink(i, j) = i >= 0 && i < matrix_rows && j >= 0 && j < matrix_cols && matrix[i][j] != 0;
"#;

/// Template for the edge fudge rule
pub fn edge() -> String {
    FRAME.replace("{CELL}", EDGE_CELL)
}

/// Template for the neighbourhood fudge rule
pub fn neighborhood() -> String {
    let mut out = String::from(INK_FN);
    out.push_str(&FRAME.replace("{CELL}", NEIGHBORHOOD_CELL));
    out
}
