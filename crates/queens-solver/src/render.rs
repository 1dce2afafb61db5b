//! Text rendering of solved boards.

use crate::solution::Solution;

/// Draw a solution as a framed grid, one board row per text line.
///
/// Queens are drawn as `.`; empty cells are blank.
pub fn render(solution: &Solution) -> String {
    let side_length = solution.side_length();

    // board framing
    let mut top = String::from("┏");
    let mut middle = String::from("┠");
    let mut bottom = String::from("┗");
    for _ in 1..side_length {
        top.push_str("━━┯");
        middle.push_str("──┼");
        bottom.push_str("━━┷");
    }
    top.push_str("━━┓\n");
    middle.push_str("──┨\n");
    bottom.push_str("━━┛\n");

    let mut out = top;
    for row in 0..side_length {
        out.push('┃');
        for column in 0..side_length {
            out.push_str(if solution.has_queen(column, row) { ". " } else { "  " });
            if column + 1 < side_length {
                out.push('│');
            }
        }
        out.push_str("┃\n");
        if row + 1 < side_length {
            out.push_str(&middle);
        }
    }
    out.push_str(&bottom);
    out
}
