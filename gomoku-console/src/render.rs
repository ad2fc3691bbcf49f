//! 文本棋盘渲染

use std::fmt::Write;

use gomoku_core::{Board, Position};

/// 把棋盘渲染成带行列编号的文本
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();

    // 列标头
    out.push_str("   ");
    for col in 0..size {
        let _ = write!(out, "{:2} ", col);
    }
    out.push('\n');

    for row in 0..size {
        let _ = write!(out, "{:2} ", row);
        for col in 0..size {
            let stone = board.get(Position::new(row, col)).unwrap_or_default();
            let _ = write!(out, " {} ", stone.display_char());
        }
        out.push('\n');
    }
    out
}
