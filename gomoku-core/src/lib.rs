//! 五子棋核心规则库
//!
//! 包含:
//! - 棋子、棋盘、位置等核心数据结构
//! - 试探落子（自动撤回的作用域守卫）
//! - 连线扫描与胜负判定
//! - 错误类型

mod board;
mod constants;
mod error;
mod lines;
mod moves;
mod stone;

pub use board::{Board, Probe};
pub use constants::*;
pub use error::{GomokuError, Result};
pub use lines::{Axis, LineScanner, Run, WinRule};
pub use moves::Move;
pub use stone::{Position, Stone};
