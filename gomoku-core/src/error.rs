//! 错误类型定义

use thiserror::Error;

/// 五子棋规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GomokuError {
    /// 坐标超出棋盘
    #[error("Invalid coordinate: ({row}, {col}) on a {size}x{size} board")]
    InvalidCoordinate { row: usize, col: usize, size: usize },

    /// 棋盘尺寸不合法
    #[error("Invalid board size: {size} (allowed: {min}..={max})")]
    InvalidBoardSize { size: usize, min: usize, max: usize },

    /// 目标格已有棋子
    #[error("Cell ({row}, {col}) is already occupied")]
    OccupiedCell { row: usize, col: usize },

    /// 棋盘已满，没有可落子的位置
    #[error("No legal move: the board is full")]
    NoLegalMove,

    /// 需要棋子颜色的地方传入了空
    #[error("Expected a stone colour, got Empty")]
    EmptyStone,
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, GomokuError>;
