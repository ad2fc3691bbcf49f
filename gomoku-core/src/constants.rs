//! 规则常量定义

/// 标准棋盘边长
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// 允许的最小棋盘边长（至少要能摆下一条五连）
pub const MIN_BOARD_SIZE: usize = WIN_LENGTH;

/// 允许的最大棋盘边长
pub const MAX_BOARD_SIZE: usize = 32;

/// 获胜所需的连子数
pub const WIN_LENGTH: usize = 5;
