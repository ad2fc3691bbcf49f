//! 棋子与位置定义

use serde::{Deserialize, Serialize};

/// 棋盘格上的棋子
///
/// `Empty` 既表示"无子"，也用作撤回试探落子时写回的值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Stone {
    /// 空格
    #[default]
    Empty,
    /// 黑子（先手）
    Black,
    /// 白子（后手）
    White,
}

impl Stone {
    /// 是否为空格
    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }

    /// 获取对方颜色（空格的对方仍是空格）
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// 获取棋子显示字符
    pub fn display_char(self) -> char {
        match self {
            Stone::Black => '●',
            Stone::White => '○',
            Stone::Empty => '·',
        }
    }

    /// 中文名称
    pub fn display_name(self) -> &'static str {
        match self {
            Stone::Black => "黑方",
            Stone::White => "白方",
            Stone::Empty => "空",
        }
    }
}

/// 棋盘位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// 行
    pub row: usize,
    /// 列
    pub col: usize,
}

impl Position {
    /// 创建新位置（不检查边界，由棋盘负责校验）
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// 获取偏移后的位置，超出 `size`×`size` 的棋盘时返回 `None`
    pub fn offset(&self, dr: isize, dc: isize, size: usize) -> Option<Position> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row < size && col < size {
            Some(Position { row, col })
        } else {
            None
        }
    }

    /// 转换为数组索引
    pub fn to_index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// 从数组索引转换
    pub fn from_index(index: usize, size: usize) -> Self {
        Position {
            row: index / size,
            col: index % size,
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
