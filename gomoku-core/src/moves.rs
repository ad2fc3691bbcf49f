//! 落子

use serde::{Deserialize, Serialize};

use crate::stone::Position;

/// AI 选出的落子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 落子位置
    pub position: Position,
}

impl Move {
    /// 创建新落子
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// 行
    pub fn row(&self) -> usize {
        self.position.row
    }

    /// 列
    pub fn col(&self) -> usize {
        self.position.col
    }
}

impl From<Position> for Move {
    fn from(position: Position) -> Self {
        Self::new(position)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.position)
    }
}
