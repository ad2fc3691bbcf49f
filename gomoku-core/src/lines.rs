//! 连线扫描与胜负判定
//!
//! 只沿经过查询点的四条轴线计数，不扫描整盘。
//! 假定查询点就是刚刚落下的那颗子。

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::WIN_LENGTH;
use crate::error::{GomokuError, Result};
use crate::stone::{Position, Stone};

/// 连线方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// 横向
    Horizontal,
    /// 纵向
    Vertical,
    /// 右下斜线 "\"
    Diagonal,
    /// 左下斜线 "/"
    AntiDiagonal,
}

impl Axis {
    /// 全部四个方向
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// 正方向的 (行, 列) 增量，反方向取负
    pub fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// 胜负规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WinRule {
    /// 自由规则：五连及长连都算胜
    #[default]
    Freestyle,
    /// 恰好五连才算胜，长连不算
    Exact,
}

impl WinRule {
    /// 该长度的连子是否获胜
    pub fn is_win(self, length: usize) -> bool {
        match self {
            WinRule::Freestyle => length >= WIN_LENGTH,
            WinRule::Exact => length == WIN_LENGTH,
        }
    }
}

/// 单一方向上经过某点的连子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// 连续同色子数（含起点）
    pub length: usize,
    /// 两端紧邻的空格数（0..=2），棋盘外不算
    pub open_ends: u8,
}

/// 连线扫描器
#[derive(Debug, Clone, Copy, Default)]
pub struct LineScanner {
    rule: WinRule,
}

impl LineScanner {
    /// 使用指定胜负规则创建
    pub fn new(rule: WinRule) -> Self {
        Self { rule }
    }

    /// 当前胜负规则
    pub fn rule(&self) -> WinRule {
        self.rule
    }

    /// 经过 `pos` 是否形成获胜连线
    pub fn is_winning_line(&self, board: &Board, pos: Position, stone: Stone) -> Result<bool> {
        for run in self.runs(board, pos, stone)? {
            if self.rule.is_win(run.length) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// 四个方向上的连子，顺序同 [`Axis::ALL`]
    pub fn runs(&self, board: &Board, pos: Position, stone: Stone) -> Result<[Run; 4]> {
        Ok([
            self.run(board, pos, stone, Axis::Horizontal)?,
            self.run(board, pos, stone, Axis::Vertical)?,
            self.run(board, pos, stone, Axis::Diagonal)?,
            self.run(board, pos, stone, Axis::AntiDiagonal)?,
        ])
    }

    /// 测量经过 `pos` 沿 `axis` 的连子长度与活端数
    pub fn run(&self, board: &Board, pos: Position, stone: Stone, axis: Axis) -> Result<Run> {
        if stone.is_empty() {
            return Err(GomokuError::EmptyStone);
        }
        // 先校验坐标
        board.get(pos)?;

        let (dr, dc) = axis.delta();
        let (forward, forward_end) = Self::walk(board, pos, stone, dr, dc);
        let (backward, backward_end) = Self::walk(board, pos, stone, -dr, -dc);

        let open_ends = [forward_end, backward_end]
            .into_iter()
            .flatten()
            .filter(|end| board.stone_at(*end).is_empty())
            .count() as u8;

        Ok(Run {
            length: 1 + forward + backward,
            open_ends,
        })
    }

    /// 单方向计数，返回同色子数和终止格（出界为 None）
    fn walk(
        board: &Board,
        pos: Position,
        stone: Stone,
        dr: isize,
        dc: isize,
    ) -> (usize, Option<Position>) {
        let mut count = 0;
        let mut current = pos.offset(dr, dc, board.size());
        while let Some(next) = current {
            if board.stone_at(next) != stone {
                break;
            }
            count += 1;
            current = next.offset(dr, dc, board.size());
        }
        (count, current)
    }
}
