//! 棋盘状态

use std::ops::Deref;

use crate::constants::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{GomokuError, Result};
use crate::stone::{Position, Stone};

/// 棋盘
///
/// N×N 网格，N 在创建时固定。所有坐标在访问数组前都会校验，
/// 越界一律返回 [`GomokuError::InvalidCoordinate`]。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// 索引为 row * size + col
    cells: Vec<Stone>,
}

impl Board {
    /// 创建指定边长的空棋盘
    pub fn new(size: usize) -> Result<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GomokuError::InvalidBoardSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self {
            size,
            cells: vec![Stone::Empty; size * size],
        })
    }

    /// 创建 15×15 标准棋盘
    pub fn standard() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![Stone::Empty; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
        }
    }

    /// 棋盘边长
    pub fn size(&self) -> usize {
        self.size
    }

    /// 位置是否在棋盘内
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index(&self, pos: Position) -> Result<usize> {
        if self.contains(pos) {
            Ok(pos.to_index(self.size))
        } else {
            Err(GomokuError::InvalidCoordinate {
                row: pos.row,
                col: pos.col,
                size: self.size,
            })
        }
    }

    /// 获取指定位置的棋子
    pub fn get(&self, pos: Position) -> Result<Stone> {
        let index = self.index(pos)?;
        Ok(self.cells[index])
    }

    /// 读取已确认在棋盘内的位置
    pub(crate) fn stone_at(&self, pos: Position) -> Stone {
        self.cells[pos.to_index(self.size)]
    }

    /// 落子或撤子
    ///
    /// 落非空棋子到已占用的格子返回 `Ok(false)`，棋盘不变。
    /// 写入 `Stone::Empty` 总是成功，用于撤回。
    pub fn place(&mut self, pos: Position, stone: Stone) -> Result<bool> {
        let index = self.index(pos)?;
        if !stone.is_empty() && !self.cells[index].is_empty() {
            return Ok(false);
        }
        self.cells[index] = stone;
        Ok(true)
    }

    /// 指定位置是否为空
    pub fn is_empty(&self, pos: Position) -> Result<bool> {
        Ok(self.get(pos)?.is_empty())
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|stone| !stone.is_empty())
    }

    /// 清空棋盘
    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
    }

    /// 已落子数
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|stone| !stone.is_empty()).count()
    }

    /// 按行优先顺序遍历所有空格
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, stone)| stone.is_empty())
            .map(move |(index, _)| Position::from_index(index, size))
    }

    /// 试探落子
    ///
    /// 返回的守卫可当作 `&Board` 读取，离开作用域时自动把该格写回空。
    pub fn probe(&mut self, pos: Position, stone: Stone) -> Result<Probe<'_>> {
        if stone.is_empty() {
            return Err(GomokuError::EmptyStone);
        }
        if !self.place(pos, stone)? {
            return Err(GomokuError::OccupiedCell {
                row: pos.row,
                col: pos.col,
            });
        }
        Ok(Probe { board: self, pos })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// 试探落子守卫
pub struct Probe<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl Probe<'_> {
    /// 试探的位置
    pub fn position(&self) -> Position {
        self.pos
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        let index = self.pos.to_index(self.board.size);
        self.board.cells[index] = Stone::Empty;
    }
}
