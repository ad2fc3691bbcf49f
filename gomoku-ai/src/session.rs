//! 对局会话
//!
//! 前端（控制台、图形界面、网络客户端）只通过这里的三个操作使用核心：
//! 落子、判胜、AI 选点。轮次交替和渲染由前端负责。

use gomoku_core::{Board, Move, Position, Result, Stone};
use tracing::info;

use crate::search::{AiConfig, AiEngine};

/// 对局会话
pub struct GameSession {
    board: Board,
    engine: AiEngine,
}

impl GameSession {
    /// 创建指定边长的对局
    pub fn new(size: usize, config: AiConfig) -> Result<Self> {
        Ok(Self {
            board: Board::new(size)?,
            engine: AiEngine::new(config),
        })
    }

    /// 15×15 标准对局
    pub fn standard(config: AiConfig) -> Self {
        Self {
            board: Board::standard(),
            engine: AiEngine::new(config),
        }
    }

    /// 当前棋盘（始终是真实局面，不会暴露试探状态）
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 落子，格子已占用时返回 `Ok(false)`
    pub fn place_stone(&mut self, pos: Position, stone: Stone) -> Result<bool> {
        self.board.place(pos, stone)
    }

    /// 刚落下的 `stone` 是否在 `pos` 形成胜局
    pub fn is_winning_move(&self, pos: Position, stone: Stone) -> Result<bool> {
        self.engine
            .selector()
            .evaluator()
            .scanner()
            .is_winning_line(&self.board, pos, stone)
    }

    /// AI 为 `mover` 选点，不落子
    pub fn choose_move(&mut self, mover: Stone, opponent: Stone) -> Result<Move> {
        self.engine.search(&mut self.board, mover, opponent)
    }

    /// 棋盘是否已满（和棋）
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// 重新开局
    pub fn reset(&mut self) {
        self.board.clear();
        info!("棋盘已清空，重新开局");
    }
}
