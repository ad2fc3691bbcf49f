//! 人机对弈主循环
//!
//! 只负责轮次交替、输入和输出，规则与 AI 全部交给 [`GameSession`]。

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use gomoku_ai::GameSession;
use gomoku_core::{GomokuError, Position, Stone};
use tracing::{info, warn};

use crate::render::render_board;
use crate::settings::GameSettings;

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// 某方五连获胜
    Winner(Stone),
    /// 棋盘下满
    Draw,
    /// 玩家退出
    Quit,
}

/// 控制台对局
pub struct ConsoleGame<R, W> {
    session: GameSession,
    human: Stone,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    /// 按设置创建对局
    pub fn new(settings: &GameSettings, input: R, output: W) -> Result<Self> {
        anyhow::ensure!(!settings.human_stone.is_empty(), "玩家执子颜色不能为空");
        let session = GameSession::new(settings.board_size, settings.ai_config())
            .context("无法创建棋盘")?;
        Ok(Self {
            session,
            human: settings.human_stone,
            input,
            output,
        })
    }

    /// 当前会话
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// 运行一局，黑方先手
    pub fn run(&mut self) -> Result<GameOutcome> {
        let ai = self.human.opponent();
        let mut current = Stone::Black;

        loop {
            write!(self.output, "{}", render_board(self.session.board()))?;

            let pos = if current == self.human {
                match self.read_human_move()? {
                    Some(pos) => pos,
                    None => {
                        writeln!(self.output, "已退出对局")?;
                        return Ok(GameOutcome::Quit);
                    }
                }
            } else {
                let mv = self.session.choose_move(ai, self.human)?;
                anyhow::ensure!(
                    self.session.place_stone(mv.position, ai)?,
                    "AI 选择了已占用的位置 {}",
                    mv.position
                );
                writeln!(self.output, "电脑落子: {} {}", mv.row(), mv.col())?;
                mv.position
            };

            if self.session.is_winning_move(pos, current)? {
                write!(self.output, "{}", render_board(self.session.board()))?;
                if current == self.human {
                    writeln!(self.output, "你赢了！")?;
                } else {
                    writeln!(self.output, "电脑赢了！")?;
                }
                info!("{} 获胜", current.display_name());
                return Ok(GameOutcome::Winner(current));
            }

            if self.session.is_full() {
                write!(self.output, "{}", render_board(self.session.board()))?;
                writeln!(self.output, "平局！")?;
                info!("棋盘已满，平局");
                return Ok(GameOutcome::Draw);
            }

            current = current.opponent();
        }
    }

    /// 读取并落下玩家的一手，输入结束或输入 `q` 时返回 `None`
    fn read_human_move(&mut self) -> Result<Option<Position>> {
        loop {
            write!(self.output, "你的回合 (格式: 行 列，q 退出)：")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") {
                return Ok(None);
            }

            let Some(pos) = parse_position(line) else {
                warn!("无法解析输入: {:?}", line);
                writeln!(self.output, "输入格式错误，请输入两个数字，例如: 7 7")?;
                continue;
            };

            match self.session.place_stone(pos, self.human) {
                Ok(true) => return Ok(Some(pos)),
                Ok(false) => {
                    writeln!(self.output, "该位置不可用，请重新输入！")?;
                }
                Err(GomokuError::InvalidCoordinate { size, .. }) => {
                    writeln!(self.output, "坐标超出棋盘，范围为 0..{}", size - 1)?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// 解析 "行 列" 形式的输入
pub fn parse_position(line: &str) -> Option<Position> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Position::new(row, col))
}
