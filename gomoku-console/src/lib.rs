//! 五子棋控制台前端
//!
//! 包含:
//! - 设置持久化
//! - 文本棋盘渲染
//! - 人机对弈主循环

pub mod game;
pub mod render;
pub mod settings;

pub use game::{ConsoleGame, GameOutcome};
pub use render::render_board;
pub use settings::{GameSettings, LogLevel};
