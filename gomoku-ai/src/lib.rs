//! 五子棋规则 AI 引擎
//!
//! 包含:
//! - 棋形评估（活四、冲四、活三……）
//! - 全盘空位扫描选点，同分随机
//! - 可播种的 AI 引擎
//! - 对外的对局会话接口

mod evaluate;
mod search;
mod session;

pub use evaluate::{Evaluator, Score, ShapeCounts};
pub use search::{AiConfig, AiEngine, MoveSelector};
pub use session::GameSession;
