//! AI 自我对弈演示
//!
//! 运行方式:
//! ```bash
//! cargo run -p gomoku-ai --example self_play
//! ```

use gomoku_ai::{AiConfig, GameSession};
use gomoku_core::Stone;

fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== 五子棋 AI 自我对弈 ===\n");

    let mut session = GameSession::standard(AiConfig::with_seed(2024));
    let mut mover = Stone::Black;

    while !session.is_full() {
        let mv = session.choose_move(mover, mover.opponent())?;
        session.place_stone(mv.position, mover)?;
        println!("{} 落子: {} {}", mover.display_name(), mv.row(), mv.col());

        if session.is_winning_move(mv.position, mover)? {
            println!("\n{} 获胜！共 {} 手", mover.display_name(), session.board().stone_count());
            return Ok(());
        }
        mover = mover.opponent();
    }

    println!("\n平局！");
    Ok(())
}
