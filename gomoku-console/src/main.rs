use std::io;

use anyhow::Result;
use gomoku_console::{ConsoleGame, GameOutcome, GameSettings};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let settings = GameSettings::load();

    // 初始化日志（输出到 stderr，不干扰棋盘显示）
    let level = settings.log_level.as_str();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("gomoku={}", level).parse()?)
                .add_directive(format!("gomoku_ai={}", level).parse()?)
                .add_directive(format!("gomoku_console={}", level).parse()?),
        )
        .init();

    // 首次运行时写出默认设置，便于手动修改
    if GameSettings::settings_path().is_some_and(|path| !path.exists()) {
        if let Err(e) = settings.save() {
            warn!("无法保存默认设置: {:#}", e);
        }
    }

    info!(
        "五子棋启动: {}x{} 棋盘，玩家执{}",
        settings.board_size,
        settings.board_size,
        settings.human_stone.display_name()
    );

    let stdin = io::stdin();
    let mut game = ConsoleGame::new(&settings, stdin.lock(), io::stdout())?;
    let outcome = game.run()?;

    if outcome != GameOutcome::Quit {
        info!("对局结束: {:?}", outcome);
    }
    Ok(())
}
