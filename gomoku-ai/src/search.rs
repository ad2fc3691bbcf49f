//! 选点引擎
//!
//! 逐个试探所有空格：自己落在这里能成什么棋形，对手落在这里能成什么棋形，
//! 合成优先级后取最高分，同分点中随机挑一个。

use gomoku_core::{Board, GomokuError, LineScanner, Move, Position, Result, Stone, WinRule};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::evaluate::{Evaluator, Score};

/// AI 配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    /// 同分随机选点的种子，为空时使用系统熵
    pub seed: Option<u64>,
    /// 胜负规则
    pub win_rule: WinRule,
}

impl AiConfig {
    /// 固定种子的配置
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

/// 选点器
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveSelector {
    evaluator: Evaluator,
}

impl MoveSelector {
    /// 创建选点器
    pub fn new(evaluator: Evaluator) -> Self {
        Self { evaluator }
    }

    /// 评估器
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// 为 `mover` 选择落子，同分点由 `rng` 均匀挑选
    ///
    /// 返回时棋盘与调用前完全一致。
    pub fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        mover: Stone,
        opponent: Stone,
        rng: &mut R,
    ) -> Result<Move> {
        let (score, candidates) = self.best_moves(board, mover, opponent)?;
        let position = *candidates.choose(rng).ok_or(GomokuError::NoLegalMove)?;

        debug!(
            "AI 选点 {} 分数 {} (同分候选 {} 个)",
            position,
            score,
            candidates.len()
        );
        Ok(Move::new(position))
    }

    /// 扫描全部空格，返回最高分及所有达到最高分的位置（行优先顺序）
    pub fn best_moves(
        &self,
        board: &mut Board,
        mover: Stone,
        opponent: Stone,
    ) -> Result<(Score, Vec<Position>)> {
        if mover.is_empty() || opponent.is_empty() {
            return Err(GomokuError::EmptyStone);
        }

        let empties: Vec<Position> = board.empty_positions().collect();
        if empties.is_empty() {
            return Err(GomokuError::NoLegalMove);
        }

        let mut best_score = Score::Base;
        let mut best_moves = Vec::new();

        for pos in empties {
            let score = self.score_cell(board, pos, mover, opponent)?;
            if best_moves.is_empty() || score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(pos);
            } else if score == best_score {
                best_moves.push(pos);
            }
        }

        Ok((best_score, best_moves))
    }

    /// 合成单个空格的优先级
    ///
    /// 对手能在此五连时必须挡，一律按挡五计；对手能成活四时，
    /// 挡点按冲四计，与自己的棋形比较取高者。
    pub fn score_cell(
        &self,
        board: &mut Board,
        pos: Position,
        mover: Stone,
        opponent: Stone,
    ) -> Result<Score> {
        let own = {
            let probe = board.probe(pos, mover)?;
            self.evaluator.evaluate(&probe, pos, mover)?
        };
        let opp = {
            let probe = board.probe(pos, opponent)?;
            self.evaluator.evaluate(&probe, pos, opponent)?
        };

        let score = if opp == Score::Five {
            Score::BlockFive
        } else if opp >= Score::OpenFour {
            own.max(Score::ClosedFour)
        } else {
            own
        };

        trace!("试探 {}: 己方 {:?} 对方 {:?} -> {:?}", pos, own, opp, score);
        Ok(score)
    }
}

/// AI 引擎
///
/// 持有可播种的随机源，相同种子在相同局面下给出相同落子。
pub struct AiEngine {
    selector: MoveSelector,
    rng: ChaCha8Rng,
    cells_scanned: usize,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let selector = MoveSelector::new(Evaluator::new(LineScanner::new(config.win_rule)));
        Self {
            selector,
            rng,
            cells_scanned: 0,
        }
    }

    /// 固定种子创建
    pub fn with_seed(seed: u64) -> Self {
        Self::new(AiConfig::with_seed(seed))
    }

    /// 选点器
    pub fn selector(&self) -> &MoveSelector {
        &self.selector
    }

    /// 搜索落子
    pub fn search(&mut self, board: &mut Board, mover: Stone, opponent: Stone) -> Result<Move> {
        self.cells_scanned = board.empty_positions().count();
        self.selector
            .choose_move(board, mover, opponent, &mut self.rng)
    }

    /// 上一次搜索扫描的空格数
    pub fn cells_scanned(&self) -> usize {
        self.cells_scanned
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, stones: &[(usize, usize)], stone: Stone) {
        for &(row, col) in stones {
            board.place(Position::new(row, col), stone).unwrap();
        }
    }

    #[test]
    fn test_blocks_open_four() {
        let mut board = Board::standard();
        place_all(&mut board, &[(7, 5), (7, 6), (7, 7), (7, 8)], Stone::Black);

        let (score, candidates) = MoveSelector::default()
            .best_moves(&mut board, Stone::White, Stone::Black)
            .unwrap();
        assert_eq!(score, Score::BlockFive);
        assert_eq!(candidates, vec![Position::new(7, 4), Position::new(7, 9)]);

        for seed in 0..8 {
            let mut engine = AiEngine::with_seed(seed);
            let mv = engine.search(&mut board, Stone::White, Stone::Black).unwrap();
            assert!(
                mv.position == Position::new(7, 4) || mv.position == Position::new(7, 9),
                "应当挡住活四: {}",
                mv
            );
        }
    }

    #[test]
    fn test_completes_own_five() {
        let mut board = Board::standard();
        place_all(&mut board, &[(3, 3), (3, 4), (3, 5), (3, 6)], Stone::White);

        let (score, candidates) = MoveSelector::default()
            .best_moves(&mut board, Stone::White, Stone::Black)
            .unwrap();
        assert_eq!(score, Score::Five);
        assert_eq!(candidates, vec![Position::new(3, 2), Position::new(3, 7)]);

        let mut engine = AiEngine::with_seed(42);
        let mv = engine.search(&mut board, Stone::White, Stone::Black).unwrap();
        assert!(mv.position == Position::new(3, 2) || mv.position == Position::new(3, 7));
    }

    #[test]
    fn test_own_five_beats_block() {
        let mut board = Board::standard();
        // 双方都有四，己方直接五连
        place_all(&mut board, &[(3, 3), (3, 4), (3, 5), (3, 6)], Stone::White);
        place_all(&mut board, &[(10, 3), (10, 4), (10, 5), (10, 6)], Stone::Black);

        let (score, candidates) = MoveSelector::default()
            .best_moves(&mut board, Stone::White, Stone::Black)
            .unwrap();
        assert_eq!(score, Score::Five);
        assert!(candidates.iter().all(|pos| pos.row == 3));
    }

    #[test]
    fn test_open_four_threat_weighed_against_own_shape() {
        let mut board = Board::standard();
        // 对手活三：挡点处对手可成活四，按冲四计
        place_all(&mut board, &[(7, 6), (7, 7), (7, 8)], Stone::Black);
        let selector = MoveSelector::default();

        assert_eq!(
            selector.score_cell(&mut board, Position::new(7, 5), Stone::White, Stone::Black),
            Ok(Score::ClosedFour)
        );
        // 自己有活三可以成活四时，自己的棋形更高
        place_all(&mut board, &[(2, 2), (2, 3), (2, 4)], Stone::White);
        assert_eq!(
            selector.score_cell(&mut board, Position::new(2, 5), Stone::White, Stone::Black),
            Ok(Score::OpenFour)
        );
    }

    #[test]
    fn test_shared_five_cell_scores_block_five() {
        let mut board = Board::standard();
        // 白方横四，左端被黑方堵住，只剩 (3, 7)
        place_all(&mut board, &[(3, 3), (3, 4), (3, 5), (3, 6)], Stone::White);
        board.place(Position::new(3, 2), Stone::Black).unwrap();
        // 黑方竖四，两端 (3, 7) 和 (8, 7) 都空
        place_all(&mut board, &[(4, 7), (5, 7), (6, 7), (7, 7)], Stone::Black);
        let selector = MoveSelector::default();

        assert_eq!(
            selector.score_cell(&mut board, Position::new(3, 7), Stone::White, Stone::Black),
            Ok(Score::BlockFive)
        );

        let (score, candidates) = selector
            .best_moves(&mut board, Stone::White, Stone::Black)
            .unwrap();
        assert_eq!(score, Score::BlockFive);
        assert_eq!(candidates, vec![Position::new(3, 7), Position::new(8, 7)]);
    }

    #[test]
    fn test_threat_below_open_four_keeps_own_score() {
        let selector = MoveSelector::default();

        // 对手在此可成冲四，自己只有单子
        let mut board = Board::standard();
        place_all(&mut board, &[(7, 6), (7, 7), (7, 8)], Stone::Black);
        board.place(Position::new(7, 9), Stone::White).unwrap();
        assert_eq!(
            selector.score_cell(&mut board, Position::new(7, 5), Stone::White, Stone::Black),
            Ok(Score::Base)
        );

        // 对手在此可成活三，自己可成活二
        let mut board = Board::standard();
        place_all(&mut board, &[(5, 6), (5, 7)], Stone::Black);
        board.place(Position::new(6, 4), Stone::White).unwrap();
        assert_eq!(
            selector.score_cell(&mut board, Position::new(5, 5), Stone::White, Stone::Black),
            Ok(Score::OpenTwo)
        );
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = Board::standard();
        place_all(&mut board, &[(7, 7), (8, 8), (6, 9)], Stone::Black);
        place_all(&mut board, &[(7, 8), (9, 9)], Stone::White);
        let before = board.clone();

        let mut engine = AiEngine::with_seed(7);
        engine.search(&mut board, Stone::White, Stone::Black).unwrap();

        assert_eq!(board, before);
        assert_eq!(engine.cells_scanned(), 220);
    }

    #[test]
    fn test_never_returns_occupied_cell() {
        let mut board = Board::new(7).unwrap();
        let mut engine = AiEngine::with_seed(2024);
        let mut mover = Stone::Black;

        while !board.is_full() {
            let mv = engine.search(&mut board, mover, mover.opponent()).unwrap();
            assert_eq!(board.get(mv.position), Ok(Stone::Empty));
            assert!(board.place(mv.position, mover).unwrap());
            mover = mover.opponent();
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let play = |seed: u64| {
            let mut board = Board::standard();
            let mut engine = AiEngine::with_seed(seed);
            let mut mover = Stone::Black;
            let mut moves = Vec::new();
            for _ in 0..10 {
                let mv = engine.search(&mut board, mover, mover.opponent()).unwrap();
                board.place(mv.position, mover).unwrap();
                moves.push(mv);
                mover = mover.opponent();
            }
            moves
        };

        assert_eq!(play(99), play(99));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new(5).unwrap();
        let cells: Vec<_> = board.empty_positions().collect();
        for (i, pos) in cells.into_iter().enumerate() {
            let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
            board.place(pos, stone).unwrap();
        }

        let mut engine = AiEngine::with_seed(1);
        assert_eq!(
            engine.search(&mut board, Stone::White, Stone::Black),
            Err(GomokuError::NoLegalMove)
        );
    }

    #[test]
    fn test_empty_stone_rejected() {
        let mut board = Board::standard();
        let mut engine = AiEngine::with_seed(1);
        assert_eq!(
            engine.search(&mut board, Stone::Empty, Stone::Black),
            Err(GomokuError::EmptyStone)
        );
    }

    #[test]
    fn test_config_serde() {
        let config = AiConfig {
            seed: Some(5),
            win_rule: WinRule::Exact,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
