//! 棋形评估函数
//!
//! 评估只看经过候选点的四条线，不做全盘评估，也不向后推演。

use gomoku_core::{Board, LineScanner, Position, Result, Run, Stone};

/// 棋形分档
///
/// 枚举顺序即优先级顺序，`Ord` 直接用于排序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    /// 无任何棋形
    Base,
    /// 活二
    OpenTwo,
    /// 眠三
    ClosedThree,
    /// 活三
    OpenThree,
    /// 冲四（也是挡对手活四的分数）
    ClosedFour,
    /// 活四
    OpenFour,
    /// 挡住对手的五连
    BlockFive,
    /// 五连
    Five,
}

impl Score {
    /// 分值
    pub fn value(self) -> i32 {
        match self {
            Score::Five => 100_000,
            Score::BlockFive => 90_000,
            Score::OpenFour => 10_000,
            Score::ClosedFour => 9_000,
            Score::OpenThree => 1_000,
            Score::ClosedThree => 900,
            Score::OpenTwo => 100,
            Score::Base => 1,
        }
    }

    /// 按 (连子数, 活端数) 归类单一方向的棋形
    pub fn classify(run: Run) -> Option<Score> {
        match (run.length, run.open_ends) {
            (4, 2) => Some(Score::OpenFour),
            (4, 1) => Some(Score::ClosedFour),
            (3, 2) => Some(Score::OpenThree),
            (3, 1) => Some(Score::ClosedThree),
            (2, 2) => Some(Score::OpenTwo),
            _ => None,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Score::Five => "五连",
            Score::BlockFive => "挡五",
            Score::OpenFour => "活四",
            Score::ClosedFour => "冲四",
            Score::OpenThree => "活三",
            Score::ClosedThree => "眠三",
            Score::OpenTwo => "活二",
            Score::Base => "无",
        };
        write!(f, "{}({})", name, self.value())
    }
}

/// 单点各棋形出现的方向数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeCounts {
    /// 五连（含长连）
    pub five: u8,
    /// 活四
    pub open_four: u8,
    /// 冲四
    pub closed_four: u8,
    /// 活三
    pub open_three: u8,
    /// 眠三
    pub closed_three: u8,
    /// 活二
    pub open_two: u8,
}

impl ShapeCounts {
    fn record(&mut self, shape: Score) {
        match shape {
            Score::OpenFour => self.open_four += 1,
            Score::ClosedFour => self.closed_four += 1,
            Score::OpenThree => self.open_three += 1,
            Score::ClosedThree => self.closed_three += 1,
            Score::OpenTwo => self.open_two += 1,
            Score::Five | Score::BlockFive | Score::Base => {}
        }
    }

    /// 取最高一档，不累加
    pub fn best(&self) -> Score {
        if self.five > 0 {
            Score::Five
        } else if self.open_four > 0 {
            Score::OpenFour
        } else if self.closed_four > 0 {
            Score::ClosedFour
        } else if self.open_three > 0 {
            Score::OpenThree
        } else if self.closed_three > 0 {
            Score::ClosedThree
        } else if self.open_two > 0 {
            Score::OpenTwo
        } else {
            Score::Base
        }
    }
}

/// 评估器
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    scanner: LineScanner,
}

impl Evaluator {
    /// 使用指定连线扫描器创建
    pub fn new(scanner: LineScanner) -> Self {
        Self { scanner }
    }

    /// 连线扫描器
    pub fn scanner(&self) -> &LineScanner {
        &self.scanner
    }

    /// 评估 `stone` 落在 `pos` 形成的最高棋形
    ///
    /// 调用方需先把 `stone` 放到 `pos` 上。
    pub fn evaluate(&self, board: &Board, pos: Position, stone: Stone) -> Result<Score> {
        Ok(self.shape_counts(board, pos, stone)?.best())
    }

    /// 统计 `stone` 在 `pos` 上各方向形成的棋形
    ///
    /// 已经五连时直接返回，只记 `five`。
    pub fn shape_counts(&self, board: &Board, pos: Position, stone: Stone) -> Result<ShapeCounts> {
        let mut counts = ShapeCounts::default();

        if self.scanner.is_winning_line(board, pos, stone)? {
            counts.five = 1;
            return Ok(counts);
        }

        for run in self.scanner.runs(board, pos, stone)? {
            if let Some(shape) = Score::classify(run) {
                counts.record(shape);
            }
        }

        Ok(counts)
    }
}
