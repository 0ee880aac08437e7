//! 時間窓を基準に時刻を周期に区切り、その番号をビット列に変換する。

mod bucket;

pub use bucket::{bucket_index, bucket_width, time_bits};
pub(crate) use bucket::bucket_bits;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 時刻を区切る基準となる時間窓
///
/// 開始時刻と終了時刻（UNIX時間、秒）を保持する。start <= end が保証される。
///
/// 生成は [TimeWindow::new] からのみ行える。
///
/// ```compile_fail
/// # use trajectory_hash::TimeWindow;
/// let window = TimeWindow { start: 10, end: 0 };
/// ```
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "WindowBounds", into = "WindowBounds")
)]
pub struct TimeWindow {
    start: i64,
    end: i64,
}

/// シリアライズ時の表現。読み込み時も [TimeWindow::new] を通す。
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct WindowBounds {
    start: i64,
    end: i64,
}

#[cfg(feature = "serde")]
impl From<WindowBounds> for TimeWindow {
    fn from(bounds: WindowBounds) -> Self {
        TimeWindow::new(bounds.start, bounds.end)
    }
}

#[cfg(feature = "serde")]
impl From<TimeWindow> for WindowBounds {
    fn from(window: TimeWindow) -> Self {
        WindowBounds {
            start: window.start,
            end: window.end,
        }
    }
}

impl TimeWindow {
    /// 新しい時間窓を作成
    ///
    /// start <= end が保証される（逆の場合は自動的に入れ替え）
    pub const fn new(start: i64, end: i64) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// 開始時刻（含む）
    pub fn start(&self) -> i64 {
        self.start
    }

    /// 終了時刻（含む）
    pub fn end(&self) -> i64 {
        self.end
    }

    /// 時間窓の長さ（end - start）を返す
    ///
    /// i64の全範囲でも溢れないようにu128で返す。
    pub fn span(&self) -> u128 {
        (self.end as i128 - self.start as i128) as u128
    }

    /// 指定した時刻が時間窓に含まれるかどうかを返す
    pub fn contains(&self, t: i64) -> bool {
        self.start <= t && t <= self.end
    }
}
