//! 固定幅の符号なし整数として扱うビット列。
//!
//! 各段（空間・時間・整列）はすべて [BitSeq] を受け取り、新しい [BitSeq] を返す。

mod align;
mod format;
mod stream;

pub use align::{Aligned, align};
pub use stream::BitStream;

/// 上位ビットから順に並んだ、最大64bitのビット列
///
/// `width` より上位のビットは常に0に保たれる。
///
/// ```
/// # use trajectory_hash::BitSeq;
/// let seq = BitSeq::new(0b1011, 3);
/// assert_eq!(seq.value(), 0b011);
/// assert_eq!(seq.to_string(), "011");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitSeq {
    value: u64,
    width: u8,
}

impl BitSeq {
    /// 扱える最大のビット幅
    pub const MAX_WIDTH: u8 = 64;

    /// `value` の下位 `width` bitからビット列を作る
    ///
    /// `width` が64を超える場合は64として扱う。
    pub fn new(value: u64, width: u8) -> Self {
        let width = width.min(Self::MAX_WIDTH);
        BitSeq {
            value: value & Self::mask(width),
            width,
        }
    }

    /// 全ビットが0のビット列
    pub fn zero(width: u8) -> Self {
        Self::new(0, width)
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    /// 上位から数えて `index` 番目のビットを返す
    ///
    /// `index` が幅を超える場合は `None`。
    pub fn bit(&self, index: u8) -> Option<bool> {
        if index >= self.width {
            return None;
        }
        let shift = self.width - 1 - index;
        Some((self.value >> shift) & 1 == 1)
    }

    /// 上位ビットから順に走査する
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.width).rev().map(move |shift| (self.value >> shift) & 1 == 1)
    }

    /// 幅を変更した新しいビット列を返す
    ///
    /// 広げる場合は上位に0を補い、狭める場合は上位ビットから捨てて下位ビットを残す。
    ///
    /// ```
    /// # use trajectory_hash::BitSeq;
    /// let seq = BitSeq::new(0b1101, 4);
    /// assert_eq!(seq.resize(6).to_string(), "001101");
    /// assert_eq!(seq.resize(2).to_string(), "01");
    /// ```
    pub fn resize(&self, width: u8) -> Self {
        Self::new(self.value, width)
    }

    fn mask(width: u8) -> u64 {
        if width >= Self::MAX_WIDTH {
            u64::MAX
        } else {
            (1u64 << width) - 1
        }
    }
}
