//! 符号化の結果である8進数文字列を表す型。

mod bytes;
mod parse;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 時空間を混ぜ合わせた8進数のハッシュ文字列
///
/// 1文字が3bitを表し、長さは整列後のビット列の長さ L に等しい。
/// 前方一致の長さが、時空間上の近さに対応する。
///
/// この型は `PartialOrd` / `Ord` を実装していますが、これは主に`BTreeSet` や `BTreeMap` などの順序付きコレクションでの格納・探索用であり、実際の時空間的な「大小」を意味するものではない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct TrajectoryHash(String);

impl TrajectoryHash {
    /// 8進数文字列であることが分かっている値から生成する
    pub(crate) fn from_packed(digits: String) -> Self {
        debug_assert!(digits.chars().all(|c| c.is_digit(8)));
        TrajectoryHash(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 文字数（= L）を返す
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 先頭から一致している文字数を返す
    ///
    /// ```
    /// # use trajectory_hash::TrajectoryHash;
    /// let a: TrajectoryHash = "01234".parse().unwrap();
    /// let b: TrajectoryHash = "01277".parse().unwrap();
    /// assert_eq!(a.common_prefix_len(&b), 3);
    /// ```
    pub fn common_prefix_len(&self, other: &TrajectoryHash) -> usize {
        self.0
            .bytes()
            .zip(other.0.bytes())
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// 先頭 `len` 文字だけを残した粗いハッシュを返す
    ///
    /// `len` が長さを超える場合はそのまま返す。
    pub fn coarsen(&self, len: usize) -> TrajectoryHash {
        let len = len.min(self.len());
        TrajectoryHash(self.0[..len].to_string())
    }
}

impl fmt::Display for TrajectoryHash {
    /// ハッシュをそのまま8進数文字列として表示する。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TrajectoryHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<TrajectoryHash> for String {
    fn from(hash: TrajectoryHash) -> Self {
        hash.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash(s: &str) -> TrajectoryHash {
        s.parse().unwrap()
    }

    #[test]
    fn test_common_prefix_len() {
        let a = hash("00000000000000006000000000000000");
        let b = hash("00000000000000006444444444444444");

        assert_eq!(a.common_prefix_len(&b), 17);
        assert_eq!(b.common_prefix_len(&a), 17);
        assert_eq!(a.common_prefix_len(&a), a.len());
        assert_eq!(a.common_prefix_len(&hash("7")), 0);
    }

    #[test]
    fn test_common_prefix_len_different_lengths() {
        let long = hash("0123456701234567");
        let short = hash("01234567");
        assert_eq!(long.common_prefix_len(&short), 8);
    }

    #[test]
    fn test_coarsen() {
        let h = hash("01234567");
        assert_eq!(h.coarsen(3), hash("012"));
        assert_eq!(h.coarsen(0), hash(""));
        assert_eq!(h.coarsen(100), h);
    }

    #[test]
    fn test_display() {
        let h = hash("765");
        assert_eq!(h.to_string(), "765");
        assert_eq!(h.as_str(), "765");
        assert_eq!(String::from(h), "765");
    }
}
