//! 緯度経度をメルカトル図法のタイルに射影し、ビット列に変換する。

mod tile;

pub use tile::{TileIndex, tile_bits};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(test)]
use proptest::strategy::Strategy;
#[cfg(any(test, feature = "random"))]
use rand::Rng;

use crate::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};

/// 緯度経度で表される座標
///
/// 範囲外の値もそのまま保持し、タイルに変換する際に [Coordinate::clamped] で有効範囲に収める。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// 緯度経度から座標を生成する
    ///
    /// # 引数
    /// * `latitude` - 緯度（度）
    /// * `longitude` - 経度（度）
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// 緯度経度を有効範囲に収めた座標を返す
    ///
    /// NaN は 0.0 として扱う。
    ///
    /// ```
    /// # use trajectory_hash::{Coordinate, MAX_LATITUDE};
    /// let c = Coordinate::new(90.0, 200.0).clamped();
    /// assert_eq!(c.latitude, MAX_LATITUDE);
    /// assert_eq!(c.longitude, 180.0);
    /// ```
    pub fn clamped(&self) -> Self {
        Coordinate {
            latitude: clamp_or_zero(self.latitude, MIN_LATITUDE, MAX_LATITUDE),
            longitude: clamp_or_zero(self.longitude, MIN_LONGITUDE, MAX_LONGITUDE),
        }
    }

    /// 有効範囲内からランダムな座標を生成する
    #[cfg(any(test, feature = "random"))]
    pub fn random() -> Self {
        Self::random_using(&mut rand::rng())
    }

    /// 乱数生成器を指定してランダムな座標を生成する
    #[cfg(any(test, feature = "random"))]
    pub fn random_using<R: Rng>(rng: &mut R) -> Self {
        Coordinate {
            latitude: rng.random_range(MIN_LATITUDE..=MAX_LATITUDE),
            longitude: rng.random_range(MIN_LONGITUDE..=MAX_LONGITUDE),
        }
    }

    /// 範囲外の値も含めた座標を生成する [Strategy]
    #[cfg(test)]
    pub fn arb() -> impl Strategy<Value = Self> {
        (-120.0f64..=120.0, -400.0f64..=400.0)
            .prop_map(|(latitude, longitude)| Coordinate::new(latitude, longitude))
    }
}

fn clamp_or_zero(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_inside_range() {
        let c = Coordinate::new(35.716701, 139.759556);
        assert_eq!(c.clamped(), c);
    }

    #[test]
    fn test_clamped_outside_range() {
        let c = Coordinate::new(-90.0, -181.5).clamped();
        assert_eq!(c.latitude, MIN_LATITUDE);
        assert_eq!(c.longitude, MIN_LONGITUDE);

        let c = Coordinate::new(f64::INFINITY, f64::NEG_INFINITY).clamped();
        assert_eq!(c.latitude, MAX_LATITUDE);
        assert_eq!(c.longitude, MIN_LONGITUDE);
    }

    #[test]
    fn test_clamped_nan() {
        let c = Coordinate::new(f64::NAN, f64::NAN).clamped();
        assert_eq!(c, Coordinate::new(0.0, 0.0));
    }

    #[test]
    fn test_random_within_bounds() {
        for _ in 0..1000 {
            let c = Coordinate::random();
            assert!((MIN_LATITUDE..=MAX_LATITUDE).contains(&c.latitude));
            assert!((MIN_LONGITUDE..=MAX_LONGITUDE).contains(&c.longitude));
        }
    }
}
