use std::f64::consts::PI;

use crate::{bit_seq::BitSeq, constants::MAX_ZOOM_LEVEL, spatial::Coordinate};

/// ズームレベル `z` におけるタイルの位置
///
/// `x` は東西方向（経度）、`y` は南北方向（緯度、北が0）のインデックス。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileIndex {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    /// 座標を含むタイルを求める
    ///
    /// 範囲外の座標は先に有効範囲へ収める。`z` は31未満であること。
    ///
    /// ```
    /// # use trajectory_hash::Coordinate;
    /// let tile = Coordinate::new(35.716701, 139.759556).to_tile(20);
    /// assert_eq!((tile.x, tile.y), (931367, 412778));
    /// ```
    pub fn to_tile(&self, z: u8) -> TileIndex {
        debug_assert!(
            z < MAX_ZOOM_LEVEL,
            "zoom level {z} must be less than {MAX_ZOOM_LEVEL}"
        );

        let c = self.clamped();

        // ---- 経度 lon -> x ----
        let fx = (c.longitude + 180.0) / 360.0;

        // ---- 緯度 lat -> y (球面メルカトル) ----
        let sin_lat = (c.latitude * PI / 180.0).sin();
        let fy = 0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI);

        let n = (1u64 << z) as f64;

        //境界上の浮動小数点誤差でグリッド外に出ないようにする
        let x = (fx * n).floor().clamp(0.0, n - 1.0) as u32;
        let y = (fy * n).floor().clamp(0.0, n - 1.0) as u32;

        TileIndex { z, x, y }
    }
}

/// 座標を経度方向と緯度方向の2本のビット列に変換する
///
/// どちらも幅は `z`。
pub fn tile_bits(coordinate: &Coordinate, z: u8) -> (BitSeq, BitSeq) {
    let tile = coordinate.to_tile(z);
    (
        BitSeq::new(tile.x as u64, z),
        BitSeq::new(tile.y as u64, z),
    )
}
