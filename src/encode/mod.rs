//! 座標と時刻から [TrajectoryHash] を求める。
//!
//! 空間・時間それぞれをビット列にし、長さを揃えて混ぜ合わせ、3bitずつ8進数に変換する。
//! どの関数も状態を持たず、同じ入力には常に同じハッシュを返す。

mod params;

#[cfg(test)]
mod tests;

pub use params::EncodeParams;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    base8,
    bit_seq::align,
    error::Error,
    hash::TrajectoryHash,
    interleave::interleave,
    spatial::{Coordinate, tile_bits},
    temporal::{TimeWindow, bucket_bits, bucket_width},
};

/// 軌跡を構成する1点（時刻と位置）
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrajectoryPoint {
    /// UNIX時間（秒）
    pub time: i64,
    pub coordinate: Coordinate,
}

impl TrajectoryPoint {
    pub fn new(time: i64, latitude: f64, longitude: f64) -> Self {
        TrajectoryPoint {
            time,
            coordinate: Coordinate::new(latitude, longitude),
        }
    }
}

/// パラメータと時間窓を検証済みの状態で保持し、繰り返し符号化する
///
/// 内部状態を持たないため、スレッド間で共有して並行に呼び出せる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    params: EncodeParams,
    window: TimeWindow,
    time_width: u8,
}

impl Encoder {
    /// パラメータと時間窓を検証して [Encoder] を構築する
    ///
    /// ```
    /// # use trajectory_hash::{Coordinate, EncodeParams, Encoder, TimeWindow};
    /// let encoder = Encoder::new(EncodeParams::default(), TimeWindow::new(0, 86_400)).unwrap();
    /// let hash = encoder.encode(0, &Coordinate::new(0.0, 0.0));
    /// assert_eq!(hash.as_str(), "00000000000000006000000000000000");
    /// ```
    pub fn new(params: EncodeParams, window: TimeWindow) -> Result<Self, Error> {
        params.validate()?;
        let time_width = bucket_width(window.span())?;

        Ok(Encoder {
            params,
            window,
            time_width,
        })
    }

    pub fn params(&self) -> &EncodeParams {
        &self.params
    }

    pub fn window(&self) -> &TimeWindow {
        &self.window
    }

    /// 生成されるハッシュの文字数 L = max(θ_l, M)
    pub fn hash_len(&self) -> usize {
        self.params.theta_l.max(self.time_width) as usize
    }

    /// 1点を符号化する
    pub fn encode(&self, time: i64, coordinate: &Coordinate) -> TrajectoryHash {
        let EncodeParams {
            theta_t,
            theta_l,
            layout,
        } = self.params;

        let (lon, lat) = tile_bits(coordinate, theta_l);
        let time_seq = bucket_bits(time, &self.window, theta_t, self.time_width);

        let aligned = align(lon, lat, time_seq);
        let stream = interleave(&aligned, layout);
        let hash = TrajectoryHash::from_packed(base8::pack(&stream));

        trace!(
            geo_length = theta_l,
            time_length = self.time_width,
            bit_length = stream.len(),
            hash = %hash,
            "encoded trajectory point"
        );

        hash
    }

    /// 軌跡の各点を順に符号化する
    pub fn encode_all<I>(&self, points: I) -> impl Iterator<Item = TrajectoryHash>
    where
        I: IntoIterator<Item = TrajectoryPoint>,
    {
        points
            .into_iter()
            .map(move |point| self.encode(point.time, &point.coordinate))
    }
}

/// 時刻と座標から [TrajectoryHash] を求める
///
/// `theta_t` と `theta_l` は計算の前に検証される。既定値は
/// [`DEFAULT_TIME_GRANULARITY`](crate::DEFAULT_TIME_GRANULARITY) と
/// [`DEFAULT_ZOOM_LEVEL`](crate::DEFAULT_ZOOM_LEVEL)。
///
/// # エラー
/// - `theta_l >= 31` の場合 [`Error::InvalidZoomLevel`]
/// - `theta_t > 32` の場合 [`Error::InvalidTimeGranularity`]
/// - 時間窓が64bitで表せない場合 [`Error::UnsupportedTimeSpan`]
///
/// ```
/// # use trajectory_hash::encode;
/// let hash = encode(0, 0, 86_400, 0.0, 0.0, 23, 16).unwrap();
/// assert_eq!(hash.len(), 32);
/// assert_eq!(hash.to_string(), "00000000000000006000000000000000");
/// ```
pub fn encode(
    time: i64,
    time_start: i64,
    time_end: i64,
    latitude: f64,
    longitude: f64,
    theta_t: u8,
    theta_l: u8,
) -> Result<TrajectoryHash, Error> {
    let encoder = Encoder::new(
        EncodeParams::new(theta_t, theta_l),
        TimeWindow::new(time_start, time_end),
    )?;
    Ok(encoder.encode(time, &Coordinate::new(latitude, longitude)))
}
