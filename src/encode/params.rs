#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    constants::{
        DEFAULT_TIME_GRANULARITY, DEFAULT_ZOOM_LEVEL, MAX_TIME_GRANULARITY, MAX_ZOOM_LEVEL,
    },
    error::Error,
    interleave::Layout,
};

/// 符号化の粒度と並べ方
///
/// 比較するハッシュはすべて同じパラメータで作ること。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncodeParams {
    /// 時間粒度 θ_t（0..=32）
    pub theta_t: u8,
    /// 空間のズームレベル θ_l（0..31）
    pub theta_l: u8,
    pub layout: Layout,
}

impl Default for EncodeParams {
    fn default() -> Self {
        EncodeParams {
            theta_t: DEFAULT_TIME_GRANULARITY,
            theta_l: DEFAULT_ZOOM_LEVEL,
            layout: Layout::default(),
        }
    }
}

impl EncodeParams {
    pub fn new(theta_t: u8, theta_l: u8) -> Self {
        EncodeParams {
            theta_t,
            theta_l,
            layout: Layout::default(),
        }
    }

    pub fn with_layout(self, layout: Layout) -> Self {
        EncodeParams { layout, ..self }
    }

    /// 粒度が範囲内かを検証する
    ///
    /// # エラー
    /// - `theta_l` が31以上の場合、[`Error::InvalidZoomLevel`] を返します。
    /// - `theta_t` が32を超える場合、[`Error::InvalidTimeGranularity`] を返します。
    ///
    /// ```
    /// # use trajectory_hash::{EncodeParams, Error};
    /// assert!(EncodeParams::default().validate().is_ok());
    /// assert_eq!(
    ///     EncodeParams::new(23, 31).validate(),
    ///     Err(Error::InvalidZoomLevel { theta_l: 31 })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), Error> {
        if self.theta_l >= MAX_ZOOM_LEVEL {
            debug!(theta_l = self.theta_l, "zoom level out of range");
            return Err(Error::InvalidZoomLevel {
                theta_l: self.theta_l,
            });
        }
        if self.theta_t > MAX_TIME_GRANULARITY {
            debug!(theta_t = self.theta_t, "time granularity out of range");
            return Err(Error::InvalidTimeGranularity {
                theta_t: self.theta_t,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = EncodeParams::default();
        assert_eq!(params.theta_t, 23);
        assert_eq!(params.theta_l, 16);
        assert_eq!(params.layout, Layout::Interleaved);
    }

    #[test]
    fn test_validate_limits() {
        assert!(EncodeParams::new(0, 0).validate().is_ok());
        assert!(EncodeParams::new(32, 30).validate().is_ok());

        assert_eq!(
            EncodeParams::new(23, 31).validate(),
            Err(Error::InvalidZoomLevel { theta_l: 31 })
        );
        assert_eq!(
            EncodeParams::new(33, 16).validate(),
            Err(Error::InvalidTimeGranularity { theta_t: 33 })
        );
    }

    #[test]
    fn test_zoom_level_checked_first() {
        assert_eq!(
            EncodeParams::new(40, 40).validate(),
            Err(Error::InvalidZoomLevel { theta_l: 40 })
        );
    }

    #[test]
    fn test_with_layout() {
        let params = EncodeParams::new(27, 20).with_layout(Layout::Separated);
        assert_eq!(params.theta_t, 27);
        assert_eq!(params.theta_l, 20);
        assert_eq!(params.layout, Layout::Separated);
    }
}
