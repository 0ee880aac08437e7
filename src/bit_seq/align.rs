use crate::bit_seq::BitSeq;

/// 共通の長さに揃えられた3本のビット列
///
/// [align] からのみ生成でき、3本の幅は常に等しい。
///
/// ```compile_fail
/// # use trajectory_hash::{Aligned, BitSeq};
/// let aligned = Aligned {
///     longitude: BitSeq::new(1, 16),
///     latitude: BitSeq::new(1, 16),
///     time: BitSeq::new(1, 8),
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aligned {
    longitude: BitSeq,
    latitude: BitSeq,
    time: BitSeq,
}

impl Aligned {
    pub fn longitude(&self) -> BitSeq {
        self.longitude
    }

    pub fn latitude(&self) -> BitSeq {
        self.latitude
    }

    pub fn time(&self) -> BitSeq {
        self.time
    }

    /// 揃えた後の共通の長さ L
    pub fn len(&self) -> u8 {
        self.time.width()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 空間の2本と時間の1本を `max(θ_l, M)` の長さに揃える
///
/// 短い側は上位に0を補い、長い側は上位ビットを捨てる。経度と緯度は常に同じ長さで扱う。
///
/// ```
/// # use trajectory_hash::{BitSeq, align};
/// let aligned = align(BitSeq::new(0b11, 2), BitSeq::new(0b10, 2), BitSeq::new(0b1, 4));
/// assert_eq!(aligned.len(), 4);
/// assert_eq!(aligned.longitude().to_string(), "0011");
/// assert_eq!(aligned.time().to_string(), "0001");
/// ```
pub fn align(longitude: BitSeq, latitude: BitSeq, time: BitSeq) -> Aligned {
    debug_assert_eq!(
        longitude.width(),
        latitude.width(),
        "spatial bit sequences must share one width"
    );

    let len = longitude.width().max(time.width());

    Aligned {
        longitude: longitude.resize(len),
        latitude: latitude.resize(len),
        time: time.resize(len),
    }
}
