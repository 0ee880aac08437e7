use crate::{
    bit_seq::BitSeq,
    constants::{BUCKET_WIDTHS, MAX_TIME_GRANULARITY},
    error::Error,
    temporal::TimeWindow,
};

/// 時間窓の長さから、時間ビット列の幅 M を決める
///
/// 長さを表すのに必要なビット数以上となる [BUCKET_WIDTHS] の最小値を返す。
/// 64bitを超える長さは扱えない。
///
/// ```
/// # use trajectory_hash::{Error, bucket_width};
/// assert_eq!(bucket_width(255), Ok(8));
/// assert_eq!(bucket_width(256), Ok(16));
/// assert_eq!(
///     bucket_width(1 << 64),
///     Err(Error::UnsupportedTimeSpan { bit_length: 65 })
/// );
/// ```
pub fn bucket_width(span: u128) -> Result<u8, Error> {
    let bit_length = u128::BITS - span.leading_zeros();

    BUCKET_WIDTHS
        .iter()
        .copied()
        .find(|&width| bit_length <= width as u32)
        .ok_or(Error::UnsupportedTimeSpan { bit_length })
}

/// 時刻が属する周期の番号を返す
///
/// 開始時刻からの差を32bitに切り詰め、上位 `theta_t` bitだけを残す。
/// 同じ周期に属する時刻は常に同じ番号になる。
pub fn bucket_index(time: i64, start: i64, theta_t: u8) -> u64 {
    debug_assert!(theta_t <= MAX_TIME_GRANULARITY);

    //32bitを超える差は上位が捨てられる
    let delta = time.wrapping_sub(start) as u32;
    let shift = (MAX_TIME_GRANULARITY as u32).saturating_sub(theta_t as u32);

    (delta as u64) >> shift
}

/// 時刻を幅 M の時間ビット列に変換する
pub fn time_bits(time: i64, window: &TimeWindow, theta_t: u8) -> Result<BitSeq, Error> {
    let width = bucket_width(window.span())?;
    Ok(bucket_bits(time, window, theta_t, width))
}

/// 求め済みの幅 `width` で時間ビット列を作る
pub(crate) fn bucket_bits(time: i64, window: &TimeWindow, theta_t: u8, width: u8) -> BitSeq {
    BitSeq::new(bucket_index(time, window.start(), theta_t), width)
}
