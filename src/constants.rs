/// 経度の最大値
pub const MAX_LONGITUDE: f64 = 180.0;

/// 経度の最小値
pub const MIN_LONGITUDE: f64 = -MAX_LONGITUDE;

/// 緯度の最大値
///
/// 球面メルカトル図法が有限の値をとる限界（`2 * atan(e^π) - π/2` を度に変換したもの）。
pub const MAX_LATITUDE: f64 = 85.05112877980659;

/// 緯度の最小値
pub const MIN_LATITUDE: f64 = -MAX_LATITUDE;

/// 本ライブラリで扱うことができるズームレベルの上限（この値自体は含まない）
//タイル番号をu32に収めるため31未満に固定
pub const MAX_ZOOM_LEVEL: u8 = 31;

/// 時間粒度 θ_t の上限（この値自体を含む）
///
/// 時刻差は32bitで扱うため、32より大きい粒度には意味がない。
pub const MAX_TIME_GRANULARITY: u8 = 32;

/// θ_l の既定値
pub const DEFAULT_ZOOM_LEVEL: u8 = 16;

/// θ_t の既定値
pub const DEFAULT_TIME_GRANULARITY: u8 = 23;

/// 時間ビット列の幅として取り得る値
///
/// 時間窓の長さを表すのに必要なビット数以上となる最小の値が選ばれる。
///
/// ```
/// # use trajectory_hash::{BUCKET_WIDTHS, bucket_width};
/// assert_eq!(bucket_width(86_400).unwrap(), BUCKET_WIDTHS[2]);
/// ```
pub const BUCKET_WIDTHS: [u8; 4] = [8, 16, 32, 64];

/// 3bitの値から8進数の文字への対応表
pub const BASE8_TABLE: [char; 8] = ['0', '1', '2', '3', '4', '5', '6', '7'];
