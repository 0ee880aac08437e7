/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// 投影の境界や粒度の上限などの定数。
mod constants;

/// 固定幅のビット列と、その長さを揃える処理。
mod bit_seq;

/// 緯度経度からタイルのビット列への変換。
mod spatial;

/// 時刻から周期番号のビット列への変換。
mod temporal;

/// 3本のビット列を1本にまとめる。
mod interleave;

/// ビット列と8進数文字の相互変換。
mod base8;

/// 符号化の結果を表す型。
mod hash;

/// 各段をつないだ符号化の入口。
mod encode;

pub use error::Error;

pub use constants::{
    BASE8_TABLE, BUCKET_WIDTHS, DEFAULT_TIME_GRANULARITY, DEFAULT_ZOOM_LEVEL, MAX_LATITUDE,
    MAX_LONGITUDE, MAX_TIME_GRANULARITY, MAX_ZOOM_LEVEL, MIN_LATITUDE, MIN_LONGITUDE,
};

pub use bit_seq::{Aligned, BitSeq, BitStream, align};
pub use spatial::{Coordinate, TileIndex, tile_bits};
pub use temporal::{TimeWindow, bucket_index, bucket_width, time_bits};

pub use base8::{digit_value, pack};
pub use interleave::{Layout, interleave};

pub use hash::TrajectoryHash;

pub use encode::{EncodeParams, Encoder, TrajectoryPoint, encode};
