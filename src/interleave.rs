#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bit_seq::{Aligned, BitStream};

/// 3本のビット列を1本にまとめる際の並べ方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Layout {
    /// 経度・緯度・時間の順に1bitずつ交互に並べる
    ///
    /// 3次元すべての上位ビットが先頭に集まるため、ハッシュの前方一致が時空間の近さに対応する。
    #[default]
    Interleaved,

    /// 経度・緯度を交互に並べた後ろに、時間ビット列をまとめて続ける
    ///
    /// 前方一致が空間の近さだけに対応する。
    Separated,
}

/// 揃えたビット列を `layout` に従って長さ 3L の1本のビット列にまとめる
pub fn interleave(aligned: &Aligned, layout: Layout) -> BitStream {
    let mut stream = BitStream::with_capacity(aligned.len() as usize * 3);

    let (lon_seq, lat_seq, time_seq) = (aligned.longitude(), aligned.latitude(), aligned.time());

    let lon = lon_seq.bits();
    let lat = lat_seq.bits();

    match layout {
        Layout::Interleaved => {
            for ((x, y), t) in lon.zip(lat).zip(time_seq.bits()) {
                stream.push(x);
                stream.push(y);
                stream.push(t);
            }
        }
        Layout::Separated => {
            for (x, y) in lon.zip(lat) {
                stream.push(x);
                stream.push(y);
            }
            stream.extend_from_seq(&time_seq);
        }
    }

    stream
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bit_seq::{BitSeq, align};

    fn to_bits(stream: &BitStream) -> String {
        (0..stream.len())
            .map(|i| if stream.get(i) == Some(true) { '1' } else { '0' })
            .collect()
    }

    #[test]
    fn test_interleaved_round_robin() {
        let aligned = align(
            BitSeq::new(0b1010, 4),
            BitSeq::new(0b1010, 4),
            BitSeq::new(0b1010, 4),
        );

        let stream = interleave(&aligned, Layout::Interleaved);
        assert_eq!(stream.len(), 12);
        assert_eq!(to_bits(&stream), "111000111000");
    }

    #[test]
    fn test_interleaved_axis_order() {
        let aligned = align(
            BitSeq::new(0b10, 2),
            BitSeq::new(0b01, 2),
            BitSeq::new(0b11, 2),
        );

        // x0 y0 t0 x1 y1 t1
        let stream = interleave(&aligned, Layout::Interleaved);
        assert_eq!(to_bits(&stream), "101011");
    }

    #[test]
    fn test_separated() {
        let aligned = align(
            BitSeq::new(0b1010, 4),
            BitSeq::new(0b1010, 4),
            BitSeq::new(0b1010, 4),
        );

        let stream = interleave(&aligned, Layout::Separated);
        assert_eq!(to_bits(&stream), "110011001010");
    }

    ///時間側が短くても、空間側の下位ビットは切り落とされない
    #[test]
    fn test_short_time_keeps_spatial_low_bits() {
        let aligned = align(
            BitSeq::new(1, 16),
            BitSeq::new(1, 16),
            BitSeq::new(1, 8),
        );

        let stream = interleave(&aligned, Layout::Interleaved);
        assert_eq!(stream.len(), 48);

        //最下位の3bitに経度・緯度・時間の1が並ぶ
        assert_eq!(&to_bits(&stream)[45..], "111");
        assert_eq!(to_bits(&stream)[..45].find('1'), None);
    }

    #[test]
    fn test_length_is_three_times_aligned() {
        let aligned = align(BitSeq::zero(16), BitSeq::zero(16), BitSeq::zero(64));

        assert_eq!(interleave(&aligned, Layout::Interleaved).len(), 192);
        assert_eq!(interleave(&aligned, Layout::Separated).len(), 192);
    }
}
