use crate::{bit_seq::BitStream, constants::BASE8_TABLE};

/// ビット列を3bitずつ区切り、8進数の文字列に変換する
///
/// 長さは3の倍数であること（インターリーブ後は常に満たされる）。
pub fn pack(stream: &BitStream) -> String {
    debug_assert_eq!(stream.len() % 3, 0, "bit length must be a multiple of 3");

    stream
        .triples()
        .map(|triple| BASE8_TABLE[triple as usize])
        .collect()
}

/// 8進数の文字を3bitの値に戻す
///
/// `'0'..='7'` 以外は `None`。
pub fn digit_value(c: char) -> Option<u8> {
    BASE8_TABLE
        .iter()
        .position(|&digit| digit == c)
        .map(|value| value as u8)
}
