use crate::bit_seq::BitSeq;

/// 可変長のビット列をバイト単位に詰めて保持するバッファ
///
/// インターリーブ後の最大192bitを扱うために使う。ビットは上位から順に詰める。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    bytes: Vec<u8>,
    len: usize,
}

impl BitStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        BitStream {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 末尾に1bit追加する
    pub fn push(&mut self, bit: bool) {
        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            if let Some(last) = self.bytes.last_mut() {
                *last |= 0x80 >> offset;
            }
        }
        self.len += 1;
    }

    /// [BitSeq] の全ビットを上位から順に追加する
    pub fn extend_from_seq(&mut self, seq: &BitSeq) {
        for bit in seq.bits() {
            self.push(bit);
        }
    }

    /// 詰めたバイト列を返す
    ///
    /// 長さが8の倍数でない場合、最後のバイトの下位ビットは0になる。
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    /// 先頭から3bitずつ区切った値を返す
    ///
    /// 長さが3の倍数でない場合、最後の組は下位を0で補う。
    pub fn triples(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.len).step_by(3).map(move |start| {
            (0..3).fold(0u8, |acc, i| {
                let bit = self.get(start + i).unwrap_or(false);
                (acc << 1) | bit as u8
            })
        })
    }
}
