use crate::{base8::digit_value, bit_seq::BitStream, hash::TrajectoryHash};

impl TrajectoryHash {
    /// 3L bitを右詰めのビッグエンディアンでバイト列に詰める
    ///
    /// 長さは ⌈3L/8⌉ バイトで、先頭バイトの余った上位ビットは0になる。
    ///
    /// ```
    /// # use trajectory_hash::TrajectoryHash;
    /// let h: TrajectoryHash = "6000".parse().unwrap();
    /// assert_eq!(h.to_bytes(), vec![0x0c, 0x00]);
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        let bits = self.len() * 3;
        let padding = bits.div_ceil(8) * 8 - bits;

        let mut stream = BitStream::with_capacity(bits + padding);
        for _ in 0..padding {
            stream.push(false);
        }
        for value in self.0.chars().filter_map(digit_value) {
            for shift in (0..3).rev() {
                stream.push((value >> shift) & 1 == 1);
            }
        }

        stream.as_bytes().to_vec()
    }

    /// [TrajectoryHash::to_bytes] の結果を小文字の16進数文字列で返す
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}
