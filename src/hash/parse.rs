use std::str::FromStr;

use crate::{base8::digit_value, error::Error, hash::TrajectoryHash};

impl FromStr for TrajectoryHash {
    type Err = Error;

    /// 保存されたハッシュ文字列を読み込む
    ///
    /// 8進数以外の文字が含まれていれば、最初に見つかった位置を返す。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((position, character)) = s
            .chars()
            .enumerate()
            .find(|(_, c)| digit_value(*c).is_none())
        {
            return Err(Error::InvalidHashCharacter {
                character,
                position,
            });
        }
        Ok(TrajectoryHash::from_packed(s.to_string()))
    }
}

impl TryFrom<String> for TrajectoryHash {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
