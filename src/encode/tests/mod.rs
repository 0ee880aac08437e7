use crate::{Coordinate, TimeWindow, TrajectoryHash};


/// 東京（本郷付近）の軌跡の1点
pub const TOKYO: Coordinate = Coordinate {
    latitude: 35.716701,
    longitude: 139.759556,
};

/// TOKYOの時刻
pub const TOKYO_TIME: i64 = 1_598_555_555;

/// 2020/08/19 15:00 UTC から2週間
pub const TOKYO_WINDOW: TimeWindow = TimeWindow::new(1_597_849_200, 1_599_058_800);

pub fn hash(s: &str) -> TrajectoryHash {
    s.parse().unwrap()
}
