pub mod markers;
pub mod json_repair;

pub use markers::CircledMarker;
pub use json_repair::fix_json_quotes;

/// 将英寸转换为 twip
pub fn convert_inches_to_twip(inches: f32) -> i32 {
    (inches * 1440.0).round() as i32
}

/// 将磅转换为 twip
pub fn convert_point_to_twip(point: f32) -> i32 {
    (point * 20.0).round() as i32
}

/// 将磅转换为 docx 使用的半磅值
pub fn convert_point_to_half_point(point: f32) -> usize {
    (point * 2.0).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_conversions() {
        assert_eq!(convert_inches_to_twip(1.0), 1440);
        assert_eq!(convert_inches_to_twip(0.25), 360);
        assert_eq!(convert_point_to_twip(12.0), 240);
        assert_eq!(convert_point_to_half_point(10.5), 21);
        assert_eq!(convert_point_to_half_point(26.0), 52);
    }
}
