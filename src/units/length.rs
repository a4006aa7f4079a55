use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 m이다. 관 내경 입력은 mm/in이 흔하다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Centimeter,
    Millimeter,
    Inch,
}

fn to_m(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value,
        LengthUnit::Centimeter => value / 100.0,
        LengthUnit::Millimeter => value / 1000.0,
        LengthUnit::Inch => value * 0.0254,
    }
}

fn from_m(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value,
        LengthUnit::Centimeter => value * 100.0,
        LengthUnit::Millimeter => value * 1000.0,
        LengthUnit::Inch => value / 0.0254,
    }
}

/// 길이를 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    from_m(to_m(value, from), to)
}
