use serde::{Deserialize, Serialize};

/// 점도 단위. 내부 기준은 Pa·s이다.
/// 교재 데이터가 cP로 주어지는 경우가 많아 입력 단계에서 반드시 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViscosityUnit {
    PascalSecond,
    Centipoise,
    Poise,
}

fn to_pas(value: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::PascalSecond => value,
        ViscosityUnit::Centipoise => value * 1.0e-3,
        ViscosityUnit::Poise => value * 0.1,
    }
}

fn from_pas(value: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::PascalSecond => value,
        ViscosityUnit::Centipoise => value * 1.0e3,
        ViscosityUnit::Poise => value * 10.0,
    }
}

/// 점도를 변환한다.
pub fn convert_viscosity(value: f64, from: ViscosityUnit, to: ViscosityUnit) -> f64 {
    from_pas(to_pas(value, from), to)
}
