use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 bar(절대)이다.
/// 임계압·증기압 등 열물성 입력은 모두 절대압으로 취급한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Bar,
    KiloPascal,
    MegaPascal,
    Atm,
    Psi,
    MmHg,
}

/// 표준 대기압 [bar].
pub const ATM_BAR: f64 = 1.01325;
/// 1 bar에 해당하는 mmHg. Antoine 식 결과 환산에 쓴다.
pub const MMHG_PER_BAR: f64 = 750.062;

fn to_bar(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value,
        PressureUnit::KiloPascal => value / 100.0,
        PressureUnit::MegaPascal => value * 10.0,
        PressureUnit::Atm => value * ATM_BAR,
        PressureUnit::Psi => value * 0.0689476,
        PressureUnit::MmHg => value / MMHG_PER_BAR,
    }
}

fn from_bar(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value,
        PressureUnit::KiloPascal => value * 100.0,
        PressureUnit::MegaPascal => value / 10.0,
        PressureUnit::Atm => value / ATM_BAR,
        PressureUnit::Psi => value / 0.0689476,
        PressureUnit::MmHg => value * MMHG_PER_BAR,
    }
}

/// 압력을 변환한다. 게이지/절대 구분 없이 절대압 척도로만 다룬다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_bar(to_bar(value, from), to)
}
