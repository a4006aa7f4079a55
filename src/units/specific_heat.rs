use serde::{Deserialize, Serialize};

/// 비열 단위. 내부 기준은 J/(kg·K)이다.
/// 교재 표는 kJ/(kg·K)·kcal/(kg·°C) 표기가 섞여 있어 환산 실수가 잦은 항목이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificHeatUnit {
    JoulePerKgKelvin,
    KilojoulePerKgKelvin,
    KcalPerKgCelsius,
    BtuPerPoundFahrenheit,
}

fn to_j_kgk(value: f64, unit: SpecificHeatUnit) -> f64 {
    match unit {
        SpecificHeatUnit::JoulePerKgKelvin => value,
        SpecificHeatUnit::KilojoulePerKgKelvin => value * 1000.0,
        SpecificHeatUnit::KcalPerKgCelsius => value * 4186.8,
        SpecificHeatUnit::BtuPerPoundFahrenheit => value * 4186.8,
    }
}

fn from_j_kgk(value: f64, unit: SpecificHeatUnit) -> f64 {
    match unit {
        SpecificHeatUnit::JoulePerKgKelvin => value,
        SpecificHeatUnit::KilojoulePerKgKelvin => value / 1000.0,
        SpecificHeatUnit::KcalPerKgCelsius => value / 4186.8,
        SpecificHeatUnit::BtuPerPoundFahrenheit => value / 4186.8,
    }
}

/// 비열을 변환한다. Btu/(lb·°F)와 kcal/(kg·°C)는 수치상 동일한 척도다.
pub fn convert_specific_heat(value: f64, from: SpecificHeatUnit, to: SpecificHeatUnit) -> f64 {
    from_j_kgk(to_j_kgk(value, from), to)
}
