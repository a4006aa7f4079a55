use serde::{Deserialize, Serialize};

/// 열전도율 단위. 내부 기준은 W/(m·K)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConductivityUnit {
    WattPerMeterKelvin,
    KcalPerHourMeterCelsius,
    BtuPerHourFootFahrenheit,
}

fn to_w_mk(value: f64, unit: ConductivityUnit) -> f64 {
    match unit {
        ConductivityUnit::WattPerMeterKelvin => value,
        ConductivityUnit::KcalPerHourMeterCelsius => value * 1.163,
        ConductivityUnit::BtuPerHourFootFahrenheit => value * 1.730735,
    }
}

fn from_w_mk(value: f64, unit: ConductivityUnit) -> f64 {
    match unit {
        ConductivityUnit::WattPerMeterKelvin => value,
        ConductivityUnit::KcalPerHourMeterCelsius => value / 1.163,
        ConductivityUnit::BtuPerHourFootFahrenheit => value / 1.730735,
    }
}

/// 열전도율을 변환한다.
pub fn convert_conductivity(value: f64, from: ConductivityUnit, to: ConductivityUnit) -> f64 {
    from_w_mk(to_w_mk(value, from), to)
}
