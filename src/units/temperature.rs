use serde::{Deserialize, Serialize};

/// 온도 단위. 내부 기준은 켈빈이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
}

/// 주어진 온도를 켈빈으로 환산한다.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value + 273.15,
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Fahrenheit => (value + 459.67) * 5.0 / 9.0,
    }
}

/// 켈빈 값을 원하는 단위로 환산한다.
pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_k - 273.15,
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Fahrenheit => value_k * 9.0 / 5.0 - 459.67,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    from_kelvin(to_kelvin(value, from), to)
}

/// 섭씨로 환산하는 축약 헬퍼. 물성 계산 입력이 °C 기준인 곳에서 사용한다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    convert_temperature(value, unit, TemperatureUnit::Celsius)
}
