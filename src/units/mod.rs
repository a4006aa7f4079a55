//! 단위 정의 및 변환 모듈 모음. 각 모듈의 내부 기준 단위는 SI로 통일한다.

pub mod conductivity;
pub mod density;
pub mod length;
pub mod pressure;
pub mod specific_heat;
pub mod temperature;
pub mod velocity;
pub mod viscosity;

pub use conductivity::{convert_conductivity, ConductivityUnit};
pub use density::{convert_density, DensityUnit};
pub use length::{convert_length, LengthUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use specific_heat::{convert_specific_heat, SpecificHeatUnit};
pub use temperature::{convert_temperature, to_celsius, to_kelvin, TemperatureUnit};
pub use velocity::{convert_velocity, VelocityUnit};
pub use viscosity::{convert_viscosity, ViscosityUnit};
