//! 입력 단위 변환 회귀 테스트. 교재 문제에서 잦은 환산(cP→Pa·s 등)을 모았다.
use chemeng_study_toolbox::units::{
    convert_conductivity, convert_density, convert_length, convert_pressure,
    convert_specific_heat, convert_temperature, convert_velocity, convert_viscosity,
    ConductivityUnit, DensityUnit, LengthUnit, PressureUnit, SpecificHeatUnit, TemperatureUnit,
    VelocityUnit, ViscosityUnit,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn centipoise_to_pascal_second() {
    // 물 25°C ≈ 0.89 cP = 8.9e-4 Pa·s
    let pas = convert_viscosity(0.89, ViscosityUnit::Centipoise, ViscosityUnit::PascalSecond);
    assert_close("cP->Pa·s", pas, 8.9e-4, 1e-12);
    // 1 P = 100 cP
    let cp = convert_viscosity(1.0, ViscosityUnit::Poise, ViscosityUnit::Centipoise);
    assert_close("P->cP", cp, 100.0, 1e-12);
}

#[test]
fn temperature_fixed_points() {
    assert_close(
        "212F->C",
        convert_temperature(212.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius),
        100.0,
        1e-10,
    );
    assert_close(
        "-40F->C",
        convert_temperature(-40.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius),
        -40.0,
        1e-10,
    );
    assert_close(
        "300K->C",
        convert_temperature(300.0, TemperatureUnit::Kelvin, TemperatureUnit::Celsius),
        26.85,
        1e-10,
    );
}

#[test]
fn pressure_scales() {
    assert_close(
        "atm->bar",
        convert_pressure(1.0, PressureUnit::Atm, PressureUnit::Bar),
        1.013_25,
        1e-12,
    );
    assert_close(
        "kPa->bar",
        convert_pressure(100.0, PressureUnit::KiloPascal, PressureUnit::Bar),
        1.0,
        1e-12,
    );
    assert_close(
        "MPa->bar",
        convert_pressure(0.1, PressureUnit::MegaPascal, PressureUnit::Bar),
        1.0,
        1e-12,
    );
    // 760 mmHg ≈ 1 atm
    assert_close(
        "mmHg->bar",
        convert_pressure(760.0, PressureUnit::MmHg, PressureUnit::Bar),
        1.013_25,
        1e-5,
    );
    assert_close(
        "psi->bar",
        convert_pressure(14.503_8, PressureUnit::Psi, PressureUnit::Bar),
        1.0,
        1e-5,
    );
}

#[test]
fn length_and_velocity_scales() {
    assert_close(
        "in->mm",
        convert_length(1.0, LengthUnit::Inch, LengthUnit::Millimeter),
        25.4,
        1e-12,
    );
    assert_close(
        "cm->m",
        convert_length(250.0, LengthUnit::Centimeter, LengthUnit::Meter),
        2.5,
        1e-12,
    );
    assert_close(
        "km/h->m/s",
        convert_velocity(36.0, VelocityUnit::KilometerPerHour, VelocityUnit::MeterPerSecond),
        10.0,
        1e-12,
    );
    assert_close(
        "ft/s->m/s",
        convert_velocity(1.0, VelocityUnit::FootPerSecond, VelocityUnit::MeterPerSecond),
        0.3048,
        1e-12,
    );
}

#[test]
fn density_scales() {
    assert_close(
        "g/cm3->kg/m3",
        convert_density(
            1.0,
            DensityUnit::GramPerCubicCentimeter,
            DensityUnit::KgPerCubicMeter,
        ),
        1000.0,
        1e-12,
    );
    // 물 ≈ 62.4 lb/ft³
    assert_close(
        "lb/ft3->kg/m3",
        convert_density(62.4, DensityUnit::PoundPerCubicFoot, DensityUnit::KgPerCubicMeter),
        999.55,
        1e-4,
    );
}

#[test]
fn thermal_property_scales() {
    assert_close(
        "kcal/hmC->W/mK",
        convert_conductivity(
            1.0,
            ConductivityUnit::KcalPerHourMeterCelsius,
            ConductivityUnit::WattPerMeterKelvin,
        ),
        1.163,
        1e-12,
    );
    assert_close(
        "kJ/kgK->J/kgK",
        convert_specific_heat(
            4.182,
            SpecificHeatUnit::KilojoulePerKgKelvin,
            SpecificHeatUnit::JoulePerKgKelvin,
        ),
        4182.0,
        1e-12,
    );
    // kcal/(kg·°C)와 Btu/(lb·°F)는 같은 척도다.
    assert_close(
        "kcal==Btu scale",
        convert_specific_heat(
            1.0,
            SpecificHeatUnit::KcalPerKgCelsius,
            SpecificHeatUnit::BtuPerPoundFahrenheit,
        ),
        1.0,
        1e-12,
    );
}

#[test]
fn round_trip_preserves_value() {
    let v = convert_viscosity(
        convert_viscosity(0.001_23, ViscosityUnit::PascalSecond, ViscosityUnit::Centipoise),
        ViscosityUnit::Centipoise,
        ViscosityUnit::PascalSecond,
    );
    assert_close("Pa·s 왕복", v, 0.001_23, 1e-12);

    let t = convert_temperature(
        convert_temperature(37.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Celsius,
    );
    assert_close("°C 왕복", t, 37.0, 1e-10);
}
