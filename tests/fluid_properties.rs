//! 물/공기 물성 프리셋 회귀 테스트. 물 밀도는 IAPWS-IF97, 나머지는
//! 상관식·표 보간이므로 공개 핸드북 값과 비교한다.
use chemeng_study_toolbox::properties::{air_properties, water_properties, water_viscosity_pa_s};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn water_reference_point_25c() {
    let w = water_properties(25.0).expect("water 25C");
    // IF97: 0.101325 MPa, 25°C => ρ ≈ 997.05 kg/m³
    assert_close("rho", w.density_kg_per_m3, 997.05, 1e-3);
    assert_close("mu", w.viscosity_pa_s, 8.904_390e-4, 1e-6);
    assert_close("k", w.conductivity_w_per_m_k, 0.606_5, 1e-9);
    assert_close("cp", w.specific_heat_j_per_kg_k, 4_180.0, 1e-9);
    assert_close("Pr", w.prandtl, 6.136_908, 1e-5);
}

#[test]
fn water_viscosity_follows_vogel_curve() {
    assert_close("mu 20C", water_viscosity_pa_s(20.0), 1.001_749e-3, 1e-6);
    assert_close("mu 80C", water_viscosity_pa_s(80.0), 3.509_933e-4, 1e-6);
}

#[test]
fn water_density_decreases_with_temperature() {
    let w25 = water_properties(25.0).expect("25C");
    let w60 = water_properties(60.0).expect("60C");
    let w95 = water_properties(95.0).expect("95C");
    assert!(w25.density_kg_per_m3 > w60.density_kg_per_m3);
    assert!(w60.density_kg_per_m3 > w95.density_kg_per_m3);
    // 60°C 대기압 액체 물 ≈ 983 kg/m³
    assert!(
        (980.0..=986.0).contains(&w60.density_kg_per_m3),
        "rho60 = {}",
        w60.density_kg_per_m3
    );
}

#[test]
fn water_range_limits() {
    assert!(water_properties(0.0).is_ok());
    assert!(water_properties(100.0).is_ok());
    assert!(water_properties(-0.1).is_err());
    assert!(water_properties(100.1).is_err());

    // 100°C는 Region 1 강제 지정 덕에 액체 밀도가 유지된다.
    let w = water_properties(100.0).expect("100C");
    assert!(
        (950.0..=965.0).contains(&w.density_kg_per_m3),
        "rho100 = {}",
        w.density_kg_per_m3
    );
}

#[test]
fn air_reference_point_300k() {
    // 26.85°C = 300 K, 1 atm
    let a = air_properties(26.85, 1.013_25).expect("air 300K");
    assert_close("rho", a.density_kg_per_m3, 1.176_624, 1e-5);
    assert_close("mu", a.viscosity_pa_s, 1.845_916e-5, 1e-5);
    assert_close("k", a.conductivity_w_per_m_k, 0.026_232, 1e-4);
    assert_close("cp", a.specific_heat_j_per_kg_k, 1_007.0, 1e-9);
    assert_close("Pr", a.prandtl, 0.708_623, 1e-5);
    assert_close("beta", a.expansion_coeff_per_k, 1.0 / 300.0, 1e-9);
}

#[test]
fn air_reference_point_350k() {
    // 76.85°C = 350 K, 1 bar
    let a = air_properties(76.85, 1.0).expect("air 350K");
    assert_close("rho", a.density_kg_per_m3, 0.995_347, 1e-5);
    assert_close("mu", a.viscosity_pa_s, 2.073_501e-5, 1e-5);
    assert_close("k", a.conductivity_w_per_m_k, 0.030_018, 1e-4);
    assert_close("cp", a.specific_heat_j_per_kg_k, 1_009.0, 1e-9);
    assert_close("Pr", a.prandtl, 0.696_980, 1e-5);
}

#[test]
fn air_density_follows_ideal_gas() {
    let low = air_properties(26.85, 1.0).expect("1 bar");
    let high = air_properties(26.85, 2.0).expect("2 bar");
    assert_close("rho ratio", high.density_kg_per_m3 / low.density_kg_per_m3, 2.0, 1e-12);
}

#[test]
fn air_range_limits() {
    // 범위는 250~500 K
    assert!(air_properties(-23.1, 1.0).is_ok()); // 250.05 K
    assert!(air_properties(226.8, 1.0).is_ok()); // 499.95 K
    assert!(air_properties(-23.2, 1.0).is_err()); // 249.95 K
    assert!(air_properties(226.9, 1.0).is_err()); // 500.05 K
    assert!(air_properties(26.85, 0.0).is_err());
    assert!(air_properties(26.85, -1.0).is_err());
}
