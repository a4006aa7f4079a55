//! 누셀트 상관식과 경막계수 선택 로직 회귀 테스트.
//! 상관식 기준값은 Re = 10⁵, Pr = 7 등 교재에서 흔히 쓰는 조합으로 손계산했다.
use chemeng_study_toolbox::heat_transfer::{
    correlations, crossflow_cylinder_film_coefficient, natural_convection_vertical,
    tube_film_coefficient, CorrelationError, CrossflowCylinderInput, NaturalConvectionInput,
    ThermalDuty, TubeCorrelation, TubeFlowInput,
};
use chemeng_study_toolbox::transport::FlowRegime;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

/// ρ = 1000, μ = 0.001, cp = 4200, k = 0.6 => Pr = 7. 유속만 바꿔 영역을 고른다.
fn base_tube_input(velocity_m_per_s: f64) -> TubeFlowInput {
    TubeFlowInput {
        density_kg_per_m3: 1000.0,
        velocity_m_per_s,
        diameter_m: 0.05,
        viscosity_pa_s: 0.001,
        wall_viscosity_pa_s: None,
        specific_heat_j_per_kg_k: 4200.0,
        conductivity_w_per_m_k: 0.6,
        tube_length_m: None,
        duty: ThermalDuty::Heating,
        correlation: TubeCorrelation::Auto,
    }
}

#[test]
fn dittus_boelter_reference() {
    assert_close(
        "Nu heating",
        correlations::dittus_boelter(1.0e5, 7.0, 0.4),
        500.918_478,
        1e-8,
    );
    assert_close(
        "Nu cooling",
        correlations::dittus_boelter(1.0e5, 7.0, 0.3),
        412.341_691,
        1e-8,
    );
}

#[test]
fn colburn_equals_stanton_analogy_nusselt() {
    // Colburn 유사 St·Re·Pr는 Colburn Nu와 같은 식이다.
    let nu = correlations::colburn(1.0e5, 7.0);
    let st = correlations::stanton_colburn_analogy(1.0e5, 7.0);
    assert_close("Nu Colburn", nu, 439.974_172, 1e-8);
    assert_close("St", st, 6.285_345e-4, 1e-6);
    assert_close("St·Re·Pr", st * 1.0e5 * 7.0, nu, 1e-10);
}

#[test]
fn sieder_tate_turbulent_viscosity_correction() {
    // (μ/μw) = 2.5 가열 조건
    assert_close(
        "Nu",
        correlations::sieder_tate_turbulent(1.0e5, 7.0, 2.5),
        587.184_675,
        1e-8,
    );
    // 보정비 1이면 Colburn 대비 0.027/0.023배
    let ratio = correlations::sieder_tate_turbulent(1.0e5, 7.0, 1.0)
        / correlations::colburn(1.0e5, 7.0);
    assert_close("0.027/0.023", ratio, 0.027 / 0.023, 1e-12);
}

#[test]
fn sieder_tate_laminar_reference() {
    // Gz = 175 (Re = 500, Pr = 7, d/L = 0.05)
    assert_close(
        "Nu",
        correlations::sieder_tate_laminar(175.0, 1.0),
        10.403_807,
        1e-7,
    );
}

#[test]
fn hausen_transitional_reference() {
    // Re = 5000, Pr = 7, d/L = 0.025
    assert_close(
        "Nu",
        correlations::hausen_transitional(5000.0, 7.0, 0.025, 1.0),
        40.322_434,
        1e-7,
    );
}

#[test]
fn churchill_bernstein_reference() {
    assert_close("Nu 기체", correlations::churchill_bernstein(4000.0, 0.7), 32.540_438, 1e-7);
    assert_close("Nu 액체", correlations::churchill_bernstein(1.0e5, 7.0), 507.591_023, 1e-7);
}

#[test]
fn churchill_chu_reference() {
    assert_close(
        "Nu 층류",
        correlations::churchill_chu_laminar(1.0e6, 0.7),
        16.915_951,
        1e-7,
    );
    assert_close(
        "Nu 전영역 기체",
        correlations::churchill_chu_all(1.0e10, 0.7),
        251.769_750,
        1e-7,
    );
    assert_close(
        "Nu 전영역 액체",
        correlations::churchill_chu_all(1.0e10, 7.0),
        314.757_094,
        1e-7,
    );
}

#[test]
fn tube_turbulent_auto_uses_dittus_boelter() {
    // u = 2 m/s => Re = 1e5
    let res = tube_film_coefficient(base_tube_input(2.0)).expect("tube");
    assert_eq!(res.regime, FlowRegime::Turbulent);
    assert_eq!(res.correlation_name, "Dittus-Boelter");
    assert_close("Re", res.reynolds, 100_000.0, 1e-12);
    assert_close("Pr", res.prandtl, 7.0, 1e-12);
    assert_close("Nu", res.nusselt, 500.918_478, 1e-8);
    assert_close("h", res.film_coefficient_w_per_m2_k, 6_011.021_732, 1e-8);
    assert!(res.warnings.is_empty(), "warnings: {:?}", res.warnings);
}

#[test]
fn tube_turbulent_auto_with_wall_viscosity_uses_sieder_tate() {
    let mut input = base_tube_input(2.0);
    input.wall_viscosity_pa_s = Some(0.000_4); // μ/μw = 2.5
    let res = tube_film_coefficient(input).expect("tube");
    assert_eq!(res.correlation_name, "Sieder-Tate");
    assert_close("Nu", res.nusselt, 587.184_675, 1e-8);
}

#[test]
fn tube_sieder_tate_requires_wall_viscosity() {
    let mut input = base_tube_input(2.0);
    input.correlation = TubeCorrelation::SiederTate;
    let err = tube_film_coefficient(input).unwrap_err();
    assert!(matches!(err, CorrelationError::InvalidInput(_)), "{err}");
}

#[test]
fn tube_stanton_analogy_path() {
    let mut input = base_tube_input(2.0);
    input.correlation = TubeCorrelation::StantonAnalogy;
    let res = tube_film_coefficient(input).expect("tube");
    assert_eq!(res.correlation_name, "Stanton-Colburn analogy");
    // Nu = St·Re·Pr는 Colburn과 일치해야 한다.
    assert_close("Nu", res.nusselt, 439.974_172, 1e-8);
    assert!(res.warnings.iter().any(|w| w.contains("St")), "{:?}", res.warnings);
}

#[test]
fn tube_laminar_entry_region_sieder_tate() {
    // u = 0.01 m/s => Re = 500, L = 1 m => Gz = 175
    let mut input = base_tube_input(0.01);
    input.tube_length_m = Some(1.0);
    let res = tube_film_coefficient(input).expect("tube");
    assert_eq!(res.regime, FlowRegime::Laminar);
    assert_eq!(res.correlation_name, "Sieder-Tate (laminar)");
    assert_close("Nu", res.nusselt, 10.403_807, 1e-7);
    assert_close("h", res.film_coefficient_w_per_m2_k, 124.845_686, 1e-7);
}

#[test]
fn tube_laminar_long_tube_fully_developed_limit() {
    // L = 100 m => Gz = 1.75 < 10 => Nu = 3.66 고정
    let mut input = base_tube_input(0.01);
    input.tube_length_m = Some(100.0);
    let res = tube_film_coefficient(input).expect("tube");
    assert_eq!(res.correlation_name, "Nu = 3.66");
    assert_close("Nu", res.nusselt, 3.66, 1e-12);
    assert_close("h", res.film_coefficient_w_per_m2_k, 43.92, 1e-12);
    assert!(!res.warnings.is_empty());
}

#[test]
fn tube_laminar_without_length_falls_back() {
    let res = tube_film_coefficient(base_tube_input(0.01)).expect("tube");
    assert_eq!(res.correlation_name, "Nu = 3.66");
    assert!(res.warnings.iter().any(|w| w.contains("관 길이")), "{:?}", res.warnings);
}

#[test]
fn tube_transitional_hausen_with_caution() {
    // u = 0.1 m/s => Re = 5000, L = 2 m => d/L = 0.025
    let mut input = base_tube_input(0.1);
    input.tube_length_m = Some(2.0);
    let res = tube_film_coefficient(input).expect("tube");
    assert_eq!(res.regime, FlowRegime::Transitional);
    assert_eq!(res.correlation_name, "Hausen");
    assert_close("Nu", res.nusselt, 40.322_434, 1e-7);
    assert_close("h", res.film_coefficient_w_per_m2_k, 483.869_206, 1e-7);
    assert!(res.warnings.iter().any(|w| w.contains("천이")), "{:?}", res.warnings);
}

#[test]
fn tube_explicit_choice_outside_turbulent_warns() {
    let mut input = base_tube_input(0.01);
    input.correlation = TubeCorrelation::DittusBoelter;
    let res = tube_film_coefficient(input).expect("tube");
    // 층류에서는 선택과 무관하게 층류 상관식을 쓰고 경고를 남긴다.
    assert_eq!(res.correlation_name, "Nu = 3.66");
    assert!(
        res.warnings.iter().any(|w| w.contains("난류 상관식")),
        "{:?}",
        res.warnings
    );
}

#[test]
fn tube_turbulent_prandtl_range_warning() {
    // cp를 키워 Pr = 200 (> 160)
    let mut input = base_tube_input(2.0);
    input.specific_heat_j_per_kg_k = 120_000.0;
    let res = tube_film_coefficient(input).expect("tube");
    assert_close("Pr", res.prandtl, 200.0, 1e-12);
    assert!(
        res.warnings.iter().any(|w| w.contains("유효 범위")),
        "{:?}",
        res.warnings
    );
}

#[test]
fn tube_rejects_zero_velocity() {
    let err = tube_film_coefficient(base_tube_input(0.0)).unwrap_err();
    assert!(matches!(err, CorrelationError::InvalidInput(_)), "{err}");
}

#[test]
fn crossflow_cylinder_reference() {
    // Re = 4000, Pr = 0.7이 되도록 구성
    let res = crossflow_cylinder_film_coefficient(CrossflowCylinderInput {
        density_kg_per_m3: 1.0,
        velocity_m_per_s: 1.0,
        diameter_m: 0.04,
        viscosity_pa_s: 1.0e-5,
        specific_heat_j_per_kg_k: 700.0,
        conductivity_w_per_m_k: 0.01,
    })
    .expect("crossflow");
    assert_eq!(res.correlation_name, "Churchill-Bernstein");
    assert_close("Re", res.reynolds, 4000.0, 1e-10);
    assert_close("Pr", res.prandtl, 0.7, 1e-12);
    assert_close("Nu", res.nusselt, 32.540_438, 1e-7);
    assert_close("h", res.film_coefficient_w_per_m2_k, 8.135_110, 1e-6);
}

#[test]
fn crossflow_rejects_low_peclet() {
    // Re·Pr = 0.1 ≤ 0.2
    let err = crossflow_cylinder_film_coefficient(CrossflowCylinderInput {
        density_kg_per_m3: 1.0,
        velocity_m_per_s: 0.001,
        diameter_m: 0.01,
        viscosity_pa_s: 0.001,
        specific_heat_j_per_kg_k: 1000.0,
        conductivity_w_per_m_k: 0.1,
    })
    .unwrap_err();
    assert!(matches!(err, CorrelationError::OutOfRange(_)), "{err}");
}

#[test]
fn natural_convection_laminar_branch() {
    // Ra ≈ 2.03e6 ≤ 1e9 => 층류식
    let res = natural_convection_vertical(NaturalConvectionInput {
        expansion_coeff_per_k: 1.0 / 300.0,
        delta_t_k: 20.0,
        height_m: 0.1,
        kinematic_viscosity_m2_per_s: 1.5e-5,
        prandtl: 0.7,
        conductivity_w_per_m_k: 0.026,
    })
    .expect("natural");
    assert_eq!(res.correlation_name, "Churchill-Chu (laminar)");
    assert_close("Gr", res.grashof, 2_905_674.074, 1e-8);
    assert_close("Ra", res.rayleigh, 2_033_971.852, 1e-8);
    assert_close("Nu", res.nusselt, 20.069_382, 1e-7);
    assert_close("h", res.film_coefficient_w_per_m2_k, 5.218_039, 1e-6);
    assert!(res.warnings.is_empty(), "{:?}", res.warnings);
}

#[test]
fn natural_convection_all_range_branch() {
    // ΔT = 30 K, L = 1 m => Ra ≈ 3.05e9 > 1e9
    let res = natural_convection_vertical(NaturalConvectionInput {
        expansion_coeff_per_k: 1.0 / 300.0,
        delta_t_k: 30.0,
        height_m: 1.0,
        kinematic_viscosity_m2_per_s: 1.5e-5,
        prandtl: 0.7,
        conductivity_w_per_m_k: 0.026,
    })
    .expect("natural");
    assert_eq!(res.correlation_name, "Churchill-Chu");
    assert_close("Ra", res.rayleigh, 3.050_958e9, 1e-6);
    assert_close("Nu", res.nusselt, 173.369_946, 1e-7);
    assert!(res.warnings.is_empty(), "{:?}", res.warnings);
}

#[test]
fn natural_convection_extreme_rayleigh_warns() {
    // L = 10 m => Ra ≈ 3.05e12 > 1e12
    let res = natural_convection_vertical(NaturalConvectionInput {
        expansion_coeff_per_k: 1.0 / 300.0,
        delta_t_k: 30.0,
        height_m: 10.0,
        kinematic_viscosity_m2_per_s: 1.5e-5,
        prandtl: 0.7,
        conductivity_w_per_m_k: 0.026,
    })
    .expect("natural");
    assert_eq!(res.correlation_name, "Churchill-Chu");
    assert_eq!(res.warnings.len(), 1, "{:?}", res.warnings);
}

#[test]
fn natural_convection_rejects_zero_delta_t() {
    let err = natural_convection_vertical(NaturalConvectionInput {
        expansion_coeff_per_k: 1.0 / 300.0,
        delta_t_k: 0.0,
        height_m: 1.0,
        kinematic_viscosity_m2_per_s: 1.5e-5,
        prandtl: 0.7,
        conductivity_w_per_m_k: 0.026,
    })
    .unwrap_err();
    assert!(matches!(err, CorrelationError::InvalidInput(_)), "{err}");
}
