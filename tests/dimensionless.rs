//! 무차원수 정의식 회귀 테스트. 손계산 가능한 기준값과 비교한다.
use chemeng_study_toolbox::transport::{
    classify_regime, grashof, nusselt_from_film, prandtl, rayleigh, reynolds_from_mass_flow,
    reynolds_kinematic, reynolds_pipe, stanton_from_film, stanton_from_groups, FlowRegime,
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
fn reynolds_pipe_definition() {
    // ρ = 1000 kg/m³, u = 1 m/s, d = 0.1 m, μ = 0.001 Pa·s => Re = 1e5
    let re = reynolds_pipe(1000.0, 1.0, 0.1, 0.001).expect("reynolds");
    assert_close("Re", re, 100_000.0, 1e-12);

    // 물 25°C 근처 배관 유동
    let re = reynolds_pipe(997.0, 1.5, 0.025, 8.904_390e-4).expect("reynolds water");
    assert_close("Re water", re, 41_987.716, 1e-6);
}

#[test]
fn reynolds_mass_flow_mode() {
    // ṁ = 0.5 kg/s, d = 0.05 m, μ = 0.001 Pa·s => Re = 4ṁ/(πdμ)
    let re = reynolds_from_mass_flow(0.5, 0.05, 0.001).expect("mass flow");
    assert_close("Re", re, 12_732.395_447, 1e-9);
}

#[test]
fn reynolds_kinematic_mode() {
    // u = 2 m/s, L = 0.5 m, ν = 1e-5 m²/s => Re = 1e5
    let re = reynolds_kinematic(2.0, 0.5, 1.0e-5).expect("kinematic");
    assert_close("Re", re, 100_000.0, 1e-12);
}

#[test]
fn reverse_flow_uses_speed_magnitude() {
    let forward = reynolds_pipe(1000.0, 1.0, 0.1, 0.001).expect("forward");
    let reverse = reynolds_pipe(1000.0, -1.0, 0.1, 0.001).expect("reverse");
    assert_close("Re reverse", reverse, forward, 1e-12);
}

#[test]
fn regime_boundaries() {
    assert_eq!(classify_regime(2_099.9), FlowRegime::Laminar);
    assert_eq!(classify_regime(2_100.0), FlowRegime::Transitional);
    assert_eq!(classify_regime(9_999.9), FlowRegime::Transitional);
    assert_eq!(classify_regime(10_000.0), FlowRegime::Turbulent);
}

#[test]
fn prandtl_water_room_temperature() {
    // cp = 4182 J/(kg·K), μ = 1.002e-3 Pa·s, k = 0.598 W/(m·K)
    let pr = prandtl(4182.0, 1.002e-3, 0.598).expect("prandtl");
    assert_close("Pr", pr, 7.007_298, 1e-6);
}

#[test]
fn nusselt_back_calculated_from_film_coefficient() {
    // h = 250 W/(m²·K), L = 0.02 m, k = 0.6 W/(m·K)
    let nu = nusselt_from_film(250.0, 0.02, 0.6).expect("nusselt");
    assert_close("Nu", nu, 8.333_333, 1e-6);
}

#[test]
fn grashof_and_rayleigh_air_layer() {
    // β = 1/300 K⁻¹, ΔT = 20 K, L = 0.1 m, ν = 1.5e-5 m²/s
    let gr = grashof(1.0 / 300.0, 20.0, 0.1, 1.5e-5).expect("grashof");
    assert_close("Gr", gr, 2_905_674.074, 1e-8);
    assert_close("Ra", rayleigh(gr, 0.7), 2_033_971.852, 1e-8);
}

#[test]
fn grashof_sign_independent_of_heating_direction() {
    let heated = grashof(1.0 / 300.0, 20.0, 0.1, 1.5e-5).expect("heated");
    let cooled = grashof(1.0 / 300.0, -20.0, 0.1, 1.5e-5).expect("cooled");
    assert_close("Gr cooled", cooled, heated, 1e-12);
}

#[test]
fn stanton_both_input_modes() {
    // h = 500 W/(m²·K), ρ = 1000 kg/m³, u = 2 m/s, cp = 4182 J/(kg·K)
    let st = stanton_from_film(500.0, 1000.0, 2.0, 4182.0).expect("stanton film");
    assert_close("St", st, 5.978_001e-5, 1e-6);

    // Nu = 100, Re = 1e4, Pr = 7
    let st = stanton_from_groups(100.0, 1.0e4, 7.0).expect("stanton groups");
    assert_close("St", st, 1.428_571e-3, 1e-6);
}

#[test]
fn nonphysical_inputs_rejected() {
    assert!(reynolds_pipe(-1.0, 1.0, 0.1, 0.001).is_err(), "음수 밀도");
    assert!(reynolds_pipe(1000.0, 1.0, 0.1, 0.0).is_err(), "점도 0");
    assert!(reynolds_from_mass_flow(0.0, 0.05, 0.001).is_err(), "유량 0");
    assert!(reynolds_kinematic(1.0, 0.5, -1.0e-5).is_err(), "음수 동점성");
    assert!(prandtl(4182.0, 1.0e-3, 0.0).is_err(), "열전도율 0");
    assert!(nusselt_from_film(0.0, 0.02, 0.6).is_err(), "경막계수 0");
    assert!(grashof(1.0 / 300.0, 0.0, 0.1, 1.5e-5).is_err(), "온도차 0");
    assert!(stanton_from_film(500.0, 1000.0, 0.0, 4182.0).is_err(), "유속 0");
    assert!(stanton_from_groups(100.0, -1.0, 7.0).is_err(), "음수 Re");
}
