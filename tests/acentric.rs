//! 이심인자 세 가지 계산 경로(정의식/Edmister/Lee-Kesler) 회귀 테스트.
//! 기준값은 임계 상수 테이블로 손계산한 결과이고, 문헌 이심인자와의
//! 편차는 추산식의 알려진 정확도 수준인지 확인한다.
use chemeng_study_toolbox::substance_db::{find_substance, substances};
use chemeng_study_toolbox::thermo::{
    acentric_edmister, acentric_from_antoine, acentric_lee_kesler, reduced_state, ThermoError,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn critical_constants(name: &str) -> (f64, f64, f64) {
    let s = find_substance(name).expect(name);
    (
        s.boiling_point_k,
        s.critical_temperature_k,
        s.critical_pressure_bar,
    )
}

#[test]
fn edmister_reference_values() {
    let (tb, tc, pc) = critical_constants("water");
    assert_close("water", acentric_edmister(tb, tc, pc).expect("water"), 0.364_56, 1e-4);

    let (tb, tc, pc) = critical_constants("propane");
    assert_close("propane", acentric_edmister(tb, tc, pc).expect("propane"), 0.158_45, 1e-4);

    let (tb, tc, pc) = critical_constants("benzene");
    assert_close("benzene", acentric_edmister(tb, tc, pc).expect("benzene"), 0.220_94, 1e-4);

    let (tb, tc, pc) = critical_constants("ethanol");
    assert_close("ethanol", acentric_edmister(tb, tc, pc).expect("ethanol"), 0.652_84, 1e-4);
}

#[test]
fn lee_kesler_reference_values() {
    let (tb, tc, pc) = critical_constants("water");
    assert_close("water", acentric_lee_kesler(tb, tc, pc).expect("water"), 0.321_41, 1e-4);

    let (tb, tc, pc) = critical_constants("propane");
    assert_close("propane", acentric_lee_kesler(tb, tc, pc).expect("propane"), 0.149_81, 1e-4);

    let (tb, tc, pc) = critical_constants("benzene");
    assert_close("benzene", acentric_lee_kesler(tb, tc, pc).expect("benzene"), 0.208_29, 1e-4);

    let (tb, tc, pc) = critical_constants("ethanol");
    assert_close("ethanol", acentric_lee_kesler(tb, tc, pc).expect("ethanol"), 0.643_67, 1e-4);
}

#[test]
fn estimates_track_literature_for_nonpolar_fluids() {
    // 무극성~약극성 물질에서 Lee-Kesler는 ±0.01, Edmister는 ±0.015 안에 든다.
    for name in ["propane", "n-pentane", "benzene", "toluene", "acetone"] {
        let s = find_substance(name).expect(name);
        let (tb, tc, pc) = (
            s.boiling_point_k,
            s.critical_temperature_k,
            s.critical_pressure_bar,
        );
        let lk = acentric_lee_kesler(tb, tc, pc).expect(name);
        let ed = acentric_edmister(tb, tc, pc).expect(name);
        assert!(
            (lk - s.acentric_factor_lit).abs() < 0.01,
            "{name}: LK {lk:.5} vs lit {:.5}",
            s.acentric_factor_lit
        );
        assert!(
            (ed - s.acentric_factor_lit).abs() < 0.015,
            "{name}: Edmister {ed:.5} vs lit {:.5}",
            s.acentric_factor_lit
        );
    }
}

#[test]
fn definition_route_within_antoine_range() {
    // n-헥세인: Tr = 0.7 평가 온도 82.17°C가 상수 적용 범위(−25~92°C) 안이다.
    let s = find_substance("n-hexane").expect("n-hexane");
    let antoine = s.antoine.as_ref().expect("antoine");
    let res = acentric_from_antoine(antoine, s.critical_temperature_k, s.critical_pressure_bar)
        .expect("definition");
    assert_close("t_eval", res.evaluation_temperature_c, 82.17, 1e-3);
    assert_close("Psat", res.vapor_pressure_bar, 1.516_35, 1e-4);
    assert_close("omega", res.acentric_factor, 0.299_92, 1e-4);
    assert!(res.warnings.is_empty(), "{:?}", res.warnings);

    let s = find_substance("n-pentane").expect("n-pentane");
    let antoine = s.antoine.as_ref().expect("antoine");
    let res = acentric_from_antoine(antoine, s.critical_temperature_k, s.critical_pressure_bar)
        .expect("definition");
    assert_close("omega", res.acentric_factor, 0.238_80, 1e-4);
    assert!(res.warnings.is_empty(), "{:?}", res.warnings);
}

#[test]
fn definition_route_warns_on_extrapolation() {
    // 물: 평가 온도 179.82°C는 Antoine 상수 범위(1~100°C) 밖이다.
    let s = find_substance("water").expect("water");
    let antoine = s.antoine.as_ref().expect("antoine");
    let res = acentric_from_antoine(antoine, s.critical_temperature_k, s.critical_pressure_bar)
        .expect("definition");
    assert_close("t_eval", res.evaluation_temperature_c, 179.82, 1e-3);
    assert_close("omega", res.acentric_factor, 0.335_36, 1e-4);
    assert_eq!(res.warnings.len(), 1, "{:?}", res.warnings);

    let s = find_substance("benzene").expect("benzene");
    let antoine = s.antoine.as_ref().expect("antoine");
    let res = acentric_from_antoine(antoine, s.critical_temperature_k, s.critical_pressure_bar)
        .expect("definition");
    assert_close("omega", res.acentric_factor, 0.209_84, 1e-4);
    assert_eq!(res.warnings.len(), 1, "{:?}", res.warnings);
}

#[test]
fn co2_estimates_diverge_from_literature() {
    // CO₂의 정상 끓는점 자리에는 승화점이 들어 있어 추산식이 크게 빗나간다.
    // 끓는점 기반 추산식의 전제 조건을 가르치는 예제 데이터다.
    let s = find_substance("carbon dioxide").expect("co2");
    let (tb, tc, pc) = (
        s.boiling_point_k,
        s.critical_temperature_k,
        s.critical_pressure_bar,
    );
    let ed = acentric_edmister(tb, tc, pc).expect("edmister");
    let lk = acentric_lee_kesler(tb, tc, pc).expect("lee-kesler");
    assert_close("Edmister", ed, 0.419_74, 1e-4);
    assert_close("Lee-Kesler", lk, 0.397_50, 1e-4);
    assert!((ed - s.acentric_factor_lit).abs() > 0.1);
    assert!((lk - s.acentric_factor_lit).abs() > 0.1);
}

#[test]
fn rejects_nonphysical_critical_inputs() {
    // 끓는점 ≥ 임계온도
    assert!(matches!(
        acentric_edmister(650.0, 647.10, 220.64),
        Err(ThermoError::InvalidInput(_))
    ));
    assert!(matches!(
        acentric_lee_kesler(650.0, 647.10, 220.64),
        Err(ThermoError::InvalidInput(_))
    ));
    assert!(acentric_edmister(373.12, 0.0, 220.64).is_err());
    assert!(acentric_lee_kesler(373.12, 647.10, -1.0).is_err());
}

#[test]
fn antoine_denominator_guard() {
    use chemeng_study_toolbox::thermo::AntoineCoefficients;
    // C + T(Tr=0.7)가 음수가 되는 상수 조합은 평가를 거부한다.
    let antoine = AntoineCoefficients {
        a: 7.0,
        b: 1200.0,
        c: -300.0,
        t_min_c: f64::MIN,
        t_max_c: f64::MAX,
    };
    let err = acentric_from_antoine(&antoine, 400.0, 50.0).unwrap_err();
    assert!(matches!(err, ThermoError::InvalidInput(_)), "{err}");
}

#[test]
fn reduced_state_reference() {
    // 물 573.15 K, 100 bar
    let rs = reduced_state(573.15, 100.0, 647.10, 220.64).expect("reduced");
    assert_close("Tr", rs.reduced_temperature, 0.885_721, 1e-6);
    assert_close("Pr", rs.reduced_pressure, 0.453_227, 1e-6);

    assert!(reduced_state(0.0, 100.0, 647.10, 220.64).is_err());
    assert!(reduced_state(573.15, -1.0, 647.10, 220.64).is_err());
    assert!(reduced_state(573.15, 100.0, 647.10, 0.0).is_err());
}

#[test]
fn find_substance_matches_any_key() {
    assert!(find_substance("water").is_some());
    assert!(find_substance("물").is_some());
    assert!(find_substance("H2O").is_some());
    assert!(find_substance("h2o").is_some());
    assert!(find_substance(" Benzene ").is_some());
    assert!(find_substance("unobtanium").is_none());
}

#[test]
fn substance_table_is_consistent() {
    for s in substances() {
        assert!(s.boiling_point_k < s.critical_temperature_k, "{}", s.name);
        assert!(s.critical_pressure_bar > 0.0, "{}", s.name);
        assert!(s.molar_mass_g_per_mol > 0.0, "{}", s.name);
        assert!(s.acentric_factor_lit > -1.0, "{}", s.name);
        if let Some(antoine) = &s.antoine {
            assert!(antoine.t_min_c < antoine.t_max_c, "{}", s.name);
        }
    }
}
