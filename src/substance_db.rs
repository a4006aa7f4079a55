/// 순수 물질의 임계 상수·끓는점·Antoine 상수 테이블을 제공한다.
/// 값은 학습용 참고치이며 설계에는 최신 물성 DB로 검증해야 한다.
use crate::thermo::acentric::AntoineCoefficients;

#[derive(Debug)]
pub struct SubstanceData {
    /// 영문 검색 키 (소문자)
    pub name: &'static str,
    /// 한글 표시명
    pub name_ko: &'static str,
    pub formula: &'static str,
    pub molar_mass_g_per_mol: f64,
    /// 정상 끓는점 [K]
    pub boiling_point_k: f64,
    /// 임계온도 [K]
    pub critical_temperature_k: f64,
    /// 임계압력 [bar]
    pub critical_pressure_bar: f64,
    /// 문헌 이심인자. 추산식 결과와 비교하는 용도.
    pub acentric_factor_lit: f64,
    /// Antoine 상수. 없으면 정의식 경로를 쓸 수 없다.
    pub antoine: Option<AntoineCoefficients>,
    pub notes: &'static str,
}

pub fn substances() -> &'static [SubstanceData] {
    SUBSTANCES
}

/// 영문명·한글명·화학식 어느 쪽으로든 물질을 찾는다.
pub fn find_substance(query: &str) -> Option<&'static SubstanceData> {
    let trimmed = query.trim();
    SUBSTANCES.iter().find(|s| {
        s.name.eq_ignore_ascii_case(trimmed)
            || s.name_ko == trimmed
            || s.formula.eq_ignore_ascii_case(trimmed)
    })
}

const fn ant(a: f64, b: f64, c: f64, t_min_c: f64, t_max_c: f64) -> AntoineCoefficients {
    AntoineCoefficients {
        a,
        b,
        c,
        t_min_c,
        t_max_c,
    }
}

const SUBSTANCES: &[SubstanceData] = &[
    SubstanceData {
        name: "water",
        name_ko: "물",
        formula: "H2O",
        molar_mass_g_per_mol: 18.015,
        boiling_point_k: 373.12,
        critical_temperature_k: 647.10,
        critical_pressure_bar: 220.64,
        acentric_factor_lit: 0.3449,
        antoine: Some(ant(8.07131, 1730.630, 233.426, 1.0, 100.0)),
        notes: "Antoine 상수는 1~100°C 기준. Tr = 0.7 평가 시 외삽된다.",
    },
    SubstanceData {
        name: "methane",
        name_ko: "메테인",
        formula: "CH4",
        molar_mass_g_per_mol: 16.043,
        boiling_point_k: 111.66,
        critical_temperature_k: 190.56,
        critical_pressure_bar: 45.99,
        acentric_factor_lit: 0.0115,
        antoine: None,
        notes: "",
    },
    SubstanceData {
        name: "ethane",
        name_ko: "에테인",
        formula: "C2H6",
        molar_mass_g_per_mol: 30.070,
        boiling_point_k: 184.55,
        critical_temperature_k: 305.32,
        critical_pressure_bar: 48.72,
        acentric_factor_lit: 0.0995,
        antoine: None,
        notes: "",
    },
    SubstanceData {
        name: "propane",
        name_ko: "프로페인",
        formula: "C3H8",
        molar_mass_g_per_mol: 44.096,
        boiling_point_k: 231.11,
        critical_temperature_k: 369.83,
        critical_pressure_bar: 42.48,
        acentric_factor_lit: 0.1523,
        antoine: None,
        notes: "",
    },
    SubstanceData {
        name: "n-butane",
        name_ko: "노말뷰테인",
        formula: "C4H10",
        molar_mass_g_per_mol: 58.122,
        boiling_point_k: 272.66,
        critical_temperature_k: 425.12,
        critical_pressure_bar: 37.96,
        acentric_factor_lit: 0.2002,
        antoine: None,
        notes: "",
    },
    SubstanceData {
        name: "n-pentane",
        name_ko: "노말펜테인",
        formula: "C5H12",
        molar_mass_g_per_mol: 72.150,
        boiling_point_k: 309.21,
        critical_temperature_k: 469.70,
        critical_pressure_bar: 33.70,
        acentric_factor_lit: 0.2515,
        antoine: Some(ant(6.85296, 1064.840, 233.010, -50.0, 58.0)),
        notes: "",
    },
    SubstanceData {
        name: "n-hexane",
        name_ko: "노말헥세인",
        formula: "C6H14",
        molar_mass_g_per_mol: 86.177,
        boiling_point_k: 341.88,
        critical_temperature_k: 507.60,
        critical_pressure_bar: 30.25,
        acentric_factor_lit: 0.3013,
        antoine: Some(ant(6.87601, 1171.170, 224.410, -25.0, 92.0)),
        notes: "",
    },
    SubstanceData {
        name: "benzene",
        name_ko: "벤젠",
        formula: "C6H6",
        molar_mass_g_per_mol: 78.114,
        boiling_point_k: 353.24,
        critical_temperature_k: 562.05,
        critical_pressure_bar: 48.95,
        acentric_factor_lit: 0.2103,
        antoine: Some(ant(6.90565, 1211.033, 220.790, 8.0, 103.0)),
        notes: "",
    },
    SubstanceData {
        name: "toluene",
        name_ko: "톨루엔",
        formula: "C7H8",
        molar_mass_g_per_mol: 92.141,
        boiling_point_k: 383.79,
        critical_temperature_k: 591.75,
        critical_pressure_bar: 41.08,
        acentric_factor_lit: 0.2640,
        antoine: Some(ant(6.95464, 1344.800, 219.480, 6.0, 137.0)),
        notes: "",
    },
    SubstanceData {
        name: "ethanol",
        name_ko: "에탄올",
        formula: "C2H5OH",
        molar_mass_g_per_mol: 46.069,
        boiling_point_k: 351.44,
        critical_temperature_k: 513.92,
        critical_pressure_bar: 61.48,
        acentric_factor_lit: 0.6436,
        antoine: Some(ant(8.20417, 1642.890, 230.300, -57.0, 80.0)),
        notes: "극성 물질이라 단순 추산식 오차가 큰 편이다.",
    },
    SubstanceData {
        name: "acetone",
        name_ko: "아세톤",
        formula: "C3H6O",
        molar_mass_g_per_mol: 58.080,
        boiling_point_k: 329.22,
        critical_temperature_k: 508.20,
        critical_pressure_bar: 47.01,
        acentric_factor_lit: 0.3065,
        antoine: Some(ant(7.11714, 1210.595, 229.664, -13.0, 55.0)),
        notes: "",
    },
    SubstanceData {
        name: "ammonia",
        name_ko: "암모니아",
        formula: "NH3",
        molar_mass_g_per_mol: 17.031,
        boiling_point_k: 239.82,
        critical_temperature_k: 405.40,
        critical_pressure_bar: 113.53,
        acentric_factor_lit: 0.2526,
        antoine: None,
        notes: "",
    },
    SubstanceData {
        name: "nitrogen",
        name_ko: "질소",
        formula: "N2",
        molar_mass_g_per_mol: 28.014,
        boiling_point_k: 77.36,
        critical_temperature_k: 126.19,
        critical_pressure_bar: 33.96,
        acentric_factor_lit: 0.0372,
        antoine: None,
        notes: "",
    },
    SubstanceData {
        name: "oxygen",
        name_ko: "산소",
        formula: "O2",
        molar_mass_g_per_mol: 31.999,
        boiling_point_k: 90.19,
        critical_temperature_k: 154.58,
        critical_pressure_bar: 50.43,
        acentric_factor_lit: 0.0222,
        antoine: None,
        notes: "",
    },
    SubstanceData {
        name: "carbon dioxide",
        name_ko: "이산화탄소",
        formula: "CO2",
        molar_mass_g_per_mol: 44.010,
        boiling_point_k: 194.69,
        critical_temperature_k: 304.13,
        critical_pressure_bar: 73.77,
        acentric_factor_lit: 0.2239,
        antoine: None,
        notes: "끓는점 자리에 1 atm 승화점이 들어 있어 Edmister/Lee-Kesler 추산이 문헌값과 크게 어긋난다.",
    },
];

// NOTE:
// - 임계 상수·끓는점·이심인자는 Perry's Chemical Engineers' Handbook 및 CRC 핸드북의
//   공개 값을 반올림해 수록한 참고치이다.
// - Antoine 상수는 log10(P[mmHg]) = A − B/(C + T[°C]) 형식(Lange/NIST 구판 계열)이며,
//   적용 범위 밖에서는 외삽 경고와 함께 계산된다.
