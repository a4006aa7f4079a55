use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_DIMENSIONLESS: &str = "main_menu.dimensionless";
    pub const MAIN_MENU_FILM: &str = "main_menu.film";
    pub const MAIN_MENU_THERMO: &str = "main_menu.thermo";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const DIMENSIONLESS_HEADING: &str = "dimensionless.heading";
    pub const DIMENSIONLESS_OPTIONS_LINE1: &str = "dimensionless.options_line1";
    pub const DIMENSIONLESS_OPTIONS_LINE2: &str = "dimensionless.options_line2";
    pub const PROMPT_SELECT: &str = "prompt.select";

    pub const FILM_HEADING: &str = "film.heading";
    pub const FILM_OPTION_TUBE: &str = "film.option_tube";
    pub const FILM_OPTION_CROSSFLOW: &str = "film.option_crossflow";
    pub const FILM_OPTION_NATURAL: &str = "film.option_natural";

    pub const THERMO_HEADING: &str = "thermo.heading";
    pub const THERMO_OPTION_ACENTRIC_DB: &str = "thermo.option_acentric_db";
    pub const THERMO_OPTION_ACENTRIC_MANUAL: &str = "thermo.option_acentric_manual";
    pub const THERMO_OPTION_REDUCED: &str = "thermo.option_reduced";
    pub const THERMO_LIST_SUBSTANCES: &str = "thermo.list_substances";

    pub const PROMPT_TEMPERATURE_VALUE: &str = "prompt.temperature_value";
    pub const PROMPT_PRESSURE_VALUE: &str = "prompt.pressure_value";
    pub const PROMPT_DENSITY: &str = "prompt.density";
    pub const PROMPT_VELOCITY: &str = "prompt.velocity";
    pub const PROMPT_DIAMETER: &str = "prompt.diameter";
    pub const PROMPT_CHAR_LENGTH: &str = "prompt.char_length";
    pub const PROMPT_VISCOSITY: &str = "prompt.viscosity";
    pub const PROMPT_WALL_VISCOSITY: &str = "prompt.wall_viscosity";
    pub const PROMPT_KINEMATIC_VISCOSITY: &str = "prompt.kinematic_viscosity";
    pub const PROMPT_MASS_FLOW: &str = "prompt.mass_flow";
    pub const PROMPT_SPECIFIC_HEAT: &str = "prompt.specific_heat";
    pub const PROMPT_CONDUCTIVITY: &str = "prompt.conductivity";
    pub const PROMPT_FILM_COEFF: &str = "prompt.film_coeff";
    pub const PROMPT_EXPANSION_COEFF: &str = "prompt.expansion_coeff";
    pub const PROMPT_DELTA_T: &str = "prompt.delta_t";
    pub const PROMPT_TUBE_LENGTH: &str = "prompt.tube_length";
    pub const PROMPT_REYNOLDS: &str = "prompt.reynolds";
    pub const PROMPT_PRANDTL: &str = "prompt.prandtl";
    pub const PROMPT_PRANDTL_OPTIONAL: &str = "prompt.prandtl_optional";
    pub const PROMPT_NUSSELT: &str = "prompt.nusselt";
    pub const PROMPT_DUTY: &str = "prompt.duty";
    pub const PROMPT_CORRELATION: &str = "prompt.correlation";
    pub const PROMPT_FLUID_SOURCE: &str = "prompt.fluid_source";
    pub const PROMPT_FLUID_SOURCE_NATURAL: &str = "prompt.fluid_source_natural";
    pub const PROMPT_WALL_TEMPERATURE: &str = "prompt.wall_temperature";
    pub const PROMPT_SUBSTANCE: &str = "prompt.substance";
    pub const PROMPT_SUBSTANCE_OR_ENTER: &str = "prompt.substance_or_enter";
    pub const PROMPT_HAS_ANTOINE: &str = "prompt.has_antoine";
    pub const PROMPT_BOILING_POINT: &str = "prompt.boiling_point";
    pub const PROMPT_CRITICAL_T: &str = "prompt.critical_t";
    pub const PROMPT_CRITICAL_P: &str = "prompt.critical_p";
    pub const PROMPT_ANTOINE_A: &str = "prompt.antoine_a";
    pub const PROMPT_ANTOINE_B: &str = "prompt.antoine_b";
    pub const PROMPT_ANTOINE_C: &str = "prompt.antoine_c";

    pub const TEMPERATURE_UNIT_OPTIONS: &str = "unit.temperature_options";
    pub const PRESSURE_UNIT_OPTIONS: &str = "unit.pressure_options";
    pub const VISCOSITY_UNIT_OPTIONS: &str = "unit.viscosity_options";
    pub const LENGTH_UNIT_OPTIONS: &str = "unit.length_options";
    pub const VELOCITY_UNIT_OPTIONS: &str = "unit.velocity_options";
    pub const DENSITY_UNIT_OPTIONS: &str = "unit.density_options";
    pub const CONDUCTIVITY_UNIT_OPTIONS: &str = "unit.conductivity_options";
    pub const SPECIFIC_HEAT_UNIT_OPTIONS: &str = "unit.specific_heat_options";

    pub const TITLE_FILM_TUBE: &str = "title.film_tube";
    pub const TITLE_FILM_CROSSFLOW: &str = "title.film_crossflow";
    pub const TITLE_FILM_NATURAL: &str = "title.film_natural";
    pub const TITLE_ACENTRIC: &str = "title.acentric";
    pub const TITLE_REDUCED: &str = "title.reduced";

    pub const RESULT_REGIME: &str = "result.regime";
    pub const REGIME_LAMINAR: &str = "regime.laminar";
    pub const REGIME_TRANSITIONAL: &str = "regime.transitional";
    pub const REGIME_TURBULENT: &str = "regime.turbulent";

    pub const REPORT_INPUTS: &str = "report.inputs";
    pub const REPORT_RESULTS: &str = "report.results";
    pub const REPORT_WARNINGS: &str = "report.warnings";
    pub const REPORT_GENERATED_AT: &str = "report.generated_at";
    pub const PROMPT_SAVE_REPORT: &str = "report.prompt_save";
    pub const REPORT_SAVED: &str = "report.saved";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_CURRENT_REPORT_DIR: &str = "settings.current_report_dir";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_REPORT_DIR: &str = "settings.prompt_report_dir";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_LANGUAGE_RESTART: &str = "settings.language_restart";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_UNKNOWN_SUBSTANCE: &str = "error.unknown_substance";
    pub const ERROR_NO_ANTOINE: &str = "error.no_antoine";

    pub const LABEL_REYNOLDS: &str = "label.reynolds";
    pub const LABEL_PRANDTL: &str = "label.prandtl";
    pub const LABEL_NUSSELT: &str = "label.nusselt";
    pub const LABEL_GRASHOF: &str = "label.grashof";
    pub const LABEL_RAYLEIGH: &str = "label.rayleigh";
    pub const LABEL_STANTON: &str = "label.stanton";
    pub const LABEL_FILM_COEFF: &str = "label.film_coeff";
    pub const LABEL_CORRELATION: &str = "label.correlation";
    pub const LABEL_ACENTRIC_DEFINITION: &str = "label.acentric_definition";
    pub const LABEL_ACENTRIC_EDMISTER: &str = "label.acentric_edmister";
    pub const LABEL_ACENTRIC_LEE_KESLER: &str = "label.acentric_lee_kesler";
    pub const LABEL_ACENTRIC_LIT: &str = "label.acentric_lit";
    pub const LABEL_EVAL_TEMPERATURE: &str = "label.eval_temperature";
    pub const LABEL_VAPOR_PRESSURE: &str = "label.vapor_pressure";
    pub const LABEL_REDUCED_T: &str = "label.reduced_t";
    pub const LABEL_REDUCED_P: &str = "label.reduced_p";
    pub const LABEL_TEMPERATURE: &str = "label.temperature";
    pub const LABEL_PRESSURE: &str = "label.pressure";
    pub const LABEL_DENSITY: &str = "label.density";
    pub const LABEL_VELOCITY: &str = "label.velocity";
    pub const LABEL_DIAMETER: &str = "label.diameter";
    pub const LABEL_CHAR_LENGTH: &str = "label.char_length";
    pub const LABEL_VISCOSITY: &str = "label.viscosity";
    pub const LABEL_WALL_VISCOSITY: &str = "label.wall_viscosity";
    pub const LABEL_CONDUCTIVITY: &str = "label.conductivity";
    pub const LABEL_SPECIFIC_HEAT: &str = "label.specific_heat";
    pub const LABEL_MASS_FLOW: &str = "label.mass_flow";
    pub const LABEL_KINEMATIC_VISCOSITY: &str = "label.kinematic_viscosity";
    pub const LABEL_EXPANSION_COEFF: &str = "label.expansion_coeff";
    pub const LABEL_DELTA_T: &str = "label.delta_t";
    pub const LABEL_TUBE_LENGTH: &str = "label.tube_length";
    pub const LABEL_BOILING_POINT: &str = "label.boiling_point";
    pub const LABEL_CRITICAL_T: &str = "label.critical_t";
    pub const LABEL_CRITICAL_P: &str = "label.critical_p";
    pub const LABEL_SUBSTANCE: &str = "label.substance";
    pub const LABEL_FLUID: &str = "label.fluid";
    pub const LABEL_FLUID_MANUAL: &str = "label.fluid_manual";
    pub const LABEL_FLUID_WATER: &str = "label.fluid_water";
    pub const LABEL_FLUID_AIR: &str = "label.fluid_air";

    pub const HELP_DIMENSIONLESS: &str = "help.dimensionless";
    pub const HELP_FILM_TUBE: &str = "help.film_tube";
    pub const HELP_THERMO: &str = "help.thermo";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" => Some("en".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== ChemEng Study Toolbox ===",
        MAIN_MENU_DIMENSIONLESS => "1) 무차원수 계산",
        MAIN_MENU_FILM => "2) 경막 열전달계수",
        MAIN_MENU_THERMO => "3) 이심인자·환산 상태량",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        DIMENSIONLESS_HEADING => "\n-- 무차원수 --",
        DIMENSIONLESS_OPTIONS_LINE1 => {
            "1) 레이놀즈수 (유속)  2) 레이놀즈수 (질량유량)  3) 레이놀즈수 (동점도)"
        }
        DIMENSIONLESS_OPTIONS_LINE2 => {
            "4) 프란틀수  5) 너셀수  6) 그라스호프수  7) 스탠턴수 (경막계수)  8) 스탠턴수 (Nu/Re·Pr)"
        }
        PROMPT_SELECT => "선택: ",
        FILM_HEADING => "\n-- 경막 열전달계수 --",
        FILM_OPTION_TUBE => "1) 관내 강제대류",
        FILM_OPTION_CROSSFLOW => "2) 원통 직교류 (Churchill-Bernstein)",
        FILM_OPTION_NATURAL => "3) 수직면 자연대류 (Churchill-Chu)",
        THERMO_HEADING => "\n-- 이심인자·환산 상태량 --",
        THERMO_OPTION_ACENTRIC_DB => "1) 이심인자 (물질 DB)",
        THERMO_OPTION_ACENTRIC_MANUAL => "2) 이심인자 (직접 입력)",
        THERMO_OPTION_REDUCED => "3) 환산온도·환산압력",
        THERMO_LIST_SUBSTANCES => "등록된 물질:",
        PROMPT_TEMPERATURE_VALUE => "온도 값: ",
        PROMPT_PRESSURE_VALUE => "압력 값: ",
        PROMPT_DENSITY => "밀도 값: ",
        PROMPT_VELOCITY => "유속 값: ",
        PROMPT_DIAMETER => "관(원통) 내경 값: ",
        PROMPT_CHAR_LENGTH => "특성 길이 값: ",
        PROMPT_VISCOSITY => "점도 값: ",
        PROMPT_WALL_VISCOSITY => "벽면 온도 기준 점도 값 (없으면 0): ",
        PROMPT_KINEMATIC_VISCOSITY => "동점성계수 ν [m²/s]: ",
        PROMPT_MASS_FLOW => "질량 유량 [kg/s]: ",
        PROMPT_SPECIFIC_HEAT => "정압비열 값: ",
        PROMPT_CONDUCTIVITY => "열전도율 값: ",
        PROMPT_FILM_COEFF => "경막계수 h [W/(m²·K)]: ",
        PROMPT_EXPANSION_COEFF => "체적팽창계수 β [1/K] (이상기체는 1/T): ",
        PROMPT_DELTA_T => "표면-유체 온도차 ΔT [K]: ",
        PROMPT_TUBE_LENGTH => "관 길이 [m] (없으면 0): ",
        PROMPT_REYNOLDS => "레이놀즈수: ",
        PROMPT_PRANDTL => "프란틀수: ",
        PROMPT_PRANDTL_OPTIONAL => "프란틀수 (없으면 0): ",
        PROMPT_NUSSELT => "너셀수: ",
        PROMPT_DUTY => "열 이동 방향 (1=가열, 2=냉각): ",
        PROMPT_CORRELATION => {
            "상관식 (1=자동, 2=Dittus-Boelter, 3=Colburn, 4=Sieder-Tate, 5=Stanton 유사): "
        }
        PROMPT_FLUID_SOURCE => "물성 입력 (1=직접 입력, 2=물 프리셋, 3=공기 프리셋): ",
        PROMPT_FLUID_SOURCE_NATURAL => "물성 입력 (1=직접 입력, 2=공기 프리셋): ",
        PROMPT_WALL_TEMPERATURE => "벽면 온도 [°C] (없으면 0): ",
        PROMPT_SUBSTANCE => "물질 이름 (영문/한글/화학식): ",
        PROMPT_SUBSTANCE_OR_ENTER => "물질 이름 (직접 입력은 엔터): ",
        PROMPT_HAS_ANTOINE => "Antoine 상수를 입력할까요? (y/N): ",
        PROMPT_BOILING_POINT => "정상 끓는점 Tb [K]: ",
        PROMPT_CRITICAL_T => "임계온도 Tc [K]: ",
        PROMPT_CRITICAL_P => "임계압력 Pc [bar]: ",
        PROMPT_ANTOINE_A => "Antoine A: ",
        PROMPT_ANTOINE_B => "Antoine B: ",
        PROMPT_ANTOINE_C => "Antoine C: ",
        TEMPERATURE_UNIT_OPTIONS => "온도 단위: 1=°C 2=K 3=°F",
        PRESSURE_UNIT_OPTIONS => "압력 단위: 1=bar 2=kPa 3=MPa 4=atm 5=psi 6=mmHg",
        VISCOSITY_UNIT_OPTIONS => "점도 단위: 1=Pa·s 2=cP 3=P",
        LENGTH_UNIT_OPTIONS => "길이 단위: 1=m 2=cm 3=mm 4=in",
        VELOCITY_UNIT_OPTIONS => "속도 단위: 1=m/s 2=ft/s 3=km/h",
        DENSITY_UNIT_OPTIONS => "밀도 단위: 1=kg/m³ 2=g/cm³ 3=lb/ft³",
        CONDUCTIVITY_UNIT_OPTIONS => "열전도율 단위: 1=W/(m·K) 2=kcal/(h·m·°C) 3=Btu/(h·ft·°F)",
        SPECIFIC_HEAT_UNIT_OPTIONS => {
            "비열 단위: 1=J/(kg·K) 2=kJ/(kg·K) 3=kcal/(kg·°C) 4=Btu/(lb·°F)"
        }
        TITLE_FILM_TUBE => "관내 강제대류 경막계수",
        TITLE_FILM_CROSSFLOW => "원통 직교류 경막계수",
        TITLE_FILM_NATURAL => "수직면 자연대류 경막계수",
        TITLE_ACENTRIC => "이심인자 계산",
        TITLE_REDUCED => "환산 상태량",
        RESULT_REGIME => "유동 영역",
        REGIME_LAMINAR => "층류",
        REGIME_TRANSITIONAL => "천이",
        REGIME_TURBULENT => "난류",
        REPORT_INPUTS => "[입력]",
        REPORT_RESULTS => "[결과]",
        REPORT_WARNINGS => "[주의]",
        REPORT_GENERATED_AT => "작성 시각:",
        PROMPT_SAVE_REPORT => "결과를 파일로 저장할까요? (y/N): ",
        REPORT_SAVED => "저장 완료:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_CURRENT_REPORT_DIR => "보고서 저장 폴더:",
        SETTINGS_OPTIONS => "1) 언어 변경  2) 보고서 폴더 변경",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (ko/en/auto): ",
        SETTINGS_PROMPT_REPORT_DIR => "보고서 폴더 경로: ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        SETTINGS_LANGUAGE_RESTART => "언어 변경은 다음 실행부터 적용됩니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_UNKNOWN_SUBSTANCE => "등록되지 않은 물질입니다.",
        ERROR_NO_ANTOINE => "이 물질에는 Antoine 상수가 없어 정의식을 쓸 수 없습니다.",
        LABEL_REYNOLDS => "레이놀즈수 Re",
        LABEL_PRANDTL => "프란틀수 Pr",
        LABEL_NUSSELT => "너셀수 Nu",
        LABEL_GRASHOF => "그라스호프수 Gr",
        LABEL_RAYLEIGH => "레일리수 Ra",
        LABEL_STANTON => "스탠턴수 St",
        LABEL_FILM_COEFF => "경막 열전달계수 h",
        LABEL_CORRELATION => "적용 상관식",
        LABEL_ACENTRIC_DEFINITION => "이심인자 ω (정의식)",
        LABEL_ACENTRIC_EDMISTER => "이심인자 ω (Edmister)",
        LABEL_ACENTRIC_LEE_KESLER => "이심인자 ω (Lee-Kesler)",
        LABEL_ACENTRIC_LIT => "문헌 이심인자 ω",
        LABEL_EVAL_TEMPERATURE => "평가 온도 (Tr=0.7)",
        LABEL_VAPOR_PRESSURE => "증기압 Psat",
        LABEL_REDUCED_T => "환산온도 Tr",
        LABEL_REDUCED_P => "환산압력 Pr",
        LABEL_TEMPERATURE => "온도",
        LABEL_PRESSURE => "압력",
        LABEL_DENSITY => "밀도",
        LABEL_VELOCITY => "유속",
        LABEL_DIAMETER => "내경",
        LABEL_CHAR_LENGTH => "특성 길이",
        LABEL_VISCOSITY => "점도",
        LABEL_WALL_VISCOSITY => "벽면 점도",
        LABEL_CONDUCTIVITY => "열전도율",
        LABEL_SPECIFIC_HEAT => "정압비열",
        LABEL_MASS_FLOW => "질량 유량",
        LABEL_KINEMATIC_VISCOSITY => "동점성계수",
        LABEL_EXPANSION_COEFF => "체적팽창계수",
        LABEL_DELTA_T => "온도차 ΔT",
        LABEL_TUBE_LENGTH => "관 길이",
        LABEL_BOILING_POINT => "정상 끓는점 Tb",
        LABEL_CRITICAL_T => "임계온도 Tc",
        LABEL_CRITICAL_P => "임계압력 Pc",
        LABEL_SUBSTANCE => "물질",
        LABEL_FLUID => "유체",
        LABEL_FLUID_MANUAL => "직접 입력",
        LABEL_FLUID_WATER => "물 프리셋",
        LABEL_FLUID_AIR => "공기 프리셋",
        HELP_DIMENSIONLESS => {
            "도움말: 항목 선택 후 값과 단위를 차례로 입력합니다. 결과 표시 후 파일 저장 여부를 묻습니다."
        }
        HELP_FILM_TUBE => {
            "도움말: Re<2100 층류, 2100≤Re<10⁴ 천이(Hausen), Re≥10⁴ 난류 상관식. 벽면 점도를 넣으면 Sieder-Tate 보정이 가능합니다."
        }
        HELP_THERMO => {
            "도움말: 정의식은 Antoine 상수가 필요하고, Edmister/Lee-Kesler는 Tb·Tc·Pc만으로 계산합니다."
        }
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== ChemEng Study Toolbox ===",
        MAIN_MENU_DIMENSIONLESS => "1) Dimensionless Numbers",
        MAIN_MENU_FILM => "2) Film Heat-Transfer Coefficient",
        MAIN_MENU_THERMO => "3) Acentric Factor & Reduced State",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        DIMENSIONLESS_HEADING => "\n-- Dimensionless Numbers --",
        DIMENSIONLESS_OPTIONS_LINE1 => {
            "1) Reynolds (velocity)  2) Reynolds (mass flow)  3) Reynolds (kinematic)"
        }
        DIMENSIONLESS_OPTIONS_LINE2 => {
            "4) Prandtl  5) Nusselt  6) Grashof  7) Stanton (film coeff)  8) Stanton (Nu/Re·Pr)"
        }
        PROMPT_SELECT => "Select: ",
        FILM_HEADING => "\n-- Film Heat-Transfer Coefficient --",
        FILM_OPTION_TUBE => "1) Forced convection in a tube",
        FILM_OPTION_CROSSFLOW => "2) Crossflow over a cylinder (Churchill-Bernstein)",
        FILM_OPTION_NATURAL => "3) Natural convection, vertical plate (Churchill-Chu)",
        THERMO_HEADING => "\n-- Acentric Factor & Reduced State --",
        THERMO_OPTION_ACENTRIC_DB => "1) Acentric factor (substance DB)",
        THERMO_OPTION_ACENTRIC_MANUAL => "2) Acentric factor (manual input)",
        THERMO_OPTION_REDUCED => "3) Reduced temperature & pressure",
        THERMO_LIST_SUBSTANCES => "Registered substances:",
        PROMPT_TEMPERATURE_VALUE => "Temperature value: ",
        PROMPT_PRESSURE_VALUE => "Pressure value: ",
        PROMPT_DENSITY => "Density value: ",
        PROMPT_VELOCITY => "Velocity value: ",
        PROMPT_DIAMETER => "Tube (cylinder) diameter value: ",
        PROMPT_CHAR_LENGTH => "Characteristic length value: ",
        PROMPT_VISCOSITY => "Viscosity value: ",
        PROMPT_WALL_VISCOSITY => "Viscosity at wall temperature (0 if none): ",
        PROMPT_KINEMATIC_VISCOSITY => "Kinematic viscosity ν [m²/s]: ",
        PROMPT_MASS_FLOW => "Mass flow [kg/s]: ",
        PROMPT_SPECIFIC_HEAT => "Specific heat value: ",
        PROMPT_CONDUCTIVITY => "Thermal conductivity value: ",
        PROMPT_FILM_COEFF => "Film coefficient h [W/(m²·K)]: ",
        PROMPT_EXPANSION_COEFF => "Expansion coefficient β [1/K] (ideal gas: 1/T): ",
        PROMPT_DELTA_T => "Surface-fluid ΔT [K]: ",
        PROMPT_TUBE_LENGTH => "Tube length [m] (0 if none): ",
        PROMPT_REYNOLDS => "Reynolds number: ",
        PROMPT_PRANDTL => "Prandtl number: ",
        PROMPT_PRANDTL_OPTIONAL => "Prandtl number (0 if none): ",
        PROMPT_NUSSELT => "Nusselt number: ",
        PROMPT_DUTY => "Thermal duty (1=heating, 2=cooling): ",
        PROMPT_CORRELATION => {
            "Correlation (1=auto, 2=Dittus-Boelter, 3=Colburn, 4=Sieder-Tate, 5=Stanton analogy): "
        }
        PROMPT_FLUID_SOURCE => "Properties (1=manual, 2=water preset, 3=air preset): ",
        PROMPT_FLUID_SOURCE_NATURAL => "Properties (1=manual, 2=air preset): ",
        PROMPT_WALL_TEMPERATURE => "Wall temperature [°C] (0 if none): ",
        PROMPT_SUBSTANCE => "Substance name (English/Korean/formula): ",
        PROMPT_SUBSTANCE_OR_ENTER => "Substance name (enter for manual): ",
        PROMPT_HAS_ANTOINE => "Enter Antoine constants? (y/N): ",
        PROMPT_BOILING_POINT => "Normal boiling point Tb [K]: ",
        PROMPT_CRITICAL_T => "Critical temperature Tc [K]: ",
        PROMPT_CRITICAL_P => "Critical pressure Pc [bar]: ",
        PROMPT_ANTOINE_A => "Antoine A: ",
        PROMPT_ANTOINE_B => "Antoine B: ",
        PROMPT_ANTOINE_C => "Antoine C: ",
        TEMPERATURE_UNIT_OPTIONS => "Temperature units: 1=°C 2=K 3=°F",
        PRESSURE_UNIT_OPTIONS => "Pressure units: 1=bar 2=kPa 3=MPa 4=atm 5=psi 6=mmHg",
        VISCOSITY_UNIT_OPTIONS => "Viscosity units: 1=Pa·s 2=cP 3=P",
        LENGTH_UNIT_OPTIONS => "Length units: 1=m 2=cm 3=mm 4=in",
        VELOCITY_UNIT_OPTIONS => "Velocity units: 1=m/s 2=ft/s 3=km/h",
        DENSITY_UNIT_OPTIONS => "Density units: 1=kg/m³ 2=g/cm³ 3=lb/ft³",
        CONDUCTIVITY_UNIT_OPTIONS => {
            "Conductivity units: 1=W/(m·K) 2=kcal/(h·m·°C) 3=Btu/(h·ft·°F)"
        }
        SPECIFIC_HEAT_UNIT_OPTIONS => {
            "Specific-heat units: 1=J/(kg·K) 2=kJ/(kg·K) 3=kcal/(kg·°C) 4=Btu/(lb·°F)"
        }
        TITLE_FILM_TUBE => "Tube-side film coefficient",
        TITLE_FILM_CROSSFLOW => "Crossflow film coefficient",
        TITLE_FILM_NATURAL => "Natural-convection film coefficient",
        TITLE_ACENTRIC => "Acentric factor",
        TITLE_REDUCED => "Reduced state",
        RESULT_REGIME => "Flow regime",
        REGIME_LAMINAR => "laminar",
        REGIME_TRANSITIONAL => "transitional",
        REGIME_TURBULENT => "turbulent",
        REPORT_INPUTS => "[Inputs]",
        REPORT_RESULTS => "[Results]",
        REPORT_WARNINGS => "[Caution]",
        REPORT_GENERATED_AT => "Generated:",
        PROMPT_SAVE_REPORT => "Save the result to a file? (y/N): ",
        REPORT_SAVED => "Saved:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_CURRENT_REPORT_DIR => "Report directory:",
        SETTINGS_OPTIONS => "1) Change language  2) Change report directory",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_PROMPT_LANGUAGE => "Language code (ko/en/auto): ",
        SETTINGS_PROMPT_REPORT_DIR => "Report directory path: ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_LANGUAGE_RESTART => "Language change takes effect on next start.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_UNKNOWN_SUBSTANCE => "Substance not found in the database.",
        ERROR_NO_ANTOINE => "No Antoine constants for this substance; definition route unavailable.",
        LABEL_REYNOLDS => "Reynolds number Re",
        LABEL_PRANDTL => "Prandtl number Pr",
        LABEL_NUSSELT => "Nusselt number Nu",
        LABEL_GRASHOF => "Grashof number Gr",
        LABEL_RAYLEIGH => "Rayleigh number Ra",
        LABEL_STANTON => "Stanton number St",
        LABEL_FILM_COEFF => "Film coefficient h",
        LABEL_CORRELATION => "Correlation used",
        LABEL_ACENTRIC_DEFINITION => "Acentric factor ω (definition)",
        LABEL_ACENTRIC_EDMISTER => "Acentric factor ω (Edmister)",
        LABEL_ACENTRIC_LEE_KESLER => "Acentric factor ω (Lee-Kesler)",
        LABEL_ACENTRIC_LIT => "Literature acentric factor ω",
        LABEL_EVAL_TEMPERATURE => "Evaluation temperature (Tr=0.7)",
        LABEL_VAPOR_PRESSURE => "Vapor pressure Psat",
        LABEL_REDUCED_T => "Reduced temperature Tr",
        LABEL_REDUCED_P => "Reduced pressure Pr",
        LABEL_TEMPERATURE => "Temperature",
        LABEL_PRESSURE => "Pressure",
        LABEL_DENSITY => "Density",
        LABEL_VELOCITY => "Velocity",
        LABEL_DIAMETER => "Diameter",
        LABEL_CHAR_LENGTH => "Characteristic length",
        LABEL_VISCOSITY => "Viscosity",
        LABEL_WALL_VISCOSITY => "Wall viscosity",
        LABEL_CONDUCTIVITY => "Thermal conductivity",
        LABEL_SPECIFIC_HEAT => "Specific heat",
        LABEL_MASS_FLOW => "Mass flow",
        LABEL_KINEMATIC_VISCOSITY => "Kinematic viscosity",
        LABEL_EXPANSION_COEFF => "Expansion coefficient",
        LABEL_DELTA_T => "Temperature difference ΔT",
        LABEL_TUBE_LENGTH => "Tube length",
        LABEL_BOILING_POINT => "Normal boiling point Tb",
        LABEL_CRITICAL_T => "Critical temperature Tc",
        LABEL_CRITICAL_P => "Critical pressure Pc",
        LABEL_SUBSTANCE => "Substance",
        LABEL_FLUID => "Fluid",
        LABEL_FLUID_MANUAL => "manual input",
        LABEL_FLUID_WATER => "water preset",
        LABEL_FLUID_AIR => "air preset",
        HELP_DIMENSIONLESS => {
            "Help: pick an item, then enter value and unit in turn. After the result you can save it to a file."
        }
        HELP_FILM_TUBE => {
            "Help: Re<2100 laminar, 2100≤Re<10⁴ transitional (Hausen), Re≥10⁴ turbulent. Wall viscosity enables the Sieder-Tate correction."
        }
        HELP_THERMO => {
            "Help: the definition route needs Antoine constants; Edmister/Lee-Kesler need only Tb, Tc, Pc."
        }
        _ => return None,
    })
}
