//! 보고서 렌더링과 파일 저장 회귀 테스트.
use std::fs;

use chemeng_study_toolbox::i18n::Translator;
use chemeng_study_toolbox::report::{save_report, Report};

fn sample_report() -> Report {
    let mut rpt = Report::new("reynolds", "레이놀즈수 (Re)");
    rpt.push_input("밀도 [kg/m³]", "1000");
    rpt.push_input("유속 [m/s]", "1");
    rpt.push_result("Re", "100000");
    rpt.push_result("유동 영역", "난류");
    rpt
}

#[test]
fn render_korean_sections() {
    let mut rpt = sample_report();
    rpt.push_warning("테스트 경고");
    let text = rpt.render(&Translator::new("ko"));

    assert!(text.starts_with("=== 레이놀즈수 (Re) ===\n"), "{text}");
    assert!(text.contains("작성 시각:"), "{text}");
    assert!(text.contains("[입력]"), "{text}");
    assert!(text.contains("  밀도 [kg/m³]: 1000\n"), "{text}");
    assert!(text.contains("[결과]"), "{text}");
    assert!(text.contains("  Re: 100000\n"), "{text}");
    assert!(text.contains("[주의]"), "{text}");
    assert!(text.contains("  - 테스트 경고\n"), "{text}");
}

#[test]
fn render_omits_empty_warning_section() {
    let text = sample_report().render(&Translator::new("ko"));
    assert!(!text.contains("[주의]"), "{text}");
}

#[test]
fn render_english_pack() {
    let mut rpt = sample_report();
    rpt.push_warning("caution line");
    let text = rpt.render(&Translator::new("en"));

    assert!(text.contains("Generated:"), "{text}");
    assert!(text.contains("[Inputs]"), "{text}");
    assert!(text.contains("[Results]"), "{text}");
    assert!(text.contains("[Caution]"), "{text}");
}

#[test]
fn translator_falls_back_for_unknown_key() {
    let tr = Translator::new("ko");
    assert_eq!(tr.t("no.such.key"), "[missing translation]");
    // 영어 번역이 없는 키는 한국어로 폴백한다.
    let tr = Translator::new("en");
    assert_eq!(tr.t("no.such.key"), "[missing translation]");
}

#[test]
fn save_report_writes_timestamped_file() {
    let dir = std::env::temp_dir().join(format!("chemeng_report_test_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let tr = Translator::new("ko");
    let rpt = sample_report();
    let path = save_report(&rpt, &tr, &dir).expect("save");

    let name = path.file_name().and_then(|n| n.to_str()).expect("file name");
    assert!(name.starts_with("reynolds_"), "{name}");
    assert!(name.ends_with(".txt"), "{name}");

    let content = fs::read_to_string(&path).expect("read back");
    assert!(content.contains("=== 레이놀즈수 (Re) ==="), "{content}");
    assert!(content.contains("  Re: 100000\n"), "{content}");

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn save_report_creates_missing_directory() {
    let dir = std::env::temp_dir()
        .join(format!("chemeng_report_test_{}_nested", std::process::id()))
        .join("a")
        .join("b");
    let _ = fs::remove_dir_all(&dir);

    let tr = Translator::new("ko");
    let rpt = sample_report();
    let path = save_report(&rpt, &tr, &dir).expect("save into nested dir");
    assert!(path.exists());

    let root = std::env::temp_dir().join(format!("chemeng_report_test_{}_nested", std::process::id()));
    fs::remove_dir_all(&root).expect("cleanup");
}
