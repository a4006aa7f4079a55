//! 계산 결과를 텍스트 보고서로 정리하고 파일로 저장한다.
//! 파일 이름은 `<슬러그>_<YYYYMMDD_HHMMSS>.txt` 형식이다.

use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::{keys, Translator};

/// 보고서 저장 오류.
#[derive(Debug)]
pub enum ReportError {
    Io(std::io::Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Io(e) => write!(f, "파일 저장 실패: {e}"),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<std::io::Error> for ReportError {
    fn from(value: std::io::Error) -> Self {
        ReportError::Io(value)
    }
}

/// 보고서 한 줄 (라벨: 값).
#[derive(Debug, Clone)]
pub struct ReportLine {
    pub label: String,
    pub value: String,
}

/// 계산 한 건의 입력·결과·주의 묶음.
#[derive(Debug, Clone)]
pub struct Report {
    /// 파일 이름에 쓰는 ASCII 슬러그 (예: "reynolds")
    slug: &'static str,
    title: String,
    inputs: Vec<ReportLine>,
    results: Vec<ReportLine>,
    warnings: Vec<String>,
}

impl Report {
    pub fn new(slug: &'static str, title: impl Into<String>) -> Self {
        Self {
            slug,
            title: title.into(),
            inputs: Vec::new(),
            results: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn slug(&self) -> &'static str {
        self.slug
    }

    pub fn push_input(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.inputs.push(ReportLine {
            label: label.into(),
            value: value.into(),
        });
    }

    pub fn push_result(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.results.push(ReportLine {
            label: label.into(),
            value: value.into(),
        });
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn extend_warnings(&mut self, warnings: &[String]) {
        self.warnings.extend_from_slice(warnings);
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// 화면 출력과 파일 저장에 같이 쓰는 텍스트를 만든다.
    pub fn render(&self, tr: &Translator) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== {} ===\n", self.title));
        out.push_str(&format!(
            "{} {}\n",
            tr.t(keys::REPORT_GENERATED_AT),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        ));

        if !self.inputs.is_empty() {
            out.push('\n');
            out.push_str(tr.t(keys::REPORT_INPUTS));
            out.push('\n');
            for line in &self.inputs {
                out.push_str(&format!("  {}: {}\n", line.label, line.value));
            }
        }

        out.push('\n');
        out.push_str(tr.t(keys::REPORT_RESULTS));
        out.push('\n');
        for line in &self.results {
            out.push_str(&format!("  {}: {}\n", line.label, line.value));
        }

        if !self.warnings.is_empty() {
            out.push('\n');
            out.push_str(tr.t(keys::REPORT_WARNINGS));
            out.push('\n');
            for warning in &self.warnings {
                out.push_str(&format!("  - {warning}\n"));
            }
        }

        out
    }
}

/// 보고서를 타임스탬프 파일로 저장하고 경로를 돌려준다.
/// 폴더가 없으면 만든다.
pub fn save_report(report: &Report, tr: &Translator, dir: &Path) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(dir)?;
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("{}_{}.txt", report.slug(), timestamp);
    let path = dir.join(filename);
    fs::write(&path, report.render(tr))?;
    Ok(path)
}
