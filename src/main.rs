use chemeng_study_toolbox::{app, config, i18n};
use clap::Parser;

/// 명령행 옵션. 언어와 보고서 저장 폴더만 노출한다.
#[derive(Parser, Debug)]
#[command(name = "chemeng_study_toolbox")]
#[command(about = "화학공학 학습용 계산 콘솔 (무차원수/경막계수/이심인자)")]
#[command(version)]
struct Args {
    /// 표시 언어 (auto/ko/en)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,

    /// 보고서 저장 폴더. 지정하면 설정 파일 값보다 우선한다.
    #[arg(long)]
    report_dir: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut cfg = config::load_or_default()?;
    if let Some(dir) = args.report_dir {
        cfg.report_dir = dir;
    }
    let lang = i18n::resolve_language(&args.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, None);
    app::run(&mut cfg, &tr)?;
    Ok(())
}
