//! jamo-search - 한글 조합 중 검색어 매칭 / 연락처 정규화 CLI

use clap::{Parser, Subcommand};
use jamo_search::config::{load_config, load_config_from};
use jamo_search::{format_korean_phone_number, parse_contact, Searcher};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "jamo-search", about = "한글 조합 중 검색어 매칭 도구")]
struct Cli {
    /// 설정 파일 경로 (기본: $JAMO_SEARCH_CONFIG 또는 ~/.config/jamo-search/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 로그 상세도 (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 후보 목록(한 줄에 하나)에서 검색어와 일치하는 줄 출력
    Match {
        query: String,
        /// 후보 파일 (없으면 표준 입력)
        #[arg(long)]
        file: Option<PathBuf>,
        /// 최대 결과 수 (설정값 덮어쓰기, 0 = 제한 없음)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// 검색어가 조합 중(마지막 음절에 종성)인지 출력
    Composing { query: String },
    /// 전화번호 정규화
    Phone { value: String },
    /// 자유 형식 텍스트에서 이메일/전화번호 추출 (JSON)
    Contact { text: String },
}

fn read_candidates(file: Option<&PathBuf>) -> io::Result<Vec<String>> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    reader
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .collect()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 로깅 초기화 (기본 warn, RUST_LOG 우선)
    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut config = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };

    match cli.command {
        Command::Match { query, file, limit } => {
            if let Some(limit) = limit {
                config.result_limit = limit;
            }
            let candidates = match read_candidates(file.as_ref()) {
                Ok(candidates) => candidates,
                Err(e) => {
                    eprintln!("후보 목록 읽기 실패: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            log::info!("후보 {}개에서 '{}' 검색", candidates.len(), query);

            let searcher = Searcher::new(config);
            for found in searcher.filter(&query, &candidates, |line| [line.as_str()]) {
                println!("{}", found);
            }
            ExitCode::SUCCESS
        }
        Command::Composing { query } => {
            println!("{}", Searcher::new(config).is_composing(&query));
            ExitCode::SUCCESS
        }
        Command::Phone { value } => match format_korean_phone_number(&value) {
            Some(formatted) => {
                println!("{}", formatted);
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("전화번호로 인식할 수 없음: {}", value);
                ExitCode::FAILURE
            }
        },
        Command::Contact { text } => match serde_json::to_string_pretty(&parse_contact(&text)) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("JSON 직렬화 실패: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}
