use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use shelfscan::prelude::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Проверка штрих-кодов ISBN/JAN/EAN: по аргументам или построчно из stdin.
#[derive(Parser, Debug)]
#[command(name = "check_barcode", version, about)]
struct Args {
    /// Коды для проверки (если пусто — читаем stdin)
    codes: Vec<String>,

    /// Режим сканера: печатать только принятые коды этих типов (например, isbn,jan)
    #[arg(long, value_delimiter = ',')]
    accept: Option<Vec<BarcodeType>>,

    /// Вывод JSON, по объекту на строку
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Строка отчёта по одному входу и признак успеха.
///
/// Без `--accept` печатается каждый вход (OK/FAIL). С `--accept` — режим сканера:
/// печатаются только принятые `extract_from_scanned_text` коды, остальные молча
/// считаются неуспехом.
fn report(
    input: &str,
    accept: Option<AcceptedTypes>,
    json: bool,
) -> Result<(Option<String>, bool), serde_json::Error> {
    let Some(set) = accept else {
        let result = validate(input);
        debug!(input, ok = result.is_valid(), kind = %result.kind(), "checked");
        let line = if json {
            serde_json::to_string(&result)?
        } else if result.is_valid() {
            format!("OK   {:<7} {}", result.kind(), result.formatted_code())
        } else {
            format!("FAIL {:<7} {}  ({})", result.kind(), input, result.error_messages().join("; "))
        };
        return Ok((Some(line), result.is_valid()));
    };

    match extract_from_scanned_text(input, set) {
        Some(result) => {
            debug!(input, kind = %result.kind(), "extracted");
            let line = if json {
                serde_json::to_string(&result)?
            } else {
                format!("OK   {:<7} {}", result.kind(), result.formatted_code())
            };
            Ok((Some(line), true))
        }
        None => {
            debug!(input, accepted = ?set, "not_extracted");
            Ok((None, false))
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let accept: Option<AcceptedTypes> = args.accept.map(|v| v.into_iter().collect());

    let inputs: Vec<String> = if args.codes.is_empty() {
        match io::stdin().lock().lines().collect::<Result<Vec<_>, _>>() {
            Ok(lines) => lines.into_iter().filter(|l| !l.trim().is_empty()).collect(),
            Err(e) => {
                eprintln!("Не удалось прочитать stdin: {e}");
                return ExitCode::from(2);
            }
        }
    } else {
        args.codes
    };

    let mut all_ok = true;
    for input in &inputs {
        match report(input, accept, args.json) {
            Ok((line, ok)) => {
                if let Some(line) = line {
                    println!("{line}");
                }
                all_ok &= ok;
            }
            Err(e) => {
                eprintln!("Ошибка сериализации JSON: {e}");
                return ExitCode::from(2);
            }
        }
    }

    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_mode_prints_only_extracted_codes() {
        let books = Some(AcceptedTypes::BOOKS);
        // валидный JAN при --accept isbn: ни SKIP, ни FAIL
        assert_eq!(report("4901301234568", books, false).unwrap(), (None, false));
        assert_eq!(report("abc", books, false).unwrap(), (None, false));
        assert_eq!(
            report("9784798069371", books, false).unwrap(),
            (Some("OK   ISBN    978-4-79806-937-1".to_string()), true)
        );
    }

    #[test]
    fn accept_mode_json_only_for_extracted_codes() {
        let food = Some(AcceptedTypes::FOOD);
        let (line, ok) = report("JAN: 4901301234568", food, true).unwrap();
        assert!(ok);
        let v: serde_json::Value = serde_json::from_str(&line.unwrap()).unwrap();
        assert_eq!(v["type"], "JAN");
        assert_eq!(v["cleanCode"], "4901301234568");
        assert_eq!(report("9784798069371", food, true).unwrap(), (None, false));
    }

    #[test]
    fn plain_mode_reports_every_input() {
        let (line, ok) = report("abc", None, false).unwrap();
        assert!(!ok);
        assert_eq!(line.as_deref(), Some("FAIL UNKNOWN abc  (barcode is empty)"));
        let (line, ok) = report("4901301234568", None, false).unwrap();
        assert!(ok);
        assert_eq!(line.as_deref(), Some("OK   JAN     4-901301-23456-8"));
    }
}
