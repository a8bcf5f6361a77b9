use super::print::{print_messages, print_result};
use super::setup::{init_tracing_subscriber, Cli};
use clap::Parser;
use directories::ProjectDirs;
use qualifier::api::{CmdMessage, QualifierApi};
use qualifier::config::QualifierConfig;
use qualifier::error::Result;
use qualifier::store::memory::InMemoryStore;
use qualifier::store::QuoteStore;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// Runs every command line and returns how many of them failed.
pub fn run() -> Result<usize> {
    let cli = Cli::parse();
    init_tracing_subscriber(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let mut api = QualifierApi::with_config(InMemoryStore::new(), &config);

    if cli.commands.is_empty() {
        tracing::debug!("reading commands from stdin");
        run_lines(&mut api, io::stdin().lock().lines())
    } else {
        run_lines(&mut api, cli.commands.into_iter().map(Ok))
    }
}

fn load_config(explicit: Option<&Path>) -> Result<QualifierConfig> {
    let dir: Option<PathBuf> = match explicit {
        Some(dir) => Some(dir.to_path_buf()),
        None => ProjectDirs::from("", "", "qualifier").map(|d| d.config_dir().to_path_buf()),
    };

    match dir {
        Some(dir) => QualifierConfig::load(dir),
        None => Ok(QualifierConfig::default()),
    }
}

fn run_lines<S, I>(api: &mut QualifierApi<S>, lines: I) -> Result<usize>
where
    S: QuoteStore,
    I: Iterator<Item = io::Result<String>>,
{
    let mut failures = 0;
    for line in lines {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                tracing::info!(error = %e, "unreadable command line");
                print_messages(&[CmdMessage::error(format!("Error: {}", e))]);
                failures += 1;
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        if !handle_line(api, line) {
            failures += 1;
        }
    }
    Ok(failures)
}

fn handle_line<S: QuoteStore>(api: &mut QualifierApi<S>, line: &str) -> bool {
    match api.run_command(line) {
        Ok(result) => {
            print_result(&result);
            true
        }
        Err(e) => {
            tracing::info!(%line, error = %e, "command failed");
            print_messages(&[CmdMessage::error(format!("Error: {}", e))]);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn lines(input: &[&str]) -> impl Iterator<Item = io::Result<String>> {
        input
            .iter()
            .map(|s| Ok(s.to_string()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn counts_failed_lines() {
        let mut api = QualifierApi::new(InMemoryStore::new());
        let failures = run_lines(
            &mut api,
            lines(&[r#"quote "a""#, "bogus", r#"quote uwu "xyz""#, "quote list"]),
        )
        .unwrap();

        assert_eq!(failures, 2);
        assert_eq!(api.store().len(), 1);
    }

    #[test]
    fn invalid_utf8_line_fails_alone() {
        let mut api = QualifierApi::new(InMemoryStore::new());
        let input = Cursor::new(&b"quote \"a\"\nquote \"\xff\"\nquote \"b\"\n"[..]);
        let failures = run_lines(&mut api, input.lines()).unwrap();

        assert_eq!(failures, 1);
        assert_eq!(api.store().list_quotes().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn skips_blank_lines_and_carriage_returns() {
        let mut api = QualifierApi::new(InMemoryStore::new());
        let failures = run_lines(&mut api, lines(&["", "   ", "quote \"a\"\r"])).unwrap();

        assert_eq!(failures, 0);
        assert_eq!(api.store().list_quotes().unwrap(), vec!["a"]);
    }

    #[test]
    fn explicit_config_dir_is_used() {
        let temp_dir = tempfile::tempdir().unwrap();
        QualifierConfig { max_length: 10 }
            .save(temp_dir.path())
            .unwrap();

        let config = load_config(Some(temp_dir.path())).unwrap();
        assert_eq!(config.max_length, 10);
    }
}
