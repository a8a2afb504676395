// Console host for the summarizer core.
// One session per process; reads commands and chat messages from stdin.

use anyhow::Context;
use medreport_core::telemetry::{init_tracing, LogFormat};
use medreport_core::text_extract::read_report_bytes;
use medreport_core::{AppError, ChatDispatcher, ReportConfig, SessionContext};
use std::io::{self, BufRead, Write};
use tracing::{error, info};

const HELP: &str = "Commands:
  :load <path>   use a report file (like an upload)
  :paste         paste report text, finish with a line containing :end
  :summarize     summarize the current report
  :sentences <n> summary length for later requests (1-10)
  :history       show recent history as JSON
  :quit          leave
Anything else is sent to the chat.";

fn main() -> anyhow::Result<()> {
    let format = LogFormat::from_env()?;
    init_tracing("medreport", format)?;

    let config = ReportConfig::from_env().context("Invalid MEDREPORT_* configuration")?;
    info!(?config, "Starting console host");

    let dispatcher = ChatDispatcher::from_config(&config);
    let mut session = SessionContext::new();
    let mut max_sentences = config.max_sentences;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", HELP)?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let input = line.trim();

        match input {
            "" => continue,
            ":quit" => break,
            ":paste" => {
                let mut pasted = Vec::new();
                for line in lines.by_ref() {
                    let line = line?;
                    if line.trim() == ":end" {
                        break;
                    }
                    pasted.push(line);
                }
                session.load_report(None, Some(&pasted.join("\n")));
                writeln!(stdout, "Report text set ({} characters).", session.report_text().len())?;
            }
            ":summarize" => {
                session.summarize_report_with_limit(dispatcher.analyzer(), max_sentences);
                if let Some(record) = session.recent(1).first() {
                    write!(stdout, "{}", record)?;
                }
            }
            ":history" => {
                let recent = session.recent(config.history_limit);
                writeln!(stdout, "{}", serde_json::to_string_pretty(&recent)?)?;
            }
            _ => {
                if let Some(raw) = input.strip_prefix(":sentences ") {
                    let requested = raw
                        .trim()
                        .parse::<usize>()
                        .map_err(|e| AppError::Validation(e.to_string()))
                        .and_then(|n| config.with_max_sentences(n));
                    match requested {
                        Ok(updated) => {
                            max_sentences = updated.max_sentences;
                            writeln!(stdout, "Summaries keep up to {} sentences.", max_sentences)?;
                        }
                        Err(e) => writeln!(stdout, "Invalid sentence count: {}", e)?,
                    }
                    continue;
                }

                if let Some(path) = input.strip_prefix(":load ") {
                    match read_report_bytes(path.trim()) {
                        Ok(bytes) => {
                            session.load_report(Some(&bytes), None);
                            writeln!(stdout, "Loaded {} characters.", session.report_text().len())?;
                        }
                        Err(e) => {
                            error!("Failed to load report: {}", e);
                            writeln!(stdout, "Could not read {}: {}", path.trim(), e)?;
                        }
                    }
                    continue;
                }

                dispatcher.handle_with_limit(&mut session, input, max_sentences);
                if let Some(record) = session.recent(1).first() {
                    write!(stdout, "{}", record)?;
                }
            }
        }
    }

    info!(
        session_id = %session.id(),
        records = session.history().len(),
        "Session ended"
    );
    Ok(())
}
