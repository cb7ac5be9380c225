use crate::domain::entities::{EnqueueOutcome, Log, LogKind};
use crate::presentation::EventFilterController;
use anyhow::{Context, Result};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const HELP: &str = "commands: start | enable | disable | toggle | status | stats | delivered | \
                    track <kind> <name> [key=value ...] | help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Start,
    Enable,
    Disable,
    Toggle,
    Status,
    Stats,
    Delivered,
    Track(Log),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("unknown log kind: {0}")]
    UnknownLogKind(String),
    #[error("invalid property, expected key=value: {0}")]
    InvalidProperty(String),
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut parts = line.split_whitespace();
        let command = parts.next().ok_or(ParseError::Empty)?;

        match command.to_ascii_lowercase().as_str() {
            "start" => Ok(ConsoleCommand::Start),
            "enable" | "on" => Ok(ConsoleCommand::Enable),
            "disable" | "off" => Ok(ConsoleCommand::Disable),
            "toggle" => Ok(ConsoleCommand::Toggle),
            "status" => Ok(ConsoleCommand::Status),
            "stats" => Ok(ConsoleCommand::Stats),
            "delivered" => Ok(ConsoleCommand::Delivered),
            "help" | "?" => Ok(ConsoleCommand::Help),
            "quit" | "exit" => Ok(ConsoleCommand::Quit),
            "track" => {
                let kind = parts.next().ok_or(ParseError::MissingArgument("kind"))?;
                let kind: LogKind = kind
                    .parse()
                    .map_err(|_| ParseError::UnknownLogKind(kind.to_string()))?;
                let name = parts.next().ok_or(ParseError::MissingArgument("name"))?;

                let mut log = Log::new(kind, name);
                for property in parts {
                    let (key, value) = property
                        .split_once('=')
                        .ok_or_else(|| ParseError::InvalidProperty(property.to_string()))?;
                    log = log.with_property(key, value);
                }
                Ok(ConsoleCommand::Track(log))
            }
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

/// Reads commands line by line until `quit` or end of input.
pub async fn run<R, W>(controller: &EventFilterController, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await.context("Failed to read command")? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = match ConsoleCommand::parse(&line) {
            Ok(ConsoleCommand::Quit) => break,
            Ok(command) => execute(controller, command).await,
            Err(e) => {
                tracing::warn!("Rejected console input '{}': {}", line.trim(), e);
                format!("error: {}", e)
            }
        };

        writer
            .write_all(format!("{}\n", reply).as_bytes())
            .await
            .context("Failed to write reply")?;
    }

    writer.flush().await.context("Failed to flush output")?;
    Ok(())
}

async fn execute(controller: &EventFilterController, command: ConsoleCommand) -> String {
    match command {
        ConsoleCommand::Start => match controller.load().await {
            Ok(enabled) => format!(
                "event filter started ({})",
                if enabled { "enabled" } else { "disabled" }
            ),
            Err(e) => format!("error: {}", e),
        },
        ConsoleCommand::Enable => {
            controller.set_enabled(true).await;
            "event filter enabled".to_string()
        }
        ConsoleCommand::Disable => {
            controller.set_enabled(false).await;
            "event filter disabled".to_string()
        }
        ConsoleCommand::Toggle => {
            let enabled = controller.toggle().await;
            format!("event filter {}", if enabled { "enabled" } else { "disabled" })
        }
        ConsoleCommand::Status => controller.status().await.to_string(),
        ConsoleCommand::Stats => {
            let status = controller.status().await;
            format!("delivered: {}, filtered: {}", status.delivered, status.filtered)
        }
        ConsoleCommand::Delivered => {
            let logs = controller.delivered();
            if logs.is_empty() {
                "no logs delivered".to_string()
            } else {
                logs.iter()
                    .map(|log| format!("{} '{}'", log.kind, log.name))
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }
        ConsoleCommand::Track(log) => {
            let label = format!("{} '{}'", log.kind, log.name);
            match controller.track(log) {
                Ok(EnqueueOutcome::Delivered) => format!("delivered {}", label),
                Ok(EnqueueOutcome::Filtered) => format!("filtered {}", label),
                Err(e) => format!("error: {}", e),
            }
        }
        ConsoleCommand::Help => HELP.to_string(),
        ConsoleCommand::Quit => String::new(),
    }
}
