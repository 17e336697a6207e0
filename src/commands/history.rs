use chrono::{DateTime, Local};

use super::send;
use crate::cli::HistoryCommands;
use crate::client::{HistoryEntry, Session};
use crate::error::ClientError;

pub async fn run(session: &mut Session, command: HistoryCommands) -> Result<(), ClientError> {
    match command {
        HistoryCommands::List => {
            if session.history.is_empty() {
                println!("No requests yet.");
            }
            for entry in session.history.entries() {
                println!("{}", summary_line(entry));
            }
        }
        HistoryCommands::Show { id } => {
            let entry = session
                .history
                .get(id)
                .ok_or(ClientError::UnknownHistoryEntry(id))?;
            println!("{}", crate::client::viewer::pretty_json(entry));
        }
        HistoryCommands::Replay { id } => {
            session.replay(id)?;
            send::run(session).await?;
        }
        HistoryCommands::Curl { id } => {
            session.replay(id)?;
            println!("{}", session.curl());
        }
        HistoryCommands::Clear => {
            session.clear_history()?;
            println!("History cleared.");
        }
    }
    Ok(())
}

/// `<id>  <local time>  <METHOD> <url>`
pub fn summary_line(entry: &HistoryEntry) -> String {
    let when = DateTime::from_timestamp_millis(entry.id)
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    format!("{}  {}  {:<6} {}", entry.id, when, entry.method.as_str(), entry.url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::HttpMethod;

    #[test]
    fn test_summary_line_contains_method_and_url() {
        let entry = HistoryEntry {
            id: 1_700_000_000_000,
            method: HttpMethod::Post,
            url: "https://example.com/items".to_string(),
            headers: Vec::new(),
            body: String::new(),
        };
        let line = summary_line(&entry);
        assert!(line.starts_with("1700000000000  "));
        assert!(line.ends_with("POST   https://example.com/items"));
    }
}
