use std::path::PathBuf;
use std::time::Duration;

use crate::board::{SearchLimits, DEFAULT_MOVE_TIME_MS, MAX_SEARCH_DEPTH};

use super::command::GoParams;

/// Follow-up work the command loop must do after an option changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciOptionAction {
    /// Route search diagnostics to this file, or to the `log` facade when
    /// `None`.
    ReplaceSearchLog(Option<PathBuf>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UciOptions {
    pub move_time_ms: u64,
    pub max_depth: u32,
    pub search_log: Option<PathBuf>,
}

impl Default for UciOptions {
    fn default() -> Self {
        UciOptions {
            move_time_ms: DEFAULT_MOVE_TIME_MS,
            max_depth: MAX_SEARCH_DEPTH,
            search_log: None,
        }
    }
}

impl UciOptions {
    pub fn print(&self) {
        println!("id name minimax_chess {}", env!("CARGO_PKG_VERSION"));
        println!("id author minimax_chess developers");
        println!(
            "option name Move Time type spin default {} min 1 max 3600000",
            self.move_time_ms
        );
        println!(
            "option name Max Depth type spin default {} min 1 max {}",
            self.max_depth, MAX_SEARCH_DEPTH
        );
        println!("option name Search Log type string default <empty>");
        println!("uciok");
    }

    /// Limits for a `go` command, falling back to the configured defaults.
    #[must_use]
    pub fn limits_for(&self, go: GoParams) -> SearchLimits {
        let max_depth = go.depth.unwrap_or(self.max_depth).min(self.max_depth);
        SearchLimits {
            max_time: Duration::from_millis(go.movetime_ms.unwrap_or(self.move_time_ms)),
            max_depth: max_depth.clamp(1, MAX_SEARCH_DEPTH),
        }
    }

    pub fn apply_setoption(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<Option<UciOptionAction>, String> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "move time" => {
                self.move_time_ms = parse_value::<u64>(name, value)?.max(1);
            }
            "max depth" => {
                let depth: u32 = parse_value(name, value)?;
                self.max_depth = depth.clamp(1, MAX_SEARCH_DEPTH);
            }
            "search log" => {
                let path = value
                    .map(str::trim)
                    .filter(|v| !v.is_empty() && *v != "<empty>")
                    .map(PathBuf::from);
                if path != self.search_log {
                    self.search_log = path.clone();
                    return Ok(Some(UciOptionAction::ReplaceSearchLog(path)));
                }
            }
            _ => return Err(format!("unknown option '{}'", name.trim())),
        }
        Ok(None)
    }
}

fn parse_value<T: std::str::FromStr>(name: &str, value: Option<&str>) -> Result<T, String> {
    let raw = value.ok_or_else(|| format!("option '{name}' needs a value"))?;
    raw.trim()
        .parse()
        .map_err(|_| format!("bad value '{raw}' for option '{name}'"))
}

#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.is_empty() || parts[0] != "setoption" {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut mode = "";

    for part in parts.iter().skip(1) {
        match *part {
            "name" if mode.is_empty() => mode = "name",
            "value" if mode == "name" => mode = "value",
            _ => match mode {
                "name" => name_parts.push(part),
                "value" => value_parts.push(part),
                _ => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };

    Some((name, value))
}
