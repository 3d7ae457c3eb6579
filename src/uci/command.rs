/// Search limits given on a `go` line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    pub movetime_ms: Option<u64>,
    pub depth: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    Uci,
    IsReady,
    UciNewGame,
    Position(Vec<String>),
    Go(GoParams),
    Perft(u32),
    SetOption(Vec<String>),
    Display,
    Stop,
    Quit,
    /// Recognised command with arguments that could not be read.
    Malformed { line: String, reason: String },
    Unknown(String),
}

pub fn parse_uci_command(line: &str) -> Option<UciCommand> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.is_empty() {
        return None;
    }

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<String>>();
    let malformed = |reason: &str| UciCommand::Malformed {
        line: trimmed.to_string(),
        reason: reason.to_string(),
    };

    let cmd = match parts[0] {
        "uci" => UciCommand::Uci,
        "isready" => UciCommand::IsReady,
        "ucinewgame" => UciCommand::UciNewGame,
        "position" => UciCommand::Position(owned_parts()),
        "go" => match parse_go(&parts[1..]) {
            Ok(params) => UciCommand::Go(params),
            Err(reason) => malformed(&reason),
        },
        "perft" => match parts.get(1).map(|v| v.parse::<u32>()) {
            Some(Ok(depth)) if depth > 0 => UciCommand::Perft(depth),
            _ => malformed("perft needs a positive depth"),
        },
        "setoption" => UciCommand::SetOption(owned_parts()),
        "d" => UciCommand::Display,
        "stop" => UciCommand::Stop,
        "quit" => UciCommand::Quit,
        _ => UciCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

/// Read `movetime` and `depth`; clock tokens such as `wtime` are skipped
/// together with their values.
fn parse_go(args: &[&str]) -> Result<GoParams, String> {
    let mut params = GoParams::default();
    let mut iter = args.iter();
    while let Some(&key) = iter.next() {
        match key {
            "movetime" => {
                let value = iter.next().ok_or("movetime needs a value")?;
                params.movetime_ms =
                    Some(value.parse().map_err(|_| format!("bad movetime '{value}'"))?);
            }
            "depth" => {
                let value = iter.next().ok_or("depth needs a value")?;
                params.depth = Some(value.parse().map_err(|_| format!("bad depth '{value}'"))?);
            }
            "wtime" | "btime" | "winc" | "binc" | "movestogo" | "nodes" | "mate" => {
                iter.next();
            }
            _ => {}
        }
    }
    Ok(params)
}
