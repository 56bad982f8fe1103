//! Line-oriented command scripts replayed against a [`Board`].
//!
//! ```text
//! # comment
//! start  | Mexico | Canada
//! update | Mexico | Canada | 0 | 5
//! finish | Mexico | Canada
//! summary
//! ```
//!
//! Fields are separated by `|` and trimmed, so team names may contain spaces.

use anyhow::{bail, Context, Result};
use tracing::warn;

use crate::board::{Board, SummaryEntry};
use crate::error::BoardError;

/// A single scoreboard command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start {
        home: String,
        away: String,
    },
    Finish {
        home: String,
        away: String,
    },
    /// Scores stay signed here; the board rejects negatives.
    Update {
        home: String,
        away: String,
        home_score: i32,
        away_score: i32,
    },
    Summary,
}

impl Command {
    /// Apply to `board`. Only `Summary` yields entries.
    pub fn apply(&self, board: &mut Board) -> Result<Option<Vec<SummaryEntry>>, BoardError> {
        match self {
            Command::Start { home, away } => board.start(home, away).map(|_| None),
            Command::Finish { home, away } => board.finish(home, away).map(|_| None),
            Command::Update {
                home,
                away,
                home_score,
                away_score,
            } => board
                .update_score(home, away, *home_score, *away_score)
                .map(|_| None),
            Command::Summary => Ok(Some(board.summary())),
        }
    }
}

/// A parsed command with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

/// Parse one line. Blank lines and `#` comments give `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    let verb = fields[0].to_lowercase();
    let args = &fields[1..];

    let command = match (verb.as_str(), args) {
        ("start", [home, away]) => Command::Start {
            home: home.to_string(),
            away: away.to_string(),
        },
        ("finish", [home, away]) => Command::Finish {
            home: home.to_string(),
            away: away.to_string(),
        },
        ("update", [home, away, h, a]) => Command::Update {
            home: home.to_string(),
            away: away.to_string(),
            home_score: h
                .parse()
                .with_context(|| format!("invalid home score '{}'", h))?,
            away_score: a
                .parse()
                .with_context(|| format!("invalid away score '{}'", a))?,
        },
        ("summary", []) => Command::Summary,
        ("start" | "finish", _) => {
            bail!("'{}' expects 2 team names, got {} field(s)", verb, args.len())
        }
        ("update", _) => bail!(
            "'update' expects 2 team names and 2 scores, got {} field(s)",
            args.len()
        ),
        ("summary", _) => bail!("'summary' takes no arguments"),
        _ => bail!("unknown command '{}'", fields[0]),
    };
    Ok(Some(command))
}

/// Parse a whole script, stopping at the first malformed line.
pub fn parse_script(src: &str) -> Result<Vec<ScriptLine>> {
    let mut out = Vec::new();
    for (idx, raw) in src.lines().enumerate() {
        let line = idx + 1;
        if let Some(command) = parse_line(raw).with_context(|| format!("line {}", line))? {
            out.push(ScriptLine { line, command });
        }
    }
    Ok(out)
}

/// What a replay produced: one entry list per `summary` command, in order,
/// plus the number of commands the board rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayOutcome {
    pub rejected: usize,
    pub summaries: Vec<Vec<SummaryEntry>>,
}

/// Apply `lines` to `board` in order.
///
/// In strict mode the first rejected command stops the replay with an error
/// naming its line. Otherwise rejections are logged, counted and skipped.
pub fn replay(lines: &[ScriptLine], board: &mut Board, strict: bool) -> Result<ReplayOutcome> {
    let mut outcome = ReplayOutcome::default();
    for line in lines {
        match line.command.apply(board) {
            Ok(Some(entries)) => outcome.summaries.push(entries),
            Ok(None) => {}
            Err(e) if strict => {
                return Err(e).with_context(|| format!("line {}", line.line));
            }
            Err(e) => {
                outcome.rejected += 1;
                warn!("line {}: {}", line.line, e);
            }
        }
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_with_spaces_in_names() {
        let cmd = parse_line("start | Costa Rica | South Korea").unwrap();
        assert_eq!(
            cmd,
            Some(Command::Start {
                home: "Costa Rica".into(),
                away: "South Korea".into()
            })
        );
    }

    #[test]
    fn test_parse_verb_is_case_insensitive() {
        assert_eq!(parse_line("SUMMARY").unwrap(), Some(Command::Summary));
    }

    #[test]
    fn test_parse_update_keeps_negative_scores() {
        let cmd = parse_line("update|A|B|-1|2").unwrap();
        assert_eq!(
            cmd,
            Some(Command::Update {
                home: "A".into(),
                away: "B".into(),
                home_score: -1,
                away_score: 2
            })
        );
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# start | A | B").unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_line("start | OnlyOne").is_err());
        assert!(parse_line("update | A | B | x | 1").is_err());
        assert!(parse_line("summary | extra").is_err());
        assert!(parse_line("kickoff | A | B").is_err());
    }

    #[test]
    fn test_parse_script_reports_line_number() {
        let err = parse_script("start | A | B\n\nbogus\n").unwrap_err();
        assert_eq!(err.to_string(), "line 3");
        assert!(format!("{:#}", err).contains("unknown command 'bogus'"));
    }

    #[test]
    fn test_parse_script_line_numbers() {
        let lines = parse_script("# header\nstart | A | B\n\nsummary\n").unwrap();
        let numbers: Vec<usize> = lines.iter().map(|l| l.line).collect();
        assert_eq!(numbers, vec![2, 4]);
    }

    #[test]
    fn test_apply_replays_against_board() {
        let script = "start | Mexico | Canada\n\
                      update | Mexico | Canada | 0 | 5\n\
                      start | Spain | Brazil\n\
                      update | Spain | Brazil | 10 | 2\n\
                      summary\n";
        let mut board = Board::new();
        let mut last = None;
        for line in parse_script(script).unwrap() {
            if let Some(entries) = line.command.apply(&mut board).unwrap() {
                last = Some(entries);
            }
        }
        let lines: Vec<String> = last.unwrap().iter().map(|e| e.to_string()).collect();
        assert_eq!(lines, vec!["Spain 10 - Brazil 2", "Mexico 0 - Canada 5"]);
    }

    #[test]
    fn test_apply_surfaces_board_errors() {
        let mut board = Board::new();
        let cmd = Command::Finish {
            home: "A".into(),
            away: "B".into(),
        };
        assert!(matches!(
            cmd.apply(&mut board),
            Err(BoardError::MatchNotFound { .. })
        ));
    }

    const MIXED: &str = "start | A | B\n\
                         update | A | B | -1 | 0\n\
                         update | B | A | 1 | 1\n\
                         summary\n\
                         update | A | B | 2 | 1\n";

    #[test]
    fn test_replay_strict_stops_at_first_rejection() {
        let lines = parse_script(MIXED).unwrap();
        let mut board = Board::new();
        let err = replay(&lines, &mut board, true).unwrap_err();

        assert_eq!(err.to_string(), "line 2");
        assert!(matches!(
            err.downcast_ref::<BoardError>(),
            Some(BoardError::InvalidScore {
                home_score: -1,
                away_score: 0
            })
        ));
        // Nothing after line 2 was applied
        assert_eq!(board.summary()[0].to_string(), "A 0 - B 0");
    }

    #[test]
    fn test_replay_lenient_counts_and_continues() {
        let lines = parse_script(MIXED).unwrap();
        let mut board = Board::new();
        let outcome = replay(&lines, &mut board, false).unwrap();

        assert_eq!(outcome.rejected, 2);
        assert_eq!(outcome.summaries.len(), 1);
        assert_eq!(outcome.summaries[0][0].to_string(), "A 0 - B 0");
        // The update after the summary still ran
        assert_eq!(board.summary()[0].to_string(), "A 2 - B 1");
    }

    #[test]
    fn test_replay_clean_script_rejects_nothing() {
        let lines = parse_script("start | A | B\nfinish | A | B\nsummary\n").unwrap();
        let mut board = Board::new();
        let outcome = replay(&lines, &mut board, true).unwrap();
        assert_eq!(outcome.rejected, 0);
        assert_eq!(outcome.summaries, vec![Vec::new()]);
        assert!(board.is_empty());
    }

    #[test]
    fn test_summary_json_output() {
        let lines = parse_script("start | Mexico | Canada\n").unwrap();
        let mut board = Board::new();
        replay(&lines, &mut board, true).unwrap();
        assert_eq!(
            serde_json::to_string(&board.summary()).unwrap(),
            r#"[{"homeTeam":"Mexico","homeScore":0,"awayTeam":"Canada","awayScore":0}]"#
        );
    }
}
