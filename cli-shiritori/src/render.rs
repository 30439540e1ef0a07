use colored::*;
use shiritori::{GameSnapshot, PlayerId, TurnOutcome};

pub fn welcome() -> String {
    format!(
        "{}\n{}\n{}",
        "Shiritori".bright_blue().bold(),
        "Each word must start with the last letter of your opponent's word.".cyan(),
        "Type a word and press Enter, or :help for commands".dimmed(),
    )
}

pub fn help() -> String {
    [
        "Commands:",
        "  <word>     submit a word for the active player",
        "  :status    show scores and word histories",
        "  :help      show this help",
        "  :quit      leave the game",
    ]
    .join("\n")
}

pub fn countdown(remaining: u32, warn_below: u32) -> ColoredString {
    let text = format!("{}s", remaining);
    if remaining < warn_below {
        text.red().bold()
    } else {
        text.green()
    }
}

/// Scores, histories, and whose turn it is
pub fn board(snapshot: &GameSnapshot, warn_below: u32) -> String {
    let mut lines = Vec::new();

    for (id, player) in snapshot.players.iter() {
        let marker = if id == snapshot.active_turn { ">" } else { " " };
        let history = if player.word_history.is_empty() {
            "-".dimmed().to_string()
        } else {
            player.word_history.join(", ")
        };
        lines.push(format!(
            "{} {}  score {:>3}  words: {}",
            marker,
            id.to_string().bold(),
            player.score,
            history
        ));
    }

    lines.push(turn_prompt(snapshot, warn_below));
    lines.join("\n")
}

pub fn turn_prompt(snapshot: &GameSnapshot, warn_below: u32) -> String {
    let hint = match snapshot.required_initial {
        Some(letter) => format!("start with '{}'", letter),
        None => "any word".to_string(),
    };
    format!(
        "{} to play ({}), {} left",
        player_name(snapshot.active_turn).yellow(),
        hint,
        countdown(snapshot.remaining_seconds, warn_below)
    )
}

pub fn outcome_line(outcome: &TurnOutcome) -> Option<String> {
    match outcome {
        TurnOutcome::Accepted { player, word } => {
            Some(format!("{} played {}", player_name(*player), word.green().bold()))
        }
        TurnOutcome::Rejected { player, rejection } => {
            Some(format!("{}: {}", player_name(*player), rejection.to_string().red()))
        }
        TurnOutcome::Forfeited { player } => {
            Some(format!("{} ran out of time", player_name(*player)).red().to_string())
        }
        TurnOutcome::Stale { .. } => None,
    }
}

fn player_name(id: PlayerId) -> String {
    id.to_string()
}
