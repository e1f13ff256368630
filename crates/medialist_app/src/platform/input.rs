use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

use medialist_core::{MediaType, Msg};

pub const HELP: &str = "commands: movie | tv | 1-4 or `cat N` (category) | more | help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Msg(Msg),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Maps one line typed by the user to an input event.
pub fn parse_command(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }

    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or_default().to_ascii_lowercase();
    let arg = words.next();
    match (head.as_str(), arg) {
        ("quit" | "q" | "exit", None) => Input::Quit,
        ("help" | "?", None) => Input::Help,
        ("more" | "m", None) => Input::Msg(Msg::LoadMoreClicked),
        ("cat" | "category", Some(number)) => category(number, line),
        (word, None) if word.chars().all(|c| c.is_ascii_digit()) => category(word, line),
        (word, None) => match word.parse::<MediaType>() {
            Ok(media_type) => Input::Msg(Msg::RouteChanged(media_type)),
            Err(_) => Input::Unknown(line.to_string()),
        },
        _ => Input::Unknown(line.to_string()),
    }
}

/// Category buttons are numbered from 1 on screen.
fn category(number: &str, line: &str) -> Input {
    match number.parse::<usize>() {
        Ok(n) if n >= 1 => Input::Msg(Msg::CategorySelected(n - 1)),
        _ => Input::Unknown(line.to_string()),
    }
}

/// Forwards parsed stdin lines; end of input is reported as [`Input::Quit`].
pub fn spawn_stdin_reader(tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(parse_command(&line)).is_err() {
                return;
            }
        }
        let _ = tx.send(Input::Quit);
    });
}
