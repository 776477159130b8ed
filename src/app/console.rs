use std::io::{IsTerminal, Write};

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::args::MAX_RUN_COUNT;

/// Fallback when the terminal width cannot be queried, e.g. output is piped.
const DEFAULT_WIDTH: usize = 80;

/// Prints `[ERROR] {message}` to stdout, the tag in dark red on a terminal.
pub(crate) fn write_error(message: &str) {
    let mut out = std::io::stdout();
    let colored = out.is_terminal()
        && execute!(
            out,
            SetForegroundColor(Color::DarkRed),
            Print("[ERROR] "),
            ResetColor
        )
        .is_ok();
    if !colored {
        print!("[ERROR] ");
    }
    println!("{}", message);
    drop(out.flush());
}

/// The free-form notes printed after the option list.
pub(crate) fn print_help_notes() {
    let width = crossterm::terminal::size()
        .ok()
        .map(|(cols, _)| usize::from(cols))
        .filter(|cols| *cols > 0)
        .unwrap_or(DEFAULT_WIDTH);

    for note in help_notes() {
        println!();
        for line in word_wrap(&note, width) {
            println!("{}", line);
        }
    }
    println!();
}

fn help_notes() -> [String; 3] {
    [
        "If a value for one of the options has spaces in it, you can use quotation marks \
         around the string, like so: \"this will all be the same value\""
            .to_owned(),
        "Number of users and repetitions pr. user determines the total number of requests \
         that will be performed. They both default to 10, which means 100 total requests."
            .to_owned(),
        format!(
            "For both options -s and -r you can supply -1 as a value to indicate it to use the \
             max value of a int64, which is {}, which will basically run forever. Press Ctrl+C \
             to stop such a run early and still get the report.",
            MAX_RUN_COUNT
        ),
    ]
}

/// Breaks `message` between words so no line exceeds `width` columns. A
/// single word longer than `width` gets a line of its own.
pub(crate) fn word_wrap(message: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in message.split_whitespace() {
        let needed = if current.is_empty() {
            word.len()
        } else {
            current.len().saturating_add(1).saturating_add(word.len())
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
