//! Terminal prompts shared by the interactive commands

use std::io::{self, BufRead, Write};

use crate::error::{BarberError, BarberResult};

/// Prompt for a line of input, trimmed
///
/// Closed stdin is an error so interactive loops cannot spin forever.
pub fn prompt_string(prompt: &str) -> BarberResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().lock().read_line(&mut input)?;
    if read == 0 {
        return Err(BarberError::Io("Input closed".into()));
    }

    Ok(input.trim().to_string())
}

/// Prompt for a value that may not be empty, re-asking until one is given
pub fn prompt_required(prompt: &str) -> BarberResult<String> {
    loop {
        let value = prompt_string(prompt)?;
        if !value.is_empty() {
            return Ok(value);
        }
        println!("Este campo es obligatorio.");
    }
}

/// Prompt for a password without echo
pub fn prompt_password(prompt: &str) -> BarberResult<String> {
    rpassword::prompt_password(prompt)
        .map_err(|e| BarberError::Io(format!("Failed to read password: {}", e)))
}

/// Yes/no question; empty input takes `default`
pub fn confirm(prompt: &str, default: bool) -> BarberResult<bool> {
    let suffix = if default { "[S/n]" } else { "[s/N]" };
    let answer = prompt_string(&format!("{} {}: ", prompt, suffix))?;
    Ok(parse_yes_no(&answer).unwrap_or(default))
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "s" | "si" | "sí" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Parse a 1-based menu choice into an index into a list of `len` items
pub fn parse_choice(input: &str, len: usize) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}

/// Parse a list like `1, 3 4` into indices; any invalid entry rejects the whole list
pub fn parse_choices(input: &str, len: usize) -> Option<Vec<usize>> {
    let picks: Option<Vec<usize>> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| parse_choice(part, len))
        .collect();
    picks.filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice_bounds() {
        assert_eq!(parse_choice("1", 3), Some(0));
        assert_eq!(parse_choice(" 3 ", 3), Some(2));
        assert_eq!(parse_choice("0", 3), None);
        assert_eq!(parse_choice("4", 3), None);
        assert_eq!(parse_choice("x", 3), None);
    }

    #[test]
    fn test_parse_choices_list() {
        assert_eq!(parse_choices("1, 3 2", 3), Some(vec![0, 2, 1]));
        assert_eq!(parse_choices("1,9", 3), None);
        assert_eq!(parse_choices("  ", 3), None);
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(parse_yes_no("Sí"), Some(true));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no(""), None);
    }
}
