use pathdraw_core::{Direction, Input};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Apply(Input),
    Quit,
}

fn named_key(token: &str) -> Option<KeyAction> {
    use Direction::*;
    use KeyAction::*;

    Some(match token {
        "up" | "arrowup" => Apply(Input::Move(Up)),
        "down" | "arrowdown" => Apply(Input::Move(Down)),
        "left" | "arrowleft" => Apply(Input::Move(Left)),
        "right" | "arrowright" => Apply(Input::Move(Right)),
        "reset" | "esc" | "escape" => Apply(Input::Reset),
        "q" | "quit" | "exit" => Quit,
        _ => return None,
    })
}

fn letter_key(letter: char) -> Option<KeyAction> {
    use Direction::*;
    use KeyAction::*;

    Some(match letter {
        'u' => Apply(Input::Move(Up)),
        'd' => Apply(Input::Move(Down)),
        'l' => Apply(Input::Move(Left)),
        'r' => Apply(Input::Move(Right)),
        'x' => Apply(Input::Reset),
        _ => return None,
    })
}

/// Maps one whitespace-free token to actions.
///
/// Named keys match first; otherwise the token is read as a run of single-letter keys
/// (`u`, `d`, `l`, `r`, `x`), so `rrdd` is four moves. Anything else yields nothing.
pub fn parse_token(token: &str) -> Vec<KeyAction> {
    let token = token.to_ascii_lowercase();
    if let Some(action) = named_key(&token) {
        return vec![action];
    }

    let letters: Option<Vec<_>> = token.chars().map(letter_key).collect();
    match letters {
        Some(actions) if !actions.is_empty() => actions,
        _ => {
            log::warn!("ignoring unrecognized key {:?}", token);
            Vec::new()
        }
    }
}

pub fn parse_line(line: &str) -> Vec<KeyAction> {
    line.split_whitespace().flat_map(parse_token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;
    use KeyAction::*;

    #[test]
    fn named_keys_are_case_insensitive() {
        assert_eq!(parse_token("ArrowUp"), vec![Apply(Input::Move(Up))]);
        assert_eq!(parse_token("LEFT"), vec![Apply(Input::Move(Left))]);
        assert_eq!(parse_token("Escape"), vec![Apply(Input::Reset)]);
        assert_eq!(parse_token("quit"), vec![Quit]);
    }

    #[test]
    fn letter_runs_expand() {
        assert_eq!(
            parse_token("rdlx"),
            vec![
                Apply(Input::Move(Right)),
                Apply(Input::Move(Down)),
                Apply(Input::Move(Left)),
                Apply(Input::Reset),
            ]
        );
    }

    #[test]
    fn unknown_tokens_are_dropped() {
        assert!(parse_token("rzd").is_empty());
        assert_eq!(
            parse_line("up jump  r"),
            vec![Apply(Input::Move(Up)), Apply(Input::Move(Right))]
        );
    }
}
