use std::fmt;

/// Characters of the offending input kept for display
const INPUT_DISPLAY_LIMIT: usize = 60;

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character not in the alphabet
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
        valid_chars: String,
    },
}

impl DecodeError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str, valid_chars: &str) -> Self {
        DecodeError::InvalidCharacter {
            char: c,
            position,
            input: truncate_chars(input, INPUT_DISPLAY_LIMIT),
            valid_chars: valid_chars.to_string(),
        }
    }

    /// The offending character.
    pub fn character(&self) -> char {
        match self {
            DecodeError::InvalidCharacter { char, .. } => *char,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidCharacter {
                char: c,
                position,
                input,
                valid_chars,
            } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m invalid character '{}' at position {}",
                        c, position
                    )?;
                } else {
                    writeln!(f, "error: invalid character '{}' at position {}", c, position)?;
                }
                writeln!(f)?;

                // Caret only when the position survived truncation; the
                // kept prefix never includes the "..." marker
                writeln!(f, "  {}", input)?;
                let visible = input.chars().count().min(INPUT_DISPLAY_LIMIT);
                if *position < visible {
                    write!(f, "  {}", " ".repeat(*position))?;
                    if use_color {
                        writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                    } else {
                        writeln!(f, "^")?;
                    }
                }
                writeln!(f)?;

                let hint_chars = truncate_chars(valid_chars, 80);
                if use_color {
                    write!(f, "\x1b[1;36mhint:\x1b[0m valid characters: {}", hint_chars)?;
                } else {
                    write!(f, "hint: valid characters: {}", hint_chars)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Cuts `s` to at most `max` characters, marking the cut with `...`.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_index, _)) => format!("{}...", &s[..byte_index]),
        None => s.to_string(),
    }
}

/// Error when a named alphabet is not in the registry
#[derive(Debug)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(f, "\x1b[1;31merror:\x1b[0m alphabet '{}' not found", self.name)?;
        } else {
            writeln!(f, "error: alphabet '{}' not found", self.name)?;
        }

        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(f, "      run \x1b[1m`basex list`\x1b[0m to see all alphabets")?;
        } else {
            write!(f, "      run `basex list` to see all alphabets")?;
        }

        Ok(())
    }
}

impl std::error::Error for AlphabetNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();
    if s1.is_empty() {
        return len2;
    }
    if len2 == 0 {
        return s1.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name
pub fn find_closest_alphabet(name: &str, available: &[String]) -> Option<String> {
    // 1-2 edits for short names, up to 3 for longer ones
    let threshold = if name.chars().count() < 5 { 2 } else { 3 };

    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for candidate in available {
        let distance = levenshtein_distance(name, candidate);
        if distance < best_distance && distance <= threshold {
            best_distance = distance;
            best_match = Some(candidate.clone());
        }
    }

    best_match
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("base58", "base58"), 0);
        assert_eq!(levenshtein_distance("base58", "base62"), 2);
        assert_eq!(levenshtein_distance("bas58", "base58"), 1);
        assert_eq!(levenshtein_distance("", "base58"), 6);
        assert_eq!(levenshtein_distance("base58", ""), 6);
    }

    #[test]
    fn test_find_closest_alphabet() {
        let names = vec![
            "base58".to_string(),
            "base62".to_string(),
            "base16".to_string(),
            "bech32".to_string(),
        ];

        assert_eq!(find_closest_alphabet("bas58", &names), Some("base58".to_string()));
        assert_eq!(find_closest_alphabet("base63", &names), Some("base62".to_string()));
        assert_eq!(find_closest_alphabet("bech", &names), Some("bech32".to_string()));
        assert_eq!(find_closest_alphabet("hexadecimal", &names), None);
        assert_eq!(find_closest_alphabet("base58", &[]), None);
    }

    #[test]
    fn test_invalid_character_display() {
        let err = DecodeError::invalid_character('0', 3, "abc0def", "123456789ABC");
        let display = strip_ansi(&err.to_string());

        assert!(display.contains("invalid character '0' at position 3"));
        assert!(display.contains("  abc0def\n     ^"));
        assert!(display.contains("hint: valid characters: 123456789ABC"));
        assert_eq!(err.character(), '0');
    }

    #[test]
    fn test_long_input_is_truncated() {
        let input = "a".repeat(100);
        let err = DecodeError::invalid_character('!', 90, &input, "a");
        match &err {
            DecodeError::InvalidCharacter { input, .. } => {
                assert_eq!(input.chars().count(), 63);
                assert!(input.ends_with("..."));
            }
        }
        assert!(!strip_ansi(&err.to_string()).contains('^'));
    }

    #[test]
    fn test_no_caret_under_truncation_marker() {
        let input = "a".repeat(100);
        for position in 60..63 {
            let err = DecodeError::invalid_character('!', position, &input, "a");
            assert!(!strip_ansi(&err.to_string()).contains('^'), "{}", position);
        }

        let err = DecodeError::invalid_character('!', 59, &input, "a");
        let display = strip_ansi(&err.to_string());
        assert!(display.contains(&format!("\n  {}^\n", " ".repeat(59))));
    }

    #[test]
    fn test_untruncated_input_of_limit_length_keeps_caret() {
        let input = "a".repeat(60);
        let err = DecodeError::invalid_character('!', 59, &input, "a");
        assert!(strip_ansi(&err.to_string()).contains('^'));
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_chars("ααααα", 3), "ααα...");
        assert_eq!(truncate_chars("ααα", 3), "ααα");
    }

    #[test]
    fn test_alphabet_not_found_display() {
        let err = AlphabetNotFoundError::new("bas58", Some("base58".to_string()));
        let display = strip_ansi(&err.to_string());

        assert!(display.contains("alphabet 'bas58' not found"));
        assert!(display.contains("did you mean 'base58'?"));
        assert!(display.contains("basex list"));
    }
}
