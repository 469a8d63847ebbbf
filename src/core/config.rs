use serde::Deserialize;
use std::collections::HashMap;

use crate::core::alphabet::Alphabet;
use crate::encoders::errors::{AlphabetNotFoundError, find_closest_alphabet};

/// Configuration for a single alphabet loaded from TOML.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AlphabetConfig {
    /// The characters comprising the alphabet (explicit list)
    #[serde(default)]
    pub chars: String,
    /// Starting character for range-based alphabet definition
    /// Use with `length` to define sequential Unicode ranges
    #[serde(default)]
    pub start: Option<String>,
    /// Number of characters in range-based alphabet
    /// Use with `start` to define sequential Unicode ranges
    #[serde(default)]
    pub length: Option<usize>,
    /// Short human-readable note shown by `basex list`
    #[serde(default)]
    pub description: Option<String>,
}

impl AlphabetConfig {
    /// Returns the effective character set, generating from range if needed.
    ///
    /// Priority:
    /// 1. If `chars` is non-empty, use it directly
    /// 2. If `start` + `length` are set, generate sequential range
    /// 3. Otherwise return an error
    pub fn effective_chars(&self) -> Result<String, String> {
        if !self.chars.is_empty() {
            return Ok(self.chars.clone());
        }

        if let (Some(start_str), Some(length)) = (&self.start, self.length) {
            let start_char = start_str
                .chars()
                .next()
                .ok_or("start must contain at least one character")?;

            return Self::generate_range(start_char as u32, length);
        }

        Err("alphabet needs either `chars` or `start` + `length`".to_string())
    }

    /// Number of symbols this entry defines, without materializing ranges.
    pub fn base(&self) -> usize {
        if !self.chars.is_empty() {
            self.chars.chars().count()
        } else {
            self.length.unwrap_or(0)
        }
    }

    /// Generate a string of sequential Unicode characters from a range.
    fn generate_range(start: u32, length: usize) -> Result<String, String> {
        const MAX_UNICODE: u32 = 0x10FFFF;
        const SURROGATE_START: u32 = 0xD800;
        const SURROGATE_END: u32 = 0xDFFF;

        if length == 0 {
            return Err("length must be greater than 0".to_string());
        }

        let end = u32::try_from(length - 1)
            .ok()
            .and_then(|span| start.checked_add(span))
            .ok_or("range exceeds maximum Unicode codepoint")?;

        if end > MAX_UNICODE {
            return Err(format!(
                "range end U+{:X} exceeds maximum Unicode codepoint U+{:X}",
                end, MAX_UNICODE
            ));
        }

        if start <= SURROGATE_END && end >= SURROGATE_START {
            return Err(format!(
                "range U+{:X}..U+{:X} crosses surrogate gap (U+D800..U+DFFF)",
                start, end
            ));
        }

        (start..=end)
            .map(|codepoint| {
                char::from_u32(codepoint)
                    .ok_or_else(|| format!("invalid codepoint U+{:X}", codepoint))
            })
            .collect()
    }
}

/// Global settings for basex.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Alphabet used when none is given on the command line
    #[serde(default)]
    pub default_alphabet: Option<String>,
}

/// Collection of named alphabets loaded from TOML files.
#[derive(Debug, Deserialize, Default)]
pub struct AlphabetRegistry {
    /// Map of alphabet names to their configurations
    #[serde(default)]
    pub alphabets: HashMap<String, AlphabetConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl AlphabetRegistry {
    /// Parses alphabet configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in alphabets bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../alphabets.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in alphabets (from library)
    /// 2. `~/.config/basex/alphabets.toml` (user overrides)
    /// 3. `./alphabets.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching alphabet names.
    /// A file that fails to parse is reported on stderr and skipped.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("basex").join("alphabets.toml");
            config.merge_file(&user_config_path, "user");
        }

        config.merge_file(std::path::Path::new("alphabets.toml"), "local");

        Ok(config)
    }

    fn merge_file(&mut self, path: &std::path::Path, label: &str) {
        if !path.exists() {
            return;
        }

        match Self::load_from_file(path) {
            Ok(other) => self.merge(other),
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load {} config from {:?}: {}",
                    label, path, e
                );
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` override alphabets with the same name in `self`.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        for (name, alphabet) in other.alphabets {
            self.alphabets.insert(name, alphabet);
        }
        if other.settings.default_alphabet.is_some() {
            self.settings.default_alphabet = other.settings.default_alphabet;
        }
    }

    /// Retrieves an alphabet configuration by name.
    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// Alphabet names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.alphabets.keys().cloned().collect();
        names.sort();
        names
    }

    /// Builds the named alphabet, suggesting a close name when it is missing.
    pub fn build_alphabet(&self, name: &str) -> Result<Alphabet, Box<dyn std::error::Error>> {
        let alphabet_config = self.get_alphabet(name).ok_or_else(|| {
            let suggestion = find_closest_alphabet(name, &self.names());
            AlphabetNotFoundError::new(name, suggestion)
        })?;

        let chars = alphabet_config
            .effective_chars()
            .map_err(|e| format!("Invalid alphabet config '{}': {}", name, e))?;

        Ok(Alphabet::new(&chars))
    }
}
