use super::args::AlphabetArgs;
use basex::{Alphabet, AlphabetRegistry};

/// Resolves the alphabet for a command.
///
/// `--chars` wins over `--alphabet`, which wins over `settings.default_alphabet`.
/// The resolved alphabet must have at least two symbols, wherever it came from.
pub fn resolve_alphabet(
    args: &AlphabetArgs,
    config: &AlphabetRegistry,
) -> Result<Alphabet, Box<dyn std::error::Error>> {
    let (alphabet, source) = if let Some(chars) = &args.chars {
        (Alphabet::new(chars), "--chars".to_string())
    } else {
        let name = args
            .alphabet
            .as_deref()
            .or(config.settings.default_alphabet.as_deref())
            .ok_or("No alphabet given. Use --alphabet NAME or --chars SYMBOLS.")?;
        (config.build_alphabet(name)?, format!("alphabet '{}'", name))
    };

    if alphabet.base() < 2 {
        return Err(format!(
            "{} needs at least two symbols, got {}",
            source,
            alphabet.base()
        )
        .into());
    }

    Ok(alphabet)
}
