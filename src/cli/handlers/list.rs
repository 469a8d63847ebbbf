use basex::AlphabetRegistry;

const PREVIEW_LEN: usize = 20;

pub fn handle(config: &AlphabetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let default = config.settings.default_alphabet.as_deref();

    println!("Available alphabets:\n");
    for name in config.names() {
        let Some(alphabet_config) = config.get_alphabet(&name) else {
            continue;
        };

        let base = alphabet_config.base();
        let preview: String = match alphabet_config.effective_chars() {
            Ok(chars) => chars.chars().take(PREVIEW_LEN).collect(),
            Err(e) => format!("(invalid: {})", e),
        };
        let suffix = if base > PREVIEW_LEN { "..." } else { "" };
        let marker = if default == Some(name.as_str()) { "*" } else { " " };

        println!(
            "{} {:<12} base-{:<5} {}{}",
            marker, name, base, preview, suffix
        );
        if let Some(description) = &alphabet_config.description {
            println!("               {}", description);
        }
    }

    Ok(())
}
