use crate::cli::{
    args::DecodeArgs,
    commands::{read_input, write_output},
    config::resolve_alphabet,
    global::GlobalArgs,
};
use basex::AlphabetRegistry;

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let alphabet = resolve_alphabet(&args.alphabet, config)?;

    // Input must be valid UTF-8 for decoding
    let input = read_input(args.file.as_ref(), global)?;
    let input_text =
        String::from_utf8(input).map_err(|_| "Input must be valid UTF-8 for decoding")?;

    // Whitespace can be a symbol; drop only the line ending `encode` appends
    let encoded = input_text
        .strip_suffix('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .unwrap_or(input_text.as_str());

    let data = alphabet.decode(encoded)?;

    if args.hex {
        let mut text = hex::encode(&data);
        text.push('\n');
        write_output(args.output.as_deref(), text.as_bytes())
    } else {
        write_output(args.output.as_deref(), &data)
    }
}
