use crate::cli::{
    args::EncodeArgs,
    commands::{read_input, write_output},
    config::resolve_alphabet,
    global::GlobalArgs,
};
use basex::AlphabetRegistry;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let alphabet = resolve_alphabet(&args.alphabet, config)?;

    // Step 1: Read input, optionally as hex text
    let mut data = read_input(args.file.as_ref(), global)?;
    if args.hex {
        let text = String::from_utf8(data).map_err(|_| "Hex input must be valid UTF-8")?;
        data = hex::decode(text.trim()).map_err(|e| format!("Invalid hex input: {}", e))?;
    }

    // Step 2: Encode
    let mut output = if args.digits {
        alphabet
            .encode_to_digits(&data)
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        alphabet.encode(&data)
    };
    output.push('\n');

    write_output(args.output.as_deref(), output.as_bytes())
}
