use super::global::GlobalArgs;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Reads the whole input from `file` or stdin, enforcing `--max-size`.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        if global.max_size > 0 {
            let file_size = fs::metadata(file_path)?.len() as usize;
            check_size(file_size, global)?;
        }
        return Ok(fs::read(file_path)?);
    }

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;
    if global.max_size > 0 {
        check_size(buffer.len(), global)?;
    }
    Ok(buffer)
}

fn check_size(size: usize, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    if size <= global.max_size {
        return Ok(());
    }

    if !global.force {
        return Err(format!(
            "Input size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
            size, global.max_size
        )
        .into());
    }

    if !global.quiet {
        eprintln!(
            "Warning: Processing large input ({} bytes, limit: {} bytes); conversion time grows quadratically",
            size, global.max_size
        );
    }
    Ok(())
}

/// Writes `data` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, data)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
