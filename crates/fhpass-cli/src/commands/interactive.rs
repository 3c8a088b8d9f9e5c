use super::derive_entry;
use crate::config::Config;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

const TITLE: &str = "Fiberhome HG6145F1 Admin Password Generator";

/// Prompt for MAC addresses until the user quits or input ends
pub fn run<R: BufRead, W: Write>(config: &Config, mut input: R, out: &mut W) -> Result<()> {
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out)?;

    loop {
        writeln!(out, "Enter MAC address (format: XX:XX:XX:XX:XX:XX)")?;
        writeln!(out, "Or type 'quit' to exit")?;
        writeln!(out, "{}", "-".repeat(40))?;

        let Some(mac) = prompt(&mut input, out, "MAC: ")? else {
            break;
        };
        if mac.eq_ignore_ascii_case("quit") {
            break;
        }

        let entry = derive_entry(config, &mac);
        writeln!(out)?;
        writeln!(out, "{}", "=".repeat(40))?;
        writeln!(out, "Input MAC: {}", entry.mac)?;
        match &entry.result {
            Ok(password) => writeln!(out, "Generated Password: {}", password)?,
            Err(e) => {
                debug!("Rejected {:?}", e.input());
                writeln!(out, "Error: {}", e)?
            }
        }
        writeln!(out, "{}", "=".repeat(40))?;
        writeln!(out)?;

        let again = prompt(&mut input, out, "Generate another? (y/n): ")?;
        if !again.is_some_and(|a| a.eq_ignore_ascii_case("y")) {
            break;
        }
        writeln!(out)?;
    }

    writeln!(out, "Goodbye!")?;
    Ok(())
}

/// Print `label` and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
