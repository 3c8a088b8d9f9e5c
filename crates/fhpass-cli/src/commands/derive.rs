use super::{derive_entry, Derivation};
use crate::config::{Config, OutputFormat};
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{info, warn};

#[derive(Serialize)]
struct Record<'a> {
    mac: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Derive a password for every MAC in `macs`, or for every non-empty line of
/// `input` when `macs` is empty.
pub fn handle<R: BufRead, W: Write>(
    config: &Config,
    macs: Vec<String>,
    input: R,
    out: &mut W,
) -> Result<()> {
    let macs = if macs.is_empty() {
        info!("No MAC given, reading from standard input");
        read_macs(input)?
    } else {
        macs
    };

    let mut failed = 0;
    for mac in &macs {
        let entry = derive_entry(config, mac.trim());
        if let Err(e) = &entry.result {
            warn!("Skipping {:?}: {}", e.input(), e);
            failed += 1;
        }
        write_entry(config.output, &entry, out)?;
    }

    if failed > 0 {
        bail!("{} of {} MAC addresses were invalid", failed, macs.len());
    }

    Ok(())
}

fn read_macs<R: BufRead>(input: R) -> Result<Vec<String>> {
    let mut macs = Vec::new();
    for line in input.lines() {
        let line = line.context("Failed to read MAC address")?;
        let line = line.trim();
        if !line.is_empty() {
            macs.push(line.to_string());
        }
    }
    Ok(macs)
}

fn write_entry<W: Write>(format: OutputFormat, entry: &Derivation, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => match &entry.result {
            Ok(password) => writeln!(out, "{:<20} {}", entry.mac, password)?,
            Err(e) => writeln!(out, "{:<20} {}", entry.mac, e)?,
        },
        OutputFormat::Json => {
            let record = Record {
                mac: &entry.mac,
                password: entry.result.as_ref().ok().map(|p| p.as_str()),
                error: entry.result.as_ref().err().map(|e| e.to_string()),
            };
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn json_config() -> Config {
        Config {
            output: OutputFormat::Json,
            ..Config::default()
        }
    }

    #[test]
    fn test_handle_text() {
        let mut out = Vec::new();
        handle(
            &Config::default(),
            vec!["00:11:22:33:44:55".to_string()],
            Cursor::new(""),
            &mut out,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "00:11:22:33:44:55    d5c$p22p$6Cf6c&A\n"
        );
    }

    #[test]
    fn test_handle_json() {
        let mut out = Vec::new();
        handle(
            &json_config(),
            vec!["aa:bb:cc:dd:ee:ff".to_string()],
            Cursor::new(""),
            &mut out,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["mac"], "AA:BB:CC:DD:EE:FF");
        assert_eq!(value["password"], "UN6p56YYx95@&&A&");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_handle_reads_stdin() {
        let mut out = Vec::new();
        let input = Cursor::new("00:11:22:33:44:55\n\n  aa:bb:cc:dd:ee:ff  \n");
        handle(&json_config(), Vec::new(), input, &mut out).unwrap();

        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["password"], "d5c$p22p$6Cf6c&A");
        assert_eq!(lines[1]["password"], "UN6p56YYx95@&&A&");
    }

    #[test]
    fn test_handle_reports_invalid_and_continues() {
        let mut out = Vec::new();
        let result = handle(
            &json_config(),
            vec!["AABBCCDDEEFF".to_string(), "00:11:22:33:44:55".to_string()],
            Cursor::new(""),
            &mut out,
        );
        assert!(result.is_err());

        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0]["error"],
            "Invalid MAC format (expected XX:XX:XX:XX:XX:XX)"
        );
        assert!(lines[0].get("password").is_none());
        assert_eq!(lines[1]["password"], "d5c$p22p$6Cf6c&A");
    }
}
