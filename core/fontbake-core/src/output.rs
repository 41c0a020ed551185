//! Structured-initializer output (made by FontLab https://www.fontlab.com/)

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};

use crate::record::FontRecord;

const NAME_OPEN: &str = "{ .name = \"";
const LENGTH_FIELD: &str = "\", .length = ";
const DATA_FIELD: &str = ", .data = (const uint8_t[]) {";
const ENTRY_CLOSE: &str = "} },";

/// Write one record as a single initializer line.
///
/// Every byte is rendered `0xNN, `, including the last one, so an entry
/// always ends in `, } },` unless the font is empty.
pub fn write_entry(record: &FontRecord, mut w: impl Write) -> Result<()> {
    write!(
        w,
        "    {NAME_OPEN}{}{LENGTH_FIELD}{}{DATA_FIELD}",
        record.base_name,
        record.length()
    )?;
    for byte in &record.data {
        write!(w, "0x{byte:02X}, ")?;
    }
    writeln!(w, "{ENTRY_CLOSE}")?;
    Ok(())
}

/// Write all records in order. No records means no output at all.
pub fn write_entries(records: &[FontRecord], mut w: impl Write) -> Result<()> {
    for record in records {
        write_entry(record, &mut w)?;
    }
    Ok(())
}

/// Create or truncate `path` and fill it with one entry per record.
pub fn write_header_file(path: &Path, records: &[FontRecord]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut w = BufWriter::new(file);
    write_entries(records, &mut w).with_context(|| format!("writing {}", path.display()))?;
    w.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// An entry read back from generated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub name: String,
    pub length: usize,
    pub data: Vec<u8>,
}

/// Parse generated output back into entries, one per non-blank line.
pub fn parse_entries(text: &str) -> Result<Vec<ParsedEntry>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_entry(line).with_context(|| format!("line {}", idx + 1)))
        .collect()
}

fn parse_entry(line: &str) -> Result<ParsedEntry> {
    let rest = line
        .trim()
        .strip_prefix(NAME_OPEN)
        .ok_or_else(|| anyhow!("missing .name field"))?;
    let (name, rest) = rest
        .split_once(LENGTH_FIELD)
        .ok_or_else(|| anyhow!("missing .length field"))?;
    let (length, rest) = rest
        .split_once(DATA_FIELD)
        .ok_or_else(|| anyhow!("missing .data field"))?;
    let length: usize = length
        .parse()
        .with_context(|| format!("invalid length: {length}"))?;
    let body = rest
        .strip_suffix(ENTRY_CLOSE)
        .ok_or_else(|| anyhow!("unterminated entry"))?;

    let data = body
        .split(", ")
        .filter(|token| !token.is_empty())
        .map(parse_hex_byte)
        .collect::<Result<Vec<u8>>>()?;

    if data.len() != length {
        bail!(
            "length mismatch for {name}: declared {length}, found {} bytes",
            data.len()
        );
    }

    Ok(ParsedEntry {
        name: name.to_string(),
        length,
        data,
    })
}

fn parse_hex_byte(token: &str) -> Result<u8> {
    let digits = token
        .strip_prefix("0x")
        .filter(|d| d.len() == 2)
        .ok_or_else(|| anyhow!("invalid byte literal: {token}"))?;
    u8::from_str_radix(digits, 16).with_context(|| format!("invalid byte literal: {token}"))
}
