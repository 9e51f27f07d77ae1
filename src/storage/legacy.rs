use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::inventory::{Inventory, Record};

/// Reads a legacy `id,title,creator` file into a new inventory.
///
/// There is no quoting, so a title containing a comma is rejected as a
/// malformed line. Blank lines are skipped.
pub fn import_legacy(path: &Path) -> Result<Inventory> {
    let reader = BufReader::new(File::open(path)?);
    let inventory = parse_legacy(reader)?;
    info!(path = %path.display(), records = inventory.len(), "imported legacy inventory");
    Ok(inventory)
}

fn parse_legacy(reader: impl BufRead) -> Result<Inventory> {
    let mut inventory = Inventory::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        inventory.push(parse_line(&line, index + 1)?);
    }
    Ok(inventory)
}

fn parse_line(line: &str, line_no: usize) -> Result<Record> {
    let fields = line.split(',').map(str::trim).collect::<Vec<_>>();
    let [id, title, creator] = fields.as_slice() else {
        return Err(Error::LegacyParse {
            line: line_no,
            reason: format!("expected 3 fields, found {}", fields.len()),
        });
    };

    let id = id.parse::<i64>().map_err(|e| Error::LegacyParse {
        line: line_no,
        reason: format!("invalid identifier \"{id}\": {e}"),
    })?;
    Ok(Record::new(id, *title, *creator))
}
