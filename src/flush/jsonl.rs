use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::model::GeneratedWorld;

/// Contents of `world.json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldSummary<'a> {
    pub seed: &'a str,
    pub entity_count: usize,
    pub event_count: usize,
    pub counts: BTreeMap<&'static str, usize>,
    pub generated_at: DateTime<Utc>,
}

impl<'a> WorldSummary<'a> {
    pub fn of(world: &'a GeneratedWorld) -> Self {
        Self {
            seed: &world.seed,
            entity_count: world.entity_count(),
            event_count: world.world_events.len(),
            counts: world.counts(),
            generated_at: world.generated_at,
        }
    }
}

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<usize> {
    let mut writer = BufWriter::new(File::create(path)?);
    let mut lines = 0;
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
        lines += 1;
    }
    writer.flush()?;
    Ok(lines)
}

/// Flush a generated world to JSONL files in the given output directory.
///
/// Creates the output directory if it does not exist. Writes 4 files:
/// - `entities.jsonl`: one entity per line, tagged with its `type`
/// - `world_events.jsonl`: one world event per line
/// - `bosses.jsonl`: one dungeon boss slot per line
/// - `world.json`: seed, per-type counts and generation time
pub fn flush_to_jsonl(world: &GeneratedWorld, output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    let entities = write_jsonl(&output_dir.join("entities.jsonl"), world.entities().into_iter())?;
    let events = write_jsonl(&output_dir.join("world_events.jsonl"), world.world_events.iter())?;
    let bosses = write_jsonl(&output_dir.join("bosses.jsonl"), world.bosses().into_iter())?;

    let mut summary = BufWriter::new(File::create(output_dir.join("world.json"))?);
    serde_json::to_writer_pretty(&mut summary, &WorldSummary::of(world)).map_err(io::Error::from)?;
    summary.flush()?;

    info!(
        dir = %output_dir.display(),
        entities,
        events,
        bosses,
        "flushed world"
    );
    Ok(())
}
