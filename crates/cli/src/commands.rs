//! Command handlers.
//!
//! Each handler writes its human-facing output to `out` and returns an error
//! for anything the user should see as a failure.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use deformspec_core::{
    check_index, parse::parse_factor, sensor_name, SensorRecord, NUM_SENSORS, SENSOR_POSITIONS,
};
use deformspec_engine::{
    find_spec_files, scale_files, EditSession, EditorConfig, ScalarField,
};
use deformspec_storage::read_all;
use serde_json::json;

use crate::args::{Cli, Command};

/// Dispatch a parsed command line.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let config = match &cli.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };

    match cli.command {
        Command::Show { file, sensor, json } => show(&file, sensor, json, &config, out),
        Command::Set {
            file,
            sensor,
            fields,
        } => {
            let mut session = EditSession::open(&file)?;
            session.stage_text(sensor, &fields.into())?;
            let written = session.commit()?;
            writeln!(out, "Updated {} sensor(s) in {}", written, file.display())?;
            let record = session.record(sensor)?;
            out.write_all(render_record(sensor, &record, config.precision).as_bytes())?;
            Ok(())
        }
        Command::Scale {
            file,
            factor,
            sensor,
            field,
        } => {
            let factor = parse_factor(&factor)?;
            let field = ScalarField::from(field);
            let mut session = EditSession::open(&file)?;
            match sensor {
                Some(index) => session.scale_sensor(index, field, factor)?,
                None => session.scale_all(field, factor)?,
            }
            let written = session.commit()?;
            writeln!(
                out,
                "Scaled {} of {} sensor(s) by {} in {}",
                field.name(),
                written,
                factor,
                file.display()
            )?;
            Ok(())
        }
        Command::Find { root } => {
            let files = find_spec_files(&root, &config)?;
            for path in &files {
                writeln!(out, "{}", path.display())?;
            }
            writeln!(
                out,
                "Found {} {} files",
                files.len(),
                config.spec_dir_name
            )?;
            Ok(())
        }
        Command::BatchScale {
            root,
            factor,
            field,
        } => {
            let factor = parse_factor(&factor)?;
            let files = find_spec_files(&root, &config)?;
            if files.is_empty() {
                bail!(
                    "no {} files found below {}",
                    config.spec_dir_name,
                    root.display()
                );
            }
            let report = scale_files(&files, field.into(), factor)?;
            for failure in &report.failures {
                writeln!(out, "FAILED {}: {}", failure.path.display(), failure.error)?;
            }
            writeln!(
                out,
                "Processed {} files\nSuccess: {}",
                report.processed, report.succeeded
            )?;
            if !report.is_clean() {
                bail!("{} of {} files failed", report.failed(), report.processed);
            }
            Ok(())
        }
        Command::Names => {
            for (index, name) in SENSOR_POSITIONS.iter().enumerate() {
                writeln!(out, "{index:2}  {name}")?;
            }
            Ok(())
        }
    }
}

fn show(
    file: &Path,
    sensor: Option<usize>,
    as_json: bool,
    config: &EditorConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let records =
        read_all(file).with_context(|| format!("cannot show {}", file.display()))?;
    let indices: Vec<usize> = match sensor {
        Some(index) => vec![check_index(index)?],
        None => (0..NUM_SENSORS).collect(),
    };

    if as_json {
        let entries: Vec<_> = indices
            .iter()
            .map(|&i| {
                json!({
                    "index": i,
                    "name": sensor_name(i),
                    "record": &records[i],
                })
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
    } else {
        for &i in &indices {
            out.write_all(render_record(i, &records[i], config.precision).as_bytes())?;
        }
    }
    Ok(())
}

/// Human-readable block for one sensor.
pub fn render_record(index: usize, record: &SensorRecord, precision: usize) -> String {
    let floats = |values: &[f32]| {
        values
            .iter()
            .map(|v| format!("{v:.precision$}"))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let bytes = |values: &[u8]| {
        values
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut text = String::new();
    let _ = writeln!(
        text,
        "[{index:2}] {}",
        sensor_name(index).unwrap_or("Unknown")
    );
    let _ = writeln!(text, "  direction_params:     {}", floats(&record.direction_params[..]));
    let _ = writeln!(text, "  radius:               {}", floats(&[record.radius]));
    let _ = writeln!(text, "  next_sensor:          {}", bytes(&record.next_sensor[..]));
    let _ = writeln!(text, "  scene_index:          {}", record.scene_index);
    let _ = writeln!(text, "  absorption_level:     {}", record.absorption_level);
    let _ = writeln!(
        text,
        "  next_boundary_sensor: {}",
        bytes(&record.next_boundary_sensor[..])
    );
    text
}
