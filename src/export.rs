use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::subdivision::SubdivisionPolicy;
use crate::types::{VertexBuffer, VertexRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Pretty JSON with generation metadata
    Json,
    /// Native-endian f32 bytes, 24 per vertex
    Raw,
}

#[derive(Debug, Serialize)]
pub struct VertexDump {
    pub generated_at: String,
    pub policy: SubdivisionPolicy,
    pub depth: u32,
    pub triangle_count: usize,
    pub vertex_count: usize,
    pub floats_per_vertex: usize,
    pub vertices: Vec<[f32; 6]>,
}

impl VertexDump {
    pub fn new(buffer: &VertexBuffer, policy: SubdivisionPolicy, depth: u32) -> Self {
        Self {
            generated_at: chrono::Local::now().to_rfc3339(),
            policy,
            depth,
            triangle_count: buffer.triangle_count(),
            vertex_count: buffer.len(),
            floats_per_vertex: VertexRecord::FLOATS,
            vertices: buffer.vertices().iter().map(VertexRecord::to_array).collect(),
        }
    }
}

pub fn write_json(
    writer: impl Write,
    buffer: &VertexBuffer,
    policy: SubdivisionPolicy,
    depth: u32,
) -> Result<()> {
    let dump = VertexDump::new(buffer, policy, depth);
    serde_json::to_writer_pretty(writer, &dump).context("Failed to serialize vertex buffer")?;
    Ok(())
}

pub fn write_raw(mut writer: impl Write, buffer: &VertexBuffer) -> Result<()> {
    writer
        .write_all(buffer.as_bytes())
        .context("Failed to write raw vertex data")?;
    Ok(())
}

pub fn write_to_path(
    path: impl AsRef<Path>,
    format: ExportFormat,
    buffer: &VertexBuffer,
    policy: SubdivisionPolicy,
    depth: u32,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => write_json(&mut writer, buffer, policy, depth)?,
        ExportFormat::Raw => write_raw(&mut writer, buffer)?,
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush {:?}", path))?;
    log::info!("Wrote {} vertices to {:?} ({:?})", buffer.len(), path, format);
    Ok(())
}
