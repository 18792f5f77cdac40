use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glob::Pattern;
use log::debug;
use schema::EntityType;
use tools::{
    decode_packet_json, format_decode_pretty, inspect_packet, list_properties, InspectReport,
};

#[derive(Parser)]
#[command(
    name = "esync-tools",
    version,
    about = "Entity sync edit message inspection and decoding tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect edit message structure and sizes.
    Inspect {
        /// Path to the message bytes, or a directory of messages.
        packet_path: PathBuf,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Sort inspected messages.
        #[arg(long, value_enum)]
        sort: Option<InspectSort>,
        /// Limit the number of inspected messages (after sorting).
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Decode an edit message into structured JSON.
    Decode {
        /// Path to the message bytes.
        packet_file: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// List the property table.
    Properties {
        /// Only list properties this entity type carries.
        #[arg(long, value_parser = parse_entity_type)]
        entity_type: Option<EntityType>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Print the property table fingerprint.
    SchemaHash,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectSort {
    Size,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn parse_entity_type(value: &str) -> Result<EntityType, String> {
    EntityType::from_name(value).ok_or_else(|| format!("unknown entity type `{value}`"))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Inspect {
            packet_path,
            glob,
            sort,
            limit,
        } => {
            if packet_path.is_dir() {
                for entry in select_packets(&packet_path, glob.as_deref(), sort, limit)? {
                    let bytes = fs::read(&entry.path)
                        .with_context(|| format!("read packet {}", entry.path.display()))?;
                    let report = inspect_packet(
                        &bytes,
                        &wire::Limits::default(),
                        &codec::CodecLimits::default(),
                    )
                    .with_context(|| format!("inspect packet {}", entry.path.display()))?;
                    println!("== {} ({} bytes) ==", entry.path.display(), entry.size);
                    print_inspect_report(&report);
                }
            } else {
                let bytes = fs::read(&packet_path)
                    .with_context(|| format!("read packet {}", packet_path.display()))?;
                let report = inspect_packet(
                    &bytes,
                    &wire::Limits::default(),
                    &codec::CodecLimits::default(),
                )
                .context("inspect packet")?;
                print_inspect_report(&report);
            }
        }
        Command::Decode {
            packet_file,
            format,
        } => {
            let bytes = fs::read(&packet_file)
                .with_context(|| format!("read packet {}", packet_file.display()))?;
            let output = decode_packet_json(
                &bytes,
                &wire::Limits::default(),
                &codec::CodecLimits::default(),
            )
            .context("decode packet")?;
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&output).context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => {
                    print!("{}", format_decode_pretty(&output));
                }
            }
        }
        Command::Properties {
            entity_type,
            format,
        } => {
            let rows = list_properties(entity_type);
            debug!("{} properties listed", rows.len());
            if format == OutputFormat::Json {
                let json = serde_json::to_string_pretty(&rows).context("serialize json")?;
                println!("{json}");
            } else {
                for row in rows {
                    let group = row.group.map_or("-", |group| group.name());
                    let range = row
                        .range
                        .map_or_else(String::new, |(min, max)| format!("[{min}, {max}]"));
                    println!(
                        "{:>4}  {:<40} {:<10} {:<8} {range}",
                        row.ordinal,
                        row.name,
                        row.kind.name(),
                        group
                    );
                }
            }
        }
        Command::SchemaHash => {
            println!("0x{:016x}", schema::schema_hash());
        }
    }
    Ok(())
}

struct PacketEntry {
    path: PathBuf,
    size: u64,
}

/// Files in `dir` matching `glob` by name or path, largest first when sorted.
fn select_packets(
    dir: &Path,
    glob: Option<&str>,
    sort: Option<InspectSort>,
    limit: Option<usize>,
) -> Result<Vec<PacketEntry>> {
    let pattern = glob
        .map(Pattern::new)
        .transpose()
        .context("invalid glob pattern")?;
    let wanted = |path: &Path| {
        pattern.as_ref().map_or(true, |pattern| {
            pattern.matches_path(path)
                || path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| pattern.matches(name))
        })
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && wanted(&path) {
            let size = entry.metadata()?.len();
            entries.push(PacketEntry { path, size });
        }
    }

    if let Some(InspectSort::Size) = sort {
        entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
    }
    if let Some(limit) = limit.or(sort.map(|InspectSort::Size| 10)) {
        entries.truncate(limit);
    }
    debug!("{} packets selected from {}", entries.len(), dir.display());
    Ok(entries)
}

fn print_inspect_report(report: &InspectReport) {
    let header = report.header;
    let entity_type = report
        .entity_type
        .map_or_else(|| format!("unknown({})", header.entity_type), |t| t.to_string());
    println!(
        "entity: {} type: {entity_type} last_edited: {}",
        codec::EntityId::from_bytes(header.entity_id),
        header.last_edited
    );
    println!(
        "prefix: {} bytes header: {} bytes flags: {} bytes values: {} bytes",
        report.prefix_len,
        report.header_len,
        report.flags_len,
        report.payload_len()
    );
    println!("properties: {}", report.properties.len());
    for entry in &report.properties {
        println!(
            "  {:>4} {}: {} bytes",
            entry.property.ordinal(),
            entry.property,
            entry.byte_len
        );
    }
    if !report.skipped.is_empty() {
        println!("skipped: {} properties", report.skipped.len());
    }
    if report.trailing > 0 {
        println!("trailing: {} bytes", report.trailing);
    }
}
