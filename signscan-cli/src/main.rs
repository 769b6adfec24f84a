use clap::Parser;
use serde::{Deserialize, Serialize};
use signscan::io::load_rgb_image;
use signscan::{
    ImageRole, MapLabel, MatchConfig, OwnedImage, Recognizer, ReferenceIndexing, SignMap,
    SignScanError, SignValue, Template, TemplateOutcome,
};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "SignScan CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ReferenceIndexingConfig {
    #[default]
    PerPosition,
    PinnedLast(usize),
}

impl From<ReferenceIndexingConfig> for ReferenceIndexing {
    fn from(value: ReferenceIndexingConfig) -> Self {
        match value {
            ReferenceIndexingConfig::PerPosition => ReferenceIndexing::PerPosition,
            ReferenceIndexingConfig::PinnedLast(k) => ReferenceIndexing::PinnedLast(k),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct MatchConfigJson {
    signature_len: usize,
    vote_tolerance: Option<u32>,
    min_confidence: Option<usize>,
    reference_indexing: ReferenceIndexingConfig,
}

impl Default for MatchConfigJson {
    fn default() -> Self {
        let cfg = MatchConfig::default();
        Self {
            signature_len: cfg.signature_len,
            vote_tolerance: cfg.vote_tolerance.map(u32::from),
            min_confidence: cfg.min_confidence,
            reference_indexing: ReferenceIndexingConfig::PerPosition,
        }
    }
}

impl From<MatchConfigJson> for MatchConfig {
    fn from(value: MatchConfigJson) -> Self {
        MatchConfig {
            signature_len: value.signature_len,
            vote_tolerance: value.vote_tolerance.map(SignValue::new),
            min_confidence: value.min_confidence,
            reference_indexing: value.reference_indexing.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    scan_path: String,
    template_paths: Vec<String>,
    output_path: Option<String>,
    emit_maps: bool,
    #[serde(rename = "match")]
    match_cfg: MatchConfigJson,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum OutcomeRecord {
    Located {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        confidence: usize,
    },
    NotRecognized,
}

impl From<&TemplateOutcome> for OutcomeRecord {
    fn from(value: &TemplateOutcome) -> Self {
        match value {
            TemplateOutcome::Located(located) => OutcomeRecord::Located {
                x: located.origin.x,
                y: located.origin.y,
                width: located.width,
                height: located.height,
                confidence: located.confidence,
            },
            TemplateOutcome::NotRecognized => OutcomeRecord::NotRecognized,
        }
    }
}

#[derive(Debug, Serialize)]
struct MapRecord {
    template: usize,
    signs: Vec<u32>,
}

#[derive(Debug, Serialize)]
struct Output {
    templates: Vec<OutcomeRecord>,
    windows_scanned: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    maps: Vec<MapRecord>,
}

/// Keeps template maps only; window maps are far too numerous for a report.
#[derive(Default)]
struct TemplateMaps(Vec<MapRecord>);

impl signscan::MapSink for TemplateMaps {
    fn emit(&mut self, label: MapLabel, map: &SignMap) {
        if let MapLabel::Template(template) = label {
            self.0.push(MapRecord {
                template,
                signs: map.signs().map(u32::from).collect(),
            });
        }
    }
}

fn load_image(path: &str, role: ImageRole) -> Result<OwnedImage, Box<dyn std::error::Error>> {
    let img = load_rgb_image(path)?;
    if img.width() == 0 || img.height() == 0 {
        return Err(SignScanError::InvalidDimensions {
            image: role,
            width: img.width(),
            height: img.height(),
        }
        .into());
    }
    Ok(img)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("signscan=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.scan_path.is_empty() {
        return Err("scan_path must be set in the config".into());
    }
    if config.template_paths.len() != 3 {
        return Err("template_paths must list exactly three images".into());
    }

    let scan = load_image(&config.scan_path, ImageRole::Scan)?;
    let mut templates = Vec::with_capacity(config.template_paths.len());
    for (index, path) in config.template_paths.iter().enumerate() {
        templates.push(Template::from(load_image(path, ImageRole::Template(index))?));
    }

    let recognizer = Recognizer::with_nearest_sign(templates).with_config(config.match_cfg.into());
    let mut maps = TemplateMaps::default();
    let recognition = if config.emit_maps {
        recognizer.recognize_with_sink(scan.view(), &mut maps)?
    } else {
        recognizer.recognize(scan.view())?
    };

    let output = Output {
        templates: recognition.outcomes().iter().map(OutcomeRecord::from).collect(),
        windows_scanned: recognition.windows_scanned(),
        maps: maps.0,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
