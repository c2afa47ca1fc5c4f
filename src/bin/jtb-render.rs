//! Render page-builder JSON files to HTML.
//!
//! **Usage:**
//! ```bash
//! jtb-render [--layout] [--config <FILE>] [--output <FILE>] <FILE>...
//! ```

use clap::Parser;
use jtb_render::{
    layout_from_value, module_from_value, RenderError, RenderOptions, RenderResult, Renderer,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Page-builder module renderer
#[derive(Parser, Debug)]
#[clap(name = "jtb-render")]
#[clap(about = "Render JTB module trees or layouts to HTML")]
struct Args {
    /// Module tree or layout JSON files
    #[clap(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Treat every input as a layout (`{"sections": [...]}`) and render a full preview
    #[clap(long)]
    layout: bool,

    /// Renderer options (.yaml, .yml or .json)
    #[clap(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write HTML here instead of stdout
    #[clap(long, short, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let options = match &args.config {
        Some(path) => match RenderOptions::load(path) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("✗ {} has errors:", path.display());
                print_error(&e);
                process::exit(1);
            }
        },
        None => RenderOptions::default(),
    };
    debug!(max_depth = options.max_depth, "renderer configured");
    let renderer = Renderer::new(options);

    let mut exit_code = 0;
    let mut html = String::new();

    for path in &args.files {
        match render_file(&renderer, path, args.layout) {
            Ok(fragment) => {
                eprintln!("✓ {} rendered", path.display());
                html.push_str(&fragment);
                html.push('\n');
            }
            Err(e) => {
                eprintln!("✗ {} has errors:", path.display());
                print_error(&e);
                exit_code = 1;
            }
        }
    }

    match &args.output {
        Some(out) => {
            if let Err(e) = fs::write(out, &html) {
                eprintln!("✗ Failed to write '{}': {}", out.display(), e);
                process::exit(1);
            }
            info!(path = %out.display(), bytes = html.len(), "wrote output");
        }
        None => print!("{}", html),
    }

    process::exit(exit_code);
}

fn render_file(renderer: &Renderer, path: &Path, force_layout: bool) -> RenderResult<String> {
    let content = fs::read_to_string(path).map_err(|e| RenderError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let value: serde_json::Value = serde_json::from_str(&content)?;

    // Layouts are recognized by a top-level "sections" key
    if force_layout || value.get("sections").is_some() {
        let layout = layout_from_value(value)?;
        Ok(renderer.render_preview(&layout))
    } else {
        let node = module_from_value(value)?;
        Ok(renderer.render(&node))
    }
}

fn print_error(error: &RenderError) {
    match error {
        RenderError::Json(msg) => {
            eprintln!("  JSON error:");
            eprintln!("    {}", msg);
        }
        RenderError::Yaml(msg) => {
            eprintln!("  YAML error:");
            eprintln!("    {}", msg);
        }
        RenderError::Io { path, message } => {
            eprintln!("  Failed to read '{}':", path);
            eprintln!("    {}", message);
        }
        RenderError::InvalidLayout(msg) => {
            eprintln!("  Invalid layout:");
            eprintln!("    {}", msg);
        }
        RenderError::UnsupportedConfigFormat { path } => {
            eprintln!("  Unsupported config format '{}':", path);
            eprintln!("    Expected .yaml, .yml or .json");
        }
    }
}
