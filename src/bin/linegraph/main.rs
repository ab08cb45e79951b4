//! Binary entry point for the line-graph recognition CLI.
#![forbid(unsafe_code)]

mod config;
mod ui;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use linegraph::{
    cli::{
        dot::{to_dot, write_dot_file},
        import_export::{read_graph_file, write_graph_file},
        render::{GraphvizRenderer, Renderer},
    },
    logging::init_logging,
    recognition::{analyze, is_one_graph, transform_to_original_graph, RecognitionReport},
    Graph,
};
use serde::Serialize;
use tracing::warn;

use crate::config::{image_format, CliConfig, ConfigError};
use crate::ui::{Theme, Ui};

#[derive(Parser, Debug)]
#[command(
    name = "linegraph",
    version,
    about = "Recognize line graphs and reconstruct their original graphs",
    disable_help_subcommand = true
)]
struct Cli {
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Output format for reports"
    )]
    format: OutputFormat,

    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = ThemeArg::Auto,
        help = "Console color theme"
    )]
    theme: ThemeArg,

    #[arg(long, global = true, help = "Plain output without icons or colors")]
    quiet: bool,

    #[arg(
        long,
        global = true,
        env = "LINEGRAPH_LOG",
        default_value = "warn",
        help = "Log filter (tracing EnvFilter syntax)"
    )]
    log_level: String,

    #[arg(
        long,
        global = true,
        env = "LINEGRAPH_CONFIG",
        value_name = "FILE",
        help = "Path to the CLI config file"
    )]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct AnalyzeCmd {
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    #[arg(
        long,
        value_name = "DIR",
        help = "Directory for DOT, image and reconstructed-graph files"
    )]
    out_dir: Option<PathBuf>,

    #[arg(
        long,
        value_name = "FILE",
        help = "Where to write the reconstructed graph (default <out-dir>/output.txt)"
    )]
    output: Option<PathBuf>,

    #[arg(long, help = "Skip the external renderer")]
    no_render: bool,

    #[arg(long, value_name = "PROGRAM", help = "Renderer program override")]
    renderer: Option<String>,

    #[arg(long, value_name = "EXT", help = "Image format override (png, svg, ...)")]
    image_format: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = "Run the full recognition pipeline on a graph file")]
    Analyze(AnalyzeCmd),

    #[command(about = "Write the reconstructed original graph of an input graph")]
    Transform {
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        #[arg(long = "into", value_name = "PATH", required = true)]
        into: PathBuf,
    },

    #[command(about = "Print or write the Graphviz description of a graph")]
    Dot {
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        #[arg(long, value_name = "PATH", help = "Write to a file instead of stdout")]
        out: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ThemeArg {
    Auto,
    Light,
    Dark,
    Plain,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Auto => Theme::Auto,
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Plain => Theme::Plain,
        }
    }
}

/// A file produced by `analyze`, with the render outcome for image files.
#[derive(Debug, Serialize)]
struct Artifact {
    kind: &'static str,
    path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    rendered: Option<bool>,
}

#[derive(Debug, Serialize)]
struct AnalyzeSummary<'a> {
    input: &'a Path,
    #[serde(flatten)]
    report: &'a RecognitionReport,
    artifacts: Vec<Artifact>,
}

#[derive(Debug, Serialize)]
struct TransformSummary<'a> {
    input: &'a Path,
    output: &'a Path,
    num_vertices: usize,
    num_arcs: usize,
    one_graph: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    if let Err(err) = init_logging(&cli.log_level) {
        eprintln!("warning: {err}");
    }
    let config = CliConfig::load(cli.config.clone())?;
    tracing::debug!(path = ?config.path(), "cli.config.loaded");
    let ui = Ui::new(cli.theme.into(), cli.quiet);

    match &cli.command {
        Command::Analyze(cmd) => run_analyze(&cli, cmd, &config, &ui)?,
        Command::Transform { input, into } => {
            let graph = read_graph_file(input)?;
            let original = transform_to_original_graph(&graph);
            write_graph_file(&original, into)?;
            let summary = TransformSummary {
                input,
                output: into,
                num_vertices: original.num_vertices(),
                num_arcs: original.arc_count(),
                one_graph: is_one_graph(&original),
            };
            emit(cli.format, &summary, || {
                ui.note(&format!(
                    "Reconstructed graph ({} vertices, {} arcs, one-graph: {}) written to {}",
                    summary.num_vertices,
                    summary.num_arcs,
                    yes_no(summary.one_graph),
                    into.display()
                ))
            })?;
        }
        Command::Dot { input, out } => {
            let graph = read_graph_file(input)?;
            match out {
                Some(path) => {
                    write_dot_file(&graph, path)?;
                    ui.note(&format!("DOT description written to {}", path.display()));
                }
                None => print!("{}", to_dot(&graph)),
            }
        }
    }

    Ok(())
}

fn run_analyze(
    cli: &Cli,
    cmd: &AnalyzeCmd,
    config: &CliConfig,
    ui: &Ui,
) -> Result<(), Box<dyn Error>> {
    let text = cli.format == OutputFormat::Text;
    let renderer = build_renderer(cmd, config)?;
    let graph = read_graph_file(&cmd.input)?;
    let out_dir = cmd
        .out_dir
        .clone()
        .or_else(|| config.output_dir().cloned())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&out_dir)?;
    let mut artifacts = Vec::new();

    if text {
        ui.adjacency("Input graph G", &graph);
    }
    export_graph(&graph, &out_dir, "input_graph", renderer.as_ref(), ui, &mut artifacts)?;
    if text {
        if let Some(image) = rendered_image(&artifacts, "input_image") {
            ui.note(&format!("Input graph has been saved to {}", image.display()));
        }
    }

    let report = analyze(&graph);
    if text {
        ui.spacer();
        if report.adjoint {
            ui.verdict(true, "The graph is an adjoint graph.");
            ui.verdict(
                report.linear,
                if report.linear {
                    "The graph is a line graph (verified through structures)."
                } else {
                    "The graph is not a line graph (verified through structures)."
                },
            );
        } else {
            ui.verdict(false, "The graph is not an adjoint graph.");
        }
    }

    if let Some(reconstruction) = &report.reconstruction {
        let original = &reconstruction.graph;
        if text {
            ui.adjacency("Original graph H after transformation", original);
            let holds = reconstruction.one_graph;
            if holds {
                ui.verdict(holds, "Graph H is a 1-graph (no multiple edges).");
                ui.verdict(holds, "Graph G is a line graph (verified through graph H).");
            } else {
                ui.verdict(holds, "Graph H is not a 1-graph (multiple edges exist).");
                ui.verdict(holds, "Graph G is not a line graph (verified through graph H).");
            }
        }
        let output = cmd
            .output
            .clone()
            .unwrap_or_else(|| out_dir.join("output.txt"));
        write_graph_file(original, &output)?;
        artifacts.push(Artifact {
            kind: "output_graph",
            path: output,
            rendered: None,
        });
        export_graph(original, &out_dir, "output_graph", renderer.as_ref(), ui, &mut artifacts)?;
    }

    match cli.format {
        OutputFormat::Json => {
            let summary = AnalyzeSummary {
                input: &cmd.input,
                report: &report,
                artifacts,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => {
            ui.spacer();
            let flags = report.structures;
            ui.flags(
                "Forbidden structures (all false for a line graph)",
                &[
                    ("hasFirstStructure", flags.first),
                    ("hasSecondStructure", flags.second),
                    ("hasThirdStructure", flags.third),
                ],
            );
            ui.spacer();
            ui.files(
                "Files",
                artifacts.iter().map(|artifact| match artifact.rendered {
                    Some(false) => format!("{} (render failed)", artifact.path.display()),
                    _ => artifact.path.display().to_string(),
                }),
            );
        }
    }
    Ok(())
}

fn build_renderer(
    cmd: &AnalyzeCmd,
    config: &CliConfig,
) -> Result<Option<GraphvizRenderer>, ConfigError> {
    let settings = config.render();
    let format = match cmd.image_format.as_deref() {
        Some(raw) => image_format(raw)?,
        None => settings.format.clone(),
    };
    if cmd.no_render || !settings.enabled {
        return Ok(None);
    }
    let program = cmd.renderer.as_deref().unwrap_or(&settings.program);
    Ok(Some(GraphvizRenderer::new(program, format)))
}

/// Writes `<stem>.dot` and, when a renderer is configured, the rendered image.
/// Render failures are recorded and reported but never abort the pipeline.
fn export_graph(
    graph: &Graph,
    out_dir: &Path,
    stem: &str,
    renderer: Option<&GraphvizRenderer>,
    ui: &Ui,
    artifacts: &mut Vec<Artifact>,
) -> Result<(), Box<dyn Error>> {
    let dot_path = out_dir.join(format!("{stem}.dot"));
    write_dot_file(graph, &dot_path)?;
    artifacts.push(Artifact {
        kind: if stem == "input_graph" { "input_dot" } else { "output_dot" },
        path: dot_path.clone(),
        rendered: None,
    });
    let Some(renderer) = renderer else {
        return Ok(());
    };
    let image = renderer.image_path_for(&dot_path);
    let rendered = render_with(renderer, &to_dot(graph), &image, ui);
    artifacts.push(Artifact {
        kind: if stem == "input_graph" { "input_image" } else { "output_image" },
        path: image,
        rendered: Some(rendered),
    });
    Ok(())
}

fn render_with(renderer: &dyn Renderer, description: &str, image: &Path, ui: &Ui) -> bool {
    let progress = ui.rendering(image);
    let outcome = renderer.render(description, image);
    let elapsed = progress.finish();
    match outcome {
        Ok(()) => {
            tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "render.finished");
            true
        }
        Err(err) => {
            warn!(error = %err, image = %image.display(), "render.failed");
            ui.warn(&format!("could not render {}: {err}", image.display()));
            false
        }
    }
}

fn rendered_image<'a>(artifacts: &'a [Artifact], kind: &str) -> Option<&'a Path> {
    artifacts
        .iter()
        .find(|artifact| artifact.kind == kind && artifact.rendered == Some(true))
        .map(|artifact| artifact.path.as_path())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn emit<T, F>(format: OutputFormat, value: &T, printer: F) -> Result<(), Box<dyn Error>>
where
    T: Serialize,
    F: FnOnce(),
{
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value)?;
            println!("{json}");
        }
        OutputFormat::Text => printer(),
    }
    Ok(())
}
