use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pixelcat", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one sprite variant as a standalone SVG file.
    Render(RenderArgs),
    /// List the variants of the built-in sprite library.
    List,
    /// Dump the built-in sprite library as JSON.
    Dump(DumpArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Variant name (see `pixelcat list`).
    #[arg(long)]
    variant: String,

    /// Integer upscale factor: one logical pixel becomes an SxS block.
    #[arg(long, default_value_t = 4)]
    scale: u32,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::List => cmd_list(),
        Command::Dump(args) => cmd_dump(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let library = pixelcat::builtin_library();
    let sprite = library
        .get(&args.variant)
        .with_context(|| format!("unknown variant '{}'", args.variant))?;
    let scale = pixelcat::Scale::new(args.scale)?;
    let svg = pixelcat::render_svg(sprite, scale);

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_list() -> anyhow::Result<()> {
    let library = pixelcat::builtin_library();
    for name in library.variant_names() {
        println!("{name}");
    }
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let library = pixelcat::builtin_library();
    let json = serde_json::to_string_pretty(&library).context("serialize sprite library")?;
    match args.out {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("write json '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
