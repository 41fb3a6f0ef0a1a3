//! sillstone CLI - volume and drawings for L-profile stone pieces
//!
//! Computes exact piece volumes and renders dimensioned 2D plans or shaded
//! isometric views as SVG or JSON.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use sillstone::{
    autofit_bullnose_radius, evaluate, export, format_volume_m3, EdgeTreatment, RenderOptions,
    StoneSpec, ViewArtifact, ViewMode,
};

#[derive(Parser)]
#[command(name = "sillstone")]
#[command(about = "Volume and drawing calculator for L-profile stone pieces", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the volume of a piece
    Volume {
        #[command(flatten)]
        spec: SpecArgs,
    },
    /// Render a piece as a dimensioned plan or isometric drawing
    Draw {
        #[command(flatten)]
        spec: SpecArgs,
        /// Which projection to render
        #[arg(long, value_enum, default_value = "plan")]
        view: ViewArg,
        /// Output file (.svg for a drawing, .json for the raw primitives)
        #[arg(long)]
        out: PathBuf,
        /// Optional render options TOML file
        #[arg(long)]
        render_options: Option<PathBuf>,
    },
    /// Solve the bullnose radius tangent to the inner lip corner
    Autofit {
        /// Lip width Lw in mm
        #[arg(long)]
        lip_width: f64,
        /// Slab thickness T in mm
        #[arg(long)]
        thickness: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    /// Annotated 2D cross-section
    Plan,
    /// Shaded 3D isometric view
    Iso,
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Plan => ViewMode::Plan,
            ViewArg::Iso => ViewMode::Isometric,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum EdgeArg {
    /// Flat 45° bevel
    Chamfer,
    /// Rounded quarter-circle edge
    Bullnose,
}

/// Piece parameters, from flags or a TOML file.
#[derive(Args)]
struct SpecArgs {
    /// TOML file with the piece parameters (overrides the flags)
    #[arg(long)]
    spec: Option<PathBuf>,
    /// Extrusion length L in mm
    #[arg(long, default_value_t = 1000.0)]
    length: f64,
    /// Slab width W in mm
    #[arg(long, default_value_t = 700.0)]
    width: f64,
    /// Slab thickness T in mm
    #[arg(long, default_value_t = 100.0)]
    thickness: f64,
    /// Lip width Lw in mm
    #[arg(long, default_value_t = 150.0)]
    lip_width: f64,
    /// Lip drop Lh in mm
    #[arg(long, default_value_t = 200.0)]
    lip_drop: f64,
    /// Chamfer leg or bullnose radius Tr in mm (0 = sharp edge)
    #[arg(long, default_value_t = 0.0)]
    edge_depth: f64,
    /// Edge treatment
    #[arg(long, value_enum, default_value = "chamfer")]
    edge: EdgeArg,
    /// Number of identical pieces
    #[arg(long, default_value_t = 1)]
    quantity: u32,
}

impl SpecArgs {
    fn resolve(&self) -> Result<StoneSpec> {
        if let Some(path) = &self.spec {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read spec file {}", path.display()))?;
            let spec: StoneSpec = toml::from_str(&text)
                .with_context(|| format!("failed to parse spec file {}", path.display()))?;
            return Ok(spec);
        }
        Ok(StoneSpec {
            length: self.length,
            width: self.width,
            thickness: self.thickness,
            lip_width: self.lip_width,
            lip_drop: self.lip_drop,
            edge_depth: self.edge_depth,
            edge: match self.edge {
                EdgeArg::Chamfer => EdgeTreatment::Chamfer,
                EdgeArg::Bullnose => EdgeTreatment::Bullnose,
            },
            quantity: self.quantity,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Volume { spec } => {
            let spec = spec.resolve()?;
            run_volume(&spec)?;
        }
        Commands::Draw {
            spec,
            view,
            out,
            render_options,
        } => {
            let spec = spec.resolve()?;
            let opts = match render_options {
                Some(path) => RenderOptions::load(&path)
                    .with_context(|| format!("failed to load {}", path.display()))?,
                None => RenderOptions::default(),
            };
            run_draw(&spec, view.into(), &opts, &out)?;
        }
        Commands::Autofit {
            lip_width,
            thickness,
        } => {
            if lip_width <= 0.0 || thickness <= 0.0 {
                bail!("lip width and thickness must both be greater than zero");
            }
            let radius = autofit_bullnose_radius(lip_width, thickness);
            println!("{radius:.3}");
        }
    }

    Ok(())
}

fn run_volume(spec: &StoneSpec) -> Result<()> {
    spec.validate().map_err(|violations| {
        for v in &violations {
            eprintln!("invalid: {v}");
        }
        anyhow::anyhow!("parameter set has {} violation(s)", violations.len())
    })?;

    let v = sillstone::solid_volume(spec);
    println!("base       {:>16.0} mm³", v.base_mm3);
    println!("edge cut   {:>16.0} mm³", v.edge_removed_mm3);
    println!(
        "unit       {:>16.0} mm³  ({} m³)",
        v.unit_mm3,
        format_volume_m3(v.unit_mm3)
    );
    println!(
        "total      {:>16.0} mm³  ({} m³) × {}",
        v.total_mm3,
        format_volume_m3(v.total_mm3),
        spec.quantity
    );
    Ok(())
}

fn run_draw(spec: &StoneSpec, mode: ViewMode, opts: &RenderOptions, out: &Path) -> Result<()> {
    let result = evaluate(spec, mode, opts);
    if !result.is_valid() {
        for v in &result.violations {
            eprintln!("invalid: {v}");
        }
        bail!("parameter set has {} violation(s)", result.violations.len());
    }

    let Some(view) = result.view else {
        bail!("no view produced for a valid parameter set");
    };
    match out.extension().and_then(|e| e.to_str()) {
        Some("svg") => match &view {
            ViewArtifact::Plan(plan) => export::svg::write_plan_svg(plan, out)?,
            ViewArtifact::Isometric(iso) => export::svg::write_iso_svg(iso, out)?,
        },
        Some("json") => {
            let json = export::to_json(&view)?;
            std::fs::write(out, json)?;
        }
        _ => bail!("unsupported output format (use .svg or .json)"),
    }

    println!("wrote {}", out.display());
    Ok(())
}
