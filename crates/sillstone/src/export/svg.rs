//! SVG export for plan and isometric views.
//!
//! Writes self-contained SVG documents sized to the view's viewport. The
//! palette is fixed: drawings are technical output, not themed UI.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use sillstone_draft::{
    Anchor, Arrowhead, CircleMark, Dimension, FaceTone, IsoView, PlanView, Point2D, PolyLine,
    StrokeKind, TextLabel, Viewport,
};

const OUTLINE_STROKE: &str = "#1c1917";
const CONSTRUCTION_STROKE: &str = "#a8a29e";
const DIMENSION_STROKE: &str = "#2563eb";
const FACE_STROKE: &str = "#44403c";
const DASH_PATTERN: &str = "6 4";
const ARROW_LEN_PX: f64 = 9.0;
const ARROW_HALF_WIDTH_PX: f64 = 3.2;
const FONT: &str = "font-family=\"sans-serif\" font-size=\"12\"";

/// Fill color for an isometric face tone.
fn tone_fill(tone: FaceTone) -> &'static str {
    match tone {
        FaceTone::Top => "#e7e5e4",
        FaceTone::OuterSide => "#a8a29e",
        FaceTone::InnerLip => "#78716c",
        FaceTone::Bottom => "#57534e",
        FaceTone::EdgeCut => "#f59e0b",
        FaceTone::FrontCap => "#d6d3d1",
    }
}

fn points_attr(points: &[Point2D]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn open_svg(out: &mut impl Write, viewport: Viewport) -> std::io::Result<()> {
    writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" \
         viewBox=\"0 0 {:.0} {:.0}\">",
        viewport.width, viewport.height, viewport.width, viewport.height
    )
}

fn write_polyline(out: &mut impl Write, line: &PolyLine, stroke: &str) -> std::io::Result<()> {
    if line.points.is_empty() {
        return Ok(());
    }
    let tag = if line.closed { "polygon" } else { "polyline" };
    let dash = match line.stroke {
        StrokeKind::Solid => String::new(),
        StrokeKind::Dashed => format!(" stroke-dasharray=\"{DASH_PATTERN}\""),
    };
    writeln!(
        out,
        "  <{tag} points=\"{}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"1.5\"{dash}/>",
        points_attr(&line.points)
    )
}

fn write_circle(out: &mut impl Write, circle: &CircleMark) -> std::io::Result<()> {
    let dash = match circle.stroke {
        StrokeKind::Solid => String::new(),
        StrokeKind::Dashed => format!(" stroke-dasharray=\"{DASH_PATTERN}\""),
    };
    let fill = if circle.filled {
        DIMENSION_STROKE
    } else {
        "none"
    };
    writeln!(
        out,
        "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{fill}\" \
         stroke=\"{DIMENSION_STROKE}\" stroke-width=\"1\"{dash}/>",
        circle.center.x, circle.center.y, circle.radius
    )
}

fn write_arrowhead(out: &mut impl Write, arrow: &Arrowhead) -> std::io::Result<()> {
    let base = Point2D::new(
        arrow.at.x - arrow.dir.x * ARROW_LEN_PX,
        arrow.at.y - arrow.dir.y * ARROW_LEN_PX,
    );
    let perp = Point2D::new(-arrow.dir.y, arrow.dir.x);
    let wings = [
        base.offset(perp.x * ARROW_HALF_WIDTH_PX, perp.y * ARROW_HALF_WIDTH_PX),
        base.offset(-perp.x * ARROW_HALF_WIDTH_PX, -perp.y * ARROW_HALF_WIDTH_PX),
    ];
    writeln!(
        out,
        "  <polygon points=\"{}\" fill=\"{DIMENSION_STROKE}\"/>",
        points_attr(&[arrow.at, wings[0], wings[1]])
    )
}

fn write_label(out: &mut impl Write, label: &TextLabel, fill: &str) -> std::io::Result<()> {
    let anchor = match label.anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    };
    writeln!(
        out,
        "  <text x=\"{:.2}\" y=\"{:.2}\" {FONT} text-anchor=\"{anchor}\" \
         fill=\"{fill}\">{}</text>",
        label.at.x, label.at.y, label.text
    )
}

fn write_dimension(out: &mut impl Write, dim: &Dimension) -> std::io::Result<()> {
    writeln!(
        out,
        "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" \
         stroke=\"{DIMENSION_STROKE}\" stroke-width=\"1\"/>",
        dim.start.x, dim.start.y, dim.end.x, dim.end.y
    )?;
    for arrow in &dim.arrows {
        write_arrowhead(out, arrow)?;
    }
    write_label(out, &dim.label, DIMENSION_STROKE)
}

/// Render a plan view as an SVG document.
pub fn render_plan(view: &PlanView, out: &mut impl Write) -> std::io::Result<()> {
    open_svg(out, view.viewport)?;
    for line in &view.construction {
        write_polyline(out, line, CONSTRUCTION_STROKE)?;
    }
    write_polyline(out, &view.outline, OUTLINE_STROKE)?;
    for circle in &view.circles {
        write_circle(out, circle)?;
    }
    for dim in &view.dimensions {
        write_dimension(out, dim)?;
    }
    writeln!(out, "</svg>")
}

/// Render an isometric view as an SVG document.
pub fn render_iso(view: &IsoView, out: &mut impl Write) -> std::io::Result<()> {
    open_svg(out, view.viewport)?;
    for face in &view.faces {
        writeln!(
            out,
            "  <polygon points=\"{}\" fill=\"{}\" stroke=\"{FACE_STROKE}\" \
             stroke-width=\"1\"/>",
            points_attr(&face.points),
            tone_fill(face.tone)
        )?;
    }
    for label in &view.labels {
        write_label(out, label, OUTLINE_STROKE)?;
    }
    writeln!(out, "</svg>")
}

/// Write a plan view to an SVG file.
pub fn write_plan_svg(view: &PlanView, path: impl AsRef<Path>) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    render_plan(view, &mut writer)
}

/// Write an isometric view to an SVG file.
pub fn write_iso_svg(view: &IsoView, path: impl AsRef<Path>) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    render_iso(view, &mut writer)
}
