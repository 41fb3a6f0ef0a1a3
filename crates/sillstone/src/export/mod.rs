//! Exporters for the drawing primitives.
//!
//! The projectors emit plain data; these sinks turn a view into something
//! a file or frontend can consume: an SVG drawing or a JSON dump of the
//! primitives themselves.

pub mod svg;

use crate::ViewArtifact;

/// Serialize a view's primitives as pretty-printed JSON.
pub fn to_json(view: &ViewArtifact) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{evaluate, RenderOptions, StoneSpec, ViewMode};

    #[test]
    fn test_json_dump_tags_the_view() {
        let result = evaluate(
            &StoneSpec::default(),
            ViewMode::Plan,
            &RenderOptions::default(),
        );
        let json = to_json(&result.view.unwrap()).unwrap();
        assert!(json.contains("\"view\": \"plan\""));
        assert!(json.contains("\"dimensions\""));
    }
}
