//! Significance annotation layout between two chart elements.
//!
//! Computes the bracket polyline and label placement for a pairwise
//! comparison annotation (the bracket-plus-asterisks convention of
//! scientific bar charts). No drawing happens here: the caller hands the
//! resulting [`BracketLayout`] to whatever plotting backend it uses. The
//! relevant axis range is passed in explicitly rather than read from a
//! current-figure global, so the computation stays pure.

use serde::{Deserialize, Serialize};

/// Significance tier derived from an adjusted p-value.
///
/// Thresholds follow the usual asterisk convention, with strict
/// comparisons at each boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignificanceLevel {
    /// `p < 0.0001`, marked `****`.
    FourStars,
    /// `p < 0.001`, marked `***`.
    ThreeStars,
    /// `p < 0.01`, marked `**`.
    TwoStars,
    /// `p < 0.05`, marked `*`.
    OneStar,
    /// `p >= 0.05`, marked `ns`.
    NotSignificant,
}

impl SignificanceLevel {
    /// Classify an adjusted p-value.
    pub fn from_p_value(p: f64) -> Self {
        if p < 0.0001 {
            SignificanceLevel::FourStars
        } else if p < 0.001 {
            SignificanceLevel::ThreeStars
        } else if p < 0.01 {
            SignificanceLevel::TwoStars
        } else if p < 0.05 {
            SignificanceLevel::OneStar
        } else {
            SignificanceLevel::NotSignificant
        }
    }

    /// The marker text for this tier.
    pub fn as_str(self) -> &'static str {
        match self {
            SignificanceLevel::FourStars => "****",
            SignificanceLevel::ThreeStars => "***",
            SignificanceLevel::TwoStars => "**",
            SignificanceLevel::OneStar => "*",
            SignificanceLevel::NotSignificant => "ns",
        }
    }
}

impl std::fmt::Display for SignificanceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label content for an annotation: either a p-value to classify or a
/// caller-supplied literal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnnotationText {
    /// An adjusted p-value, rendered through [`SignificanceLevel`].
    PValue(f64),
    /// A literal label, rendered verbatim.
    Literal(String),
}

impl AnnotationText {
    /// Resolve to the text the label should carry.
    pub fn resolve(&self) -> String {
        match self {
            AnnotationText::PValue(p) => SignificanceLevel::from_p_value(*p).as_str().to_owned(),
            AnnotationText::Literal(text) => text.clone(),
        }
    }
}

/// Rendered position of one chart element, in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementAnchor {
    /// Horizontal coordinate (center of a vertical bar, or the tip of a
    /// horizontal bar).
    pub x: f64,
    /// Vertical coordinate (top of a vertical bar, or the center of a
    /// horizontal bar).
    pub y: f64,
    /// Error-bar length the bracket must clear, if any. Applied to `y`
    /// for horizontal brackets only.
    pub error: Option<f64>,
}

impl ElementAnchor {
    /// Anchor without an error bar.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, error: None }
    }

    /// Anchor with an error-bar length.
    pub fn with_error(x: f64, y: f64, error: f64) -> Self {
        Self {
            x,
            y,
            error: Some(error),
        }
    }
}

/// Current range of the axis the bracket is offset along: the y-axis for
/// horizontal brackets, the x-axis for vertical ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpan {
    /// Lower limit of the axis.
    pub min: f64,
    /// Upper limit of the axis.
    pub max: f64,
}

impl AxisSpan {
    /// Span from axis limits.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Length of the span; fraction-based offsets scale with this.
    pub fn length(&self) -> f64 {
        self.max - self.min
    }
}

/// Bracket orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Bracket above two vertical bars, opening downward.
    Horizontal,
    /// Bracket to the right of two horizontal bars, opening leftward.
    Vertical,
}

/// Styling knobs for the annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationStyle {
    /// Gap between the taller element and the bracket base, as a fraction
    /// of the axis span (default: 0.05).
    pub offset_frac: f64,
    /// Length of the bracket arms, as a fraction of the axis span
    /// (default: 0.05).
    pub rise_frac: f64,
    /// Label font size, if the caller wants to override the backend default.
    pub font_size: Option<f64>,
    /// Whether the label should be bold.
    pub bold: bool,
    /// Bracket line width, if the caller wants to override the backend
    /// default.
    pub line_width: Option<f64>,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            offset_frac: 0.05,
            rise_frac: 0.05,
            font_size: None,
            bold: false,
            line_width: None,
        }
    }
}

impl AnnotationStyle {
    /// Set the element-to-bracket gap fraction.
    pub fn offset_frac(mut self, frac: f64) -> Self {
        self.offset_frac = frac;
        self
    }

    /// Set the bracket arm length fraction.
    pub fn rise_frac(mut self, frac: f64) -> Self {
        self.rise_frac = frac;
        self
    }

    /// Set an explicit label font size.
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Render the label in bold.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set an explicit bracket line width.
    pub fn line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }
}

/// Horizontal alignment hint for the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HAlign {
    /// Anchor the label's left edge at the position.
    Left,
    /// Center the label at the position.
    Center,
}

/// Vertical alignment hint for the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VAlign {
    /// Anchor the label's bottom edge at the position.
    Bottom,
    /// Center the label at the position.
    Center,
}

/// Computed annotation layout, ready for a plotting backend to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketLayout {
    /// Bracket polyline in data coordinates: arm down, crossbar, arm down.
    pub path: [(f64, f64); 4],
    /// Label text (asterisks, `ns`, or a literal).
    pub label: String,
    /// Where to anchor the label, in data coordinates.
    pub label_position: (f64, f64),
    /// Horizontal alignment of the label relative to its anchor.
    pub h_align: HAlign,
    /// Vertical alignment of the label relative to its anchor.
    pub v_align: VAlign,
    /// Font size override, passed through from the style.
    pub font_size: Option<f64>,
    /// Bold flag, passed through from the style.
    pub bold: bool,
    /// Line width override, passed through from the style.
    pub line_width: Option<f64>,
}

/// Lay out a significance bracket between two chart elements.
///
/// Horizontal brackets clear the taller of the two elements (including
/// error bars, when present) by `offset_frac` of the axis span and rise
/// by `rise_frac`; the label sits centered above the crossbar. Vertical
/// brackets do the same to the right of the wider element, with the label
/// left-aligned beside the crossbar midpoint; error bars are not applied
/// in this orientation.
///
/// # Arguments
///
/// * `a`, `b` - Rendered extents of the two elements being compared.
/// * `text` - P-value or literal label.
/// * `orientation` - Which side of the elements the bracket sits on.
/// * `axis` - Range of the axis the bracket is offset along.
/// * `style` - Fractional offsets and label styling.
///
/// # Returns
///
/// The bracket polyline and label placement, in data coordinates.
pub fn pairwise_comparison(
    a: ElementAnchor,
    b: ElementAnchor,
    text: &AnnotationText,
    orientation: Orientation,
    axis: AxisSpan,
    style: &AnnotationStyle,
) -> BracketLayout {
    let label = text.resolve();
    let offset = style.offset_frac * axis.length();
    let rise = style.rise_frac * axis.length();

    match orientation {
        Orientation::Horizontal => {
            let a_top = a.y + a.error.unwrap_or(0.0);
            let b_top = b.y + b.error.unwrap_or(0.0);
            let base = a_top.max(b_top) + offset;
            BracketLayout {
                path: [
                    (a.x, base),
                    (a.x, base + rise),
                    (b.x, base + rise),
                    (b.x, base),
                ],
                label,
                label_position: ((a.x + b.x) / 2.0, base + rise),
                h_align: HAlign::Center,
                v_align: VAlign::Bottom,
                font_size: style.font_size,
                bold: style.bold,
                line_width: style.line_width,
            }
        }
        Orientation::Vertical => {
            let base = a.x.max(b.x) + offset;
            BracketLayout {
                path: [
                    (base, a.y),
                    (base + rise, a.y),
                    (base + rise, b.y),
                    (base, b.y),
                ],
                label,
                label_position: (base + rise, (a.y + b.y) / 2.0),
                h_align: HAlign::Left,
                v_align: VAlign::Center,
                font_size: style.font_size,
                bold: style.bold,
                line_width: style.line_width,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_significance_thresholds() {
        assert_eq!(
            SignificanceLevel::from_p_value(0.00005),
            SignificanceLevel::FourStars
        );
        assert_eq!(
            SignificanceLevel::from_p_value(0.0005),
            SignificanceLevel::ThreeStars
        );
        assert_eq!(
            SignificanceLevel::from_p_value(0.005),
            SignificanceLevel::TwoStars
        );
        assert_eq!(
            SignificanceLevel::from_p_value(0.04),
            SignificanceLevel::OneStar
        );
        assert_eq!(
            SignificanceLevel::from_p_value(0.5),
            SignificanceLevel::NotSignificant
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Each boundary value falls into the weaker tier.
        assert_eq!(
            SignificanceLevel::from_p_value(0.0001),
            SignificanceLevel::ThreeStars
        );
        assert_eq!(
            SignificanceLevel::from_p_value(0.001),
            SignificanceLevel::TwoStars
        );
        assert_eq!(
            SignificanceLevel::from_p_value(0.01),
            SignificanceLevel::OneStar
        );
        assert_eq!(
            SignificanceLevel::from_p_value(0.05),
            SignificanceLevel::NotSignificant
        );
    }

    #[test]
    fn test_marker_text() {
        assert_eq!(SignificanceLevel::FourStars.as_str(), "****");
        assert_eq!(SignificanceLevel::NotSignificant.to_string(), "ns");
    }

    #[test]
    fn test_annotation_text_resolution() {
        assert_eq!(AnnotationText::PValue(0.003).resolve(), "**");
        assert_eq!(
            AnnotationText::Literal("p = 0.03".to_owned()).resolve(),
            "p = 0.03"
        );
    }

    #[test]
    fn test_style_builder() {
        let style = AnnotationStyle::default()
            .offset_frac(0.1)
            .font_size(12.0)
            .bold(true)
            .line_width(1.5);
        assert!((style.offset_frac - 0.1).abs() < 1e-10);
        assert!((style.rise_frac - 0.05).abs() < 1e-10);
        assert_eq!(style.font_size, Some(12.0));
        assert!(style.bold);
        assert_eq!(style.line_width, Some(1.5));
    }
}
