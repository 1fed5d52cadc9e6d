//! Container-dimension adjustment from host styles.
//!
//! Hosts often wrap the grid in containers that carry their own padding or
//! max-size constraints. This module resolves those styles along the wrap
//! axis and shrinks the raw measured dimension accordingly, before the
//! planner ever sees it. It is a pre-processing filter; the sizing math in
//! [`crate::compute_plan`] stays independent of it.

use crate::Axis;

/// Flat style record; the subset of host style fields the adjuster inspects.
///
/// Axis-specific fields win over the shorthand `padding`, and the
/// side-specific fields win over both, mirroring how the host resolves its
/// style shorthands.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Style {
    pub max_width: Option<f32>,
    pub max_height: Option<f32>,
    pub padding: Option<f32>,
    pub padding_horizontal: Option<f32>,
    pub padding_vertical: Option<f32>,
    pub padding_left: Option<f32>,
    pub padding_right: Option<f32>,
    pub padding_top: Option<f32>,
    pub padding_bottom: Option<f32>,
}

impl Style {
    /// Merges `other` over `self`; fields set in `other` win.
    pub fn merged(self, other: Style) -> Style {
        Style {
            max_width: other.max_width.or(self.max_width),
            max_height: other.max_height.or(self.max_height),
            padding: other.padding.or(self.padding),
            padding_horizontal: other.padding_horizontal.or(self.padding_horizontal),
            padding_vertical: other.padding_vertical.or(self.padding_vertical),
            padding_left: other.padding_left.or(self.padding_left),
            padding_right: other.padding_right.or(self.padding_right),
            padding_top: other.padding_top.or(self.padding_top),
            padding_bottom: other.padding_bottom.or(self.padding_bottom),
        }
    }

    /// Flattens a stack of styles, later entries overriding earlier ones.
    pub fn flatten(styles: &[Style]) -> Style {
        styles
            .iter()
            .fold(Style::default(), |merged, style| merged.merged(*style))
    }
}

/// Leading/trailing padding and max size resolved along the wrap axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StyleSpaces {
    pub leading: f32,
    pub trailing: f32,
    pub max_dimension: Option<f32>,
}

/// Resolves a style's paddings and max constraint along the wrap axis.
///
/// A vertical grid wraps on width, so it reads the horizontal paddings and
/// `max_width`; a horizontal grid reads the vertical paddings and
/// `max_height`.
pub fn style_spaces(style: &Style, axis: Axis) -> StyleSpaces {
    let (max_dimension, axis_padding, leading, trailing) = match axis {
        Axis::Vertical => (
            style.max_width,
            style.padding_horizontal,
            style.padding_left,
            style.padding_right,
        ),
        Axis::Horizontal => (
            style.max_height,
            style.padding_vertical,
            style.padding_top,
            style.padding_bottom,
        ),
    };
    let axis_padding = axis_padding.or(style.padding);
    StyleSpaces {
        leading: leading.or(axis_padding).unwrap_or(0.0),
        trailing: trailing.or(axis_padding).unwrap_or(0.0),
        max_dimension,
    }
}

/// Shrinks a raw measured dimension for the host's outer constraints.
///
/// Applies, in order: the explicit `max_dimension` cap, the content style's
/// own max constraint and paddings, and finally the outer style's paddings.
/// Outer paddings are only subtracted for their excess beyond the symmetric
/// margin left by centering capped content, so space already outside the
/// content area is not subtracted twice.
pub fn adjusted_total_dimension(
    total_dimension: f32,
    max_dimension: Option<f32>,
    content_style: Option<&Style>,
    outer_style: Option<&Style>,
    axis: Axis,
    adjust_to_styles: bool,
) -> f32 {
    let mut adjusted = total_dimension;
    // Track the smallest max constraint seen so far.
    let mut actual_max = total_dimension;

    if let Some(max) = max_dimension {
        if total_dimension > max {
            actual_max = max;
            adjusted = max;
        }
    }

    if !adjust_to_styles {
        return adjusted;
    }

    if let Some(style) = content_style {
        let spaces = style_spaces(style, axis);
        if let Some(max) = spaces.max_dimension {
            if adjusted > max {
                actual_max = max;
                adjusted = max;
            }
        }
        adjusted -= spaces.leading + spaces.trailing;
    }

    if let Some(style) = outer_style {
        // Capped content floats centered; each side already has this margin.
        let edge_margin = (total_dimension - actual_max) / 2.0;
        let spaces = style_spaces(style, axis);
        if spaces.leading > edge_margin {
            adjusted -= spaces.leading - edge_margin;
        }
        if spaces.trailing > edge_margin {
            adjusted -= spaces.trailing - edge_margin;
        }
    }

    adjusted
}
