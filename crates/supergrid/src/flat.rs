//! Flat grid engine.

use supergrid_layout::{
    adjusted_total_dimension, DimensionTracker, GridConfig, GridConfigError, LayoutPlan, Style,
};
use supergrid_rows::{chunk_rows, row_key, GridItem, KeyExtractor};

use crate::render::row_items;
use crate::{generate_styles, GridStyles, RowRender};

/// Grid engine over a flat item slice.
///
/// Owns the validated configuration and the retained measurement state;
/// everything it hands out is recomputed from the current inputs. The host
/// feeds measurements through [`FlatGrid::on_layout`] and pulls render
/// descriptors from [`FlatGrid::rows`].
pub struct FlatGrid<T> {
    config: GridConfig,
    inverted_row: bool,
    adjust_to_styles: bool,
    outer_style: Option<Style>,
    content_style: Option<Style>,
    key_extractor: Option<Box<KeyExtractor<T>>>,
    tracker: DimensionTracker,
}

impl<T> FlatGrid<T> {
    /// Creates a grid engine, validating the configuration up front.
    pub fn new(config: GridConfig) -> Result<Self, GridConfigError> {
        Ok(Self {
            config: config.validated()?,
            inverted_row: false,
            adjust_to_styles: false,
            outer_style: None,
            content_style: None,
            key_extractor: None,
            tracker: DimensionTracker::new(),
        })
    }

    /// Reverses the item order within each row. Row membership is
    /// unaffected.
    pub fn inverted_row(mut self, inverted: bool) -> Self {
        self.inverted_row = inverted;
        self
    }

    /// The host's outer wrapper style, consulted during dimension
    /// adjustment when [`FlatGrid::adjust_to_styles`] is enabled.
    pub fn outer_style(mut self, style: Style) -> Self {
        self.outer_style = Some(style);
        self
    }

    /// The host's content-wrapper style, consulted during dimension
    /// adjustment when [`FlatGrid::adjust_to_styles`] is enabled.
    pub fn content_style(mut self, style: Style) -> Self {
        self.content_style = Some(style);
        self
    }

    /// Enables subtracting the wrapper styles' paddings and max constraints
    /// from measured dimensions.
    pub fn adjust_to_styles(mut self, adjust: bool) -> Self {
        self.adjust_to_styles = adjust;
        self
    }

    /// Supplies the per-item key function used for row identity.
    pub fn key_extractor(mut self, extract: impl Fn(&T, usize) -> String + 'static) -> Self {
        self.key_extractor = Some(Box::new(extract));
        self
    }

    /// Registers the observer notified when items-per-row changes.
    pub fn on_items_per_row_change(mut self, observer: impl FnMut(usize) + 'static) -> Self {
        self.tracker.set_observer(Box::new(observer));
        self
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Feeds a measurement from the host's layout event.
    ///
    /// The raw value is first shrunk for the configured max dimension and
    /// wrapper styles. Returns true when the retained dimension changed and
    /// the host should re-render; unchanged and non-positive measurements
    /// are no-ops. Ignored entirely when a static dimension is configured.
    pub fn on_layout(&mut self, measured: f32) -> bool {
        if self.config.static_dimension.is_some() {
            return false;
        }
        let adjusted = adjusted_total_dimension(
            measured,
            self.config.max_dimension,
            self.content_style.as_ref(),
            self.outer_style.as_ref(),
            self.config.axis,
            self.adjust_to_styles,
        );
        self.tracker.on_layout(adjusted)
    }

    /// The current layout plan; provisional until a measurement arrives.
    pub fn plan(&mut self) -> LayoutPlan {
        self.tracker.plan(&self.config)
    }

    /// The computed style bundle for the current plan.
    pub fn styles(&mut self) -> GridStyles {
        let plan = self.plan();
        generate_styles(&self.config, &plan)
    }
}

impl<T: GridItem> FlatGrid<T> {
    /// Partitions `items` into render rows under the current plan.
    pub fn rows<'a>(&mut self, items: &'a [T]) -> Vec<RowRender<'a, T>> {
        let plan = self.plan();
        let styles = generate_styles(&self.config, &plan);
        let spans = chunk_rows(items, plan.items_per_row);
        let row_count = spans.len();

        spans
            .into_iter()
            .enumerate()
            .map(|(row_index, span)| {
                let (row, has_full_width_item) = row_items(
                    items,
                    span,
                    row_index,
                    plan.items_per_row,
                    self.inverted_row,
                );
                let is_last_row = row_index + 1 == row_count;
                RowRender {
                    key: row_key(
                        items,
                        span,
                        row_index,
                        self.inverted_row,
                        self.key_extractor.as_deref(),
                    ),
                    row_index,
                    is_last_row,
                    items_per_row: plan.items_per_row,
                    margin_trailing: if is_last_row { self.config.spacing } else { 0.0 },
                    has_full_width_item,
                    row_style: styles.row_style_for(has_full_width_item),
                    items: row,
                }
            })
            .collect()
    }
}
