//! Sectioned grid engine.

use supergrid_layout::{
    adjusted_total_dimension, Axis, DimensionTracker, GridConfig, GridConfigError, LayoutPlan,
    Style,
};
use supergrid_rows::{row_key, section_rows, GridItem, KeyExtractor, Section};

use crate::render::row_items;
use crate::{generate_styles, GridStyles, SectionRowRender};

/// Grid engine over named sections.
///
/// Each section is partitioned independently, so section boundaries are
/// hard row breaks, and the first row of every section carries one spacing
/// unit of leading margin to separate it from the section header.
/// Sectioned grids only scroll vertically; any configured axis is
/// overridden.
pub struct SectionGrid<T> {
    config: GridConfig,
    inverted_row: bool,
    adjust_to_styles: bool,
    outer_style: Option<Style>,
    content_style: Option<Style>,
    key_extractor: Option<Box<KeyExtractor<T>>>,
    tracker: DimensionTracker,
}

impl<T> SectionGrid<T> {
    /// Creates a sectioned grid engine, validating the configuration.
    pub fn new(config: GridConfig) -> Result<Self, GridConfigError> {
        Ok(Self {
            config: config.axis(Axis::Vertical).validated()?,
            inverted_row: false,
            adjust_to_styles: false,
            outer_style: None,
            content_style: None,
            key_extractor: None,
            tracker: DimensionTracker::new(),
        })
    }

    /// Reverses the item order within each row.
    pub fn inverted_row(mut self, inverted: bool) -> Self {
        self.inverted_row = inverted;
        self
    }

    /// The host's outer wrapper style, consulted during dimension
    /// adjustment when [`SectionGrid::adjust_to_styles`] is enabled.
    pub fn outer_style(mut self, style: Style) -> Self {
        self.outer_style = Some(style);
        self
    }

    /// The host's content-wrapper style, consulted during dimension
    /// adjustment when [`SectionGrid::adjust_to_styles`] is enabled.
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

    /// Feeds a measurement from the host's layout event. Same contract as
    /// [`crate::FlatGrid::on_layout`].
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

impl<T: GridItem> SectionGrid<T> {
    /// Partitions every section into render rows under the current plan.
    pub fn rows<'a>(&mut self, sections: &'a [Section<T>]) -> Vec<SectionRowRender<'a, T>> {
        let plan = self.plan();
        let styles = generate_styles(&self.config, &plan);

        section_rows(sections, plan.items_per_row)
            .into_iter()
            .map(|row| {
                let data = &sections[row.section_index].data;
                let (items, has_full_width_item) = row_items(
                    data,
                    row.span,
                    row.row_index,
                    plan.items_per_row,
                    self.inverted_row,
                );
                SectionRowRender {
                    key: row_key(
                        data,
                        row.span,
                        row.row_index,
                        self.inverted_row,
                        self.key_extractor.as_deref(),
                    ),
                    section_index: row.section_index,
                    row_index: row.row_index,
                    is_first_row: row.is_first_row,
                    margin_leading: if row.is_first_row {
                        self.config.spacing
                    } else {
                        0.0
                    },
                    items_per_row: plan.items_per_row,
                    has_full_width_item,
                    row_style: styles.row_style_for(has_full_width_item),
                    items,
                }
            })
            .collect()
    }
}
