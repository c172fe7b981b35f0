use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::Result;
use crate::geometry::{AxisMap, GridItem, ItemRect, Orientation, PlacedItem};
use crate::layout::outline::{self, Outline};
use crate::logging::{LogEvent, LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::LayoutMetrics;

/// Cross-axis alignment policy for placed items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Pack columns from the leading edge.
    #[default]
    Start,
    /// Center the packed columns in the leftover container space.
    Center,
    /// Pack columns against the trailing edge, right-aligning each item
    /// within its column.
    End,
    /// Spread columns evenly across the full container, first column flush
    /// left and last column flush right. With a single column this falls
    /// back to the `Start` offset.
    Justify,
}

/// Engine configuration, fixed for the lifetime of one [`GridLayout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub orientation: Orientation,
    pub align: Align,
    /// Fixed cross-axis item size. `0.0` derives the column size from the
    /// first item seen instead.
    pub item_size: f64,
    /// Gap between items on both axes.
    pub margin: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            align: Align::default(),
            item_size: 0.0,
            margin: 0.0,
        }
    }
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn horizontal(mut self) -> Self {
        self.orientation = Orientation::Horizontal;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_item_size(mut self, item_size: f64) -> Self {
        self.item_size = item_size;
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }
}

/// Frontier state around one placement batch.
///
/// `start` is the frontier at the low edge of the batch and `end` at the high
/// edge, regardless of insertion direction: append reports
/// (seed, advanced), prepend reports (advanced, seed).
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineSnapshot {
    pub start: Outline,
    pub end: Outline,
    pub start_index: usize,
    /// Index (into the returned items) of the item with the furthest
    /// trailing edge; `None` for an empty batch.
    pub end_index: Option<usize>,
}

/// Result of a single append/prepend call.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertResult {
    pub items: Vec<PlacedItem>,
    pub outlines: OutlineSnapshot,
}

/// One pre-partitioned batch for [`GridLayout::layout`]; the engine fills in
/// `placed` and `outlines`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutGroup {
    pub items: Vec<GridItem>,
    pub placed: Vec<PlacedItem>,
    pub outlines: Option<OutlineSnapshot>,
}

impl LayoutGroup {
    pub fn new(items: Vec<GridItem>) -> Self {
        Self {
            items,
            placed: Vec::new(),
            outlines: None,
        }
    }
}

/// Derive the column size and column count for a container.
///
/// A configured `fixed_item_size` wins over the sample item's cross-axis
/// size; with neither available the grid degrades to a single column, since
/// no packing is possible without a known fixed cross-size.
pub fn derive_columns(
    container_size: f64,
    margin: f64,
    fixed_item_size: f64,
    sample_secondary: f64,
) -> (f64, usize) {
    let column_size = if fixed_item_size > 0.0 {
        fixed_item_size
    } else {
        sample_secondary
    };
    if column_size <= 0.0 {
        return (0.0, 1);
    }

    let count = ((container_size + margin) / (column_size + margin)).floor();
    let count = if count.is_finite() && count >= 1.0 {
        count as usize
    } else {
        1
    };
    (column_size, count)
}

/// Multi-column strip packing engine.
///
/// Items are packed into the least-filled column along the scroll axis;
/// appends grow the high edge, prepends grow the low edge. The only mutable
/// state between calls is the derived column count/size and the container
/// cross-size; frontiers are owned by the caller and passed per call.
///
/// Not thread-safe: one instance per logical grid, calls serialized.
pub struct GridLayout {
    options: LayoutOptions,
    axes: AxisMap,
    size: f64,
    column_size: f64,
    column_length: usize,
    metrics: LayoutMetrics,
    logger: Option<Logger>,
}

impl GridLayout {
    pub fn new(options: LayoutOptions) -> Self {
        let axes = AxisMap::new(options.orientation);
        Self {
            options,
            axes,
            size: 0.0,
            column_size: 0.0,
            column_length: 0,
            metrics: LayoutMetrics::new(),
            logger: None,
        }
    }

    /// Attach a structured logger; placement batches and column derivations
    /// are reported through it best-effort.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Update the container cross-size used by subsequent column
    /// derivations. Already-placed items are not re-laid out.
    pub fn set_size(&mut self, size: f64) {
        self.size = size;
    }

    pub fn container_size(&self) -> f64 {
        self.size
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn column_size(&self) -> f64 {
        self.column_size
    }

    pub fn column_length(&self) -> usize {
        self.column_length
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Pack `items` onto the high edge of `outline`.
    pub fn append(&mut self, items: &[GridItem], outline: &[f64]) -> InsertResult {
        self.insert(items, outline, true)
    }

    /// Pack `items` onto the low edge of `outline`.
    ///
    /// Items are processed in reverse input order so the last input item
    /// lands closest to the existing content; the returned items are then
    /// stably sorted by (primary, secondary) position, which is the order
    /// callers should render in.
    pub fn prepend(&mut self, items: &[GridItem], outline: &[f64]) -> InsertResult {
        self.insert(items, outline, false)
    }

    /// Lay out multiple ordered groups as one continuous packed sequence,
    /// threading each group's high-edge frontier into the next.
    ///
    /// Columns are re-derived from the first non-empty group's first item on
    /// every call. Groups are always packed in append order; `_is_append` is
    /// accepted for call-site symmetry with `append`/`prepend`.
    pub fn layout(&mut self, groups: &mut [LayoutGroup], outline: &[f64], _is_append: bool) {
        let sample = groups.iter().find(|g| !g.items.is_empty()).map(|g| g.items[0]);
        self.check_column(sample.as_ref());

        let mut running = self.reconcile_outline(outline, true);
        for group in groups.iter_mut() {
            let (placed, snapshot) = self.place(&group.items, &running, true);
            running.clone_from(&snapshot.end);
            self.metrics.record_batch(placed.len(), true);
            group.placed = placed;
            group.outlines = Some(snapshot);
        }
        self.emit(event_with_fields(
            LogLevel::Debug,
            "layout.groups",
            "groups_packed",
            [
                json_kv("groups", json!(groups.len())),
                json_kv("column_length", json!(self.column_length)),
            ],
        ));
    }

    /// Project placed rects into their scroll-axis coordinates. Pure; calling
    /// it twice on the same input returns identical results.
    pub fn get_points(&self, rects: &[ItemRect]) -> Vec<f64> {
        rects.iter().map(|&rect| self.axes.primary_pos(rect)).collect()
    }

    /// Emit the current metric counters through the attached logger.
    pub fn log_metrics(&self) -> Result<()> {
        if let Some(logger) = &self.logger {
            let event = self.metrics.snapshot(self.column_length).to_log_event("layout.metrics");
            logger.log_event(event)?;
        }
        Ok(())
    }

    fn insert(&mut self, items: &[GridItem], outline: &[f64], is_append: bool) -> InsertResult {
        if items.is_empty() {
            return InsertResult {
                items: Vec::new(),
                outlines: OutlineSnapshot {
                    start: outline.to_vec(),
                    end: outline.to_vec(),
                    start_index: 0,
                    end_index: None,
                },
            };
        }

        if self.column_length == 0 {
            self.check_column(items.first());
        }
        let seed = self.reconcile_outline(outline, is_append);
        let (placed, outlines) = self.place(items, &seed, is_append);

        self.metrics.record_batch(placed.len(), is_append);
        self.emit(event_with_fields(
            LogLevel::Debug,
            "layout.insert",
            if is_append { "batch_appended" } else { "batch_prepended" },
            [
                json_kv("items", json!(placed.len())),
                json_kv("column_length", json!(self.column_length)),
            ],
        ));

        InsertResult { items: placed, outlines }
    }

    /// Re-derive the column size/count from the configuration and a sample
    /// item.
    fn check_column(&mut self, sample: Option<&GridItem>) {
        let sample_secondary = sample
            .map(|item| self.axes.secondary_size(item.size))
            .unwrap_or(0.0);
        let (column_size, column_length) = derive_columns(
            self.size,
            self.options.margin,
            self.options.item_size,
            sample_secondary,
        );
        self.column_size = column_size;
        self.column_length = column_length;
        self.emit(event_with_fields(
            LogLevel::Debug,
            "layout.columns",
            "columns_derived",
            [
                json_kv("column_size", json!(column_size)),
                json_kv("column_length", json!(column_length)),
            ],
        ));
    }

    /// A frontier whose length disagrees with the current column count is an
    /// implicit resize signal, not an error: rebuild it as a uniform outline
    /// at the direction-appropriate extremum of the supplied values.
    fn reconcile_outline(&mut self, outline: &[f64], is_append: bool) -> Outline {
        if outline.len() == self.column_length {
            return outline.to_vec();
        }

        self.metrics.record_outline_reset();
        let pos = if outline.is_empty() {
            0.0
        } else if is_append {
            outline::lowest(outline)
        } else {
            outline::highest(outline)
        };
        outline::uniform(self.column_length, pos)
    }

    fn place(
        &self,
        items: &[GridItem],
        seed: &[f64],
        is_append: bool,
    ) -> (Vec<PlacedItem>, OutlineSnapshot) {
        let margin = self.options.margin;
        let view_dist =
            self.size - (self.column_size + margin) * self.column_length as f64 + margin;

        let start_outline: Outline = seed.to_vec();
        let mut end_outline: Outline = seed.to_vec();
        let mut placed: Vec<PlacedItem> = Vec::with_capacity(items.len());
        let mut end_index: Option<usize> = None;
        let mut end_pos = 0.0;

        for step in 0..items.len() {
            let point = if is_append {
                outline::lowest(&end_outline)
            } else {
                outline::highest(&end_outline)
            };
            let column = outline::position_of(&end_outline, point);
            let item = if is_append {
                &items[step]
            } else {
                &items[items.len() - 1 - step]
            };

            let primary_size = self.axes.primary_size(item.size);
            let secondary_size = self.axes.secondary_size(item.size);
            let primary_pos = if is_append {
                point
            } else {
                point - margin - primary_size
            };
            let trailing = primary_pos + primary_size + margin;
            let secondary_pos = self.secondary_offset(column, secondary_size, view_dist);

            end_outline[column] = if is_append { trailing } else { primary_pos };
            placed.push(PlacedItem {
                size: item.size,
                rect: self.axes.rect(primary_pos, secondary_pos),
                column,
            });

            if end_index.is_none() || end_pos < trailing {
                end_index = Some(step);
                end_pos = trailing;
            }
        }

        if !is_append {
            let axes = self.axes;
            placed.sort_by(|a, b| {
                axes.primary_pos(a.rect)
                    .total_cmp(&axes.primary_pos(b.rect))
                    .then(axes.secondary_pos(a.rect).total_cmp(&axes.secondary_pos(b.rect)))
            });
            end_index = placed.len().checked_sub(1);
        }

        // start stays the low edge and end the high edge relative to the
        // growth direction.
        let (start, end) = if is_append {
            (start_outline, end_outline)
        } else {
            (end_outline, start_outline)
        };

        (
            placed,
            OutlineSnapshot {
                start,
                end,
                start_index: 0,
                end_index,
            },
        )
    }

    fn secondary_offset(&self, column: usize, secondary_size: f64, view_dist: f64) -> f64 {
        let base = (self.column_size + self.options.margin) * column as f64;
        match self.options.align {
            Align::Start => base,
            Align::Center => base + view_dist / 2.0,
            Align::End => base + view_dist + self.column_size - secondary_size,
            Align::Justify => {
                if self.column_length <= 1 {
                    base
                } else {
                    (self.size - self.column_size) / (self.column_length - 1) as f64
                        * column as f64
                }
            }
        }
    }

    fn emit(&self, event: LogEvent) {
        if let Some(logger) = &self.logger {
            logger.log_event(event).ok();
        }
    }
}
