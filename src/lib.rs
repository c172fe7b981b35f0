//! Experimental pilot implementation of the masonry placement core.
//!
//! This crate computes deterministic rectangular placement for fixed-size
//! items packed into a multi-column strip along a scroll axis. It is the
//! positioning half of a virtualized grid: callers supply item sizes and the
//! running per-column frontier ("outline"), the engine assigns each item a
//! column and a position and hands the advanced frontier back. Rendering,
//! scrolling, and item measurement live elsewhere.
//!
//! The modules follow the RSB `MODULE_SPEC` pattern so we can eventually
//! promote the code into a production crate without major surgery.

pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;

pub use error::{LayoutError, Result};
pub use geometry::{AxisMap, GridItem, ItemRect, ItemSize, Orientation, PlacedItem};
pub use layout::{
    Align, GridLayout, InsertResult, LayoutGroup, LayoutOptions, Outline, OutlineSnapshot,
    derive_columns, outline,
};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{LayoutMetrics, MetricSnapshot};
