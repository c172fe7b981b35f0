use serde::{Deserialize, Serialize};

/// Fixed 2D extent of an item, in layout units.
///
/// Sizes are supplied by the caller (already measured); the engine never
/// inspects content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSize {
    pub width: f64,
    pub height: f64,
}

impl ItemSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Resolved placement position for an item.
///
/// `left`/`top` are concrete axis labels; which one carries the scroll-axis
/// coordinate depends on the configured [`Orientation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemRect {
    pub left: f64,
    pub top: f64,
}

impl ItemRect {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Immutable layout input: an item the caller wants placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridItem {
    pub size: ItemSize,
}

impl GridItem {
    pub const fn new(size: ItemSize) -> Self {
        Self { size }
    }

    pub const fn sized(width: f64, height: f64) -> Self {
        Self {
            size: ItemSize::new(width, height),
        }
    }
}

/// Layout output: the input item plus its resolved position and column.
///
/// Placed items are fresh values; the engine never aliases caller-owned data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedItem {
    pub size: ItemSize,
    pub rect: ItemRect,
    pub column: usize,
}

/// Scroll-axis selection for the strip.
///
/// `Vertical` scrolls top-to-bottom (columns run left-to-right);
/// `Horizontal` scrolls left-to-right (columns stack top-to-bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

/// Accessor pair mapping the primary/secondary layout axes onto concrete
/// `width`/`height` and `left`/`top` labels.
///
/// Resolved once from [`Orientation`] when the engine is built; all axis
/// reads and rect construction go through this, never through per-call
/// orientation checks scattered across the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMap {
    horizontal: bool,
}

impl AxisMap {
    pub const fn new(orientation: Orientation) -> Self {
        Self {
            horizontal: matches!(orientation, Orientation::Horizontal),
        }
    }

    /// Item extent along the scroll axis.
    pub fn primary_size(&self, size: ItemSize) -> f64 {
        if self.horizontal {
            size.width
        } else {
            size.height
        }
    }

    /// Item extent across the scroll axis; this is the dimension columns
    /// are sized from.
    pub fn secondary_size(&self, size: ItemSize) -> f64 {
        if self.horizontal {
            size.height
        } else {
            size.width
        }
    }

    /// Scroll-axis coordinate of a placed rect.
    pub fn primary_pos(&self, rect: ItemRect) -> f64 {
        if self.horizontal {
            rect.left
        } else {
            rect.top
        }
    }

    /// Cross-axis coordinate of a placed rect.
    pub fn secondary_pos(&self, rect: ItemRect) -> f64 {
        if self.horizontal {
            rect.top
        } else {
            rect.left
        }
    }

    /// Build a rect from (primary, secondary) coordinates.
    pub fn rect(&self, primary: f64, secondary: f64) -> ItemRect {
        if self.horizontal {
            ItemRect::new(primary, secondary)
        } else {
            ItemRect::new(secondary, primary)
        }
    }
}
