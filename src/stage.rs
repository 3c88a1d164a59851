pub mod memory;

pub use memory::{MemoryStage, Mutation};

/// Opaque element handle minted by a [`Stage`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct ElementId(pub u64);

/// Inline style properties the engine writes.
///
/// `Top` and `Left` carry percentages of the viewport; `Opacity` carries the
/// usual 0..1 scalar.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub enum StyleProp {
    Top,
    Left,
    Opacity,
}

impl StyleProp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Opacity => "opacity",
        }
    }
}

/// Host seam: the document surface the engine reads and mutates.
///
/// Absent elements are `None`/empty, never errors — cosmetic failure is
/// acceptable degradation. `add_class` must be idempotent.
pub trait Stage {
    /// First element matching the selector, if any.
    fn resolve(&self, selector: &str) -> Option<ElementId>;

    /// All elements matching the selector, in document order.
    fn resolve_all(&self, selector: &str) -> Vec<ElementId>;

    fn set_style(&mut self, el: ElementId, prop: StyleProp, value: f64);

    fn set_attr(&mut self, el: ElementId, name: &str, value: &str);

    /// Add a class; adding an already-present class is a no-op. Targeting a
    /// stale element (removed after a timer was scheduled) is also a no-op.
    fn add_class(&mut self, el: ElementId, class: &str);

    fn attr(&self, el: ElementId, name: &str) -> Option<String>;
}
