//! Shelf record and its kind/size enums.
//!
//! The wire format and preset files name a shelf's type with a bare string
//! (`"dairy"`, `"cashier"`, `"wall"`, ...).  That string is parsed into
//! [`ShelfKind`] once, at the boundary, so the engine branches on an
//! exhaustive enum instead of comparing strings.

use std::fmt;
use std::str::FromStr;

use sp_core::{FloorPoint, ShelfId};

use crate::LayoutError;

// ── ProductCategory ───────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    Dairy,
    Bakery,
    Produce,
    Meat,
    Vegetables,
    General,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 6] = [
        ProductCategory::Dairy,
        ProductCategory::Bakery,
        ProductCategory::Produce,
        ProductCategory::Meat,
        ProductCategory::Vegetables,
        ProductCategory::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductCategory::Dairy => "dairy",
            ProductCategory::Bakery => "bakery",
            ProductCategory::Produce => "produce",
            ProductCategory::Meat => "meat",
            ProductCategory::Vegetables => "vegetables",
            ProductCategory::General => "general",
        }
    }
}

// ── ShelfKind ─────────────────────────────────────────────────────────────────

/// What a placed fixture is.
///
/// Only `Product` shelves count toward a customer's "has shopped" state;
/// `Checkout` is where shopping ends; `Wall` is scenery and never a target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum ShelfKind {
    Product(ProductCategory),
    Checkout,
    Wall,
}

impl ShelfKind {
    #[inline]
    pub fn is_product(self) -> bool {
        matches!(self, ShelfKind::Product(_))
    }

    #[inline]
    pub fn is_checkout(self) -> bool {
        matches!(self, ShelfKind::Checkout)
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        matches!(self, ShelfKind::Wall)
    }

    /// The wire name (`"cashier"` for checkouts).
    pub fn as_str(self) -> &'static str {
        match self {
            ShelfKind::Product(c) => c.as_str(),
            ShelfKind::Checkout => "cashier",
            ShelfKind::Wall => "wall",
        }
    }
}

impl FromStr for ShelfKind {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "cashier" | "checkout" => Ok(ShelfKind::Checkout),
            "wall" => Ok(ShelfKind::Wall),
            other => ProductCategory::ALL
                .into_iter()
                .find(|c| c.as_str() == other)
                .map(ShelfKind::Product)
                .ok_or_else(|| LayoutError::UnknownKind(s.to_owned())),
        }
    }
}

impl TryFrom<String> for ShelfKind {
    type Error = LayoutError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ShelfKind> for String {
    fn from(kind: ShelfKind) -> String {
        kind.as_str().to_owned()
    }
}

impl fmt::Display for ShelfKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ShelfSize ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShelfSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ShelfSize {
    /// `[width, height, depth]` of the fixture mesh, in floor units.
    pub fn dimensions(self) -> [f32; 3] {
        match self {
            ShelfSize::Small => [1.0, 1.5, 0.6],
            ShelfSize::Medium => [1.5, 1.5, 0.6],
            ShelfSize::Large => [2.5, 1.5, 0.6],
        }
    }
}

impl FromStr for ShelfSize {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(ShelfSize::Small),
            "medium" => Ok(ShelfSize::Medium),
            "large" => Ok(ShelfSize::Large),
            _ => Err(LayoutError::UnknownSize(s.to_owned())),
        }
    }
}

// ── Shelf ─────────────────────────────────────────────────────────────────────

/// A placed store fixture.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shelf {
    pub id: ShelfId,
    pub kind: ShelfKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub size: ShelfSize,
    /// Centre of the fixture on the floor.
    pub position: FloorPoint,
    /// Yaw in radians.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: f32,
    /// Arrival events recorded at this shelf.  Only ever increases while the
    /// shelf is registered.
    #[cfg_attr(feature = "serde", serde(default))]
    pub interaction_count: u64,
    /// Fractional discount forwarded to the simulation backend.
    #[cfg_attr(feature = "serde", serde(default))]
    pub discount: Option<f32>,
}

impl Shelf {
    pub fn new(id: impl Into<ShelfId>, kind: ShelfKind, position: FloorPoint) -> Self {
        Self {
            id: id.into(),
            kind,
            size: ShelfSize::default(),
            position,
            rotation: 0.0,
            interaction_count: 0,
            discount: None,
        }
    }

    pub fn with_size(mut self, size: ShelfSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_discount(mut self, discount: f32) -> Self {
        self.discount = Some(discount);
        self
    }
}
