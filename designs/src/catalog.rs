//! Furniture catalog: every placeable kind and its default geometry.
//!
//! Kinds are a closed enum so renderers dispatch with `match` rather than on
//! free-form strings. Unknown keys coming off the wire deserialize to
//! [`FurnitureKind::Generic`] instead of failing the whole design.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

/// A catalog key identifying what a furniture item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FurnitureKind {
    Sofa,
    Sofa1,
    SofaRound,
    SofaKoltuk,
    Armchair,
    Chair,
    ChairOben,
    DiningTable,
    CoffeeTable,
    CoffeeTableTable,
    SideTable,
    Bed,
    BedPlatform,
    BedUpholstered,
    BedCanopy,
    BedBunk,
    BedDaybed,
    Wardrobe,
    #[serde(rename = "wardrobe_4door")]
    Wardrobe4Door,
    Bookshelf,
    TvUnit,
    Desk,
    Plant,
    Refrigerator,
    KitchenCounter,
    WashingMachine,
    FloorLamp,
    Rug,
    /// Fallback for keys this build does not know about.
    #[serde(other)]
    Generic,
}

/// Default geometry and styling for a furniture kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindSpec {
    /// Display label shown in the library and on the canvas.
    pub label: &'static str,
    /// Default footprint width in meters.
    pub w: f64,
    /// Default footprint depth in meters.
    pub h: f64,
    /// Default fill color as `#RRGGBB`.
    pub color: &'static str,
    /// Height used by the 3D preview, in meters.
    pub height3d: f64,
}

/// 2D outline family used when drawing a kind on the floor plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outline {
    /// Rectangle with the given corner radius in pixels.
    RoundedRect(f64),
    /// Ellipse inscribed in the footprint.
    Ellipse,
    /// Circle of radius `min(w, h) / 2` centered in the footprint.
    Circle,
}

const fn spec(label: &'static str, w: f64, h: f64, color: &'static str, height3d: f64) -> KindSpec {
    KindSpec { label, w, h, color, height3d }
}

impl FurnitureKind {
    /// Every placeable kind, in library order.
    pub const ALL: [Self; 28] = [
        Self::Sofa,
        Self::Sofa1,
        Self::SofaRound,
        Self::SofaKoltuk,
        Self::Armchair,
        Self::Chair,
        Self::ChairOben,
        Self::DiningTable,
        Self::CoffeeTable,
        Self::CoffeeTableTable,
        Self::SideTable,
        Self::Bed,
        Self::BedPlatform,
        Self::BedUpholstered,
        Self::BedCanopy,
        Self::BedBunk,
        Self::BedDaybed,
        Self::Wardrobe,
        Self::Wardrobe4Door,
        Self::Bookshelf,
        Self::TvUnit,
        Self::Desk,
        Self::Plant,
        Self::Refrigerator,
        Self::KitchenCounter,
        Self::WashingMachine,
        Self::FloorLamp,
        Self::Rug,
    ];

    /// Default geometry for this kind.
    #[must_use]
    pub const fn spec(self) -> KindSpec {
        match self {
            Self::Sofa => spec("Sofa", 2.0, 0.9, "#8B7355", 0.85),
            Self::Sofa1 => spec("Sofa 1", 2.2, 1.0, "#7D6A58", 0.9),
            Self::SofaRound => spec("Round Sofa", 2.0, 2.0, "#9A7B62", 0.82),
            Self::SofaKoltuk => spec("Koltuk Sofa", 2.1, 0.95, "#8B7355", 0.86),
            Self::Armchair => spec("Armchair", 0.8, 0.8, "#A0785A", 0.85),
            Self::Chair => spec("Dining Chair", 0.5, 0.5, "#C8A882", 0.90),
            Self::ChairOben => spec("Oben Chair", 0.55, 0.55, "#C8A882", 0.90),
            Self::DiningTable => spec("Dining Table", 1.8, 0.9, "#DEB887", 0.75),
            Self::CoffeeTable => spec("Coffee Table", 1.1, 0.6, "#BC8F5F", 0.45),
            Self::CoffeeTableTable => spec("Table Coffee", 1.2, 0.75, "#BC8F5F", 0.45),
            Self::SideTable => spec("Side Table", 0.5, 0.5, "#D2B48C", 0.55),
            Self::Bed => spec("Standard Bed", 2.0, 1.6, "#4A90D9", 0.55),
            Self::BedPlatform => spec("Platform Bed", 2.0, 1.6, "#8B6A4D", 0.5),
            Self::BedUpholstered => spec("Upholstered Bed", 2.1, 1.7, "#8D939E", 0.62),
            Self::BedCanopy => spec("Canopy Bed", 2.1, 1.8, "#6B5A47", 2.1),
            Self::BedBunk => spec("Bunk Bed", 2.1, 1.0, "#7A634F", 1.9),
            Self::BedDaybed => spec("Daybed", 2.0, 0.95, "#A1856D", 0.75),
            Self::Wardrobe => spec("Wardrobe", 1.8, 0.6, "#7B5E42", 2.00),
            Self::Wardrobe4Door => spec("Wardrobe 4 Door", 2.6, 0.8, "#7B5E42", 2.2),
            Self::Bookshelf => spec("Bookshelf", 1.2, 0.3, "#5C4033", 1.80),
            Self::TvUnit => spec("TV Unit", 1.6, 0.4, "#333333", 0.50),
            Self::Desk => spec("Desk", 1.4, 0.7, "#B8966E", 0.76),
            Self::Plant => spec("Plant", 0.4, 0.4, "#5A8A5A", 0.80),
            Self::Refrigerator => spec("Refrigerator", 0.9, 0.8, "#D9DEE5", 1.95),
            Self::KitchenCounter => spec("Kitchen Counter", 1.8, 0.65, "#8F7A63", 0.92),
            Self::WashingMachine => spec("Washing Machine", 0.75, 0.7, "#C7CED9", 0.9),
            Self::FloorLamp => spec("Floor Lamp", 0.45, 0.45, "#D7B988", 1.65),
            Self::Rug => spec("Rug", 1.6, 1.0, "#B85C4A", 0.03),
            Self::Generic => spec("Item", 1.0, 1.0, "#888888", 0.75),
        }
    }

    /// Outline family the floor-plan renderer uses for this kind.
    #[must_use]
    pub const fn outline(self) -> Outline {
        match self {
            Self::DiningTable | Self::Rug => Outline::Ellipse,
            Self::SideTable | Self::Plant | Self::FloorLamp | Self::SofaRound => Outline::Circle,
            Self::CoffeeTable | Self::CoffeeTableTable => Outline::RoundedRect(7.0),
            Self::Bed
            | Self::BedPlatform
            | Self::BedUpholstered
            | Self::BedCanopy
            | Self::BedBunk
            | Self::BedDaybed => Outline::RoundedRect(6.0),
            Self::Sofa | Self::Sofa1 | Self::SofaKoltuk | Self::Armchair => Outline::RoundedRect(5.0),
            Self::Chair | Self::ChairOben => Outline::RoundedRect(4.0),
            Self::Wardrobe | Self::Wardrobe4Door | Self::Bookshelf | Self::TvUnit | Self::Desk => {
                Outline::RoundedRect(3.0)
            }
            Self::Refrigerator | Self::KitchenCounter | Self::WashingMachine | Self::Generic => {
                Outline::RoundedRect(2.0)
            }
        }
    }

    /// Display label, shorthand for `spec().label`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.spec().label
    }
}
