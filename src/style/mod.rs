//! Statische Style-Tabellen: Raster-Geometrie, Raumfarben, Status-Icons.

pub mod geometry;
pub mod palette;
pub mod ticks;

pub use geometry::MapGeometry;
pub use palette::{ColorMap, Rgba, RoomType, HYPIXEL_COLOR_MAP, LEGAL_COLOR_MAP};
pub use ticks::{IconKind, ImageAsset, TickSet, HYPIXEL_TICKS, LEGAL_TICKS};
