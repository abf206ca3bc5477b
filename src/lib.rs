//! Dungeon-Map Render-Kontext.
//! Settings-Normalisierung und Style-abhängige Geometrie für ein Dungeon-Minimap-Overlay,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod error;
pub mod render;
pub mod shared;
pub mod style;

pub use error::{RenderError, Result};
pub use render::{
    ColorFactory, ImageResolver, MapDimensions, MapImage, NormalizedRgba, RenderContext,
    TextureHandle,
};
pub use shared::{
    CurrentRoomInfo, MapSettings, MapStyle, PuzzleNames, ScoreInfoUnderMap, SettingsPatch,
    TickStyle,
};
pub use style::{ColorMap, IconKind, ImageAsset, MapGeometry, Rgba, RoomType, TickSet};
