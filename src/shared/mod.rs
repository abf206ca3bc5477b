//! Geteilte Typen: Settings und Styles.
//!
//! Werden von `style` und `render` gemeinsam genutzt,
//! um direkte Abhängigkeiten zwischen beiden zu vermeiden.

pub mod settings;
mod styles;

pub use settings::{
    CurrentRoomInfo, MapSettings, PuzzleNames, ScoreInfoUnderMap, SettingsPatch, SCALE_REFERENCE,
};
pub use styles::{MapStyle, TickStyle};
