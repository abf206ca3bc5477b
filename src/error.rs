//! Fehlertypen für Lookups im Render-Kontext.

use thiserror::Error;

use crate::shared::TickStyle;

/// Fehler beim Auflösen von Styles, Icons und Cache-Zugriffen.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Unbekannter Map-Style (z.B. aus einer Host-Konfiguration)
    #[error("Unbekannter Map-Style: '{0}'")]
    UnknownMapStyle(String),

    /// Unbekannter Tick-Style
    #[error("Unbekannter Tick-Style: '{0}'")]
    UnknownTickStyle(String),

    /// Unbekannte Icon-Art
    #[error("Unbekannte Icon-Art: '{0}'")]
    UnknownIconKind(String),

    /// Unbekannter Raumtyp
    #[error("Unbekannter Raumtyp: '{0}'")]
    UnknownRoomType(String),

    /// Gültiger Tick-Style, für den (noch) keine Asset-Tabelle existiert
    #[error("Keine Tick-Assets für Tick-Style '{0}' vorhanden")]
    NoTickAssets(TickStyle),

    /// Zugriff auf einen bereits zerstörten Render-Kontext
    #[error("Render-Kontext wurde bereits zerstört")]
    Destroyed,

    /// Fehler des externen Image-Resolvers
    #[error("Bild konnte nicht aufgelöst werden: {0}")]
    Resolve(#[from] anyhow::Error),
}

/// Ergebnis-Typ für alle fehlbaren Lookups.
pub type Result<T> = std::result::Result<T, RenderError>;
