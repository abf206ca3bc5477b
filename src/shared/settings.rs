//! Zentrale Konfiguration der Dungeon-Karte.
//!
//! `MapSettings` enthält alle vom Nutzer wählbaren Werte, immer vollständig befüllt.
//! `SettingsPatch` ist die teilweise Variante, wie sie vom Host kommt.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use super::styles::{MapStyle, TickStyle};

// ── Position & Größe ────────────────────────────────────────────────

/// Standard-X-Position der Karte auf dem Bildschirm.
pub const POS_X: f32 = 0.0;
/// Standard-Y-Position der Karte auf dem Bildschirm.
pub const POS_Y: f32 = 0.0;
/// Standard-Kartengröße (Breite/Höhe beim Rendern).
pub const SIZE: f32 = 100.0;
/// Standard-Kopfgröße. 8 entspricht dem Faktor 1.
pub const HEAD_SCALE: f32 = 8.0;
/// Standard-Icongröße. 8 entspricht dem Faktor 1.
pub const ICON_SCALE: f32 = 8.0;
/// Referenzwert von `icon_scale`/`head_scale`, bei dem keine Skalierung stattfindet.
pub const SCALE_REFERENCE: f32 = 8.0;

// ── Anzeige-Optionen ────────────────────────────────────────────────

/// Darstellung der Puzzle-Namen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleNames {
    /// Keine Namen
    #[default]
    None,
    /// Name als Text
    Text,
    /// Name als Icon
    Icon,
}

/// Seite, auf der die Infos zum aktuellen Raum neben der Karte stehen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrentRoomInfo {
    /// Nicht anzeigen
    #[default]
    None,
    /// Links neben der Karte
    Left,
    /// Rechts neben der Karte
    Right,
}

/// Darstellung der Score-Infos unter der Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreInfoUnderMap {
    /// Nicht anzeigen
    None,
    /// Ausführlich im LegalMap-Stil
    LegalMap,
    /// Kompakte Einzeile
    #[default]
    Simplified,
}

// ── Laufzeit-Settings (serialisierbar) ─────────────────────────────

/// Vollständig befüllte Karten-Settings.
/// Einzige Quelle für alle abgeleiteten Werte des Render-Kontexts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapSettings {
    /// Stil der Karte
    pub map_style: MapStyle,
    /// X-Position der Karte auf dem Bildschirm
    pub pos_x: f32,
    /// Y-Position der Karte auf dem Bildschirm
    pub pos_y: f32,
    /// Breite/Höhe der Karte beim Rendern
    pub size: f32,
    /// Größe der Spielerköpfe (skaliert mit `size`)
    pub head_scale: f32,
    /// Größe der Icons (skaliert mit `size`)
    pub icon_scale: f32,
    /// Stil der Ticks
    pub tick_style: TickStyle,
    /// Darstellung der Puzzle-Namen
    pub puzzle_names: PuzzleNames,
    /// Schwarzer Rahmen um Spielerköpfe
    pub head_border: bool,
    /// Spielernamen beim Halten von Spirit Leaps anzeigen
    pub player_names: bool,
    /// Infos zum aktuellen Raum neben der Karte
    pub current_room_info: CurrentRoomInfo,
    /// Score-Infos unter der Karte
    pub score_info_under_map: ScoreInfoUnderMap,
    /// +10 Score für Paul erzwingen (z.B. bei Jerry als Mayor)
    pub force_paul: bool,
    /// Entwickler-Infos an verschiedenen Stellen der Karte
    pub dev_info: bool,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            map_style: MapStyle::default(),
            pos_x: POS_X,
            pos_y: POS_Y,
            size: SIZE,
            head_scale: HEAD_SCALE,
            icon_scale: ICON_SCALE,
            tick_style: TickStyle::default(),
            puzzle_names: PuzzleNames::default(),
            head_border: false,
            player_names: true,
            current_room_info: CurrentRoomInfo::default(),
            score_info_under_map: ScoreInfoUnderMap::default(),
            force_paul: false,
            dev_info: false,
        }
    }
}

impl MapSettings {
    /// Lädt Settings aus einer TOML-Datei. Bei Fehler: Standardwerte.
    ///
    /// Fehlende Felder werden mit Defaults aufgefüllt, unbekannte ignoriert.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let settings = Self::from_toml_str(&content);
                log::info!("Settings geladen aus: {}", path.display());
                settings
            }
            Err(_) => {
                log::info!("Keine Settings-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Liest Settings aus TOML-Text.
    ///
    /// Ein ungültiger Wert (z.B. unbekannter Map-Style) verwirft nur seinen Schlüssel,
    /// nicht die ganze Datei. Nur bei kaputter TOML-Syntax gelten komplett die Defaults.
    pub fn from_toml_str(content: &str) -> Self {
        let table = match toml::from_str::<toml::Table>(content) {
            Ok(table) => table,
            Err(e) => {
                log::warn!("Settings-Datei fehlerhaft, verwende Standardwerte: {}", e);
                return Self::default();
            }
        };

        let mut patch = SettingsPatch::default();
        for (key, value) in table {
            let mut entry = toml::Table::new();
            entry.insert(key.clone(), value);
            match toml::Value::Table(entry).try_into::<SettingsPatch>() {
                Ok(single) => patch = single.or(patch),
                Err(e) => log::warn!("Ungültiger Wert für '{}' verworfen: {}", key, e),
            }
        }
        patch.resolve()
    }

    /// Speichert Settings als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Settings gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Settings-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("dungeon_map"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("dungeon_map.toml")
    }
}

/// Teilweise Settings, wie sie von Host-UI oder gespeicherten Einstellungen kommen.
///
/// Nicht gesetzte Felder fallen in [`SettingsPatch::resolve`] auf den Default zurück.
/// Unbekannte Schlüssel werden beim Deserialisieren stillschweigend verworfen.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub map_style: Option<MapStyle>,
    pub pos_x: Option<f32>,
    pub pos_y: Option<f32>,
    pub size: Option<f32>,
    pub head_scale: Option<f32>,
    pub icon_scale: Option<f32>,
    pub tick_style: Option<TickStyle>,
    pub puzzle_names: Option<PuzzleNames>,
    pub head_border: Option<bool>,
    pub player_names: Option<bool>,
    pub current_room_info: Option<CurrentRoomInfo>,
    pub score_info_under_map: Option<ScoreInfoUnderMap>,
    pub force_paul: Option<bool>,
    pub dev_info: Option<bool>,
}

impl SettingsPatch {
    /// Liest einen Patch aus JSON (camelCase-Schlüssel wie im Host).
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Feldweise Vereinigung; gesetzte Felder von `self` haben Vorrang.
    pub fn or(self, other: SettingsPatch) -> SettingsPatch {
        SettingsPatch {
            map_style: self.map_style.or(other.map_style),
            pos_x: self.pos_x.or(other.pos_x),
            pos_y: self.pos_y.or(other.pos_y),
            size: self.size.or(other.size),
            head_scale: self.head_scale.or(other.head_scale),
            icon_scale: self.icon_scale.or(other.icon_scale),
            tick_style: self.tick_style.or(other.tick_style),
            puzzle_names: self.puzzle_names.or(other.puzzle_names),
            head_border: self.head_border.or(other.head_border),
            player_names: self.player_names.or(other.player_names),
            current_room_info: self.current_room_info.or(other.current_room_info),
            score_info_under_map: self.score_info_under_map.or(other.score_info_under_map),
            force_paul: self.force_paul.or(other.force_paul),
            dev_info: self.dev_info.or(other.dev_info),
        }
    }

    /// Legt den Patch über die Defaults. Schlägt nie fehl.
    pub fn resolve(self) -> MapSettings {
        let d = MapSettings::default();
        MapSettings {
            map_style: self.map_style.unwrap_or(d.map_style),
            pos_x: self.pos_x.unwrap_or(d.pos_x),
            pos_y: self.pos_y.unwrap_or(d.pos_y),
            size: self.size.unwrap_or(d.size),
            head_scale: self.head_scale.unwrap_or(d.head_scale),
            icon_scale: self.icon_scale.unwrap_or(d.icon_scale),
            tick_style: self.tick_style.unwrap_or(d.tick_style),
            puzzle_names: self.puzzle_names.unwrap_or(d.puzzle_names),
            head_border: self.head_border.unwrap_or(d.head_border),
            player_names: self.player_names.unwrap_or(d.player_names),
            current_room_info: self.current_room_info.unwrap_or(d.current_room_info),
            score_info_under_map: self.score_info_under_map.unwrap_or(d.score_info_under_map),
            force_paul: self.force_paul.unwrap_or(d.force_paul),
            dev_info: self.dev_info.unwrap_or(d.dev_info),
        }
    }
}

impl From<MapSettings> for SettingsPatch {
    fn from(s: MapSettings) -> Self {
        Self {
            map_style: Some(s.map_style),
            pos_x: Some(s.pos_x),
            pos_y: Some(s.pos_y),
            size: Some(s.size),
            head_scale: Some(s.head_scale),
            icon_scale: Some(s.icon_scale),
            tick_style: Some(s.tick_style),
            puzzle_names: Some(s.puzzle_names),
            head_border: Some(s.head_border),
            player_names: Some(s.player_names),
            current_room_info: Some(s.current_room_info),
            score_info_under_map: Some(s.score_info_under_map),
            force_paul: Some(s.force_paul),
            dev_info: Some(s.dev_info),
        }
    }
}
