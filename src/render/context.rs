//! Render-Kontext der Dungeon-Karte.
//!
//! Hält die normalisierten Settings und leitet daraus Geometrie, Farben und
//! Icons ab. Das eigentliche Zeichnen übernimmt ein externer Renderer.

use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use crate::error::{RenderError, Result};
use crate::shared::{
    CurrentRoomInfo, MapSettings, MapStyle, PuzzleNames, ScoreInfoUnderMap, SettingsPatch,
    TickStyle,
};
use crate::style::{ColorMap, IconKind, ImageAsset, MapGeometry, Rgba, RoomType, TickSet};

use super::capabilities::{ColorFactory, ImageResolver};
use super::image::MapImage;

/// Räume pro Kartenseite.
const GRID_ROOMS: u32 = 6;
/// Standard-Rahmenbreite um die Karte in Pixeln.
const BORDER_WIDTH: u32 = 2;

/// Position und Größe der Karte auf dem Bildschirm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapDimensions {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub head_scale: f32,
}

/// Gemeinsamer Kontext für das Rendern einer Dungeon-Karte.
///
/// Zustände: aktiv (nach `new`) und zerstört (nach `destroy`, endgültig).
pub struct RenderContext {
    settings: MapSettings,
    /// Gecachtes Kartenbild, vom externen Renderer befüllt
    image: Option<MapImage>,
    /// `None` = noch nie gerendert bzw. neu anzufordern
    image_last_update: Option<Instant>,
    padding_top: u32,
    padding_left: u32,
    border_width: u32,
    on_destroys: Vec<Box<dyn FnOnce()>>,
    destroyed: bool,
}

impl RenderContext {
    /// Erstellt einen Kontext aus (teilweisen) Settings.
    pub fn new(settings: impl Into<SettingsPatch>) -> Self {
        let mut ctx = Self {
            settings: MapSettings::default(),
            image: None,
            image_last_update: None,
            padding_top: 0,
            padding_left: 0,
            border_width: BORDER_WIDTH,
            on_destroys: Vec::new(),
            destroyed: false,
        };
        ctx.set_settings(settings);
        ctx
    }

    /// Ersetzt die Settings komplett; fehlende Felder werden mit Defaults aufgefüllt.
    ///
    /// Das gecachte Bild bleibt unberührt, ggf. [`Self::mark_re_render`] aufrufen.
    pub fn set_settings(&mut self, settings: impl Into<SettingsPatch>) {
        self.settings = settings.into().resolve();
        log::debug!(
            "Settings gesetzt: map_style={}, tick_style={}",
            self.settings.map_style,
            self.settings.tick_style
        );
        if self.settings.map_style.uses_placeholder_values() {
            log::debug!(
                "Map-Style '{}' nutzt Platzhalter-Maße und Hypixel-Farben",
                self.settings.map_style
            );
        }
    }

    pub fn settings(&self) -> &MapSettings {
        &self.settings
    }

    // ── Settings-Getter ─────────────────────────────────────────────

    pub fn pos_x(&self) -> f32 {
        self.settings.pos_x
    }

    pub fn pos_y(&self) -> f32 {
        self.settings.pos_y
    }

    pub fn size(&self) -> f32 {
        self.settings.size
    }

    pub fn head_scale(&self) -> f32 {
        self.settings.head_scale
    }

    pub fn icon_scale(&self) -> f32 {
        self.settings.icon_scale
    }

    pub fn map_style(&self) -> MapStyle {
        self.settings.map_style
    }

    pub fn tick_style(&self) -> TickStyle {
        self.settings.tick_style
    }

    pub fn puzzle_names(&self) -> PuzzleNames {
        self.settings.puzzle_names
    }

    pub fn head_border(&self) -> bool {
        self.settings.head_border
    }

    pub fn player_names(&self) -> bool {
        self.settings.player_names
    }

    pub fn current_room_info(&self) -> CurrentRoomInfo {
        self.settings.current_room_info
    }

    pub fn score_info_under_map(&self) -> ScoreInfoUnderMap {
        self.settings.score_info_under_map
    }

    pub fn force_paul(&self) -> bool {
        self.settings.force_paul
    }

    pub fn dev_info(&self) -> bool {
        self.settings.dev_info
    }

    /// Kurzform der Settings, die fast jeder Render-Aufruf braucht.
    pub fn map_dimensions(&self) -> MapDimensions {
        MapDimensions {
            x: self.pos_x(),
            y: self.pos_y(),
            size: self.size(),
            head_scale: self.head_scale(),
        }
    }

    // ── Geometrie ───────────────────────────────────────────────────

    /// Raster-Geometrie des aktuellen Map-Styles.
    pub fn geometry(&self) -> MapGeometry {
        MapGeometry::for_style(self.map_style())
    }

    pub fn room_size(&self) -> u32 {
        self.geometry().room_size
    }

    pub fn room_gap(&self) -> u32 {
        self.geometry().room_gap
    }

    /// `room_size + room_gap`
    pub fn block_size(&self) -> u32 {
        self.geometry().block_size()
    }

    pub fn door_width(&self) -> u32 {
        self.geometry().door_width
    }

    pub fn padding_top(&self) -> u32 {
        self.padding_top
    }

    pub fn padding_left(&self) -> u32 {
        self.padding_left
    }

    pub fn border_width(&self) -> u32 {
        self.border_width
    }

    /// Kantenlänge des gecachten Kartenbilds in Pixeln (6x6-Raster).
    pub fn image_size(&self) -> u32 {
        self.padding_left * 2 + self.block_size() * GRID_ROOMS + self.room_gap()
    }

    // ── Farben ──────────────────────────────────────────────────────

    /// Raumfarben des aktuellen Map-Styles.
    pub fn color_map(&self) -> &'static ColorMap {
        ColorMap::for_style(self.map_style())
    }

    pub fn room_color(&self, room: RoomType) -> Rgba {
        self.color_map().get(room)
    }

    /// Raumfarbe im Farbtyp des Hosts.
    pub fn room_color_with<F: ColorFactory>(&self, room: RoomType, factory: &F) -> F::Color {
        factory.color(self.room_color(room))
    }

    // ── Icons ───────────────────────────────────────────────────────

    /// Asset für ein Status-Icon im aktuellen Tick-Style.
    pub fn image(&self, kind: IconKind) -> Result<&'static ImageAsset> {
        Ok(TickSet::for_style(self.tick_style())?.asset(kind))
    }

    /// Wie [`Self::image`], mit Icon-Namen aus dem Host.
    pub fn image_by_name(&self, kind: &str) -> Result<&'static ImageAsset> {
        self.image(kind.parse()?)
    }

    /// Breite und Höhe eines Icons, skaliert mit `icon_scale / 8`.
    pub fn icon_size(&self, kind: IconKind) -> Result<(f32, f32)> {
        Ok(TickSet::for_style(self.tick_style())?.scaled_size(kind, self.icon_scale()))
    }

    pub fn icon_size_by_name(&self, kind: &str) -> Result<(f32, f32)> {
        self.icon_size(kind.parse()?)
    }

    /// Wählt das Asset aus und lässt es vom Resolver laden.
    pub fn load_image<R: ImageResolver>(&self, kind: IconKind, resolver: &R) -> Result<R::Image> {
        let asset = self.image(kind)?;
        resolver.resolve(asset).map_err(|e| {
            log::warn!("Icon '{}' ({}) nicht ladbar: {}", kind, asset.file_name, e);
            RenderError::Resolve(e)
        })
    }

    // ── Bild-Cache ──────────────────────────────────────────────────

    pub fn image_cache(&self) -> Option<&MapImage> {
        self.image.as_ref()
    }

    pub fn image_last_update(&self) -> Option<Instant> {
        self.image_last_update
    }

    /// Übernimmt ein neu gerendertes Kartenbild vom externen Renderer.
    ///
    /// Ein vorheriges Bild wird freigegeben.
    pub fn set_image(&mut self, image: MapImage, rendered_at: Instant) -> Result<()> {
        if self.destroyed {
            log::warn!("set_image() auf zerstörtem Render-Kontext ignoriert");
            return Err(RenderError::Destroyed);
        }
        if let Some(mut old) = self.image.replace(image) {
            old.release();
        }
        self.image_last_update = Some(rendered_at);
        Ok(())
    }

    /// Gibt zurück, ob das Bild neu gerendert werden muss.
    pub fn needs_render(&self, max_age: Duration) -> bool {
        match self.image_last_update {
            None => true,
            Some(at) => at.elapsed() >= max_age,
        }
    }

    /// Markiert das Bild als veraltet; es wird im nächsten Frame neu gerendert.
    pub fn mark_re_render(&mut self) {
        self.image_last_update = None;
        log::debug!("Kartenbild zum Neu-Rendern markiert");
    }

    // ── Lebenszyklus ────────────────────────────────────────────────

    /// Registriert einen Callback für [`Self::destroy`].
    pub fn on_destroy(&mut self, callback: impl FnOnce() + 'static) -> Result<()> {
        if self.destroyed {
            log::warn!("on_destroy() auf zerstörtem Render-Kontext ignoriert");
            return Err(RenderError::Destroyed);
        }
        self.on_destroys.push(Box::new(callback));
        Ok(())
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Gibt das gecachte Bild frei und ruft alle Callbacks in Registrierungsreihenfolge auf.
    ///
    /// Nur der erste Aufruf hat eine Wirkung. Panict ein Callback, laufen die übrigen
    /// trotzdem; die erste Panic wird danach weitergereicht.
    pub fn destroy(&mut self) {
        if self.destroyed {
            log::debug!("destroy() erneut aufgerufen, ignoriert");
            return;
        }
        self.destroyed = true;

        if let Some(mut image) = self.image.take() {
            image.release();
        }
        self.image_last_update = None;

        let callbacks = std::mem::take(&mut self.on_destroys);
        log::debug!(
            "Render-Kontext zerstört, {} Callback(s) werden ausgeführt",
            callbacks.len()
        );
        let mut first_panic = None;
        for (i, callback) in callbacks.into_iter().enumerate() {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(callback)) {
                log::warn!("destroy-Callback #{} ist abgebrochen (Panic)", i);
                first_panic.get_or_insert(payload);
            }
        }

        if let Some(payload) = first_panic {
            // Während eines laufenden Unwinds (Drop) würde ein erneuter Panic abbrechen
            if !std::thread::panicking() {
                panic::resume_unwind(payload);
            }
        }
    }
}

impl Drop for RenderContext {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl std::fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("settings", &self.settings)
            .field("image", &self.image)
            .field("image_last_update", &self.image_last_update)
            .field("on_destroys", &self.on_destroys.len())
            .field("destroyed", &self.destroyed)
            .finish()
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(SettingsPatch::default())
    }
}
