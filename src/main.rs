//! Dungeon-Map Info.
//!
//! Lädt die Karten-Settings (TOML) und gibt die daraus abgeleiteten
//! Maße, Farben und Icons aus.
//!
//! Aufruf: `dungeon-map-info [settings.toml]`

use dungeon_map_render::{
    IconKind, MapSettings, NormalizedRgba, RenderContext, RenderError, RoomType,
};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Dungeon-Map Info v{} startet...", env!("CARGO_PKG_VERSION"));

        let path = std::env::args_os()
            .nth(1)
            .map(std::path::PathBuf::from)
            .unwrap_or_else(MapSettings::config_path);
        let settings = MapSettings::load_from_file(&path);

        let mut ctx = RenderContext::new(settings);
        ctx.on_destroy(|| log::info!("Render-Kontext freigegeben"))?;

        Self::print_layout(&ctx);
        Self::print_colors(&ctx);
        Self::print_icons(&ctx)?;

        ctx.destroy();
        Ok(())
    }

    fn print_layout(ctx: &RenderContext) {
        let dims = ctx.map_dimensions();
        println!("Map-Style:   {}", ctx.map_style());
        println!("Position:    ({}, {}), Größe {}", dims.x, dims.y, dims.size);
        println!(
            "Raster:      Raum {} px, Abstand {} px, Block {} px, Tür {} px",
            ctx.room_size(),
            ctx.room_gap(),
            ctx.block_size(),
            ctx.door_width()
        );
        println!("Bildgröße:   {0}x{0} px", ctx.image_size());
        if ctx.map_style().uses_placeholder_values() {
            log::warn!("Map-Style '{}' nutzt Platzhalter-Werte", ctx.map_style());
        }
    }

    fn print_colors(ctx: &RenderContext) {
        println!("Palette:     {}", ctx.color_map().name());
        for room in RoomType::ALL {
            let [r, g, b, a] = ctx.room_color_with(room, &NormalizedRgba);
            println!("  {:<18} [{:.3}, {:.3}, {:.3}, {:.3}]", room, r, g, b, a);
        }
    }

    fn print_icons(ctx: &RenderContext) -> anyhow::Result<()> {
        println!("Tick-Style:  {}", ctx.tick_style());
        for kind in IconKind::ALL {
            match (ctx.image(kind), ctx.icon_size(kind)) {
                (Ok(asset), Ok((w, h))) => println!(
                    "  {:<13} {:>5.1}x{:<5.1} {} ({})",
                    kind, w, h, asset.file_name, asset.url
                ),
                (Err(RenderError::NoTickAssets(style)), _) => {
                    log::warn!("Keine Icons für Tick-Style '{}' hinterlegt", style);
                    return Ok(());
                }
                (Err(e), _) | (_, Err(e)) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
