//! Integrationstests für den Render-Kontext:
//! - Settings-Normalisierung
//! - Geometrie, Farben und Icons je Style
//! - Bild-Cache und Lebenszyklus (destroy, Callbacks)

use approx::assert_relative_eq;
use dungeon_map_render::{
    ColorFactory, CurrentRoomInfo, IconKind, ImageAsset, ImageResolver, MapImage, MapSettings,
    MapStyle, PuzzleNames, RenderContext, RenderError, RoomType, ScoreInfoUnderMap,
    SettingsPatch, TextureHandle, TickStyle,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

fn ctx_with(map_style: MapStyle, tick_style: TickStyle, icon_scale: f32) -> RenderContext {
    RenderContext::new(SettingsPatch {
        map_style: Some(map_style),
        tick_style: Some(tick_style),
        icon_scale: Some(icon_scale),
        ..Default::default()
    })
}

// ─── Settings ────────────────────────────────────────────────────────────────

#[test]
fn test_leere_settings_sind_vollstaendig_default() {
    let ctx = RenderContext::new(SettingsPatch::default());

    assert_eq!(ctx.map_style(), MapStyle::LegalMap);
    assert_eq!(ctx.pos_x(), 0.0);
    assert_eq!(ctx.pos_y(), 0.0);
    assert_eq!(ctx.size(), 100.0);
    assert_eq!(ctx.head_scale(), 8.0);
    assert_eq!(ctx.icon_scale(), 8.0);
    assert_eq!(ctx.tick_style(), TickStyle::Standard);
    assert_eq!(ctx.puzzle_names(), PuzzleNames::None);
    assert!(!ctx.head_border());
    assert!(ctx.player_names());
    assert_eq!(ctx.current_room_info(), CurrentRoomInfo::None);
    assert_eq!(ctx.score_info_under_map(), ScoreInfoUnderMap::Simplified);
    assert!(!ctx.force_paul());
    assert!(!ctx.dev_info());
}

#[test]
fn test_teilweise_settings_aus_json() {
    let patch = SettingsPatch::from_json(
        r#"{"mapStyle":"hypixelmap","posX":5,"headBorder":true,"currentRoomInfo":"left","legacyField":"x"}"#,
    )
    .expect("Patch muss parsebar sein");
    let ctx = RenderContext::new(patch);

    assert_eq!(ctx.map_style(), MapStyle::HypixelMap);
    assert_eq!(ctx.pos_x(), 5.0);
    assert!(ctx.head_border());
    assert_eq!(ctx.current_room_info(), CurrentRoomInfo::Left);
    assert_eq!(ctx.settings().pos_y, MapSettings::default().pos_y);
    assert_eq!(ctx.tick_style(), TickStyle::Standard);
}

#[test]
fn test_vollstaendige_settings_uebernehmen() {
    let settings = MapSettings {
        map_style: MapStyle::TeniosMap,
        size: 150.0,
        score_info_under_map: ScoreInfoUnderMap::LegalMap,
        ..Default::default()
    };
    let ctx = RenderContext::new(settings.clone());
    assert_eq!(ctx.settings(), &settings);
}

#[test]
fn test_map_dimensions() {
    let ctx = RenderContext::new(SettingsPatch {
        pos_x: Some(10.0),
        pos_y: Some(20.0),
        size: Some(120.0),
        head_scale: Some(6.0),
        ..Default::default()
    });
    let dims = ctx.map_dimensions();
    assert_eq!((dims.x, dims.y, dims.size, dims.head_scale), (10.0, 20.0, 120.0, 6.0));
}

// ─── Geometrie ───────────────────────────────────────────────────────────────

#[test]
fn test_geometrie_konstanten_je_map_style() {
    let expected = [
        (MapStyle::LegalMap, 24, 8, 8),
        (MapStyle::HypixelMap, 24, 6, 10),
        (MapStyle::TeniosMap, 24, 6, 15),
    ];
    for (style, room_size, room_gap, door_width) in expected {
        let ctx = ctx_with(style, TickStyle::Standard, 8.0);
        assert_eq!(ctx.room_size(), room_size, "{}", style);
        assert_eq!(ctx.room_gap(), room_gap, "{}", style);
        assert_eq!(ctx.door_width(), door_width, "{}", style);
        assert_eq!(ctx.block_size(), ctx.room_size() + ctx.room_gap(), "{}", style);
    }
}

// ─── Farben ──────────────────────────────────────────────────────────────────

#[test]
fn test_color_map_je_map_style() {
    let legal = ctx_with(MapStyle::LegalMap, TickStyle::Standard, 8.0);
    let hypixel = ctx_with(MapStyle::HypixelMap, TickStyle::Standard, 8.0);
    let tenios = ctx_with(MapStyle::TeniosMap, TickStyle::Standard, 8.0);

    assert_ne!(legal.color_map(), hypixel.color_map());
    assert_ne!(
        legal.room_color(RoomType::Puzzle),
        hypixel.room_color(RoomType::Puzzle)
    );
    assert!(std::ptr::eq(tenios.color_map(), hypixel.color_map()));
}

#[test]
fn test_room_color_mit_host_farbtyp() {
    struct PackedArgb;

    impl ColorFactory for PackedArgb {
        type Color = u32;

        fn color(&self, [r, g, b, a]: [u8; 4]) -> u32 {
            u32::from_be_bytes([a, r, g, b])
        }
    }

    let ctx = ctx_with(MapStyle::HypixelMap, TickStyle::Hypixel, 8.0);
    assert_eq!(ctx.room_color_with(RoomType::Blood, &PackedArgb), 0xFFFF_0000);
    assert_eq!(ctx.room_color_with(RoomType::Black, &PackedArgb), 0xFF00_0000);
}

// ─── Icons ───────────────────────────────────────────────────────────────────

#[test]
fn test_icon_assets_je_tick_style() {
    let legal = ctx_with(MapStyle::LegalMap, TickStyle::Standard, 8.0);
    assert_eq!(
        legal.image(IconKind::WhiteCheck).unwrap().file_name,
        "BloomMapWhiteCheck.png"
    );

    let hypixel = ctx_with(MapStyle::LegalMap, TickStyle::Hypixel, 8.0);
    let asset = hypixel.image_by_name("failedRoom").unwrap();
    assert_eq!(asset.file_name, "failedRoomVanilla.png");
    assert_eq!(asset.url, "https://i.imgur.com/WqW69z3.png");
}

#[test]
fn test_unbekannte_icon_art_wird_abgelehnt() {
    let ctx = RenderContext::default();
    match ctx.image_by_name("bossIcon") {
        Err(RenderError::UnknownIconKind(kind)) => assert_eq!(kind, "bossIcon"),
        other => panic!("UnknownIconKind erwartet, war {:?}", other),
    }
}

#[test]
fn test_secrets_tick_style_wird_gemeldet() {
    let ctx = ctx_with(MapStyle::LegalMap, TickStyle::Secrets, 8.0);
    for kind in IconKind::ALL {
        assert!(matches!(
            ctx.image(kind),
            Err(RenderError::NoTickAssets(TickStyle::Secrets))
        ));
        assert!(ctx.icon_size(kind).is_err());
    }
}

#[test]
fn test_icon_size_bei_scale_8_entspricht_basis() {
    let legal = ctx_with(MapStyle::LegalMap, TickStyle::Standard, 8.0);
    for kind in IconKind::ALL {
        assert_eq!(legal.icon_size(kind).unwrap(), (16.0, 16.0));
    }

    let hypixel = ctx_with(MapStyle::LegalMap, TickStyle::Hypixel, 8.0);
    assert_eq!(hypixel.icon_size(IconKind::QuestionMark).unwrap(), (10.0, 16.0));
    assert_eq!(hypixel.icon_size(IconKind::GreenCheck).unwrap(), (10.0, 10.0));
    assert_eq!(hypixel.icon_size(IconKind::WhiteCheck).unwrap(), (10.0, 10.0));
    assert_eq!(hypixel.icon_size(IconKind::FailedRoom).unwrap(), (14.0, 14.0));
}

#[test]
fn test_icon_size_skaliert_linear() {
    for tick_style in [TickStyle::Standard, TickStyle::Hypixel] {
        for scale in [3.0, 8.0, 11.5] {
            let single = ctx_with(MapStyle::LegalMap, tick_style, scale);
            let double = ctx_with(MapStyle::LegalMap, tick_style, scale * 2.0);
            for kind in IconKind::ALL {
                let (w1, h1) = single.icon_size(kind).unwrap();
                let (w2, h2) = double.icon_size(kind).unwrap();
                assert_relative_eq!(w2, w1 * 2.0);
                assert_relative_eq!(h2, h1 * 2.0);
            }
        }
    }
}

#[test]
fn test_load_image_ueber_resolver() {
    struct FileNameResolver;

    impl ImageResolver for FileNameResolver {
        type Image = String;

        fn resolve(&self, asset: &ImageAsset) -> anyhow::Result<String> {
            if asset.file_name.starts_with("question") {
                anyhow::bail!("Download fehlgeschlagen: {}", asset.url);
            }
            Ok(asset.file_name.to_string())
        }
    }

    let ctx = ctx_with(MapStyle::HypixelMap, TickStyle::Hypixel, 8.0);
    assert_eq!(
        ctx.load_image(IconKind::GreenCheck, &FileNameResolver).unwrap(),
        "greenCheckVanilla.png"
    );
    assert!(matches!(
        ctx.load_image(IconKind::QuestionMark, &FileNameResolver),
        Err(RenderError::Resolve(_))
    ));
}

// ─── Bild-Cache & Lebenszyklus ───────────────────────────────────────────────

struct CountingTexture(Rc<Cell<u32>>);

impl TextureHandle for CountingTexture {
    fn delete(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn test_mark_re_render_setzt_marker_zurueck() {
    let mut ctx = RenderContext::default();
    assert_eq!(ctx.image_last_update(), None);

    ctx.set_image(MapImage::blank(ctx.image_size()), Instant::now())
        .unwrap();
    assert!(ctx.image_last_update().is_some());

    ctx.mark_re_render();
    assert_eq!(ctx.image_last_update(), None);
    assert!(ctx.needs_render(Duration::from_secs(60)));
    // Bild selbst bleibt bis zum nächsten Rendern erhalten
    assert!(ctx.image_cache().is_some());

    ctx.mark_re_render();
    assert_eq!(ctx.image_last_update(), None);
}

#[test]
fn test_set_image_gibt_altes_bild_frei() {
    let deletes = Rc::new(Cell::new(0));
    let mut ctx = RenderContext::default();

    let first = MapImage::blank(4).with_texture(Box::new(CountingTexture(Rc::clone(&deletes))));
    ctx.set_image(first, Instant::now()).unwrap();
    ctx.set_image(MapImage::blank(4), Instant::now()).unwrap();

    assert_eq!(deletes.get(), 1);
}

#[test]
fn test_destroy_ruft_callbacks_in_reihenfolge() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut ctx = RenderContext::default();

    for id in ["A", "B", "C"] {
        let calls = Rc::clone(&calls);
        ctx.on_destroy(move || calls.borrow_mut().push(id)).unwrap();
    }
    ctx.destroy();

    assert_eq!(*calls.borrow(), vec!["A", "B", "C"]);
}

#[test]
fn test_destroy_ohne_callbacks() {
    let mut ctx = RenderContext::default();
    ctx.destroy();
    assert!(ctx.is_destroyed());
}

#[test]
fn test_doppeltes_destroy_ist_noop() {
    let count = Rc::new(Cell::new(0));
    let mut ctx = RenderContext::default();
    {
        let count = Rc::clone(&count);
        ctx.on_destroy(move || count.set(count.get() + 1)).unwrap();
    }

    ctx.destroy();
    ctx.destroy();
    drop(ctx);

    assert_eq!(count.get(), 1);
}

#[test]
fn test_destroy_leert_bild_und_loescht_textur() {
    let deletes = Rc::new(Cell::new(0));
    let mut ctx = RenderContext::default();
    let image = MapImage::blank(8).with_texture(Box::new(CountingTexture(Rc::clone(&deletes))));
    ctx.set_image(image, Instant::now()).unwrap();

    ctx.destroy();

    assert!(ctx.image_cache().is_none());
    assert_eq!(deletes.get(), 1);
}

#[test]
fn test_drop_zerstoert_kontext() {
    let dropped = Rc::new(Cell::new(false));
    {
        let mut ctx = RenderContext::default();
        let dropped = Rc::clone(&dropped);
        ctx.on_destroy(move || dropped.set(true)).unwrap();
    }
    assert!(dropped.get());
}
