//! Layer-Viewer Demo.
//!
//! Headless-Szenario: baut einen Viewer, attacht eine Layer-Liste und
//! spielt die typischen Operationen durch (append, insert, swap, reorder,
//! remove). Dient als Smoke-Test und als Beispiel fuer die Host-Integration.

use glam::Vec2;
use layer_viewer::shared::options;
use layer_viewer::{ImageLayer, LayerList, ShapeLayer, Viewer, ViewerOptions};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Layer-Viewer Demo v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen: optionaler Pfad als erstes Argument, sonst Defaults
    let viewer_options = match std::env::args().nth(1) {
        Some(path) => ViewerOptions::load(std::path::Path::new(&path))?,
        None => ViewerOptions::default(),
    };

    let viewer = Viewer::with_options(viewer_options.window_title.clone(), &viewer_options);
    let mut layers = LayerList::with_owner(&viewer);

    // Externer Subscriber: laeuft nach der internen Synchronisation
    layers.events.item_added.connect(|layer| {
        log::info!("Subscriber: Layer {:?} aufgenommen", layer);
    });

    let background = ImageLayer::new("background", Vec2::new(2048.0, 2048.0)).into_handle();
    let triangle = ShapeLayer::new(
        "triangle",
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(50.0, 80.0),
        ],
        viewer_options.layer_color_default,
    )
    .into_handle();
    let overlay = ShapeLayer::new(
        "overlay",
        vec![Vec2::new(10.0, 10.0), Vec2::new(90.0, 90.0)],
        options::LAYER_COLOR_DEFAULT,
    )
    .into_handle();

    layers.append(background.clone());
    layers.append(triangle.clone());
    layers.insert(1, overlay.clone());

    log::info!("Liste nach Aufbau: {:?}", layers);

    layers.swap(&background, 2)?;
    layers.reorder([2usize, 0, 1])?;

    log::info!("Liste nach Umordnung: {:?}", layers);
    for (position, layer) in layers.iter().enumerate() {
        log::info!("  [{position}] {:?} order={}", layer, layer.order());
    }

    layers.remove(&overlay)?;
    log::info!(
        "Nach remove: len={}, overlay.viewer()={:?}",
        layers.len(),
        overlay.viewer().map(|v| v.borrow().title.clone())
    );

    let canvas_updates = viewer.borrow().canvas.update_count();
    log::info!("Canvas-Updates gesamt: {canvas_updates}");

    Ok(())
}
