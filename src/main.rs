//! Sprite Field entry point
//!
//! The web build is driven from the host page through `mountField`. Natively
//! this runs each effect headless on a recording surface and reports what
//! happened.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sprite_field::platform::{Animator, ManualScheduler, pump};
    use sprite_field::renderer::{DrawCommand, RecordingSurface};
    use sprite_field::{Settings, SpriteKind, SurfaceSize};

    env_logger::init();
    log::info!("Sprite Field (native) starting...");
    log::info!(
        "The browser build is mounted from JavaScript - run with `trunk serve` for the web version"
    );

    let mut frames: u64 = 600;
    let mut dump_json = false;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            dump_json = true;
        } else if let Ok(n) = arg.parse() {
            frames = n;
        } else {
            log::warn!("Ignoring argument: {}", arg);
        }
    }

    let size = match SurfaceSize::new(800.0, 600.0) {
        Ok(size) => size,
        Err(e) => {
            log::error!("Bad surface: {}", e);
            return;
        }
    };
    let settings = Settings::load();

    for kind in SpriteKind::ALL {
        let mut animator = Animator::mount_from_settings(
            kind,
            settings.clone(),
            0x5eed,
            RecordingSurface::new(size),
            ManualScheduler::new(),
        );
        if kind.tracks_pointer() {
            animator.set_pointer(size.width / 2.0, size.height / 2.0);
        }

        for _ in 0..frames {
            pump(&mut animator);
        }
        let fills = animator.surface().count(|c| {
            matches!(c, DrawCommand::Fill | DrawCommand::FillRect { .. })
        });
        animator.teardown();

        let Some(field) = animator.field() else {
            log::warn!("{} field never mounted", kind.as_str());
            continue;
        };
        println!(
            "{:<9} sprites={:<4} frames={:<6} fills/frame={:<4} seed={:#x}",
            kind.as_str(),
            field.len(),
            animator.frames(),
            fills,
            field.seed()
        );

        if dump_json {
            match serde_json::to_string_pretty(field) {
                Ok(json) => println!("{}", json),
                Err(e) => log::error!("Failed to serialize field: {}", e),
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the library's start hook, this is just to satisfy the compiler
}
