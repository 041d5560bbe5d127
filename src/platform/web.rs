//! Browser glue (wasm32 only)
//!
//! Exposes `mount_field` / `FieldHandle::unmount` and the settings pair
//! `loadSettings` / `saveSettings` to the host page. Frames are
//! driven by `requestAnimationFrame`; window listeners are owned by the
//! handle and removed when it unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use super::frame_loop::{Animator, FrameHandle, FrameScheduler};
use crate::renderer::CanvasSurface;
use crate::settings::Settings;
use crate::sim::SpriteKind;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type WebAnimator = Animator<CanvasSurface, WebScheduler>;
type AnimatorSlot = Rc<RefCell<Option<WebAnimator>>>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
}

/// `requestAnimationFrame` scheduler sharing one callback for every frame
pub struct WebScheduler {
    window: Window,
    callback: FrameCallback,
}

impl FrameScheduler for WebScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let callback = self.callback.borrow();
        let callback = callback.as_ref()?;
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle.0);
    }
}

/// A window event listener removed on drop
struct WindowListener {
    window: Window,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    fn add(
        window: &Window,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        let function: &js_sys::Function = closure.as_ref().unchecked_ref();
        if let Err(e) = window.add_event_listener_with_callback(event, function) {
            log::warn!("Failed to listen for {}: {:?}", event, e);
            return None;
        }
        Some(Self {
            window: window.clone(),
            event,
            closure,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let function: &js_sys::Function = self.closure.as_ref().unchecked_ref();
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, function);
    }
}

/// Window inner size in CSS pixels
fn viewport_size(window: &Window) -> (f32, f32) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width as f32, height as f32)
}

/// Live field returned to the host page
#[wasm_bindgen]
pub struct FieldHandle {
    slot: AnimatorSlot,
    callback: FrameCallback,
    listeners: Vec<WindowListener>,
}

#[wasm_bindgen]
impl FieldHandle {
    /// Stop the loop, cancel the pending frame and remove window listeners.
    /// Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(animator) = self.slot.borrow_mut().as_mut() {
            animator.teardown();
        }
        self.listeners.clear();
        self.callback.borrow_mut().take();
    }

    /// Try again to start a field whose canvas was not usable at mount
    pub fn retry(&mut self) -> bool {
        self.slot
            .borrow_mut()
            .as_mut()
            .map(|animator| animator.retry_mount())
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.slot
            .borrow()
            .as_ref()
            .map(|animator| animator.state() == super::LoopState::Running)
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter, js_name = spriteCount)]
    pub fn sprite_count(&self) -> u32 {
        self.slot
            .borrow()
            .as_ref()
            .and_then(|animator| animator.field().map(|f| f.len() as u32))
            .unwrap_or(0)
    }
}

impl Drop for FieldHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Stored settings as JSON (defaults if nothing valid is stored)
#[wasm_bindgen(js_name = loadSettings)]
pub fn load_settings() -> Option<String> {
    match Settings::load().to_json() {
        Ok(json) => Some(json),
        Err(e) => {
            log::warn!("Failed to serialize settings: {}", e);
            None
        }
    }
}

/// Store settings given as JSON. Missing fields take their defaults.
/// Returns `false` if the JSON is invalid or storage is unavailable.
#[wasm_bindgen(js_name = saveSettings)]
pub fn save_settings(json: &str) -> bool {
    match Settings::from_json(json) {
        Ok(settings) => settings.save(),
        Err(e) => {
            log::warn!("Rejected settings: {}", e);
            false
        }
    }
}

/// Mount a sprite field of `kind` ("ambient", "confetti", "hearts") on
/// `canvas`. With no `count`, the stored settings decide the population.
///
/// Returns `None` for an unknown kind or a canvas without a 2D context.
#[wasm_bindgen(js_name = mountField)]
pub fn mount_field(
    canvas: HtmlCanvasElement,
    kind: &str,
    count: Option<u32>,
) -> Option<FieldHandle> {
    let Some(kind) = SpriteKind::from_str(kind) else {
        log::warn!("Unknown sprite kind: {}", kind);
        return None;
    };
    let window = web_sys::window()?;
    let Some(surface) = CanvasSurface::new(canvas) else {
        log::debug!("No 2D context, {} field not mounted", kind.as_str());
        return None;
    };

    let (width, height) = viewport_size(&window);
    surface.set_pixel_size(width as u32, height as u32);

    let slot: AnimatorSlot = Rc::new(RefCell::new(None));
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    {
        let slot = Rc::downgrade(&slot);
        *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
            if let Some(slot) = slot.upgrade() {
                if let Some(animator) = slot.borrow_mut().as_mut() {
                    animator.on_frame();
                }
            }
        }));
    }

    let scheduler = WebScheduler {
        window: window.clone(),
        callback: callback.clone(),
    };
    let seed = js_sys::Date::now() as u64;
    // Without an explicit count the population is sized when the field is
    // created, which may be after a later resize
    let animator = match count {
        Some(count) => Animator::mount_seeded(kind, count as usize, seed, surface, scheduler),
        None => Animator::mount_from_settings(kind, Settings::load(), seed, surface, scheduler),
    };
    *slot.borrow_mut() = Some(animator);

    let mut listeners = Vec::new();
    {
        let slot = Rc::downgrade(&slot);
        let window_clone = window.clone();
        listeners.extend(WindowListener::add(&window, "resize", move |_event| {
            let Some(slot) = slot.upgrade() else { return };
            if let Some(animator) = slot.borrow_mut().as_mut() {
                let (w, h) = viewport_size(&window_clone);
                animator.surface().set_pixel_size(w as u32, h as u32);
                animator.resize(w, h);
            }
        }));
    }

    if kind.tracks_pointer() {
        {
            let slot = Rc::downgrade(&slot);
            listeners.extend(WindowListener::add(&window, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else { return };
                let Some(slot) = slot.upgrade() else { return };
                if let Some(animator) = slot.borrow_mut().as_mut() {
                    animator.set_pointer(event.client_x() as f32, event.client_y() as f32);
                }
            }));
        }
        {
            let slot = Rc::downgrade(&slot);
            listeners.extend(WindowListener::add(&window, "touchmove", move |event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else { return };
                let Some(touch) = event.touches().get(0) else { return };
                let Some(slot) = slot.upgrade() else { return };
                if let Some(animator) = slot.borrow_mut().as_mut() {
                    animator.set_pointer(touch.client_x() as f32, touch.client_y() as f32);
                }
            }));
        }
    }

    log::info!("{} field handle ready ({} listeners)", kind.as_str(), listeners.len());

    Some(FieldHandle {
        slot,
        callback,
        listeners,
    })
}
