//! Frame loop driver
//!
//! Runs advance → render once per display frame until torn down. The host
//! environment supplies a [`FrameScheduler`]; `on_frame` is what its callback
//! must invoke.

use crate::consts::FRAME_DT;
use crate::error::SurfaceError;
use crate::renderer::{DrawSurface, render};
use crate::settings::Settings;
use crate::sim::{Field, SpriteKind, SurfaceSize, advance};

/// Opaque id of a pending frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// "Run the frame callback before the next repaint"
pub trait FrameScheduler {
    /// Schedule one callback. `None` if scheduling is unavailable.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    /// Drop a pending request so it never fires
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Lifecycle of an animator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Surface not usable yet; no frames scheduled
    Idle,
    Running,
    /// Torn down; never runs again
    Stopped,
}

/// One field bound to one surface and one scheduler
pub struct Animator<S: DrawSurface, F: FrameScheduler> {
    kind: SpriteKind,
    /// Fixed population, or `None` to size it from `settings` once the
    /// surface is known
    count: Option<usize>,
    settings: Settings,
    seed: Option<u64>,
    field: Option<Field>,
    surface: S,
    scheduler: F,
    pending: Option<FrameHandle>,
    state: LoopState,
    frames: u64,
}

impl<S: DrawSurface, F: FrameScheduler> Animator<S, F> {
    /// Create the field and schedule the first frame. If the surface is not
    /// usable yet the animator stays idle until [`Animator::retry_mount`].
    pub fn mount(kind: SpriteKind, count: usize, surface: S, scheduler: F) -> Self {
        Self::build(kind, Some(count), Settings::default(), None, surface, scheduler)
    }

    /// Like [`Animator::mount`] with a fixed field seed
    pub fn mount_seeded(
        kind: SpriteKind,
        count: usize,
        seed: u64,
        surface: S,
        scheduler: F,
    ) -> Self {
        Self::build(kind, Some(count), Settings::default(), Some(seed), surface, scheduler)
    }

    /// Population comes from `settings` and the surface width at the moment
    /// the field is actually created, so an idle mount is sized correctly
    /// when it recovers.
    pub fn mount_from_settings(
        kind: SpriteKind,
        settings: Settings,
        seed: u64,
        surface: S,
        scheduler: F,
    ) -> Self {
        Self::build(kind, None, settings, Some(seed), surface, scheduler)
    }

    fn build(
        kind: SpriteKind,
        count: Option<usize>,
        settings: Settings,
        seed: Option<u64>,
        surface: S,
        scheduler: F,
    ) -> Self {
        let mut animator = Self {
            kind,
            count,
            settings,
            seed,
            field: None,
            surface,
            scheduler,
            pending: None,
            state: LoopState::Idle,
            frames: 0,
        };
        animator.retry_mount();
        animator
    }

    /// Start the loop if idle and the surface has become usable
    pub fn retry_mount(&mut self) -> bool {
        if self.state != LoopState::Idle {
            return self.state == LoopState::Running;
        }

        let size = match self.surface.size().ok_or(SurfaceError::Unavailable) {
            Ok(size) => size,
            Err(e) => {
                log::debug!("{} field idle: {}", self.kind.as_str(), e);
                return false;
            }
        };

        let count = self
            .count
            .unwrap_or_else(|| self.settings.sprite_count(self.kind, size.width));
        let field = match self.seed {
            Some(seed) => Field::with_seed(self.kind, size, count, seed),
            None => Field::new(self.kind, size, count),
        };
        log::info!(
            "Mounted {} field: {} sprites on {}x{}",
            self.kind.as_str(),
            field.len(),
            size.width,
            size.height
        );
        self.field = Some(field);
        self.state = LoopState::Running;
        self.pending = self.scheduler.request_frame();
        true
    }

    /// Frame callback: advance one frame, draw, reschedule
    pub fn on_frame(&mut self) {
        // The request that invoked us has fired
        self.pending = None;
        if self.state != LoopState::Running {
            return;
        }

        // Surface went away under us: park until it can be mounted again
        if self.surface.size().is_none() {
            log::debug!("{} field surface lost, going idle", self.kind.as_str());
            self.state = LoopState::Idle;
            self.field = None;
            return;
        }

        if let Some(field) = self.field.as_mut() {
            advance(field, FRAME_DT);
            render(&mut self.surface, field);
            self.frames += 1;
        }

        self.pending = self.scheduler.request_frame();
    }

    /// Cancel the pending frame and stop for good
    pub fn teardown(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.state != LoopState::Stopped {
            log::info!(
                "Tore down {} field after {} frames",
                self.kind.as_str(),
                self.frames
            );
        }
        self.state = LoopState::Stopped;
    }

    /// Host surface resized. Invalid sizes are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        match SurfaceSize::new(width, height) {
            Ok(size) => {
                if let Some(field) = self.field.as_mut() {
                    field.resize(size);
                } else {
                    self.retry_mount();
                }
            }
            Err(e) => log::debug!("Ignoring resize: {}", e),
        }
    }

    /// Pointer moved (surface coordinates). Only ambient fields listen.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        if let Some(field) = self.field.as_mut() {
            field.set_pointer(x, y);
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == LoopState::Idle
    }

    pub fn field(&self) -> Option<&Field> {
        self.field.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    /// Frames simulated and drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }
}

/// Scheduler that queues requests for the caller to fire by hand.
/// Drives headless runs and tests.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    queued: Vec<FrameHandle>,
    pub requested: u32,
    pub cancelled: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending request, as the display would at the next refresh
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.queued)
    }

    pub fn pending(&self) -> usize {
        self.queued.len()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.queued.push(handle);
        self.requested += 1;
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.queued.len();
        self.queued.retain(|h| *h != handle);
        if self.queued.len() != before {
            self.cancelled += 1;
        }
    }
}

/// Fire every due frame on an animator driven by a [`ManualScheduler`].
/// Returns how many callbacks ran.
pub fn pump<S: DrawSurface>(animator: &mut Animator<S, ManualScheduler>) -> usize {
    let due = animator.scheduler.take_due();
    for _ in &due {
        animator.on_frame();
    }
    due.len()
}
