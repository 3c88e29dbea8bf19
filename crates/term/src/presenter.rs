//! Glue between the engine's [`Presenter`] hook and the terminal.

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::engine::Presenter;
use crate::fb::FrameBuffer;
use crate::game_view::GameView;
use crate::layout::{Layout, Viewport};
use crate::renderer::TerminalRenderer;

/// Renders every snapshot it receives to the terminal.
///
/// Keeps the framebuffer between frames and remembers the last layout so
/// mouse presses can be matched against the buttons on screen.
pub struct TerminalPresenter {
    view: GameView,
    renderer: TerminalRenderer,
    fb: FrameBuffer,
    viewport: Viewport,
    layout: Layout,
}

impl TerminalPresenter {
    pub fn new(view: GameView, viewport: Viewport) -> Self {
        Self {
            view,
            renderer: TerminalRenderer::new(),
            fb: FrameBuffer::new(viewport.width, viewport.height),
            viewport,
            layout: view.layout(viewport),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Adopt a new terminal size; the next frame is a full redraw.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
        self.layout = self.view.layout(self.viewport);
        self.renderer.invalidate();
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Layout of the most recent frame.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Draw `snap` into the framebuffer without writing to the terminal.
    pub fn compose(&mut self, snap: &GameSnapshot) -> &FrameBuffer {
        self.layout = self.view.render_into(snap, self.viewport, &mut self.fb);
        &self.fb
    }
}

impl Presenter for TerminalPresenter {
    fn present(&mut self, snap: &GameSnapshot) -> Result<()> {
        self.compose(snap);
        self.renderer.draw_swap(&mut self.fb)
    }
}
