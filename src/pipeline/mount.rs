//! Terminal mount and event loop.
//!
//! [`App::mount`] takes over the terminal (raw mode, alternate screen,
//! mouse capture), paints the stage, and then [`App::run`] blocks routing
//! events until a quit key. [`App::unmount`] restores the terminal; if the
//! app is dropped while still mounted, Drop restores it best-effort.

use std::io;
use std::time::Duration;

use crossterm::terminal;

use crate::input::{self, InputEvent, KeyEvent, KeyKind};
use crate::layout::solve;
use crate::pipeline::frame::render_frame;
use crate::renderer::DiffRenderer;
use crate::stage::Stage;

const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// A mounted stage: owns the terminal until unmounted.
pub struct App {
    stage: Stage,
    renderer: DiffRenderer,
    cols: u16,
    rows: u16,
    running: bool,
    mounted: bool,
}

impl App {
    /// Take over the terminal and paint the first frame.
    pub fn mount(mut stage: Stage) -> io::Result<Self> {
        stage.ensure_surface();
        stage.ensure_input_router();

        terminal::enable_raw_mode()?;
        let (cols, rows) = terminal::size()?;

        let mut renderer = DiffRenderer::new();
        renderer.enter_fullscreen()?;
        input::enable_mouse()?;

        let mut app = Self {
            stage,
            renderer,
            cols,
            rows,
            running: true,
            mounted: true,
        };
        app.refresh()?;
        log::debug!("mounted at {cols}x{rows}");
        Ok(app)
    }

    /// Recompute layout, repaint, and rebuild the hit grid.
    pub fn refresh(&mut self) -> io::Result<()> {
        let Some(surface) = self.stage.surface() else {
            return Ok(());
        };
        let root = surface.root();
        let metrics = surface.metrics(self.cols, self.rows);

        let layout = solve(self.stage.scene(), root, &metrics);
        let frame = render_frame(
            self.stage.scene(),
            root,
            &layout,
            &metrics,
            self.cols,
            self.rows,
        );

        self.stage
            .update_hit_regions(self.cols, self.rows, &frame.hit_regions);
        self.renderer.render(&frame.buffer)?;
        Ok(())
    }

    /// Wait for at most one event and handle it.
    ///
    /// Returns whether the app should keep running.
    pub fn tick(&mut self) -> io::Result<bool> {
        if !self.running {
            return Ok(false);
        }

        if let Some(event) = input::poll_event(POLL_INTERVAL)? {
            match event {
                InputEvent::Key(key) => {
                    if is_quit_key(&key) {
                        self.running = false;
                    }
                }
                InputEvent::Mouse(mouse) => {
                    if let Some(node) = self.stage.dispatch_mouse(&mouse) {
                        log::debug!("click on {}", self.stage.scene().node(node).name);
                    }
                }
                InputEvent::Resize(cols, rows) => {
                    self.cols = cols;
                    self.rows = rows;
                    self.renderer.invalidate();
                    self.refresh()?;
                }
                InputEvent::None => {}
            }
        }

        Ok(self.running)
    }

    /// Block handling events until a quit key or [`App::stop`].
    pub fn run(&mut self) -> io::Result<()> {
        while self.tick()? {}
        Ok(())
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Restore the terminal and consume the app.
    pub fn unmount(mut self) -> io::Result<()> {
        self.mounted = false;
        let _ = input::disable_mouse();
        self.renderer.exit_fullscreen()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if self.mounted {
            let _ = input::disable_mouse();
            let _ = self.renderer.exit_fullscreen();
            let _ = terminal::disable_raw_mode();
        }
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    key.kind == KeyKind::Press
        && (key.key == "Escape" || key.key == "q" || (key.key == "c" && key.modifiers.ctrl))
}

// =============================================================================
// Tests
// =============================================================================
