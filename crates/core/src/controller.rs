//! Controller and renderer seam.
//!
//! The controller owns both engines and a renderer. Input (a key name or a timer tick)
//! becomes a `Command` against one `Target`; the engine is mutated, then the renderer
//! is handed an immutable snapshot of the engine that changed.

use tracing::debug;

use crate::bankers::{SafetyChecker, SafetySnapshot};
use crate::common::Result;
use crate::config::Config;
use crate::paging::{PageReplacementSimulator, PagingSnapshot};
use crate::scenario;

/// Consumer of engine snapshots. Implementations draw; they never mutate engines.
pub trait Renderer {
    /// Draws the Banker's state.
    fn render_safety(&mut self, snapshot: &SafetySnapshot);

    /// Draws the page-replacement state.
    fn render_paging(&mut self, snapshot: &PagingSnapshot);
}

/// Engine a command is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The Banker's safety checker.
    Bankers,
    /// The page-replacement simulator.
    Paging,
}

/// Cursor commands understood by both engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Advance one step.
    Next,
    /// Go back one step.
    Previous,
    /// Return to step 0.
    Reset,
}

impl Command {
    /// Maps a key name to a command: arrows right/down advance, left/up go back, `r` resets.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "right" | "down" => Some(Self::Next),
            "left" | "up" => Some(Self::Previous),
            "r" | "R" => Some(Self::Reset),
            _ => None,
        }
    }
}

/// Owns the engines and routes commands to them.
#[derive(Debug)]
pub struct Controller<R> {
    checker: SafetyChecker,
    simulator: PageReplacementSimulator,
    renderer: R,
}

impl<R: Renderer> Controller<R> {
    /// Wraps existing engines.
    pub const fn new(
        checker: SafetyChecker,
        simulator: PageReplacementSimulator,
        renderer: R,
    ) -> Self {
        Self {
            checker,
            simulator,
            renderer,
        }
    }

    /// Builds the fixed scenarios as selected by `config`.
    ///
    /// # Errors
    ///
    /// Propagates scenario construction failures.
    pub fn from_config(config: &Config, renderer: R) -> Result<Self> {
        let checker = scenario::safety_checker(config.bankers.safe_sequence)?;
        let simulator = scenario::page_simulator()?;
        Ok(Self::new(checker, simulator, renderer))
    }

    /// Applies `command` to `target` and re-renders it.
    pub fn apply(&mut self, target: Target, command: Command) {
        debug!(?target, ?command, "controller command");
        match target {
            Target::Bankers => {
                match command {
                    Command::Next => self.checker.advance(),
                    Command::Previous => self.checker.retreat(),
                    Command::Reset => self.checker.reset(),
                }
                self.renderer.render_safety(&self.checker.snapshot());
            }
            Target::Paging => {
                match command {
                    Command::Next => {
                        let _ = self.simulator.step_once();
                    }
                    Command::Previous => self.simulator.step_back(),
                    Command::Reset => self.simulator.reset(),
                }
                self.renderer.render_paging(&self.simulator.snapshot());
            }
        }
    }

    /// Applies the command bound to `key`. Returns false for an unbound key.
    pub fn handle_key(&mut self, target: Target, key: &str) -> bool {
        match Command::from_key(key) {
            Some(command) => {
                self.apply(target, command);
                true
            }
            None => false,
        }
    }

    /// Timer tick: advances the simulator once and re-renders it.
    ///
    /// # Returns
    ///
    /// `true` while references remain, `false` once the terminal step is reached. A tick
    /// at the terminal step changes nothing and renders nothing.
    pub fn tick(&mut self) -> bool {
        if self.simulator.is_complete() {
            return false;
        }
        self.apply(Target::Paging, Command::Next);
        !self.simulator.is_complete()
    }

    /// Renders both engines without changing them.
    pub fn refresh(&mut self) {
        self.renderer.render_safety(&self.checker.snapshot());
        self.renderer.render_paging(&self.simulator.snapshot());
    }

    /// The Banker's engine.
    pub const fn checker(&self) -> &SafetyChecker {
        &self.checker
    }

    /// The page-replacement engine.
    pub const fn simulator(&self) -> &PageReplacementSimulator {
        &self.simulator
    }

    /// The renderer.
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consumes the controller and returns its renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
