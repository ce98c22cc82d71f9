use super::Config;
use super::DisplayAction;
use super::DisplayEvent;
use super::DisplayServer;
use crate::errors::Result;
use crate::models::{Handle, WindowHandle, Xyhw};
use std::collections::VecDeque;
use std::time::Duration;

/// Geometry of windows the mock has not seen a move/resize for.
pub const MOCK_WINDOW_GEOMETRY: Xyhw = Xyhw::new(10, 20, 640, 480);

/// In-memory display server which records what the manager asked it to do.
#[derive(Clone, Debug)]
pub struct MockDisplayServer<H: Handle> {
    pub events: VecDeque<DisplayEvent<H>>,
    pub executed: Vec<DisplayAction<H>>,
    pub geometries: Vec<(WindowHandle<H>, Xyhw)>,
    pub mapped: Vec<WindowHandle<H>>,
    pub focused: Option<WindowHandle<H>>,
    pub area: Xyhw,
}

impl<H: Handle> MockDisplayServer<H> {
    pub fn push_event(&mut self, event: DisplayEvent<H>) {
        self.events.push_back(event);
    }

    pub fn is_mapped(&self, handle: WindowHandle<H>) -> bool {
        self.mapped.contains(&handle)
    }

    pub fn set_geometry(&mut self, handle: WindowHandle<H>, xyhw: Xyhw) {
        match self.geometries.iter_mut().find(|(h, _)| *h == handle) {
            Some((_, stored)) => *stored = xyhw,
            None => self.geometries.push((handle, xyhw)),
        }
    }

    /// Forget the recorded actions, returning them.
    pub fn take_executed(&mut self) -> Vec<DisplayAction<H>> {
        std::mem::take(&mut self.executed)
    }
}

impl<H: Handle> DisplayServer<H> for MockDisplayServer<H> {
    fn new(_: &impl Config) -> Result<Self> {
        Ok(Self {
            events: VecDeque::new(),
            executed: vec![],
            geometries: vec![],
            mapped: vec![],
            focused: None,
            area: Xyhw::new(0, 0, 1920, 1080),
        })
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>> {
        self.events.drain(..).collect()
    }

    fn wait_readable(&mut self, _timeout: Duration) -> Result<()> {
        Ok(())
    }

    fn execute_action(&mut self, act: DisplayAction<H>) {
        match &act {
            DisplayAction::MapWindow(h) if !self.mapped.contains(h) => self.mapped.push(*h),
            DisplayAction::UnmapWindow(h) => self.mapped.retain(|m| m != h),
            DisplayAction::MoveResizeWindow(h, xyhw) => self.set_geometry(*h, *xyhw),
            DisplayAction::SetInputFocus(h) => self.focused = Some(*h),
            _ => {}
        }
        self.executed.push(act);
    }

    fn query_geometry(&self, handle: WindowHandle<H>) -> Option<Xyhw> {
        let stored = self.geometries.iter().find(|(h, _)| *h == handle);
        Some(stored.map_or(MOCK_WINDOW_GEOMETRY, |(_, xyhw)| *xyhw))
    }

    fn display_area(&self) -> Xyhw {
        self.area
    }

    fn flush(&self) {}
}
