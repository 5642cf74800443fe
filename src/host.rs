//! The native side of a managed window.
//!
//! The registry owns window state; a [`HostSurface`] only mirrors it. Focus and
//! close requests travel the other way, as calls on the registry.

use crate::layout::Rect;
use crate::window::{WindowConfig, WindowId};

pub trait HostSurface {
    fn create_host_window(&mut self, id: WindowId, config: &WindowConfig);
    fn set_host_geometry(&mut self, id: WindowId, rect: Rect);
    fn destroy_host_window(&mut self, id: WindowId);
}

/// Host that draws nothing. The terminal UI reads registry state directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl HostSurface for NullHost {
    fn create_host_window(&mut self, _id: WindowId, _config: &WindowConfig) {}

    fn set_host_geometry(&mut self, _id: WindowId, _rect: Rect) {}

    fn destroy_host_window(&mut self, _id: WindowId) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Create {
        id: WindowId,
        title: String,
        rect: Rect,
    },
    Geometry {
        id: WindowId,
        rect: Rect,
    },
    Destroy(WindowId),
}

/// Host that keeps a log of every call it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }
}

impl HostSurface for RecordingHost {
    fn create_host_window(&mut self, id: WindowId, config: &WindowConfig) {
        self.calls.push(HostCall::Create {
            id,
            title: config.title.clone(),
            rect: config.rect,
        });
    }

    fn set_host_geometry(&mut self, id: WindowId, rect: Rect) {
        self.calls.push(HostCall::Geometry { id, rect });
    }

    fn destroy_host_window(&mut self, id: WindowId) {
        self.calls.push(HostCall::Destroy(id));
    }
}
