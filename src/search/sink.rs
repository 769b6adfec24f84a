//! Optional diagnostic output of intermediate signature maps.

use crate::search::window::WindowOrigin;
use crate::sign::SignMap;

/// Identifies which image a reported map was derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapLabel {
    /// Reference map of the template at this index.
    Template(usize),
    /// Candidate map of a scan window cut for the template at `template`.
    Window {
        template: usize,
        origin: WindowOrigin,
    },
}

/// Receives reduced maps as they are built.
///
/// Sinks observe only; nothing they do affects the recognition result.
pub trait MapSink {
    /// Called once per reduced map.
    fn emit(&mut self, label: MapLabel, map: &SignMap);
}

/// Sink that discards every map.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl MapSink for NoopSink {
    fn emit(&mut self, _label: MapLabel, _map: &SignMap) {}
}

impl MapSink for Vec<(MapLabel, SignMap)> {
    fn emit(&mut self, label: MapLabel, map: &SignMap) {
        self.push((label, map.clone()));
    }
}
