use serde::{Deserialize, Serialize};

use crate::coord::{Coord, Direction};

/// What happened to a cell.
///
/// Edge events carry the direction of the edge as seen from [`MazeEvent::pos`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Visited,
    WallRemoved(Direction),
    EdgeTried(Direction),
    EdgeRejected(Direction),
    EdgeConfirmed(Direction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MazeEvent {
    pub pos: Coord,
    pub kind: EventKind,
}

impl MazeEvent {
    pub fn new(pos: Coord, kind: EventKind) -> Self {
        Self { pos, kind }
    }

    /// The other end of an edge event.
    pub fn target(&self) -> Option<Coord> {
        match self.kind {
            EventKind::Visited => None,
            EventKind::WallRemoved(dir)
            | EventKind::EdgeTried(dir)
            | EventKind::EdgeRejected(dir)
            | EventKind::EdgeConfirmed(dir) => Some(self.pos.step(dir)),
        }
    }
}

/// Receives every state change made by the algorithms, after it was applied.
pub trait MazeObserver {
    fn on_event(&mut self, event: MazeEvent);
}

impl MazeObserver for () {
    fn on_event(&mut self, _: MazeEvent) {}
}

impl MazeObserver for Vec<MazeEvent> {
    fn on_event(&mut self, event: MazeEvent) {
        self.push(event);
    }
}

impl<O: MazeObserver + ?Sized> MazeObserver for &mut O {
    fn on_event(&mut self, event: MazeEvent) {
        (**self).on_event(event);
    }
}

/// Adapter turning a closure into an observer.
pub struct FnObserver<F>(pub F);

impl<F: FnMut(MazeEvent)> MazeObserver for FnObserver<F> {
    fn on_event(&mut self, event: MazeEvent) {
        (self.0)(event);
    }
}
