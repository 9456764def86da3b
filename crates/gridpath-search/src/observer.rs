//! Progress observation for running searches.

use std::fmt;

use gridpath_core::Node;

/// Receives progress events from a running search.
///
/// Callbacks run synchronously on the search's own thread and should return
/// promptly. An observer that touches shared state handles its own locking.
/// Every method has an empty default so implementors only pick the events
/// they care about.
pub trait Observer {
    /// A node was taken off the frontier and is about to be expanded.
    fn on_node_current(&mut self, _node: Node) {}

    /// A node was counted as visited. Fired once per expansion, in
    /// visitation order, right after [`on_node_current`](Self::on_node_current).
    fn on_node_visited(&mut self, _node: Node) {}

    /// Free-text narration at algorithm milestones. Advisory only.
    fn on_log(&mut self, _message: fmt::Arguments<'_>) {}
}

impl<O: Observer + ?Sized> Observer for &mut O {
    #[inline]
    fn on_node_current(&mut self, node: Node) {
        (**self).on_node_current(node)
    }

    #[inline]
    fn on_node_visited(&mut self, node: Node) {
        (**self).on_node_visited(node)
    }

    #[inline]
    fn on_log(&mut self, message: fmt::Arguments<'_>) {
        (**self).on_log(message)
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Observer for Silent {}

/// Observer that forwards narration to the [`log`] facade.
///
/// Milestone messages go out at `debug` level, individual visits at `trace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn on_node_visited(&mut self, node: Node) {
        log::trace!("visited {node}");
    }

    fn on_log(&mut self, message: fmt::Arguments<'_>) {
        log::debug!("{message}");
    }
}
