//! `MoveQueue` — FIFO of moves waiting to be applied.

use std::collections::VecDeque;

use wh_core::PlanId;
use wh_plan::Move;

/// One queued move and the plan it belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QueuedMove {
    pub plan: PlanId,
    pub mv:   Move,
}

/// Strict FIFO of pending moves.  Plans are appended whole, so moves of one
/// plan are contiguous and in plan order.
#[derive(Clone, Debug, Default)]
pub struct MoveQueue {
    inner: VecDeque<QueuedMove>,
}

impl MoveQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every move of plan `plan`, in order.
    pub fn enqueue(&mut self, plan: PlanId, moves: impl IntoIterator<Item = Move>) {
        self.inner
            .extend(moves.into_iter().map(|mv| QueuedMove { plan, mv }));
    }

    /// Remove and return the head move.
    pub fn pop(&mut self) -> Option<QueuedMove> {
        self.inner.pop_front()
    }

    /// Pending moves in application order.
    pub fn moves(&self) -> impl Iterator<Item = &Move> + '_ {
        self.inner.iter().map(|q| &q.mv)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
