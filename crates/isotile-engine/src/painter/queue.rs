use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Tile index packed with a catch-up delay: `tile << 8 | delay`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub(crate) struct QueueEntry(u32);

impl QueueEntry {
    pub const MAX_TILE: usize = (1 << 24) - 1;

    #[inline]
    pub fn new(tile: usize, delay: u8) -> Self {
        debug_assert!(tile <= Self::MAX_TILE);
        Self(((tile as u32) << 8) | delay as u32)
    }

    #[inline]
    pub fn tile(self) -> usize {
        (self.0 >> 8) as usize
    }

    #[inline]
    pub fn delay(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// Fixed-capacity FIFO over a wrap-around slot array.
#[derive(Debug)]
pub(crate) struct RingQueue {
    slots: Box<[QueueEntry]>,
    head: usize,
    len: usize,
}

impl RingQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![QueueEntry(0); capacity].into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    /// # Panics
    /// Panics when the queue is full.
    #[inline]
    pub fn push(&mut self, entry: QueueEntry) {
        let capacity = self.slots.len();
        assert!(self.len < capacity, "ring queue overflow ({capacity} entries)");
        self.slots[(self.head + self.len) % capacity] = entry;
        self.len += 1;
    }

    #[inline]
    pub fn pop(&mut self) -> Option<QueueEntry> {
        if self.len == 0 {
            return None;
        }
        let entry = self.slots[self.head];
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        Some(entry)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}

/// Priority queue of delayed entries: lowest delay first, FIFO among equals.
#[derive(Debug)]
pub(crate) struct CatchupQueue {
    heap: BinaryHeap<Reverse<(u8, u64, QueueEntry)>>,
    next_seq: u64,
    capacity: usize,
}

impl CatchupQueue {
    pub fn new(capacity: usize) -> Self {
        Self { heap: BinaryHeap::new(), next_seq: 0, capacity }
    }

    /// # Panics
    /// Panics when the queue is full.
    #[inline]
    pub fn push(&mut self, entry: QueueEntry) {
        assert!(self.heap.len() < self.capacity, "catch-up queue overflow ({} entries)", self.capacity);
        self.heap.push(Reverse((entry.delay(), self.next_seq, entry)));
        self.next_seq += 1;
    }

    #[inline]
    pub fn pop(&mut self) -> Option<QueueEntry> {
        self.heap.pop().map(|Reverse((_, _, entry))| entry)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

/// The ring queue and the catch-up queue, drained catch-up first.
#[derive(Debug)]
pub(crate) struct WorkQueues {
    ring: RingQueue,
    catchup: CatchupQueue,
}

impl WorkQueues {
    pub fn new(capacity: usize) -> Self {
        Self { ring: RingQueue::new(capacity), catchup: CatchupQueue::new(capacity) }
    }

    /// Queues follow-on work for `tile` on behalf of work carrying `delay`.
    ///
    /// Undelayed work stays on the ring queue; delayed work moves to the
    /// catch-up queue one step closer to zero.
    #[inline]
    pub fn push_follow(&mut self, tile: usize, delay: u8) {
        if delay == 0 {
            self.ring.push(QueueEntry::new(tile, 0));
        } else {
            self.catchup.push(QueueEntry::new(tile, delay - 1));
        }
    }

    #[inline]
    pub fn pop(&mut self) -> Option<QueueEntry> {
        self.catchup.pop().or_else(|| self.ring.pop())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len() + self.catchup.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.ring.clear();
        self.catchup.clear();
    }
}
