use super::RingError;

/// Fixed-capacity byte ring that overwrites the oldest data when full.
///
/// Occupancy is tracked with an explicit `len`; `head == tail` alone is
/// ambiguous between empty and full and is never used as a test.
#[derive(Debug, Clone)]
pub struct RingBuffer {
    buf: Vec<u8>,
    capacity: usize,
    head: usize,
    tail: usize,
    len: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Result<Self, RingError> {
        if capacity == 0 {
            return Err(RingError::InvalidCapacity {
                capacity,
                reason: "must be greater than zero",
            });
        }

        Ok(Self {
            buf: vec![0; capacity],
            capacity,
            head: 0,
            tail: 0,
            len: 0,
        })
    }

    /// Physical size of the backing store, not the live byte count.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live bytes waiting to be read.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    #[inline(always)]
    pub fn available(&self) -> usize {
        self.capacity - self.len
    }

    /// Appends `data` at the tail, wrapping as needed. Once the buffer is
    /// full each further byte evicts the oldest live byte; writing more than
    /// `capacity` bytes in one call keeps only the last `capacity` of them.
    /// Overflow never fails.
    #[inline]
    pub fn write(&mut self, data: &[u8]) {
        let n = data.len();
        if n == 0 {
            return;
        }

        // An oversized write cycles through every slot; only its last
        // `capacity` bytes are still visible, at the slots the full pass
        // would have left them in.
        let (src, start) = if n > self.capacity {
            let skip = n - self.capacity;
            (&data[skip..], (self.tail + skip) % self.capacity)
        } else {
            (data, self.tail)
        };

        let contiguous = self.capacity - start;
        if src.len() <= contiguous {
            self.buf[start..start + src.len()].copy_from_slice(src);
        } else {
            self.buf[start..].copy_from_slice(&src[..contiguous]);
            self.buf[..src.len() - contiguous].copy_from_slice(&src[contiguous..]);
        }

        self.tail = (self.tail + n) % self.capacity;
        self.len = (self.len + n).min(self.capacity);
        // head + len == tail (mod capacity) at all times, so eviction is
        // re-deriving head after tail and len have moved.
        self.head = (self.tail + self.capacity - self.len) % self.capacity;
    }

    /// Removes and returns up to `n` of the oldest live bytes in FIFO order.
    ///
    /// Returns fewer than `n` bytes if fewer are live, and an empty `Vec`
    /// when the buffer is empty; neither is an error. Never reads past the
    /// live range.
    #[inline]
    pub fn read(&mut self, n: usize) -> Vec<u8> {
        let to_read = n.min(self.len);
        let mut out = Vec::with_capacity(to_read);
        if to_read == 0 {
            return out;
        }

        let contiguous = self.capacity - self.head;
        if to_read <= contiguous {
            out.extend_from_slice(&self.buf[self.head..self.head + to_read]);
        } else {
            out.extend_from_slice(&self.buf[self.head..]);
            out.extend_from_slice(&self.buf[..to_read - contiguous]);
        }

        self.head = (self.head + to_read) % self.capacity;
        self.len -= to_read;
        out
    }

    /// Copies a window of raw storage positions, ignoring head, tail and
    /// occupancy. `start` and `end` are normalized into the store by modulo;
    /// `end <= start` wraps around, so equal positions yield the full store.
    ///
    /// This is a low-level escape hatch: it can expose stale bytes that
    /// `read` would never return.
    pub fn slice(&self, start: usize, end: usize) -> Vec<u8> {
        let start = start % self.capacity;
        let end = end % self.capacity;

        if end > start {
            self.buf[start..end].to_vec()
        } else {
            let mut out = Vec::with_capacity(self.capacity - start + end);
            out.extend_from_slice(&self.buf[start..]);
            out.extend_from_slice(&self.buf[..end]);
            out
        }
    }

    /// Drops all live data. Storage bytes are left in place, so `slice`
    /// still sees them.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }
}
