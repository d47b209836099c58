use core::mem::MaybeUninit;
use core::ptr;

use crate::buffer::SpillBuffer;

/// Writes new elements into uninitialized slots while keeping the vector
/// recoverable if a clone or constructor panics mid-way.
///
/// Dropping an `Inserter` before [`complete`](Inserter::complete) drops
/// whatever it wrote and, when a shifted tail is pending beyond the write
/// region, moves that tail back down so the buffer holds exactly its
/// pre-operation elements again.
pub(crate) struct Inserter<'a, T> {
    buf: &'a mut [MaybeUninit<T>],
    start: usize,
    end: usize,
    limit: usize,
    tail: usize,
}

impl<'a, T> Inserter<'a, T> {
    /// Open the spare capacity of `buf` for appending.
    #[inline]
    pub fn for_buffer<const N: usize>(buf: &'a mut SpillBuffer<T, N>) -> Self {
        let len = buf.length();
        let buf = buf.as_uninit_slice();
        let limit = buf.len();
        Self {
            buf,
            start: len,
            end: len,
            limit,
            tail: 0,
        }
    }

    /// Open a gap of `count` slots at `start`, with `tail` elements already
    /// shifted up to `start + count` by the caller.
    #[inline]
    pub fn for_gap<const N: usize>(
        buf: &'a mut SpillBuffer<T, N>,
        start: usize,
        count: usize,
        tail: usize,
    ) -> Self {
        debug_assert!(start + count + tail <= buf.capacity());
        Self {
            buf: buf.as_uninit_slice(),
            start,
            end: start,
            limit: start + count,
            tail,
        }
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        debug_assert!(self.end < self.limit);
        self.buf[self.end].write(value);
        self.end += 1;
    }

    #[inline]
    pub fn push_clone(&mut self, value: &T)
    where
        T: Clone,
    {
        debug_assert!(self.end < self.limit);
        self.buf[self.end].write(value.clone());
        self.end += 1;
    }

    #[inline]
    pub fn full(&self) -> bool {
        self.end == self.limit
    }

    /// Finish the insertion, disarming the guard. Returns the number of
    /// elements written and the index one past the last written slot.
    #[inline]
    pub fn complete(mut self) -> (usize, usize) {
        let count = self.end - self.start;
        self.start = self.end;
        self.tail = 0;
        (count, self.end)
    }
}

impl<T> Drop for Inserter<'_, T> {
    fn drop(&mut self) {
        if self.start != self.end {
            unsafe {
                ptr::drop_in_place(
                    &mut self.buf[self.start..self.end] as *mut [MaybeUninit<T>] as *mut [T],
                )
            };
        }
        if self.tail > 0 {
            // Rejoin the shifted tail with the surviving prefix.
            let data = self.buf.as_mut_ptr();
            unsafe {
                ptr::copy(data.add(self.limit), data.add(self.start), self.tail);
            }
        }
    }
}
