//! Bidirectional cursor over a front-coded list.
//!
//! A forward scan through a [`FrontCodedList`] does not need the block
//! index at all: after the first record of a block, each array differs
//! from the scratch copy of its predecessor only in its suffix. The
//! cursor exploits that with an *in-sync* fast path costing one varint
//! pair read plus one contiguous suffix copy per record.
//!
//! Backward motion gives the fast path up: stepping back is served by the
//! list's random-access reader, and the next forward step re-synchronises
//! through the generic extract.

use crate::element::Element;
use crate::front_coded::FrontCodedList;

/// A bidirectional positional iterator over a [`FrontCodedList`].
///
/// The cursor sits *between* logical indices, like a text caret:
/// [`next`](Iterator::next) returns the array at [`next_index`] and moves
/// right, [`previous`](Cursor::previous) returns the array at
/// [`previous_index`] and moves left.
///
/// The cursor owns a mutable scratch buffer, so it cannot be shared
/// between concurrent readers; create one cursor per scan.
///
/// [`next_index`]: Cursor::next_index
/// [`previous_index`]: Cursor::previous_index
pub struct Cursor<'a, T: Element> {
    list: &'a FrontCodedList<T>,
    /// Logical index the next forward step will return.
    i: usize,
    /// Buffer offset of record `i`; meaningful only while `in_sync` or
    /// when `i` is an anchor (the anchor branch re-reads the block index).
    pos: usize,
    /// Contents of the last array produced going forward.
    scratch: Vec<T>,
    /// True while `scratch` holds `array[i - 1]` and `pos` points at
    /// record `i`. Cleared by backward motion.
    in_sync: bool,
}

impl<'a, T: Element> Cursor<'a, T> {
    /// Position a cursor before logical index `start`, which the caller
    /// has validated to be in `[0, len]`.
    pub(crate) fn positioned(list: &'a FrontCodedList<T>, start: usize) -> Self {
        let mut cursor = Self {
            list,
            i: start,
            pos: 0,
            scratch: Vec::new(),
            in_sync: false,
        };
        if start == 0 || start == list.len() {
            return cursor;
        }
        // Rewind to the block anchor, then replay the in-block deltas.
        cursor.i = start - start % list.ratio();
        cursor.pos = list.anchor(start / list.ratio());
        for _ in 0..start % list.ratio() {
            cursor.advance();
        }
        cursor
    }

    /// Return true if a forward step is available.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.i < self.list.len()
    }

    /// Return true if a backward step is available.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.i > 0
    }

    /// Index of the array the next forward step would return.
    #[must_use]
    pub fn next_index(&self) -> usize {
        self.i
    }

    /// Index of the array the next backward step would return, or `None`
    /// at the front of the list.
    #[must_use]
    pub fn previous_index(&self) -> Option<usize> {
        self.i.checked_sub(1)
    }

    /// Step backward and return a fresh copy of the array crossed over,
    /// or `None` at the front of the list.
    ///
    /// Invalidates the forward fast path: `pos` no longer describes the
    /// record the scratch is one behind, so the next forward step goes
    /// through the generic extract.
    pub fn previous(&mut self) -> Option<Vec<T>> {
        if self.i == 0 {
            return None;
        }
        self.in_sync = false;
        self.i -= 1;
        self.list.get(self.i).ok()
    }

    /// Reconstruct `array[i]` into the scratch, update the position state
    /// and move past it. Requires `i < len`.
    fn advance(&mut self) -> usize {
        let list = self.list;
        let buf = list.buf();
        let len;

        if self.i % list.ratio() == 0 {
            // Anchor: stored verbatim, and its offset is in the block
            // index, so this branch is correct even when out of sync.
            let pos = list.anchor(self.i / list.ratio());
            len = T::read_varint(buf, pos);
            let payload = pos + T::varint_len(len);
            self.scratch.clear();
            self.scratch.extend_from_slice(&buf[payload..payload + len]);
            self.pos = payload + len;
            self.in_sync = true;
        } else if self.in_sync {
            // Fast path: scratch already holds the predecessor, whose
            // first `common` elements are the prefix of this array.
            let suffix = T::read_varint(buf, self.pos);
            let common = T::read_varint(buf, self.pos + T::varint_len(suffix));
            let payload = self.pos + T::varint_len(suffix) + T::varint_len(common);
            len = common + suffix;
            self.scratch.resize(len, T::default());
            self.scratch[common..].copy_from_slice(&buf[payload..payload + suffix]);
            self.pos = payload + suffix;
        } else {
            len = list.length_unchecked(self.i);
            self.scratch.resize(len, T::default());
            let (_, end) = list.extract_into(self.i, &mut self.scratch, 0, len);
            self.pos = end;
            self.in_sync = true;
        }

        self.i += 1;
        len
    }
}

impl<T: Element> Iterator for Cursor<'_, T> {
    type Item = Vec<T>;

    /// Step forward and return a fresh copy of the array crossed over.
    fn next(&mut self) -> Option<Vec<T>> {
        if self.i >= self.list.len() {
            return None;
        }
        let len = self.advance();
        Some(self.scratch[..len].to_vec())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len() - self.i;
        (remaining, Some(remaining))
    }
}

impl<T: Element> ExactSizeIterator for Cursor<'_, T> {}

impl<T: Element> std::iter::FusedIterator for Cursor<'_, T> {}
