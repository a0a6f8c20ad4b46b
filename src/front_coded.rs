//! Front-coded lists of primitive arrays.
//!
//! Stores a sequence of arrays in one contiguous element buffer, replacing
//! the prefix each array shares with its predecessor by the prefix length.
//! Input that is sorted (or merely clustered) compresses well, and any
//! array is still reconstructable in isolation.
//!
//! # Layout
//!
//! Every `ratio`-th array is an *anchor*, stored verbatim; its buffer
//! offset is kept in a block index. The arrays in between are *delta*
//! records, stored relative to their immediate predecessor:
//!
//! ```text
//! anchor:  len · elem[0] .. elem[len-1]
//! delta:   suffix_len · common_len · elem[common_len] .. elem[len-1]
//! ```
//!
//! All length fields use the self-delimiting per-width varint of
//! [`crate::element`], so the buffer is homogeneous in the element type.
//! Records appear in logical order with no gaps or padding.
//!
//! `get(i)` jumps to the anchor of `i`'s block and walks at most
//! `ratio - 1` delta records, copying only the prefix regions that belong
//! to the *final* array. Cost is proportional to the output length plus
//! the delta walk, not to the cumulative lengths of all predecessors.
//!
//! # Persistence
//!
//! The persisted form carries the count, the ratio and the raw buffer.
//! The block index is redundant and is recomputed on load by a linear
//! walk over the records.

use std::fmt;
use std::io::{Read, Write};

use crate::cursor::Cursor;
use crate::element::Element;
use crate::error::{Error, Result};

/// An immutable, compact, random-access list of arrays of `T`.
///
/// Built once from a sequence of arrays, then frozen. Concurrent reads
/// need no synchronisation. Arrays returned by the read operations are
/// freshly allocated and owned by the caller.
#[derive(Clone)]
pub struct FrontCodedList<T: Element> {
    n: usize,
    ratio: usize,
    buffer: Vec<T>,
    index: Vec<usize>,
}

impl<T: Element> FrontCodedList<T> {
    /// Build a list from a sequence of arrays.
    ///
    /// `ratio` is the block size: one anchor (verbatim) record every
    /// `ratio` arrays. `ratio == 1` disables prefix sharing entirely.
    /// Front coding only pays off when neighbouring arrays share
    /// prefixes, which the caller arranges (typically by sorting); the
    /// list stores whatever order it is given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRatio`] if `ratio < 1`.
    pub fn new<I, A>(arrays: I, ratio: usize) -> Result<Self>
    where
        I: IntoIterator<Item = A>,
        A: AsRef<[T]>,
    {
        if ratio == 0 {
            return Err(Error::InvalidRatio(ratio));
        }

        let mut buffer: Vec<T> = Vec::new();
        let mut index: Vec<usize> = Vec::new();
        let mut prev: Vec<T> = Vec::new();
        let mut n = 0usize;

        for item in arrays {
            let cur = item.as_ref();
            if n % ratio == 0 {
                index.push(buffer.len());
                T::push_varint(&mut buffer, cur.len());
                buffer.extend_from_slice(cur);
            } else {
                let common = prev
                    .iter()
                    .zip(cur)
                    .take_while(|(a, b)| a == b)
                    .count();
                T::push_varint(&mut buffer, cur.len() - common);
                T::push_varint(&mut buffer, common);
                buffer.extend_from_slice(&cur[common..]);
            }
            prev.clear();
            prev.extend_from_slice(cur);
            n += 1;
        }

        buffer.shrink_to_fit();
        index.shrink_to_fit();

        Ok(Self {
            n,
            ratio,
            buffer,
            index,
        })
    }

    /// Return the number of arrays in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Return true if the list holds no arrays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Return the block ratio the list was built with.
    #[must_use]
    pub fn ratio(&self) -> usize {
        self.ratio
    }

    /// Approximate heap memory usage in bytes.
    #[must_use]
    pub fn heap_bytes(&self) -> usize {
        self.buffer.capacity() * std::mem::size_of::<T>()
            + self.index.capacity() * std::mem::size_of::<usize>()
    }

    /// Return the length of the array at index `i` without extracting it.
    pub fn array_len(&self, i: usize) -> Result<usize> {
        if i >= self.n {
            return Err(Error::IndexOutOfBounds(i));
        }
        Ok(self.length_unchecked(i))
    }

    /// Return a fresh copy of the array at index `i`.
    pub fn get(&self, i: usize) -> Result<Vec<T>> {
        if i >= self.n {
            return Err(Error::IndexOutOfBounds(i));
        }
        let len = self.length_unchecked(i);
        let mut out = vec![T::default(); len];
        self.extract_into(i, &mut out, 0, len);
        Ok(out)
    }

    /// Copy the array at index `i` into `dst`, writing at most `dst.len()`
    /// elements from the front.
    ///
    /// Equivalent to [`get_into_range`](Self::get_into_range) with
    /// `offset = 0` and `cap = dst.len()`.
    pub fn get_into(&self, i: usize, dst: &mut [T]) -> Result<isize> {
        let cap = dst.len();
        self.get_into_range(i, dst, 0, cap)
    }

    /// Copy up to `cap` elements of the array at index `i` into
    /// `dst[offset..]`.
    ///
    /// If `cap` covers the whole array, the return value is the array
    /// length (the number of elements written). Otherwise the first `cap`
    /// elements are written and the return value is `cap - array_len`, a
    /// negative number whose magnitude is the shortfall; the actual
    /// length is always recoverable as `cap - r` when `r <= 0`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] for a bad `i`,
    /// [`Error::InvalidRange`] if `offset + cap` overruns `dst`.
    pub fn get_into_range(
        &self,
        i: usize,
        dst: &mut [T],
        offset: usize,
        cap: usize,
    ) -> Result<isize> {
        if i >= self.n {
            return Err(Error::IndexOutOfBounds(i));
        }
        let in_range = offset
            .checked_add(cap)
            .is_some_and(|end| end <= dst.len());
        if !in_range {
            return Err(Error::InvalidRange {
                offset,
                cap,
                len: dst.len(),
            });
        }
        let (len, _) = self.extract_into(i, dst, offset, cap);
        Ok(if cap >= len {
            len as isize
        } else {
            cap as isize - len as isize
        })
    }

    /// Return a cursor positioned at the start of the list.
    #[must_use]
    pub fn iter(&self) -> Cursor<'_, T> {
        Cursor::positioned(self, 0)
    }

    /// Return a cursor positioned before index `start`.
    ///
    /// `start` may be anywhere in `[0, len()]`; `len()` positions the
    /// cursor past the last array, useful for backward iteration.
    pub fn iter_from(&self, start: usize) -> Result<Cursor<'_, T>> {
        if start > self.n {
            return Err(Error::IndexOutOfBounds(start));
        }
        Ok(Cursor::positioned(self, start))
    }

    /// Length of the array at `i`, which must be in bounds.
    pub(crate) fn length_unchecked(&self, i: usize) -> usize {
        let buf = &self.buffer;
        let delta = i % self.ratio;
        let mut pos = self.index[i / self.ratio];
        let mut len = T::read_varint(buf, pos);
        if delta == 0 {
            return len;
        }
        // Skip the anchor, then walk the delta records; the length of the
        // record under the walk is always suffix + common of the last read.
        pos += T::varint_len(len) + len;
        let mut common = 0usize;
        for _ in 0..delta {
            len = T::read_varint(buf, pos);
            common = T::read_varint(buf, pos + T::varint_len(len));
            pos += T::varint_len(len) + T::varint_len(common) + len;
        }
        len + common
    }

    /// Reconstruct up to `cap` elements of array `i` into `dst[offset..]`,
    /// copying each element out of the buffer at most once.
    ///
    /// Returns `(array_len, end)` where `end` is the buffer offset just
    /// past record `i`. `i` must be in bounds and `offset + cap` must fit
    /// in `dst`.
    pub(crate) fn extract_into(
        &self,
        i: usize,
        dst: &mut [T],
        offset: usize,
        cap: usize,
    ) -> (usize, usize) {
        let buf = &self.buffer;
        let delta = i % self.ratio;
        let mut pos = self.index[i / self.ratio];

        let anchor_len = T::read_varint(buf, pos);
        if delta == 0 {
            let payload = pos + T::varint_len(anchor_len);
            let m = cap.min(anchor_len);
            dst[offset..offset + m].copy_from_slice(&buf[payload..payload + m]);
            return (anchor_len, payload + anchor_len);
        }

        // `written` counts the leading elements of dst that are known to be
        // a prefix of the array we are converging to. After every step it
        // equals min(common, cap) for that step's record, so whenever the
        // copy below fires, `written` is exactly the previous record's
        // common length and the needed elements sit at the start of the
        // previous payload.
        let mut written = 0usize;
        let mut prev_payload = pos + T::varint_len(anchor_len);
        let mut prev_payload_len = anchor_len;
        let mut suffix = 0usize;
        let mut common = 0usize;

        for _ in 0..delta {
            pos = prev_payload + prev_payload_len;
            suffix = T::read_varint(buf, pos);
            common = T::read_varint(buf, pos + T::varint_len(suffix));

            let wanted = common.min(cap);
            if wanted > written {
                dst[offset + written..offset + wanted]
                    .copy_from_slice(&buf[prev_payload..prev_payload + (wanted - written)]);
            }
            written = wanted;

            prev_payload = pos + T::varint_len(suffix) + T::varint_len(common);
            prev_payload_len = suffix;
        }

        // prev_payload now points at the final record's own payload.
        if written < cap {
            let m = suffix.min(cap - written);
            dst[offset + written..offset + written + m]
                .copy_from_slice(&buf[prev_payload..prev_payload + m]);
        }

        (common + suffix, prev_payload + suffix)
    }

    pub(crate) fn buf(&self) -> &[T] {
        &self.buffer
    }

    pub(crate) fn anchor(&self, block: usize) -> usize {
        self.index[block]
    }

    /// Serialize the list to a stable binary encoding (little-endian).
    ///
    /// Format (versioned):
    /// - magic: 8 bytes (`FCODED01`)
    /// - element tag: u32 ([`Element::TAG`])
    /// - ratio: u32
    /// - n: u64
    /// - buffer length in elements: u64
    /// - buffer: `buffer length` elements, little-endian
    ///
    /// The block index is not persisted; it is rebuilt on load.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(32 + self.buffer.len() * T::WIDTH);
        out.extend_from_slice(b"FCODED01");
        out.extend_from_slice(&u32::from(T::TAG).to_le_bytes());
        out.extend_from_slice(&(self.ratio as u32).to_le_bytes());
        out.extend_from_slice(&(self.n as u64).to_le_bytes());
        out.extend_from_slice(&(self.buffer.len() as u64).to_le_bytes());
        for &e in &self.buffer {
            e.write_le(&mut out);
        }
        out
    }

    /// Deserialize a list from `to_bytes()` output.
    ///
    /// Walks every record to rebuild the block index, rejecting truncated
    /// or structurally inconsistent buffers with
    /// [`Error::InvalidEncoding`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        const MAGIC: &[u8; 8] = b"FCODED01";
        let mut off = 0usize;

        let mut take = |n: usize| -> Result<&[u8]> {
            if off + n > bytes.len() {
                return Err(Error::InvalidEncoding(
                    "unexpected end of input".to_string(),
                ));
            }
            let slice = &bytes[off..off + n];
            off += n;
            Ok(slice)
        };

        let magic = take(8)?;
        if magic != MAGIC {
            return Err(Error::InvalidEncoding(
                "bad magic for FrontCodedList".to_string(),
            ));
        }

        let tag = u32::from_le_bytes(take(4)?.try_into().unwrap());
        if tag != u32::from(T::TAG) {
            return Err(Error::InvalidEncoding(format!(
                "element tag mismatch: expected {}, found {tag}",
                T::TAG
            )));
        }

        let ratio = u32::from_le_bytes(take(4)?.try_into().unwrap()) as usize;
        let n = u64::from_le_bytes(take(8)?.try_into().unwrap()) as usize;
        let buf_len = u64::from_le_bytes(take(8)?.try_into().unwrap()) as usize;

        if ratio == 0 {
            return Err(Error::InvalidEncoding(
                "ratio must be >= 1".to_string(),
            ));
        }

        // Bound allocation against total input to prevent allocation bombs.
        if buf_len.saturating_mul(T::WIDTH) > bytes.len() {
            return Err(Error::InvalidEncoding(format!(
                "buffer length ({buf_len}) too large for input ({} bytes)",
                bytes.len()
            )));
        }

        let mut buffer = Vec::with_capacity(buf_len);
        for _ in 0..buf_len {
            buffer.push(T::read_le(take(T::WIDTH)?));
        }

        if off != bytes.len() {
            return Err(Error::InvalidEncoding(
                "trailing bytes after FrontCodedList".to_string(),
            ));
        }

        // Every record occupies at least one element.
        if n > buffer.len() {
            return Err(Error::InvalidEncoding(format!(
                "count ({n}) exceeds buffer length ({})",
                buffer.len()
            )));
        }

        let index = Self::rebuild_index(&buffer, n, ratio)?;

        Ok(Self {
            n,
            ratio,
            buffer,
            index,
        })
    }

    /// Serialize the list into a writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Deserialize a list by reading a writer's output to its end.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Recompute the block index from the raw buffer.
    ///
    /// Linear walk over the `n` records: every `ratio`-th record is an
    /// anchor whose offset is recorded; delta records are skipped past
    /// using their two length fields. All reads are bounds-checked so a
    /// corrupt buffer fails cleanly instead of walking out of bounds.
    fn rebuild_index(buffer: &[T], n: usize, ratio: usize) -> Result<Vec<usize>> {
        let mut index = Vec::with_capacity(n.div_ceil(ratio));
        let mut pos = 0usize;
        let mut skip = ratio - 1;
        let mut prev_len = 0usize;

        for rec in 0..n {
            let (len, len_used) = T::try_read_varint(buffer, pos).ok_or_else(|| {
                Error::InvalidEncoding(format!("truncated length at record {rec}"))
            })?;
            if len_used != T::varint_len(len) {
                return Err(Error::InvalidEncoding(format!(
                    "non-canonical length at record {rec}"
                )));
            }

            skip += 1;
            if skip == ratio {
                skip = 0;
                index.push(pos);
                pos += len_used + len;
                prev_len = len;
            } else {
                let (common, common_used) =
                    T::try_read_varint(buffer, pos + len_used).ok_or_else(|| {
                        Error::InvalidEncoding(format!(
                            "truncated common length at record {rec}"
                        ))
                    })?;
                if common_used != T::varint_len(common) {
                    return Err(Error::InvalidEncoding(format!(
                        "non-canonical common length at record {rec}"
                    )));
                }
                if common > prev_len {
                    return Err(Error::InvalidEncoding(format!(
                        "common length at record {rec} exceeds previous array length"
                    )));
                }
                pos += len_used + common_used + len;
                prev_len = len + common;
            }

            if pos > buffer.len() {
                return Err(Error::InvalidEncoding(format!(
                    "record {rec} overruns buffer"
                )));
            }
        }

        if pos != buffer.len() {
            return Err(Error::InvalidEncoding(
                "trailing elements after last record".to_string(),
            ));
        }

        Ok(index)
    }
}

impl<T: Element> fmt::Debug for FrontCodedList<T> {
    /// Renders the full bracketed list of arrays; a debugging aid, not a
    /// stable format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T: Element> IntoIterator for &'a FrontCodedList<T> {
    type Item = Vec<T>;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(input: &[&str]) -> Vec<Vec<u8>> {
        input.iter().map(|s| s.as_bytes().to_vec()).collect()
    }

    #[test]
    fn seed_buffer_layout() {
        let input = strs(&["foo", "foobar", "football", "fool"]);
        let fc = FrontCodedList::new(&input, 3).unwrap();

        let expected: Vec<u8> = vec![
            3, b'f', b'o', b'o', // anchor "foo"
            3, 3, b'b', b'a', b'r', // +"bar" over common "foo"
            5, 3, b't', b'b', b'a', b'l', b'l', // +"tball" over common "foo"
            4, b'f', b'o', b'o', b'l', // anchor "fool"
        ];
        assert_eq!(fc.buffer, expected);
        assert_eq!(fc.index, vec![0, 16]);

        for (i, arr) in input.iter().enumerate() {
            assert_eq!(&fc.get(i).unwrap(), arr);
            assert_eq!(fc.array_len(i).unwrap(), arr.len());
        }
    }

    #[test]
    fn empty_list() {
        let fc = FrontCodedList::<u8>::new(Vec::<Vec<u8>>::new(), 4).unwrap();
        assert_eq!(fc.len(), 0);
        assert!(fc.is_empty());
        assert!(fc.buffer.is_empty());
        assert!(fc.index.is_empty());
        assert!(matches!(fc.get(0), Err(Error::IndexOutOfBounds(0))));
        assert_eq!(fc.iter().count(), 0);
    }

    #[test]
    fn empty_arrays() {
        let input: Vec<Vec<u8>> = vec![vec![], vec![], vec![]];
        let fc = FrontCodedList::new(&input, 2).unwrap();
        assert_eq!(fc.buffer, vec![0, 0, 0, 0]);
        assert_eq!(fc.index, vec![0, 3]);
        for i in 0..3 {
            assert_eq!(fc.get(i).unwrap(), Vec::<u8>::new());
            assert_eq!(fc.array_len(i).unwrap(), 0);
        }
    }

    #[test]
    fn successor_is_strict_prefix() {
        let input = strs(&["abcd", "ab"]);
        let fc = FrontCodedList::new(&input, 2).unwrap();
        // suffix_len = 0, common = 2
        assert_eq!(fc.buffer, vec![4, b'a', b'b', b'c', b'd', 0, 2]);
        assert_eq!(fc.get(0).unwrap(), b"abcd");
        assert_eq!(fc.get(1).unwrap(), b"ab");
        assert_eq!(fc.array_len(1).unwrap(), 2);
    }

    #[test]
    fn single_array_large_ratio() {
        let fc = FrontCodedList::new([[5i32, 5, 5, 5, 5]], 7).unwrap();
        assert_eq!(fc.len(), 1);
        assert_eq!(fc.index, vec![0]);
        assert_eq!(fc.get(0).unwrap(), vec![5; 5]);
    }

    #[test]
    fn ratio_one_is_all_anchors() {
        let input: Vec<Vec<i32>> = vec![vec![1, 2], vec![3], vec![]];
        let fc = FrontCodedList::new(&input, 1).unwrap();
        // Pure (len, elements) pairs, no delta records.
        assert_eq!(fc.buffer, vec![2, 1, 2, 1, 3, 0]);
        assert_eq!(fc.index, vec![0, 3, 5]);
        for (i, arr) in input.iter().enumerate() {
            assert_eq!(&fc.get(i).unwrap(), arr);
        }
    }

    #[test]
    fn rejects_zero_ratio() {
        let r = FrontCodedList::<u8>::new(Vec::<Vec<u8>>::new(), 0);
        assert!(matches!(r, Err(Error::InvalidRatio(0))));
    }

    #[test]
    fn fill_get_sign_convention() {
        let input = strs(&["foo", "foobar", "football", "fool"]);
        let fc = FrontCodedList::new(&input, 3).unwrap();

        let mut dst = [0u8; 16];

        // cap covers the array: returns the length, dst holds the array.
        let r = fc.get_into_range(2, &mut dst, 0, 16).unwrap();
        assert_eq!(r, 8);
        assert_eq!(&dst[..8], b"football");

        // cap == length exactly.
        let r = fc.get_into_range(2, &mut dst, 0, 8).unwrap();
        assert_eq!(r, 8);

        // cap short by 5: returns cap - length, dst holds the prefix.
        let mut dst = [0u8; 3];
        let r = fc.get_into(2, &mut dst).unwrap();
        assert_eq!(r, 3 - 8);
        assert_eq!(&dst, b"foo");

        // zero cap.
        let mut dst = [0u8; 0];
        let r = fc.get_into(2, &mut dst).unwrap();
        assert_eq!(r, -8);

        // writes land at the requested offset, untouched elsewhere.
        let mut dst = [b'x'; 10];
        let r = fc.get_into_range(0, &mut dst, 4, 3).unwrap();
        assert_eq!(r, 3);
        assert_eq!(&dst, b"xxxxfooxxx");
    }

    #[test]
    fn fill_get_rejects_bad_range() {
        let fc = FrontCodedList::new(strs(&["a"]), 1).unwrap();
        let mut dst = [0u8; 4];
        assert!(matches!(
            fc.get_into_range(0, &mut dst, 3, 2),
            Err(Error::InvalidRange {
                offset: 3,
                cap: 2,
                len: 4
            })
        ));
        assert!(matches!(
            fc.get_into_range(0, &mut dst, usize::MAX, 2),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            fc.get_into_range(7, &mut dst, 0, 4),
            Err(Error::IndexOutOfBounds(7))
        ));
    }

    #[test]
    fn retracting_prefixes_reconstruct() {
        // Prefix lengths shrink then grow along the block, exercising the
        // retraction branch of the extract walk.
        let input = strs(&["abcdef", "abcdeX", "abcY", "abcdZZZ"]);
        let fc = FrontCodedList::new(&input, 4).unwrap();
        for (i, arr) in input.iter().enumerate() {
            assert_eq!(&fc.get(i).unwrap(), arr);
            assert_eq!(fc.array_len(i).unwrap(), arr.len());
        }
        // A capped read of the last record stops inside the common prefix.
        let mut dst = [0u8; 2];
        let r = fc.get_into(3, &mut dst).unwrap();
        assert_eq!(r, 2 - 7);
        assert_eq!(&dst, b"ab");
    }

    #[test]
    fn returned_arrays_are_independent() {
        let fc = FrontCodedList::new(strs(&["foo", "foobar"]), 2).unwrap();
        let mut a = fc.get(0).unwrap();
        a[0] = b'X';
        assert_eq!(fc.get(0).unwrap(), b"foo");
    }

    #[test]
    fn serialization_roundtrip() {
        let input = strs(&["foo", "foobar", "football", "fool", "za", "zb"]);
        let fc = FrontCodedList::new(&input, 3).unwrap();

        let bytes = fc.to_bytes();
        let fc2 = FrontCodedList::<u8>::from_bytes(&bytes).unwrap();
        assert_eq!(fc2.len(), fc.len());
        assert_eq!(fc2.ratio(), fc.ratio());
        assert_eq!(fc2.index, fc.index);
        for (i, arr) in input.iter().enumerate() {
            assert_eq!(&fc2.get(i).unwrap(), arr);
        }

        // Building the same input twice is byte-identical.
        let again = FrontCodedList::new(&input, 3).unwrap();
        assert_eq!(again.to_bytes(), bytes);
    }

    #[test]
    fn serialization_roundtrip_wide_elements() {
        let input: Vec<Vec<i16>> = vec![vec![1, 2, 3], vec![1, 2, 4], vec![-5]];
        let fc = FrontCodedList::new(&input, 2).unwrap();
        let fc2 = FrontCodedList::<i16>::from_bytes(&fc.to_bytes()).unwrap();
        for (i, arr) in input.iter().enumerate() {
            assert_eq!(&fc2.get(i).unwrap(), arr);
        }
    }

    #[test]
    fn rejects_bad_magic() {
        let fc = FrontCodedList::new(strs(&["ab"]), 1).unwrap();
        let mut bytes = fc.to_bytes();
        bytes[0] = b'X';
        assert!(FrontCodedList::<u8>::from_bytes(&bytes).is_err());
    }

    #[test]
    fn rejects_element_tag_mismatch() {
        let input: Vec<Vec<u16>> = vec![vec![40_000, 2]];
        let fc = FrontCodedList::new(&input, 1).unwrap();
        let bytes = fc.to_bytes();
        assert!(FrontCodedList::<i16>::from_bytes(&bytes).is_err());
        assert!(FrontCodedList::<u16>::from_bytes(&bytes).is_ok());
    }

    #[test]
    fn rejects_truncated_and_trailing_input() {
        let fc = FrontCodedList::new(strs(&["abc", "abd"]), 2).unwrap();
        let bytes = fc.to_bytes();

        assert!(FrontCodedList::<u8>::from_bytes(&bytes[..bytes.len() - 1]).is_err());
        assert!(FrontCodedList::<u8>::from_bytes(&bytes[..10]).is_err());

        let mut long = bytes.clone();
        long.push(0);
        assert!(FrontCodedList::<u8>::from_bytes(&long).is_err());
    }

    #[test]
    fn rejects_corrupted_count() {
        let fc = FrontCodedList::new(strs(&["abc", "abd"]), 2).unwrap();
        let mut bytes = fc.to_bytes();
        // Corrupt the `n` field (offset 16..24) to claim extra records.
        let bad_n: u64 = 40;
        bytes[16..24].copy_from_slice(&bad_n.to_le_bytes());
        assert!(FrontCodedList::<u8>::from_bytes(&bytes).is_err());
    }

    #[test]
    fn rejects_oversized_common_length() {
        // Hand-built buffer: anchor "ab" then a delta record claiming a
        // common prefix of 9 against a 2-element predecessor.
        let buffer: Vec<u8> = vec![2, b'a', b'b', 1, 9, b'c'];
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"FCODED01");
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&2u64.to_le_bytes());
        bytes.extend_from_slice(&(buffer.len() as u64).to_le_bytes());
        bytes.extend_from_slice(&buffer);
        assert!(FrontCodedList::<u8>::from_bytes(&bytes).is_err());
    }

    #[test]
    fn read_write_adapters() {
        let input = strs(&["one", "onetwo"]);
        let fc = FrontCodedList::new(&input, 2).unwrap();
        let mut sink = Vec::new();
        fc.write_to(&mut sink).unwrap();
        let fc2 = FrontCodedList::<u8>::read_from(&mut sink.as_slice()).unwrap();
        assert_eq!(fc2.get(1).unwrap(), b"onetwo");
    }

    #[test]
    fn debug_renders_contents() {
        let input: Vec<Vec<i32>> = vec![vec![1, 2], vec![3]];
        let fc = FrontCodedList::new(&input, 2).unwrap();
        assert_eq!(format!("{fc:?}"), "[[1, 2], [3]]");
    }
}
