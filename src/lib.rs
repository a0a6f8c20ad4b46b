//! # Front-Coded Lists
//!
//! *Compressed string and array dictionaries with random access.*
//!
//! ## Intuition First
//!
//! Open a paper dictionary and look at a column: "carbon", "carbonate",
//! "carbonic", "carbonize". Printing the shared stem over and over wastes
//! ink, so old typesetters replaced it with a dash: "carbon", "—ate",
//! "—ic", "—ize". Front coding is exactly that trick for sequences of
//! arrays: each entry stores only how many leading elements it shares
//! with its predecessor, plus its own tail.
//!
//! The catch is random access. If every entry leans on the previous one,
//! reading entry 10,000 seems to require unrolling 10,000 predecessors.
//! The fix is to store every `ratio`-th entry verbatim (an *anchor*) and
//! keep an index of anchor positions: reading any entry costs one index
//! lookup plus at most `ratio - 1` delta steps.
//!
//! ## The Problem
//!
//! Storing $n$ arrays individually faces a trade-off:
//! - **Pointer-per-array**: $O(1)$ access, but per-allocation overhead
//!   and no compression across entries.
//! - **Whole-stream compression**: near-entropy space, but extracting one
//!   entry means decompressing everything before it.
//!
//! Front coding with anchors sits in between: sorted input compresses to
//! the shared-prefix structure it actually has, while any entry is
//! reconstructable in $O(\mathrm{ratio} + |\mathrm{output}|)$.
//!
//! ## Historical Context
//!
//! ```text
//! 1960s  Incremental encoding in tape-era sort/merge utilities
//! 1973   Knuth, TAOCP vol. 3: "front compression" of sorted keys
//! 1994   Witten-Moffat-Bell, Managing Gigabytes: blocked front coding
//!        for inverted-index lexicons
//! 2000s  fastutil/dsiutils front-coded lists: anchors + in-type varints
//! ```
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **[`FrontCodedList`]**: the immutable list, generic over the element
//!   type; builder, random-access reads, fill-into-buffer reads,
//!   persistence.
//! - **[`Cursor`]**: a bidirectional iterator with a forward fast path
//!   that reuses the previously reconstructed array.
//! - **[`Element`]**: the per-width self-delimiting varint codec that
//!   stores lengths *inside* the homogeneous element buffer.
//!
//! Lengths and prefix counts live in the same buffer as the payload, in
//! the element type itself, so the whole list is two flat allocations:
//! one element buffer and one anchor-offset index.
//!
//! ## Example
//!
//! ```rust
//! use fcoded::FrontCodedList;
//!
//! let words: [&[u8]; 4] = [b"car", b"carbon", b"carbonate", b"cat"];
//! let list = FrontCodedList::new(words, 2).unwrap();
//!
//! assert_eq!(list.len(), 4);
//! assert_eq!(list.get(2).unwrap(), b"carbonate");
//!
//! let all: Vec<Vec<u8>> = list.iter().collect();
//! assert_eq!(all[3], b"cat");
//! ```
//!
//! ## What Could Go Wrong
//!
//! 1. **Unsorted input**: the structure stays correct but compresses
//!    nothing; neighbours without shared prefixes make every record a
//!    full copy plus two length fields.
//! 2. **Ratio tuning**: `ratio = 1` disables compression entirely;
//!    a huge ratio shrinks the index but makes random access walk long
//!    delta chains. Dictionary workloads usually sit in 4..64.
//!
//! ## References
//!
//! - Knuth, D. E. (1973). "The Art of Computer Programming, vol. 3."
//! - Witten, I. H., Moffat, A., & Bell, T. C. (1994). "Managing
//!   Gigabytes: Compressing and Indexing Documents and Images."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cursor;
pub mod element;
pub mod error;
pub mod front_coded;

pub use cursor::Cursor;
pub use element::Element;
pub use error::Error;
pub use front_coded::FrontCodedList;
