//! Thread-safe dispensers of coordinates
//!
//! A cursor wraps a [`Traversal`](crate::iterators::Traversal) and hands its
//! coordinates out to any number of workers sharing it by reference. Every
//! coordinate goes to exactly one successful claim; a claim returning `false`
//! means the space is exhausted.
//!
//! - [`Cursor`]: every coordinate of the traversal
//! - [`MaskedCursor`]: only the coordinates where a [`Mask`](crate::structure::Mask) is set
//!
//! ```
//! use nextvox::cursor::Cursor;
//! use nextvox::data::Image;
//! use nextvox::iterators::Loop;
//! use nextvox::structure::layout::Layout;
//!
//! let image = Image::from_fn(Layout::row_major(vec![4, 4]), |i| (i[0] * 4 + i[1]) as f32);
//! let mut traversal = Loop::new();
//! let cursor = Cursor::new(&mut traversal, &image);
//!
//! let (cursor, image) = (&cursor, &image);
//! let total: f32 = std::thread::scope(|s| {
//!     let workers: Vec<_> = (0..3)
//!         .map(|_| {
//!             s.spawn(move || {
//!                 let mut voxel = image.voxel();
//!                 let mut sum = 0.0;
//!                 while cursor.claim(&mut voxel) {
//!                     sum += *voxel.value();
//!                 }
//!                 sum
//!             })
//!         })
//!         .collect();
//!     workers.into_iter().map(|w| w.join().unwrap()).sum()
//! });
//! assert_eq!(total, 120.0);
//! ```

mod gate;
mod masked;
mod unmasked;

#[cfg(test)]
mod tests;

pub use masked::MaskedCursor;
pub use unmasked::Cursor;
