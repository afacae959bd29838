/*!

Hands the coordinates of an n-dimensional iteration space out to a pool of workers, each
coordinate to exactly one of them.

A [`Traversal`](iterators::Traversal) describes which axes are walked and in which order:
[`Loop`](iterators::Loop) walks a contiguous range of axes, lowest axis fastest, and
[`LoopInOrder`](iterators::LoopInOrder) follows an explicit order, typically the memory
order of a [`Layout`](structure::layout::Layout).

A [`Cursor`](cursor::Cursor) wraps a traversal behind a lock. Workers share it by
reference and repeatedly claim the next coordinate, which is written into up to
[`MAX_TARGETS`](iterators::MAX_TARGETS) positioned datasets at once. A
[`MaskedCursor`](cursor::MaskedCursor) only hands out coordinates where a
[`Mask`](structure::Mask) is set.

Datasets only need to implement [`Extent`](structure::Extent) and
[`Position`](structure::Position); [`data`] carries dense images, bit masks and a bare
index counter to drive cursors with.

*/

/// Shapes, positions, masks and storage layouts
pub mod structure;

/// Reference datasets
pub mod data;

/// Traversal descriptors
pub mod iterators;

/// Thread-safe coordinate dispensers
pub mod cursor;
