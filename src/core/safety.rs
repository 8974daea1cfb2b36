//! Zero-cost indexing macro for the per-pixel hot loops.
//!
//! The alpha-plane walk in the sampler and the raster fills touch every
//! pixel; indices are produced from surface dimensions, so they are valid by
//! construction. In debug builds the macro keeps normal bounds checks, in
//! release builds it uses unchecked access.
//!
//! ```rust
//! use fontdots_engine::fast;
//!
//! let idx = 2;
//!
//! let alpha = vec![0u8, 0, 255, 0];
//! // Read: fast!(slice, [index])
//! let a = *fast!(alpha, [idx]);
//! assert_eq!(a, 255);
//!
//! let mut mask = vec![0u8; 4];
//! // Write: fast!(slice, [index] = value)
//! fast!(mask, [idx] = 255);
//! assert_eq!(mask[idx], 255);
//! ```

/// Bounds-checked in debug, unchecked in release.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}
