use core::marker::PhantomPinned;

/// Marks the adopting type as address-sensitive: duplication stays available,
/// relocation of a pinned instance is a compile error.
///
/// `NoMove` is `Clone + Copy` (so adopters may derive duplication) but
/// contains [`PhantomPinned`], making adopters `!Unpin`. Rust cannot forbid
/// moving an ordinary value, so the contract is mediated by [`std::pin`]:
/// construct the value, pin it (`Box::pin`, `pin!`), and from then on its
/// address is stable — safe code cannot obtain `&mut` to relocate it. Use it
/// for types registered somewhere by address while copies (independent
/// instances at new addresses) remain harmless.
///
/// ```
/// use keel_markers::NoMove;
///
/// #[derive(Clone)]
/// struct PinnedBuffer {
///     len: usize,
///     _marker: NoMove,
/// }
///
/// let original = PinnedBuffer { len: 64, _marker: NoMove::new() };
/// let copy = original.clone(); // duplication is fine
/// assert_eq!(copy.len, original.len);
///
/// let pinned = Box::pin(original);
/// assert_eq!(pinned.len, 64); // shared access through the pin is fine
/// ```
///
/// Relocating out of the pin does not compile:
///
/// ```compile_fail
/// use std::pin::Pin;
/// use keel_markers::NoMove;
///
/// #[derive(Clone)]
/// struct PinnedBuffer {
///     len: usize,
///     _marker: NoMove,
/// }
///
/// let mut pinned = Box::pin(PinnedBuffer { len: 64, _marker: NoMove::new() });
/// let inner: &mut PinnedBuffer = Pin::get_mut(pinned.as_mut()); // requires Unpin
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoMove {
    _pinned: PhantomPinned,
}

impl NoMove {
    /// Creates the marker. `const` so adopters can keep const constructors.
    pub const fn new() -> Self {
        NoMove {
            _pinned: PhantomPinned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_is_zero_size() {
        assert_eq!(std::mem::size_of::<NoMove>(), 0);
    }

    #[test]
    fn marker_itself_duplicates() {
        let a = NoMove::new();
        let b = a; // Copy, not a move: `a` stays usable
        assert_eq!(a, b);
    }
}
