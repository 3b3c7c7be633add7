use core::marker::PhantomPinned;

/// Marks the adopting type as singular: duplication is a compile error and a
/// pinned instance cannot be relocated.
///
/// Combines the restrictions of [`crate::NoClone`] and [`crate::NoMove`]:
/// no `Clone`/`Copy` impl, plus [`PhantomPinned`] inside. Use it for types
/// with process-wide identity (singletons, registries) that live behind a
/// fixed accessor and are only ever touched in place.
///
/// ```
/// use std::sync::OnceLock;
/// use keel_markers::NoCloneNoMove;
///
/// struct Registry {
///     entries: u32,
///     _marker: NoCloneNoMove,
/// }
///
/// static REGISTRY: OnceLock<Registry> = OnceLock::new();
///
/// fn registry() -> &'static Registry {
///     REGISTRY.get_or_init(|| Registry { entries: 0, _marker: NoCloneNoMove::new() })
/// }
///
/// // The accessor always yields the same instance.
/// assert!(std::ptr::eq(registry(), registry()));
/// ```
///
/// Duplication does not compile:
///
/// ```compile_fail
/// use keel_markers::NoCloneNoMove;
///
/// #[derive(Clone)]
/// struct Registry {
///     entries: u32,
///     _marker: NoCloneNoMove,
/// }
/// ```
///
/// Neither does relocating a pinned instance:
///
/// ```compile_fail
/// use std::pin::Pin;
/// use keel_markers::NoCloneNoMove;
///
/// struct Registry {
///     entries: u32,
///     _marker: NoCloneNoMove,
/// }
///
/// let mut pinned = Box::pin(Registry { entries: 0, _marker: NoCloneNoMove::new() });
/// let inner: &mut Registry = Pin::get_mut(pinned.as_mut()); // requires Unpin
/// ```
#[derive(Debug, Default, PartialEq, Eq, Hash)]
pub struct NoCloneNoMove {
    _pinned: PhantomPinned,
}

impl NoCloneNoMove {
    /// Creates the marker. `const` so adopters can keep const constructors.
    pub const fn new() -> Self {
        NoCloneNoMove {
            _pinned: PhantomPinned,
        }
    }
}
