/// Marks the adopting type as move-only: relocation stays available,
/// duplication is a compile error.
///
/// `NoClone` implements neither `Clone` nor `Copy`, so any struct embedding
/// it cannot derive them. Use it for unique-resource owners (handles, locks,
/// single-owner buffers) where two live instances sharing one underlying
/// resource would be a bug, but transferring ownership must stay cheap.
///
/// ```
/// use keel_markers::NoClone;
///
/// struct UniqueHandle {
///     id: u32,
///     _marker: NoClone,
/// }
///
/// impl UniqueHandle {
///     fn new(id: u32) -> Self {
///         UniqueHandle { id, _marker: NoClone::new() }
///     }
/// }
///
/// let a = UniqueHandle::new(1);
/// let b = a; // relocation transfers ownership; `a` is gone
/// assert_eq!(b.id, 1);
/// ```
///
/// Duplication does not compile:
///
/// ```compile_fail
/// use keel_markers::NoClone;
///
/// #[derive(Clone)]
/// struct UniqueHandle {
///     id: u32,
///     _marker: NoClone,
/// }
/// ```
#[derive(Debug, Default, PartialEq, Eq, Hash)]
pub struct NoClone {
    _private: (),
}

impl NoClone {
    /// Creates the marker. `const` so adopters can keep const constructors.
    pub const fn new() -> Self {
        NoClone { _private: () }
    }
}
