//! The buffer-ownership primitive backing [`EagerVec`](crate::EagerVec).

use alloc::boxed::Box;
use core::fmt;

/// Exclusive owner of one heap-allocated array of default-constructed
/// elements.
///
/// A `HeapArray` owns zero or one contiguous block. It tracks only the
/// physical block and has no notion of a logical length; that bookkeeping
/// belongs to [`EagerVec`](crate::EagerVec). Every slot of an owned block
/// holds a live `T` from the moment the block is created until the owner
/// drops it, which is what lets the layer above mutate the block through
/// plain slices.
///
/// The type is move-only: it does not implement [`Clone`], so a given block
/// can never have two owners. Transferring a `HeapArray` by value moves the
/// block with it, and assigning over an owner frees the block it previously
/// held.
///
/// # Examples
///
/// ```
/// # use eagervec::HeapArray;
/// let mut arr: HeapArray<u32> = HeapArray::new(4);
/// assert_eq!(arr.len(), 4);
/// assert_eq!(arr.as_slice(), [0, 0, 0, 0]);
///
/// arr.as_mut_slice()[2] = 7;
///
/// // Moving the array moves the block; the source is statically dead.
/// let arr2 = arr;
/// assert_eq!(arr2.as_slice(), [0, 0, 7, 0]);
/// ```
pub struct HeapArray<T> {
    /// `None` means "owns nothing". Never `Some` of an empty slice, so the
    /// two states cannot drift apart.
    block: Option<Box<[T]>>,
}

impl<T> HeapArray<T> {
    /// Creates an owner that owns nothing.
    ///
    /// No allocation is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eagervec::HeapArray;
    /// let arr: HeapArray<String> = HeapArray::empty();
    /// assert!(arr.is_empty());
    /// assert!(arr.as_ptr().is_null());
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self { block: None }
    }

    /// Allocates a block of `len` default-constructed elements.
    ///
    /// A request for zero elements allocates nothing and yields the empty
    /// owner. Allocation failure aborts through the global allocator's
    /// error path; it is never reported to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eagervec::HeapArray;
    /// let arr: HeapArray<i64> = HeapArray::new(3);
    /// assert_eq!(arr.as_slice(), [0, 0, 0]);
    ///
    /// let none: HeapArray<i64> = HeapArray::new(0);
    /// assert!(none.is_empty());
    /// ```
    pub fn new(len: usize) -> Self
    where
        T: Default,
    {
        if len == 0 {
            return Self::empty();
        }
        Self {
            block: Some((0..len).map(|_| T::default()).collect()),
        }
    }

    /// Number of elements in the owned block, `0` when owning nothing.
    #[inline]
    pub fn len(&self) -> usize {
        match &self.block {
            Some(block) => block.len(),
            None => 0,
        }
    }

    /// Returns `true` if no block is owned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.block.is_none()
    }

    /// Raw pointer to the first element, or null when owning nothing.
    ///
    /// The pointer stays valid until the owner is moved from, reassigned,
    /// or dropped.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        match &self.block {
            Some(block) => block.as_ptr(),
            None => core::ptr::null(),
        }
    }

    /// Raw mutable pointer to the first element, or null when owning
    /// nothing.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        match &mut self.block {
            Some(block) => block.as_mut_ptr(),
            None => core::ptr::null_mut(),
        }
    }

    /// The whole block as a slice; empty when owning nothing.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match &self.block {
            Some(block) => block,
            None => &[],
        }
    }

    /// The whole block as a mutable slice; empty when owning nothing.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.block {
            Some(block) => block,
            None => &mut [],
        }
    }

    /// Reference to the element at `index` with no bounds check.
    ///
    /// # Safety
    /// `index < self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len());
        // SAFETY: caller guarantees index < len.
        unsafe { self.as_slice().get_unchecked(index) }
    }

    /// Mutable reference to the element at `index` with no bounds check.
    ///
    /// # Safety
    /// `index < self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len());
        // SAFETY: caller guarantees index < len.
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }

    /// Hands the block to the caller and leaves this owner empty.
    ///
    /// The returned [`Box`] now carries the sole responsibility for freeing
    /// the block. Returns [`None`] if nothing was owned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eagervec::HeapArray;
    /// let mut arr: HeapArray<u8> = HeapArray::new(2);
    ///
    /// let block = arr.release().unwrap();
    /// assert_eq!(&*block, [0, 0]);
    /// assert!(arr.is_empty());
    /// assert!(arr.release().is_none());
    /// ```
    #[inline]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        self.block.take()
    }
}

/// Adopts an existing block. An empty box normalizes to the empty owner.
impl<T> From<Box<[T]>> for HeapArray<T> {
    #[inline]
    fn from(block: Box<[T]>) -> Self {
        if block.is_empty() {
            Self::empty()
        } else {
            Self { block: Some(block) }
        }
    }
}

impl<T> Default for HeapArray<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for HeapArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::HeapArray;
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use core::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn new_default_constructs_every_slot() {
        let arr: HeapArray<String> = HeapArray::new(3);
        assert_eq!(arr.len(), 3);
        assert!(arr.as_slice().iter().all(String::is_empty));
    }

    #[test]
    fn zero_len_owns_nothing() {
        let arr: HeapArray<u32> = HeapArray::new(0);
        assert!(arr.is_empty());
        assert!(arr.as_ptr().is_null());
        assert!(arr.as_slice().is_empty());
    }

    #[test]
    fn release_empties_the_owner() {
        let mut arr: HeapArray<u32> = HeapArray::new(2);
        arr.as_mut_slice()[0] = 9;

        let block = arr.release().expect("block was owned");
        assert_eq!(&*block, [9, 0]);
        assert!(arr.is_empty());
        assert!(arr.release().is_none());
    }

    #[test]
    fn from_box_adopts_and_normalizes() {
        let arr = HeapArray::from(Box::from([1, 2, 3]));
        assert_eq!(arr.as_slice(), [1, 2, 3]);

        let empty: HeapArray<i32> = HeapArray::from(Box::from([]));
        assert!(empty.is_empty());
        assert!(empty.as_ptr().is_null());
    }

    #[test]
    fn reassignment_frees_the_previous_block() {
        static DROPS: AtomicUsize = AtomicUsize::new(0);

        #[derive(Default)]
        struct Counted;
        impl Drop for Counted {
            fn drop(&mut self) {
                DROPS.fetch_add(1, Ordering::Relaxed);
            }
        }

        let mut arr: HeapArray<Counted> = HeapArray::new(4);
        assert_eq!(DROPS.load(Ordering::Relaxed), 0);

        arr = HeapArray::new(2);
        assert_eq!(DROPS.load(Ordering::Relaxed), 4);

        drop(arr);
        assert_eq!(DROPS.load(Ordering::Relaxed), 6);
    }

    #[test]
    fn debug_formats_as_slice() {
        let arr: HeapArray<u8> = HeapArray::new(2);
        assert_eq!(alloc::format!("{arr:?}"), "[0, 0]".to_string());
    }
}
