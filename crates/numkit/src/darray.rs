//! A growable array backed by a user-supplied [`Allocator`].

use std::{
    alloc::Layout,
    fmt::{self, Write},
    marker::PhantomData,
    mem,
    ops::{Index, IndexMut},
    ptr::{self, NonNull},
    slice,
};

use itertools::Itertools;

use crate::{
    alloc::{Allocator, System},
    Error, Result,
};

/// Factor by which the capacity grows when a full array receives another element.
pub const GROWTH_FACTOR: usize = 2;

/// An array shrinks once fewer than `capacity / SHRINK_DIVISOR` elements are left.
pub const SHRINK_DIVISOR: usize = GROWTH_FACTOR * GROWTH_FACTOR;

/// Callback run on an element that leaves a [`DArray`] without being handed to the caller.
pub type Destructor<T> = fn(&mut T);

/// A contiguous growable array of `T`, allocated through `A`.
///
/// # Capacity
///
/// A full array doubles its capacity before accepting another element. After [`DArray::pop`] or
/// [`DArray::remove`] leaves fewer than a quarter of the capacity in use, the capacity is halved,
/// but never below the capacity the array was created with. A reallocation that fails while
/// growing reports [`Error::ReallocationFailure`]. One that fails while shrinking is logged and
/// leaves the capacity as it was. In both cases no element is lost.
///
/// # Destructors
///
/// An optional [`Destructor`] runs exactly once on every element that leaves the array without
/// being returned to the caller: when the array is dropped or [`cleared`], when [`DArray::resize`]
/// truncates it, and on the old value replaced by [`DArray::set`]. It runs before the element's
/// own [`Drop`] impl. [`DArray::pop`] and [`DArray::remove`] move the element out to the caller and
/// do not invoke it.
///
/// [`cleared`]: DArray::clear
pub struct DArray<'a, T, A: Allocator = System> {
    buf: NonNull<T>,
    len: usize,
    cap: usize,
    min_cap: usize,
    alloc: &'a A,
    destructor: Option<Destructor<T>>,
    _p: PhantomData<T>,
}

unsafe impl<'a, T: Send, A: Allocator + Sync> Send for DArray<'a, T, A> {}
unsafe impl<'a, T: Sync, A: Allocator + Sync> Sync for DArray<'a, T, A> {}

impl<T> DArray<'static, T, System> {
    /// Creates an empty array with room for `capacity` elements, using the [`System`] allocator.
    ///
    /// # Errors
    ///
    /// See [`DArray::new_in`].
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::new_in(&System, capacity, None)
    }
}

impl<'a, T, A: Allocator> DArray<'a, T, A> {
    /// Creates an empty array with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSize`] if `T` is zero-sized.
    /// - [`Error::InvalidCapacity`] if `capacity` is 0.
    /// - [`Error::AllocationFailure`] if `alloc` cannot provide the buffer.
    pub fn new_in(alloc: &'a A, capacity: usize, destructor: Option<Destructor<T>>) -> Result<Self> {
        if mem::size_of::<T>() == 0 {
            return Err(Error::InvalidSize);
        }
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }

        let layout = Layout::array::<T>(capacity).map_err(|_| Error::AllocationFailure)?;
        let buf = alloc.allocate(layout).ok_or(Error::AllocationFailure)?;

        Ok(Self {
            buf: buf.cast(),
            len: 0,
            cap: capacity,
            min_cap: capacity,
            alloc,
            destructor,
            _p: PhantomData,
        })
    }

    /// Returns the number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the array can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the size of one element in bytes.
    #[inline]
    pub fn stride(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Returns the allocator backing this array.
    #[inline]
    pub fn allocator(&self) -> &'a A {
        self.alloc
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a reference to the element at `index`, or [`None`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Appends `value` to the end of the array, doubling the capacity first if the array is full.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReallocationFailure`] if the array is full and cannot grow. The array is
    /// left unchanged and `value` is dropped.
    pub fn push(&mut self, value: T) -> Result<()> {
        self.grow_if_full()?;
        // Safety: `len < cap` after growing.
        unsafe { self.buf.as_ptr().add(self.len).write(value) };
        self.len += 1;
        Ok(())
    }

    /// Inserts `value` at `index`, shifting all elements after it to the right.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidIndex`] if `index > len`.
    /// - [`Error::ReallocationFailure`] if the array is full and cannot grow.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(Error::InvalidIndex);
        }
        self.grow_if_full()?;

        // Safety: `len < cap`, so slots `index..=len` are in bounds.
        unsafe {
            let slot = self.buf.as_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes the last element and returns it, or [`None`] if the array is empty.
    ///
    /// The destructor is not invoked on the returned element.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // Safety: slot `len` was initialized and is now outside the live range.
        let value = unsafe { self.buf.as_ptr().add(self.len).read() };
        self.shrink_if_sparse();
        Some(value)
    }

    /// Removes the element at `index`, shifting all elements after it to the left, and returns it.
    ///
    /// Returns [`None`] if `index >= len`. The destructor is not invoked on the returned element.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        // Safety: `index < len`; the tail is moved over the vacated slot.
        let value = unsafe {
            let slot = self.buf.as_ptr().add(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            value
        };
        self.len -= 1;
        self.shrink_if_sparse();
        Some(value)
    }

    /// Replaces the element at `index` with `value`.
    ///
    /// The previous element is passed to the destructor and then dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let destructor = self.destructor;
        let slot = self.get_mut(index).ok_or(Error::InvalidIndex)?;
        if let Some(destructor) = destructor {
            destructor(slot);
        }
        *slot = value;
        Ok(())
    }

    /// Changes the capacity of the array to exactly `new_capacity`.
    ///
    /// If `new_capacity < len`, the elements at `new_capacity..len` are destroyed.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidCapacity`] if `new_capacity` is 0.
    /// - [`Error::ReallocationFailure`] if the allocator cannot provide the new buffer. The array,
    ///   including any elements that would have been truncated, is left unchanged.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        if new_capacity == self.cap {
            return Ok(());
        }
        if new_capacity >= self.len {
            return self.reallocate(new_capacity);
        }

        // Truncating: move the survivors into a fresh buffer first, so that a failed allocation
        // does not lose the truncated elements.
        let layout = Layout::array::<T>(new_capacity).map_err(|_| Error::ReallocationFailure)?;
        let new_buf = self
            .alloc
            .allocate(layout)
            .ok_or(Error::ReallocationFailure)?
            .cast::<T>();

        let old_len = self.len;
        // Safety: `new_capacity < len`, both ranges are in bounds and the buffers are distinct.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_ptr(), new_capacity);
        }
        // Only the truncated tail is still owned by the old buffer.
        self.len = new_capacity;
        for i in new_capacity..old_len {
            // Safety: slots `new_capacity..old_len` are initialized and were not copied.
            unsafe { self.dispose(self.buf.as_ptr().add(i)) };
        }
        self.release_buffer();

        log::trace!(
            "truncated DArray from {} to {} elements (capacity {} -> {})",
            old_len,
            new_capacity,
            self.cap,
            new_capacity,
        );
        self.buf = new_buf;
        self.cap = new_capacity;
        Ok(())
    }

    /// Destroys all elements, keeping the capacity.
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        for i in 0..len {
            // Safety: slots `0..len` were initialized and are no longer reachable.
            unsafe { self.dispose(self.buf.as_ptr().add(i)) };
        }
    }

    /// Compares the raw bytes of the live elements of `self` and `other`.
    ///
    /// This is a shallow comparison: two arrays are equal if they have the same length and their
    /// element storage is byte-identical.
    pub fn equal<B: Allocator>(&self, other: &DArray<'_, T, B>) -> bool
    where
        T: bytemuck::NoUninit,
    {
        let a: &[u8] = bytemuck::cast_slice(self.as_slice());
        let b: &[u8] = bytemuck::cast_slice(other.as_slice());
        a == b
    }

    /// Describes the difference between `expected` and `got`.
    ///
    /// The result names the length and capacity of both arrays and the first index at which they
    /// differ. With `verbose` set, the elements of both arrays are listed as well.
    pub fn debug_diff<B: Allocator>(
        expected: &Self,
        got: &DArray<'_, T, B>,
        verbose: bool,
    ) -> String
    where
        T: fmt::Debug + PartialEq,
    {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = write_diff(&mut out, expected, got, verbose);
        out
    }

    fn write_summary(&self, out: &mut String, label: &str, verbose: bool) -> fmt::Result
    where
        T: fmt::Debug,
    {
        writeln!(
            out,
            "{label}: length {}, capacity {}, stride {}",
            self.len,
            self.cap,
            self.stride(),
        )?;
        if verbose {
            writeln!(out, "  [{:?}]", self.iter().format(", "))?;
        }
        Ok(())
    }

    fn layout(capacity: usize) -> Result<Layout> {
        Layout::array::<T>(capacity).map_err(|_| Error::ReallocationFailure)
    }

    /// Moves the buffer to one of `new_cap` elements. `new_cap` must be at least `len`.
    fn reallocate(&mut self, new_cap: usize) -> Result<()> {
        debug_assert!(new_cap >= self.len && new_cap > 0);
        let old_layout = Self::layout(self.cap)?;
        let new_layout = Self::layout(new_cap)?;
        // Safety: `buf` is live and was allocated by `alloc` with `old_layout`.
        let buf = unsafe {
            self.alloc
                .reallocate(self.buf.cast(), old_layout, new_layout.size())
        }
        .ok_or(Error::ReallocationFailure)?;
        self.buf = buf.cast();
        self.cap = new_cap;
        Ok(())
    }

    fn grow_if_full(&mut self) -> Result<()> {
        if self.len < self.cap {
            return Ok(());
        }

        let new_cap = self
            .cap
            .checked_mul(GROWTH_FACTOR)
            .ok_or(Error::ReallocationFailure)?;
        let old_cap = self.cap;
        self.reallocate(new_cap)?;
        log::trace!("grew DArray from {old_cap} to {new_cap} elements");
        Ok(())
    }

    fn shrink_if_sparse(&mut self) {
        if self.len >= self.cap / SHRINK_DIVISOR {
            return;
        }
        let new_cap = (self.cap / GROWTH_FACTOR).max(self.min_cap);
        if new_cap >= self.cap {
            return;
        }

        let old_cap = self.cap;
        match self.reallocate(new_cap) {
            Ok(()) => log::trace!("shrunk DArray from {old_cap} to {new_cap} elements"),
            Err(e) => log::debug!("failed to shrink DArray to {new_cap} elements ({e}), keeping capacity {old_cap}"),
        }
    }

    /// Runs the destructor on the element at `slot`, then drops it.
    ///
    /// # Safety
    ///
    /// `slot` must point to an initialized element that is not used afterwards.
    unsafe fn dispose(&self, slot: *mut T) {
        if let Some(destructor) = self.destructor {
            destructor(&mut *slot);
        }
        ptr::drop_in_place(slot);
    }

    fn release_buffer(&mut self) {
        if let Ok(layout) = Layout::array::<T>(self.cap) {
            // Safety: `buf` is live and was allocated by `alloc` with this layout.
            unsafe { self.alloc.deallocate(self.buf.cast(), layout) };
        }
    }
}

fn write_diff<T, A, B>(
    out: &mut String,
    expected: &DArray<'_, T, A>,
    got: &DArray<'_, T, B>,
    verbose: bool,
) -> fmt::Result
where
    T: fmt::Debug + PartialEq,
    A: Allocator,
    B: Allocator,
{
    expected.write_summary(out, "Expected", verbose)?;
    got.write_summary(out, "Got", verbose)?;

    let first_diff = expected
        .iter()
        .zip(got)
        .position(|(a, b)| a != b)
        .or_else(|| (expected.len() != got.len()).then(|| expected.len().min(got.len())));
    match first_diff {
        Some(i) => writeln!(out, "First difference at index {i}"),
        None => writeln!(out, "No difference"),
    }
}

impl<'a, T, A: Allocator> Drop for DArray<'a, T, A> {
    fn drop(&mut self) {
        self.clear();
        self.release_buffer();
    }
}

impl<'a, T, A: Allocator> Index<usize> for DArray<'a, T, A> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<'a, T, A: Allocator> IndexMut<usize> for DArray<'a, T, A> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, 'b, T, A: Allocator> IntoIterator for &'b DArray<'a, T, A> {
    type Item = &'b T;
    type IntoIter = slice::Iter<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'b, T, A: Allocator, B: Allocator> PartialEq<DArray<'b, T, B>> for DArray<'a, T, A>
where
    T: PartialEq,
{
    fn eq(&self, other: &DArray<'b, T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, T: fmt::Debug, A: Allocator> fmt::Debug for DArray<'a, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Wraps [`System`], counting calls and failing reallocations on demand.
    #[derive(Default)]
    struct TestAlloc {
        fail_alloc: Cell<bool>,
        fail_realloc: Cell<bool>,
        live: Cell<isize>,
        reallocs: Cell<usize>,
    }

    unsafe impl Allocator for TestAlloc {
        fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
            if self.fail_alloc.get() {
                return None;
            }
            self.live.set(self.live.get() + 1);
            System.allocate(layout)
        }

        unsafe fn reallocate(
            &self,
            ptr: NonNull<u8>,
            old_layout: Layout,
            new_size: usize,
        ) -> Option<NonNull<u8>> {
            if self.fail_realloc.get() {
                return None;
            }
            self.reallocs.set(self.reallocs.get() + 1);
            System.reallocate(ptr, old_layout, new_size)
        }

        unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
            self.live.set(self.live.get() - 1);
            System.deallocate(ptr, layout)
        }
    }

    thread_local! {
        static DESTROYED: Cell<usize> = Cell::new(0);
    }

    fn count_destroyed(_: &mut String) {
        DESTROYED.with(|d| d.set(d.get() + 1));
    }

    fn destroyed() -> usize {
        DESTROYED.with(|d| d.get())
    }

    #[test]
    fn init() {
        let arr = DArray::<i32>::with_capacity(5).unwrap();
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.capacity(), 5);
        assert_eq!(arr.stride(), 4);
        assert!(arr.is_empty());

        assert_eq!(
            DArray::<i32>::with_capacity(0).unwrap_err(),
            Error::InvalidCapacity
        );
        assert_eq!(DArray::<()>::with_capacity(4).unwrap_err(), Error::InvalidSize);

        let alloc = TestAlloc::default();
        alloc.fail_alloc.set(true);
        assert_eq!(
            DArray::<u8, _>::new_in(&alloc, 1, None).unwrap_err(),
            Error::AllocationFailure
        );
    }

    #[test]
    fn push_pop_remove() {
        let mut arr = DArray::<i32>::with_capacity(5).unwrap();
        for i in 0..4 {
            arr.push(i).unwrap();
        }
        assert_eq!(arr.pop(), Some(3));
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.as_slice(), &[0, 1, 2]);
        assert_eq!(arr.remove(0), Some(0));
        assert_eq!(arr.as_slice(), &[1, 2]);
        assert_eq!(arr.remove(2), None);
        assert_eq!(arr.pop(), Some(2));
        assert_eq!(arr.pop(), Some(1));
        assert_eq!(arr.pop(), None);
    }

    #[test]
    fn insert_and_set() {
        let mut arr = DArray::<i32>::with_capacity(2).unwrap();
        arr.insert(0, 3).unwrap();
        arr.insert(0, 1).unwrap();
        arr.insert(1, 2).unwrap();
        arr.insert(3, 4).unwrap();
        assert_eq!(arr.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(arr.insert(5, 0), Err(Error::InvalidIndex));

        arr.set(0, 10).unwrap();
        assert_eq!(arr[0], 10);
        assert_eq!(arr.set(4, 0), Err(Error::InvalidIndex));
        assert_eq!(arr.get(4), None);
        *arr.get_mut(3).unwrap() = 40;
        arr[2] = 30;
        assert_eq!(arr.as_slice(), &[10, 2, 30, 40]);
    }

    #[test]
    fn growth_doubles() {
        let mut arr = DArray::<u16>::with_capacity(3).unwrap();
        let mut caps = Vec::new();
        for i in 0..13 {
            arr.push(i).unwrap();
            caps.push(arr.capacity());
        }
        assert_eq!(caps, [3, 3, 3, 6, 6, 6, 12, 12, 12, 12, 12, 12, 24]);
    }

    #[test]
    fn shrink_halves_down_to_initial_capacity() {
        let mut arr = DArray::<u32>::with_capacity(2).unwrap();
        for i in 0..16 {
            arr.push(i).unwrap();
        }
        assert_eq!(arr.capacity(), 16);

        // 4 elements left: not below 16 / 4 yet.
        while arr.len() > 4 {
            arr.pop();
        }
        assert_eq!(arr.capacity(), 16);
        arr.pop();
        assert_eq!(arr.capacity(), 8);
        arr.pop();
        assert_eq!(arr.capacity(), 8);
        arr.pop();
        assert_eq!(arr.capacity(), 4);
        arr.pop();
        assert_eq!(arr.capacity(), 2);
        arr.pop();
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), 2);
    }

    #[test]
    fn failed_growth_keeps_state() {
        let alloc = TestAlloc::default();
        let mut arr = DArray::new_in(&alloc, 2, None).unwrap();
        arr.push(1u64).unwrap();
        arr.push(2).unwrap();

        alloc.fail_realloc.set(true);
        assert_eq!(arr.push(3), Err(Error::ReallocationFailure));
        assert_eq!(arr.insert(0, 3), Err(Error::ReallocationFailure));
        assert_eq!(arr.as_slice(), &[1, 2]);
        assert_eq!(arr.capacity(), 2);

        alloc.fail_realloc.set(false);
        arr.push(3).unwrap();
        assert_eq!(arr.as_slice(), &[1, 2, 3]);
        assert_eq!(arr.capacity(), 4);
    }

    #[test]
    fn failed_shrink_keeps_capacity() {
        let alloc = TestAlloc::default();
        let mut arr = DArray::new_in(&alloc, 1, None).unwrap();
        for i in 0..8 {
            arr.push(i).unwrap();
        }
        assert_eq!(arr.capacity(), 8);

        alloc.fail_realloc.set(true);
        for _ in 0..7 {
            arr.pop();
        }
        assert_eq!(arr.as_slice(), &[0]);
        assert_eq!(arr.capacity(), 8);

        alloc.fail_realloc.set(false);
        assert_eq!(arr.remove(0), Some(0));
        assert_eq!(arr.capacity(), 4);
    }

    #[test]
    fn resize() {
        let alloc = TestAlloc::default();
        let mut arr = DArray::new_in(&alloc, 2, None).unwrap();
        arr.push('a').unwrap();
        arr.push('b').unwrap();
        arr.push('c').unwrap();

        arr.resize(10).unwrap();
        assert_eq!(arr.capacity(), 10);
        assert_eq!(arr.resize(0), Err(Error::InvalidCapacity));

        alloc.fail_alloc.set(true);
        assert_eq!(arr.resize(1), Err(Error::ReallocationFailure));
        assert_eq!(arr.as_slice(), &['a', 'b', 'c']);
        alloc.fail_alloc.set(false);

        arr.resize(2).unwrap();
        assert_eq!(arr.as_slice(), &['a', 'b']);
        assert_eq!(arr.capacity(), 2);
        drop(arr);
        assert_eq!(alloc.live.get(), 0);
    }

    #[test]
    fn destructor_runs_once_per_discarded_element() {
        DESTROYED.with(|d| d.set(0));
        let alloc = TestAlloc::default();
        {
            let mut arr = DArray::new_in(&alloc, 2, Some(count_destroyed as Destructor<String>)).unwrap();
            for s in ["a", "b", "c", "d", "e"] {
                arr.push(s.to_string()).unwrap();
            }

            // Moved out to the caller: no destructor.
            assert_eq!(arr.pop().as_deref(), Some("e"));
            assert_eq!(arr.remove(0).as_deref(), Some("a"));
            assert_eq!(destroyed(), 0);

            arr.set(0, "B".to_string()).unwrap();
            assert_eq!(destroyed(), 1);

            // ["B", "c", "d"] truncated to ["B"].
            arr.resize(1).unwrap();
            assert_eq!(destroyed(), 3);
            assert_eq!(arr.as_slice(), &["B".to_string()]);
        }
        assert_eq!(destroyed(), 4);
        assert_eq!(alloc.live.get(), 0);
    }

    #[test]
    fn clear_keeps_capacity() {
        DESTROYED.with(|d| d.set(0));
        let mut arr = DArray::new_in(&System, 4, Some(count_destroyed as Destructor<String>)).unwrap();
        arr.push("x".to_string()).unwrap();
        arr.push("y".to_string()).unwrap();
        arr.clear();
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), 4);
        assert_eq!(destroyed(), 2);
    }

    #[test]
    fn equality() {
        let mut a = DArray::<u32>::with_capacity(2).unwrap();
        let mut b = DArray::<u32>::with_capacity(8).unwrap();
        for i in 0..3 {
            a.push(i).unwrap();
            b.push(i).unwrap();
        }
        assert!(a.equal(&b));
        assert_eq!(a, b);

        b.set(2, 7).unwrap();
        assert!(!a.equal(&b));
        assert_ne!(a, b);

        b.pop();
        assert!(!a.equal(&b));
    }

    #[test]
    fn debug_output() {
        let mut a = DArray::<i32>::with_capacity(4).unwrap();
        let mut b = DArray::<i32>::with_capacity(4).unwrap();
        for i in [1, 2, 3] {
            a.push(i).unwrap();
            b.push(i).unwrap();
        }
        assert_eq!(format!("{:?}", a), "[1, 2, 3]");
        assert_eq!(
            DArray::debug_diff(&a, &b, false),
            "Expected: length 3, capacity 4, stride 4\n\
             Got: length 3, capacity 4, stride 4\n\
             No difference\n"
        );

        b.set(1, 5).unwrap();
        assert_eq!(
            DArray::debug_diff(&a, &b, true),
            "Expected: length 3, capacity 4, stride 4\n  [1, 2, 3]\n\
             Got: length 3, capacity 4, stride 4\n  [1, 5, 3]\n\
             First difference at index 1\n"
        );

        b.set(1, 2).unwrap();
        b.pop();
        assert!(DArray::debug_diff(&a, &b, false).ends_with("First difference at index 2\n"));
    }
}
