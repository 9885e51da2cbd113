//! Allocator handles.
//!
//! Every heap-backed structure in this crate ([`DArray`], [`Stack`]) borrows an [`Allocator`] at
//! construction and acquires and releases memory only through it. The borrow ties the lifetime of
//! the structure to the allocator, so an allocator always outlives the structures using it.
//!
//! [`DArray`]: crate::DArray
//! [`Stack`]: crate::Stack

use std::{alloc::Layout, ffi::c_void, fmt, ptr::NonNull};

/// A source of raw memory.
///
/// # Safety
///
/// Implementations must keep the three operations consistent with each other: a block returned by
/// [`Allocator::allocate`] may be passed to [`Allocator::reallocate`] and to
/// [`Allocator::deallocate`], and so may a block returned by [`Allocator::reallocate`]. Returned
/// blocks must be valid for reads and writes of the requested size and aligned to the requested
/// alignment.
pub unsafe trait Allocator {
    /// Allocates a block of memory fitting `layout`.
    ///
    /// `layout` must have a non-zero size. Returns [`None`] if the request cannot be honored.
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Grows or shrinks the block at `ptr` to `new_size` bytes, preserving its contents up to the
    /// smaller of the two sizes.
    ///
    /// On failure, [`None`] is returned and the original block is left untouched.
    ///
    /// # Safety
    ///
    /// `ptr` must denote a live block obtained from this allocator with `old_layout`, and
    /// `new_size` must be non-zero and must not overflow `isize` when rounded up to
    /// `old_layout.align()`.
    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>>;

    /// Releases the block at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must denote a live block obtained from this allocator with `layout`. It must not be
    /// used afterwards.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

unsafe impl<'a, A: Allocator + ?Sized> Allocator for &'a A {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        (**self).allocate(layout)
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        (**self).reallocate(ptr, old_layout, new_size)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        (**self).deallocate(ptr, layout)
    }
}

/// The global Rust allocator ([`std::alloc`]).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct System;

unsafe impl Allocator for System {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        debug_assert_ne!(layout.size(), 0);
        // Safety: callers only pass non-zero-sized layouts.
        NonNull::new(unsafe { std::alloc::alloc(layout) })
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        NonNull::new(std::alloc::realloc(ptr.as_ptr(), old_layout, new_size))
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        std::alloc::dealloc(ptr.as_ptr(), layout)
    }
}

/// Allocates `size` bytes aligned to `align`. Returns null on failure.
pub type AllocFn = unsafe extern "C" fn(context: *mut c_void, size: usize, align: usize) -> *mut c_void;

/// Resizes the block at `ptr` from `old_size` to `new_size` bytes. Returns null on failure, in
/// which case the block at `ptr` must be left untouched.
pub type ReallocFn = unsafe extern "C" fn(
    context: *mut c_void,
    ptr: *mut c_void,
    old_size: usize,
    new_size: usize,
    align: usize,
) -> *mut c_void;

/// Releases the block at `ptr` of `size` bytes.
pub type FreeFn = unsafe extern "C" fn(context: *mut c_void, ptr: *mut c_void, size: usize, align: usize);

/// An allocator made of three C function pointers and an opaque context pointer.
///
/// This is the allocator handle handed in by C callers. The context is passed unchanged as the
/// first argument of every call.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct FnAllocator {
    alloc: AllocFn,
    realloc: ReallocFn,
    free: FreeFn,
    context: *mut c_void,
}

impl FnAllocator {
    /// Creates an allocator handle from its function triple and context.
    ///
    /// # Safety
    ///
    /// The three functions must form a consistent allocator as described on [`Allocator`], and
    /// must be safe to call with `context` for as long as this handle (or any copy of it) is used.
    pub unsafe fn new(alloc: AllocFn, realloc: ReallocFn, free: FreeFn, context: *mut c_void) -> Self {
        Self {
            alloc,
            realloc,
            free,
            context,
        }
    }

    /// Returns the opaque context pointer.
    #[inline]
    pub fn context(&self) -> *mut c_void {
        self.context
    }
}

impl fmt::Debug for FnAllocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAllocator")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

unsafe impl Allocator for FnAllocator {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        // Safety: `FnAllocator::new` requires the functions to be callable with the context.
        let ptr = unsafe { (self.alloc)(self.context, layout.size(), layout.align()) };
        NonNull::new(ptr.cast())
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        let ptr = (self.realloc)(
            self.context,
            ptr.as_ptr().cast(),
            old_layout.size(),
            new_size,
            old_layout.align(),
        );
        NonNull::new(ptr.cast())
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        (self.free)(self.context, ptr.as_ptr().cast(), layout.size(), layout.align())
    }
}
