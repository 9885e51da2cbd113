//! A LIFO stack layered on [`DArray`].

use std::fmt;

use crate::{
    alloc::{Allocator, System},
    darray::{DArray, Destructor},
    Error, Result,
};

/// A last-in, first-out stack.
///
/// The stack inherits the capacity policy and destructor semantics of the [`DArray`] it wraps.
///
/// # Examples
///
/// ```
/// # use numkit::*;
/// let mut stack = Stack::with_capacity(4)?;
/// stack.push('(')?;
/// stack.push('[')?;
/// assert_eq!(stack.peek(), Some(&'['));
/// assert_eq!(stack.pop()?, '[');
/// assert_eq!(stack.pop()?, '(');
/// assert_eq!(stack.pop(), Err(Error::EmptyStructure));
/// # Ok::<_, Error>(())
/// ```
pub struct Stack<'a, T, A: Allocator = System> {
    items: DArray<'a, T, A>,
}

impl<T> Stack<'static, T, System> {
    /// Creates an empty stack with room for `capacity` elements, using the [`System`] allocator.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            items: DArray::with_capacity(capacity)?,
        })
    }
}

impl<'a, T, A: Allocator> Stack<'a, T, A> {
    /// Creates an empty stack with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Fails like [`DArray::new_in`].
    pub fn new_in(alloc: &'a A, capacity: usize, destructor: Option<Destructor<T>>) -> Result<Self> {
        Ok(Self {
            items: DArray::new_in(alloc, capacity, destructor)?,
        })
    }

    /// Pushes `value` onto the top of the stack.
    pub fn push(&mut self, value: T) -> Result<()> {
        self.items.push(value)
    }

    /// Removes and returns the topmost element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStructure`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::EmptyStructure)
    }

    /// Returns a reference to the topmost element, or [`None`] if the stack is empty.
    pub fn peek(&self) -> Option<&T> {
        self.items.as_slice().last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.as_mut_slice().last_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Destroys all elements.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the elements from bottom to top.
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }
}

impl<'a, T: fmt::Debug, A: Allocator> fmt::Debug for Stack<'a, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
