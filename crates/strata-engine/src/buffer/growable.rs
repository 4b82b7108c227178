use bytemuck::{Pod, Zeroable};

use super::BufferError;

/// Capacity reached by the first growth of an empty buffer.
pub const DEFAULT_START_CAPACITY: usize = 32;

/// Contiguous growable array with explicit `count` / `capacity` bookkeeping.
///
/// Unlike `Vec`, the logical length (`count`) and the allocated element slots
/// (`capacity`) are managed separately and exposed to callers:
/// - `count <= capacity` holds after every operation
/// - growth is geometric (start capacity, then doubling) and never shrinks on its own
/// - allocation failure destroys the buffer and is reported, never aborts
///
/// Elements are plain-old-data so spare slots can be zero-filled and the live
/// range can be viewed as bytes.
#[derive(Debug, Clone)]
pub struct GrowableBuffer<T: Pod> {
    /// Allocated slots. `storage.len()` is the capacity; slots past `count` are spare.
    storage: Vec<T>,
    count: usize,
    start_capacity: usize,
}

impl<T: Pod> GrowableBuffer<T> {
    /// Creates an empty buffer using [`DEFAULT_START_CAPACITY`].
    pub fn new() -> Result<Self, BufferError> {
        Self::with_start_capacity(DEFAULT_START_CAPACITY)
    }

    /// Creates an empty buffer whose first growth allocates at least `start_capacity` slots.
    ///
    /// Fails when `T` is zero-sized.
    pub fn with_start_capacity(start_capacity: usize) -> Result<Self, BufferError> {
        let stride = std::mem::size_of::<T>();
        log::trace!("creating buffer, stride={stride}, start_capacity={start_capacity}");

        if stride == 0 {
            log::error!("invalid stride, stride={stride}");
            return Err(BufferError::InvalidStride);
        }

        Ok(Self {
            storage: Vec::new(),
            count: 0,
            start_capacity: start_capacity.max(1),
        })
    }

    /// Element size in bytes.
    #[inline]
    pub fn stride(&self) -> usize {
        std::mem::size_of::<T>()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Live elements (`0..count`).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.storage[..self.count]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage[..self.count]
    }

    /// Returns element `index`, or `None` if it lies past `count`.
    ///
    /// Reading past `count` is logged as a warning (callers may peek after a shrink);
    /// reading past `capacity` is logged as an error.
    pub fn get(&self, index: usize) -> Option<&T> {
        if self.check_index(index) {
            self.storage.get(index)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if self.check_index(index) {
            self.storage.get_mut(index)
        } else {
            None
        }
    }

    fn check_index(&self, index: usize) -> bool {
        if index >= self.capacity() {
            log::error!("index out of bounds, index={index}, capacity={}", self.capacity());
            false
        } else if index >= self.count {
            log::warn!("index bigger than count, index={index}, count={}", self.count);
            false
        } else {
            true
        }
    }

    /// Reallocates to hold exactly `capacity` elements.
    ///
    /// Elements past the new capacity are dropped and `count` is truncated to fit.
    /// On allocation failure the buffer is destroyed.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), BufferError> {
        let stride = self.stride();
        log::trace!("set_capacity, new={capacity}, current={}", self.capacity());

        let fits = capacity
            .checked_mul(stride)
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        let additional = capacity.saturating_sub(self.storage.len());

        if !fits || self.storage.try_reserve_exact(additional).is_err() {
            log::error!("allocation failed, capacity={capacity}, stride={stride}");
            self.destroy();
            return Err(BufferError::Allocation { requested: capacity, stride });
        }

        self.storage.resize(capacity, T::zeroed());
        if self.storage.capacity() > capacity {
            self.storage.shrink_to_fit();
        }

        self.count = self.count.min(capacity);
        Ok(())
    }

    /// Grows capacity to at least `min_capacity`. Never shrinks.
    ///
    /// Growth starts at the start capacity and doubles until it fits.
    pub fn ensure_capacity(&mut self, min_capacity: usize) -> Result<(), BufferError> {
        if min_capacity <= self.capacity() {
            return Ok(());
        }

        let mut capacity = self.capacity().max(self.start_capacity);
        while capacity < min_capacity {
            capacity = capacity.saturating_mul(2);
        }

        log::trace!("growing buffer, min={min_capacity}, from={}, to={capacity}", self.capacity());
        self.set_capacity(capacity)
    }

    /// Sets the logical length, growing capacity as needed.
    ///
    /// Newly exposed elements hold whatever the spare slots contained.
    pub fn set_count(&mut self, count: usize) -> Result<(), BufferError> {
        log::trace!("set_count, new={count}, current={}", self.count);

        self.ensure_capacity(count)?;
        self.count = count;
        Ok(())
    }

    /// Sets `count` to zero. Capacity is kept for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Appends `items` to the tail.
    pub fn push(&mut self, items: &[T]) -> Result<(), BufferError> {
        log::trace!("push, count={}, pushed={}", self.count, items.len());

        let start = self.count;
        let end = start.saturating_add(items.len());
        self.set_count(end)?;

        self.storage[start..end].copy_from_slice(items);
        Ok(())
    }

    #[inline]
    pub fn push_one(&mut self, item: T) -> Result<(), BufferError> {
        self.push(std::slice::from_ref(&item))
    }

    /// Frees storage and zeroes the bookkeeping. Safe to call repeatedly.
    ///
    /// The buffer stays usable and regrows from empty.
    pub fn destroy(&mut self) {
        log::trace!("destroy, capacity={}", self.capacity());

        self.storage = Vec::new();
        self.count = 0;
    }
}
