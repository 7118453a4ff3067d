/// Heap-allocated f64 region. Owns its storage; the allocation is released
/// exactly once when the buffer drops, on every exit path.
#[derive(Debug)]
pub struct SampleBuffer {
    data: Box<[f64]>,
}

impl SampleBuffer {
    /// Allocate a zeroed buffer of `len` elements
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![0.0; len].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Borrow a window starting at `offset` and running to the end of the
    /// allocation. The view shares storage with the buffer; it is not a copy.
    #[inline]
    pub fn view_mut(&mut self, offset: usize) -> BufferView<'_> {
        BufferView {
            offset,
            data: &mut self.data[offset..],
        }
    }
}

/// Non-owning window into a [`SampleBuffer`]: an address plus a length.
///
/// Carries no release responsibility and cannot outlive the buffer it was
/// taken from. Writes through the view are visible through the owning buffer
/// at `offset + i`.
#[derive(Debug)]
pub struct BufferView<'a> {
    offset: usize,
    data: &'a mut [f64],
}

impl<'a> BufferView<'a> {
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Offset of this view's first element within the owning buffer
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_covers_tail_of_allocation() {
        let mut buffer = SampleBuffer::new(1024);
        let view = buffer.view_mut(256);
        assert_eq!(view.offset(), 256);
        assert_eq!(view.len(), 768);
    }

    #[test]
    fn view_writes_are_visible_through_buffer() {
        let mut buffer = SampleBuffer::new(8);
        {
            let mut view = buffer.view_mut(3);
            view.as_mut_slice()[0] = 42.0;
            view.as_mut_slice()[4] = -7.5;
        }
        assert_eq!(buffer.as_slice()[3], 42.0);
        assert_eq!(buffer.as_slice()[7], -7.5);
        // Elements before the view's offset stay untouched.
        assert!(buffer.as_slice()[..3].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn buffer_writes_are_visible_through_view() {
        let mut buffer = SampleBuffer::new(8);
        buffer.as_mut_slice()[5] = 1.25;
        let view = buffer.view_mut(4);
        assert_eq!(view.as_slice()[1], 1.25);
    }
}
