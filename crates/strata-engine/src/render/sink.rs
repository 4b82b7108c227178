use anyhow::Result;

use super::Vertex;

/// Consumer of a finished frame: a depth-sorted triangle list.
///
/// Implementations upload `vertices` (every 3 consecutive vertices are one
/// triangle) with the layout from [`Vertex::layout`]. The slice is only valid
/// for the duration of the call.
pub trait PrimitiveSink {
    fn submit(&mut self, vertices: &[Vertex]) -> Result<()>;
}

impl<F> PrimitiveSink for F
where
    F: FnMut(&[Vertex]) -> Result<()>,
{
    #[inline]
    fn submit(&mut self, vertices: &[Vertex]) -> Result<()> {
        self(vertices)
    }
}

/// Sink for runs without a window or GPU: keeps a copy of the last frame.
#[derive(Debug, Default)]
pub struct HeadlessSink {
    frames: u64,
    last_frame: Vec<Vertex>,
}

impl HeadlessSink {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames submitted so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn last_frame(&self) -> &[Vertex] {
        &self.last_frame
    }
}

impl PrimitiveSink for HeadlessSink {
    fn submit(&mut self, vertices: &[Vertex]) -> Result<()> {
        anyhow::ensure!(
            vertices.len() % 3 == 0,
            "vertex stream is not a triangle list ({} vertices)",
            vertices.len()
        );

        self.last_frame.clear();
        self.last_frame.extend_from_slice(vertices);
        self.frames += 1;

        log::trace!("headless frame submitted, frame={}, vertices={}", self.frames, vertices.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_sink_records_last_frame() {
        let mut sink = HeadlessSink::new();
        sink.submit(&[Vertex::default(); 6]).unwrap();
        sink.submit(&[Vertex::new(1.0, 2.0, 3.0); 3]).unwrap();

        assert_eq!(sink.frames(), 2);
        assert_eq!(sink.last_frame(), &[Vertex::new(1.0, 2.0, 3.0); 3]);
    }

    #[test]
    fn headless_sink_rejects_partial_triangles() {
        let mut sink = HeadlessSink::new();
        assert!(sink.submit(&[Vertex::default(); 4]).is_err());
        assert_eq!(sink.frames(), 0);
    }

    #[test]
    fn closures_are_sinks() {
        let mut seen = 0;
        let mut sink = |v: &[Vertex]| -> Result<()> {
            seen += v.len();
            Ok(())
        };
        sink.submit(&[Vertex::default(); 3]).unwrap();
        assert_eq!(seen, 3);
    }
}
