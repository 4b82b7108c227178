use anyhow::{Context, Result};

use crate::buffer::BufferError;
use crate::scene::{BatchConfig, PrimitiveKind, VertexBuffer};

use super::PrimitiveSink;

/// Frame cycle of one renderer: record primitives, then flush them to a sink.
///
/// Each renderer owns its batch; nothing here is global, so independent
/// batches can coexist (tests, offscreen targets).
///
/// ```ignore
/// batch.begin_frame();
/// batch.buffer_mut().push_point(v)?;
/// batch.flush(&mut sink)?;
/// ```
#[derive(Debug)]
pub struct PrimitiveBatch {
    buffer: VertexBuffer,
    frame_index: u64,
}

impl PrimitiveBatch {
    pub fn new(config: BatchConfig) -> Result<Self, BufferError> {
        Ok(Self {
            buffer: VertexBuffer::with_config(config)?,
            frame_index: 0,
        })
    }

    /// Drops anything recorded since the last flush.
    #[inline]
    pub fn begin_frame(&mut self) {
        self.buffer.reset();
    }

    #[inline]
    pub fn buffer(&self) -> &VertexBuffer {
        &self.buffer
    }

    #[inline]
    pub fn buffer_mut(&mut self) -> &mut VertexBuffer {
        &mut self.buffer
    }

    /// Frames flushed so far.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Sorts recorded primitives back-to-front, submits them and resets.
    ///
    /// A failed sort is logged and the unsorted stream is submitted anyway.
    /// If the sink fails, the recorded primitives are kept.
    /// Returns the number of vertices submitted.
    pub fn flush<S: PrimitiveSink + ?Sized>(&mut self, sink: &mut S) -> Result<usize> {
        let vertex_count = self.buffer.vertex_count();
        log::debug!("flushing primitives, frame={}, vertex_count={vertex_count}", self.frame_index);

        match self.buffer.sort(PrimitiveKind::Triangles) {
            Ok(stats) if stats.skipped > 0 => {
                log::warn!("depth sort skipped primitives, skipped={}", stats.skipped);
            }
            Ok(_) => {}
            Err(err) => log::error!("depth sort failed, submitting unsorted, err={err}"),
        }

        sink.submit(self.buffer.vertices())
            .with_context(|| format!("submitting {vertex_count} vertices for frame {}", self.frame_index))?;

        self.buffer.reset();
        self.frame_index = self.frame_index.wrapping_add(1);

        Ok(vertex_count)
    }

    /// Frees vertex and sort storage at shutdown.
    pub fn destroy(&mut self) {
        self.buffer.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::render::{HeadlessSink, Vertex};
    use crate::scene::GlyphGrid;

    fn batch() -> PrimitiveBatch {
        PrimitiveBatch::new(BatchConfig::default()).unwrap()
    }

    #[test]
    fn flush_submits_sorted_and_resets() {
        let mut batch = batch();
        let mut sink = HeadlessSink::new();

        batch.begin_frame();
        let vb = batch.buffer_mut();
        vb.push_point(Vertex::new(0.0, 0.0, 0.0)).unwrap();
        vb.push_line(Vertex::new(0.0, 0.0, 5.0), Vertex::new(0.0, 9.0, 5.0)).unwrap();
        vb.push_triangle([Vertex::new(1.0, 1.0, 2.0); 3]).unwrap();

        let submitted = batch.flush(&mut sink).unwrap();
        assert_eq!(submitted, 15);
        assert_eq!(sink.frames(), 1);
        assert_eq!(batch.frame_index(), 1);
        assert!(batch.buffer().is_empty());

        let depths: Vec<_> = sink.last_frame().iter().map(|v| v.z).collect();
        let mut expected = vec![5.0f32; 6];
        expected.extend([2.0; 3]);
        expected.extend([0.0; 6]);
        assert_eq!(depths, expected);
    }

    #[test]
    fn failed_submit_keeps_primitives() {
        let mut batch = batch();
        batch.buffer_mut().push_point(Vertex::default()).unwrap();

        let mut failing = |_: &[Vertex]| -> Result<()> { anyhow::bail!("device lost") };
        let err = batch.flush(&mut failing).unwrap_err();

        assert!(format!("{err:#}").contains("device lost"));
        assert_eq!(batch.buffer().vertex_count(), 6);
        assert_eq!(batch.frame_index(), 0);
    }

    #[test]
    fn destroy_after_flush_frees_storage() {
        let mut batch = batch();
        let mut sink = HeadlessSink::new();
        batch.buffer_mut().push_quad([Vertex::new(0.0, 0.0, 1.0); 6]).unwrap();
        batch.flush(&mut sink).unwrap();

        batch.destroy();
        assert_eq!(batch.buffer().capacity(), 0);
        assert!(batch.buffer().is_empty());
    }

    #[test]
    fn empty_frame_flushes() {
        let mut batch = batch();
        let mut sink = HeadlessSink::new();
        assert_eq!(batch.flush(&mut sink).unwrap(), 0);
        assert_eq!(sink.frames(), 1);
    }

    #[test]
    fn text_over_background() {
        let mut batch = batch();
        let mut sink = HeadlessSink::new();
        let grid = GlyphGrid::new(8.0, 8.0, ' ', 'Z', 16);

        let vb = batch.buffer_mut();
        vb.push_text(&grid, Vertex::new(0.0, 0.0, 1.0).with_color(Color::white()), "OK").unwrap();
        vb.push_sprite(
            Vertex::new(0.0, 0.0, 10.0).with_color(Color::dark_gray()),
            Vertex::new(64.0, 16.0, 10.0),
        )
        .unwrap();
        batch.flush(&mut sink).unwrap();

        let frame = sink.last_frame();
        assert_eq!(frame.len(), 18);
        assert!(frame[..6].iter().all(|v| v.color() == Color::dark_gray()));
        assert_eq!(frame[6].x, 0.0);
        assert_eq!(frame[12].x, 8.0);
    }
}
