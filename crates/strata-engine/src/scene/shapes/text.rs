use crate::buffer::BufferError;
use crate::render::Vertex;
use crate::scene::{Primitive, VertexBuffer};

/// Fixed-cell bitmap font laid out as a grid in a texture atlas.
///
/// Cell `i` covers characters `first..=last` in order, `columns` cells per row.
/// Sizes are in the same units as vertex positions and UVs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlyphGrid {
    pub char_width: f32,
    pub char_height: f32,
    pub first: char,
    pub last: char,
    pub columns: u32,
}

impl GlyphGrid {
    #[inline]
    pub const fn new(char_width: f32, char_height: f32, first: char, last: char, columns: u32) -> Self {
        Self { char_width, char_height, first, last, columns }
    }

    /// Atlas cell for `c` (upper-cased).
    ///
    /// Characters outside the grid are drawn as a space, or as `first` when
    /// the grid has no space.
    pub fn glyph_index(&self, c: char) -> u32 {
        let range = self.first..=self.last;

        let mut c = c.to_ascii_uppercase();
        if !range.contains(&c) {
            log::warn!(
                "character outside range, char={c:?}, min={:?}, max={:?}",
                self.first,
                self.last
            );
            c = if range.contains(&' ') { ' ' } else { self.first };
        }

        u32::from(c).saturating_sub(u32::from(self.first))
    }

    /// Sprite corners for character `c` at position `position` of a run starting at `origin`.
    pub fn glyph_sprite(&self, origin: &Vertex, position: usize, c: char) -> [Vertex; 2] {
        let index = self.glyph_index(c);
        let columns = self.columns.max(1);

        let mut top_left = *origin;
        top_left.x += self.char_width * position as f32;
        top_left.u += self.char_width * (index % columns) as f32;
        top_left.v += self.char_height * (index / columns) as f32;

        let mut bottom_right = top_left;
        bottom_right.x += self.char_width;
        bottom_right.y += self.char_height;
        bottom_right.u += self.char_width;
        bottom_right.v += self.char_height;

        [top_left, bottom_right]
    }

    /// Sprites for every character of `text`, left to right.
    pub fn sprites<'a>(&'a self, origin: Vertex, text: &'a str) -> impl Iterator<Item = [Vertex; 2]> + 'a {
        text.chars()
            .enumerate()
            .map(move |(i, c)| self.glyph_sprite(&origin, i, c))
    }
}

impl VertexBuffer {
    /// Records one sprite per character of `text`, starting at `origin`.
    ///
    /// `origin` supplies layer, color and the atlas UV offset for the whole run.
    pub fn push_text(&mut self, grid: &GlyphGrid, origin: Vertex, text: &str) -> Result<(), BufferError> {
        log::trace!("push text, text={text:?}, origin={{{origin}}}");

        for sprite in grid.sprites(origin, text) {
            self.push(Primitive::Sprite(sprite))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GlyphGrid {
        GlyphGrid::new(8.0, 10.0, ' ', 'Z', 16)
    }

    #[test]
    fn glyph_index_uppercases() {
        let g = grid();
        assert_eq!(g.glyph_index('A'), 'A' as u32 - ' ' as u32);
        assert_eq!(g.glyph_index('a'), g.glyph_index('A'));
    }

    #[test]
    fn out_of_range_falls_back_to_space() {
        assert_eq!(grid().glyph_index('~'), 0);
    }

    #[test]
    fn out_of_range_without_space_falls_back_to_first() {
        let g = GlyphGrid::new(8.0, 8.0, 'A', 'Z', 8);
        assert_eq!(g.glyph_index('1'), 0);
    }

    #[test]
    fn glyph_uv_follows_grid_cell() {
        let g = grid();
        // 'A' is cell 33: column 1, row 2.
        let [tl, br] = g.glyph_sprite(&Vertex::new(100.0, 50.0, 1.0), 3, 'A');
        assert_eq!((tl.x, tl.y), (124.0, 50.0));
        assert_eq!((tl.u, tl.v), (8.0, 20.0));
        assert_eq!((br.x, br.y), (132.0, 60.0));
        assert_eq!((br.u, br.v), (16.0, 30.0));
        assert_eq!(br.z, 1.0);
    }

    #[test]
    fn push_text_emits_one_sprite_per_char() {
        let mut vb = VertexBuffer::new().unwrap();
        vb.push_text(&grid(), Vertex::new(0.0, 0.0, 3.0), "HI!").unwrap();
        assert_eq!(vb.vertex_count(), 3 * 6);
        assert!(vb.vertices().iter().all(|v| v.z == 3.0));
    }
}
