use super::traits::GlyphRenderer;
use super::types::{CharDimensions, CharPattern};

pub struct StandardRenderer {
    char_dims: CharDimensions,
}

impl StandardRenderer {
    pub fn new(char_dims: CharDimensions) -> Self {
        Self { char_dims }
    }
}

impl GlyphRenderer for StandardRenderer {
    fn char_dimensions(&self) -> CharDimensions {
        self.char_dims
    }

    fn snake_segment(&self, is_head: bool) -> CharPattern {
        // Bright block for the head, shaded block for the body.
        let ch = if is_head { '█' } else { '▓' };
        CharPattern::single(ch, self.char_dims)
    }

    fn food(&self) -> CharPattern {
        CharPattern::single('●', self.char_dims)
    }

    fn empty(&self) -> CharPattern {
        CharPattern::empty(self.char_dims)
    }
}
