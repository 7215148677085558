#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub chars_per_cell: CharDimensions,
}

/// How many terminal characters one board cell occupies. Terminal glyphs
/// are roughly twice as tall as they are wide, so the default of 2x1 keeps
/// cells square on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharDimensions {
    pub horizontal: usize,
    pub vertical: usize,
}

impl CharDimensions {
    pub fn new(horizontal: usize, vertical: usize) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// The render surface: a character grid addressed in board cells. A fresh
/// grid starts fully cleared; `fill_cell` stamps one cell's pattern.
pub struct CharGrid {
    grid: Vec<Vec<char>>,
    cell_columns: usize,
    cell_rows: usize,
    char_dims: CharDimensions,
}

impl CharGrid {
    pub fn new(cell_columns: usize, cell_rows: usize, char_dims: CharDimensions) -> Self {
        let physical_width = cell_columns * char_dims.horizontal;
        let physical_height = cell_rows * char_dims.vertical;
        let grid = vec![vec![' '; physical_width]; physical_height];
        Self {
            grid,
            cell_columns,
            cell_rows,
            char_dims,
        }
    }

    /// Stamp a pattern over the cell at grid coordinates `(x, y)`. Writes
    /// falling outside the grid are silently dropped.
    pub fn fill_cell(&mut self, x: usize, y: usize, pattern: &CharPattern) {
        let start_x = x * self.char_dims.horizontal;
        let start_y = y * self.char_dims.vertical;

        for (dy, row) in pattern.chars.iter().enumerate() {
            for (dx, &ch) in row.iter().enumerate() {
                if let Some(grid_row) = self.grid.get_mut(start_y + dy) {
                    if let Some(cell) = grid_row.get_mut(start_x + dx) {
                        *cell = ch;
                    }
                }
            }
        }
    }

    /// Reset every character back to blank.
    pub fn clear(&mut self) {
        for row in &mut self.grid {
            row.fill(' ');
        }
    }

    pub fn into_lines(self) -> Vec<Vec<char>> {
        self.grid
    }

    pub fn physical_width(&self) -> usize {
        self.cell_columns * self.char_dims.horizontal
    }

    pub fn physical_height(&self) -> usize {
        self.cell_rows * self.char_dims.vertical
    }
}

/// The characters drawn for a single board cell.
#[derive(Clone, Debug)]
pub struct CharPattern {
    pub chars: Vec<Vec<char>>,
}

impl CharPattern {
    pub fn new(chars: Vec<Vec<char>>) -> Self {
        Self { chars }
    }

    pub fn single(ch: char, dims: CharDimensions) -> Self {
        let chars = vec![vec![ch; dims.horizontal]; dims.vertical];
        Self { chars }
    }

    pub fn empty(dims: CharDimensions) -> Self {
        Self::single(' ', dims)
    }
}
