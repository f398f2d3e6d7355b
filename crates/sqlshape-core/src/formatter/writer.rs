//! Column-tracking output buffer.

/// Accumulates formatted text and keeps track of the cursor column and the
/// current indent level.
#[derive(Debug)]
pub(crate) struct LayoutWriter {
    out: String,
    width: usize,
    level: usize,
    column: usize,
}

impl LayoutWriter {
    pub(crate) const fn new(width: usize) -> Self {
        Self {
            out: String::new(),
            width,
            level: 0,
            column: 0,
        }
    }

    const fn margin(&self) -> usize {
        self.level * self.width
    }

    /// Appends text on the current line.
    pub(crate) fn write(&mut self, text: &str) {
        self.out.push_str(text);
        self.column += text.chars().count();
    }

    fn pad_to(&mut self, column: usize) {
        while self.column < column {
            self.out.push(' ');
            self.column += 1;
        }
    }

    /// Raises the indent level and moves the cursor to the new margin, or
    /// writes a single space if the cursor is already past it.
    pub(crate) fn indent(&mut self) {
        self.level += 1;
        let margin = self.margin();
        if self.column < margin {
            self.pad_to(margin);
        } else {
            self.write(" ");
        }
    }

    pub(crate) fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    /// Breaks the line and pads to the current margin.
    pub(crate) fn newline(&mut self) {
        let trimmed = self.out.trim_end_matches(' ').len();
        self.out.truncate(trimmed);
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
        self.column = 0;
        self.pad_to(self.margin());
    }

    /// Breaks the line only if something was written past the margin.
    pub(crate) fn start_line(&mut self) {
        if self.column > self.margin() {
            self.newline();
        }
    }

    pub(crate) fn finish(self) -> String {
        self.out.trim().to_string()
    }
}
