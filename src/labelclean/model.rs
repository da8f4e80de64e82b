/// An ordered, in-memory set of training lines.
///
/// Each line keeps its own terminator (`"\n"`), except possibly the last
/// line of the source text. Joining the lines back together reproduces the
/// text without inserting separators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    lines: Vec<String>,
}

impl Corpus {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split decoded text into lines.
    ///
    /// `\n`, `\r\n` and a lone `\r` each end a line; the kept terminator is
    /// always `\n`.
    pub fn from_text(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    current.push('\n');
                    lines.push(std::mem::take(&mut current));
                }
                '\n' => {
                    current.push('\n');
                    lines.push(std::mem::take(&mut current));
                }
                other => current.push(other),
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut [String] {
        &mut self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Concatenate the lines in order.
    pub fn to_text(&self) -> String {
        self.lines.concat()
    }
}

impl From<Vec<String>> for Corpus {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}
