use std::fmt;
use std::fs;
use std::io;
use std::rc::Rc;

pub struct SourceImpl {
    pub name: String,
    pub content: String,
}

pub type Source = Rc<SourceImpl>;

pub fn load(file: &str) -> io::Result<Source> {
    let content = fs::read_to_string(file)?;
    Ok(Rc::new(SourceImpl {
        name: String::from(file),
        content,
    }))
}

pub fn text(text: &str) -> Source {
    Rc::new(SourceImpl {
        name: String::from("<text>"),
        content: String::from(text),
    })
}

impl SourceImpl {
    pub fn length(&self) -> usize {
        self.content.len()
    }

    pub fn character(&self, index: usize) -> Option<char> {
        self.content.get(index..).and_then(|rest| rest.chars().next())
    }

    pub fn lexeme(&self, index: usize, length: usize) -> &str {
        &self.content[index..(index + length)]
    }
}

#[derive(Clone)]
pub struct Span {
    pub source: Source,
    pub index: usize,
    pub length: usize,
    pub line: usize,
}

impl Span {
    pub fn new(source: &Source, index: usize, length: usize, line: usize) -> Self {
        Span {
            source: Rc::clone(source),
            index,
            length,
            line,
        }
    }

    pub fn lexeme(&self) -> &str {
        self.source.lexeme(self.index, self.length)
    }

    /// Returns the full line containing the span along with the span's
    /// offset into that line.
    pub fn entire_line(&self) -> (&str, usize) {
        let content = &self.source.content;
        let start = content[..self.index]
            .rfind('\n')
            .map(|newline| newline + 1)
            .unwrap_or(0);
        let end = content[self.index..]
            .find('\n')
            .map(|newline| self.index + newline)
            .unwrap_or(content.len());
        (&content[start..end], self.index - start)
    }

    pub fn location(&self) -> String {
        let (_, offset) = self.entire_line();
        format!("{}:{}:{}", self.source.name, self.line, offset + 1)
    }
}

// Spans compare by position only so that spans over different buffers of the
// same text are interchangeable.
impl PartialEq for Span {
    fn eq(&self, other: &Span) -> bool {
        self.index == other.index && self.length == other.length && self.line == other.line
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Span({}, {}, line {})", self.index, self.length, self.line)
    }
}

pub trait ContainsSpan {
    fn span(&self) -> &Span;
}

impl ContainsSpan for Span {
    fn span(&self) -> &Span {
        self
    }
}
