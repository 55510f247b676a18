#[derive(Debug, Default)]
pub struct Lexer {
    buf: String,
    pos: usize,
}

impl Lexer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, text: &str) {
        if self.pos == self.buf.len() {
            self.buf.clear();
            self.pos = 0;
        }
        self.buf.push_str(text);
    }

    // `include` splices file text (plus one space) ahead of the remaining input.
    pub fn prepend(&mut self, text: &str) {
        let mut buf = String::with_capacity(text.len() + 1 + self.buf.len() - self.pos);
        buf.push_str(text);
        buf.push(' ');
        buf.push_str(&self.buf[self.pos..]);
        self.buf = buf;
        self.pos = 0;
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.pos = 0;
    }

    pub fn scan_word(&mut self) -> Option<&str> {
        self.skip_while(char::is_whitespace);
        let start = self.pos;
        self.skip_while(|c| !c.is_whitespace());
        if self.pos > start {
            Some(&self.buf[start..self.pos])
        } else {
            None
        }
    }

    pub fn skip_past(&mut self, delim: char) -> bool {
        self.skip_while(|c| c != delim);
        if self.pos < self.buf.len() {
            self.pos += delim.len_utf8();
            true
        } else {
            false
        }
    }

    pub fn skip_line(&mut self) {
        self.skip_past('\n');
    }

    fn skip_while<P: Fn(char) -> bool>(&mut self, p: P) {
        for (offset, c) in self.buf[self.pos..].char_indices() {
            if !p(c) {
                self.pos += offset;
                return;
            }
        }
        self.pos = self.buf.len();
    }
}
