/// Forward-only reader over the whitespace-separated tokens of a row.
///
/// Reading past the end yields `None` instead of failing, so a truncated row
/// just produces a record with missing fields.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: Vec<&'a str>,
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        TokenCursor {
            tokens: text.split_whitespace().collect(),
            pos: 0,
        }
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).copied()
    }

    /// Take the current token and advance.
    pub fn next_token(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    pub fn next_owned(&mut self) -> Option<String> {
        self.next_token().map(str::to_string)
    }

    pub fn skip(&mut self, count: usize) {
        self.pos = (self.pos + count).min(self.tokens.len());
    }

    /// Take tokens while `keep` holds for them.
    pub fn take_while(&mut self, mut keep: impl FnMut(&str) -> bool) -> Vec<&'a str> {
        let start = self.pos;
        while self.peek().is_some_and(&mut keep) {
            self.pos += 1;
        }
        self.tokens[start..self.pos].to_vec()
    }

    pub fn remaining(&self) -> &[&'a str] {
        &self.tokens[self.pos..]
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}
