/// The text of an open chat input bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatInput {
    text: String,
    max_len: usize,
    /// the text of the key that opened the bar, it arrives as the next character
    suppress_next_press: Option<char>,
}

impl ChatInput {
    pub fn new(text: &str, max_len: usize, suppress_next_press: Option<char>) -> Self {
        let mut res = Self {
            text: String::new(),
            max_len,
            suppress_next_press,
        };
        res.push_str(text);
        res
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn push_char(&mut self, c: char) {
        if self.suppress_next_press.take() == Some(c) {
            return;
        }
        if !c.is_control() && self.text.chars().count() < self.max_len {
            self.text.push(c);
        }
    }

    pub fn push_str(&mut self, text: &str) {
        let left = self.max_len.saturating_sub(self.text.chars().count());
        self.text
            .extend(text.chars().filter(|c| !c.is_control()).take(left));
    }

    pub fn pop(&mut self) {
        self.suppress_next_press = None;
        self.text.pop();
    }
}

#[cfg(test)]
mod test {
    use super::ChatInput;

    #[test]
    fn opening_key_is_not_typed() {
        let mut input = ChatInput::new("", 10, Some('t'));
        input.push_char('t');
        assert_eq!(input.text(), "");
        input.push_char('t');
        input.push_char('o');
        assert_eq!(input.text(), "to");
    }

    #[test]
    fn other_first_char_is_kept() {
        // e.g. opened by a key without text, like F1
        let mut input = ChatInput::new("", 10, None);
        input.push_char('h');
        input.push_char('i');
        assert_eq!(input.text(), "hi");

        let mut input = ChatInput::new("", 10, Some('t'));
        input.push_char('h');
        input.push_char('t');
        assert_eq!(input.text(), "ht");
    }

    #[test]
    fn respects_max_len_and_control_chars() {
        let mut input = ChatInput::new("abc", 5, None);
        input.push_char('\u{8}');
        input.push_str("defgh");
        assert_eq!(input.text(), "abcde");
        input.push_char('x');
        assert_eq!(input.text(), "abcde");
        input.pop();
        assert_eq!(input.text(), "abcd");
    }
}
