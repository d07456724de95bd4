/// Single-line text sink the controller writes to.
pub trait Display {
    /// One-time hardware/terminal setup. The controller calls it at most once.
    fn init(&mut self);
    fn set_text(&mut self, text: &str);
}

impl<D: Display + ?Sized> Display for &mut D {
    fn init(&mut self) {
        (**self).init()
    }
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text)
    }
}

impl<D: Display + ?Sized> Display for Box<D> {
    fn init(&mut self) {
        (**self).init()
    }
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text)
    }
}

/// Display that keeps every text it was given, in order.
#[derive(Debug, Clone, Default)]
pub struct MemoryDisplay {
    pub init_calls: usize,
    pub history: Vec<String>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently shown, if anything was ever written.
    pub fn text(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Display for MemoryDisplay {
    fn init(&mut self) {
        self.init_calls += 1;
    }

    fn set_text(&mut self, text: &str) {
        self.history.push(text.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_display_tracks_last_text() {
        let mut d = MemoryDisplay::new();
        assert_eq!(d.text(), None);
        d.set_text("Insert coin");
        d.set_text("Press GO!");
        assert_eq!(d.text(), Some("Press GO!"));
        assert_eq!(d.history.len(), 2);
    }

    #[test]
    fn forwards_through_mut_ref() {
        let mut d = MemoryDisplay::new();
        {
            let mut r = &mut d;
            Display::init(&mut r);
            r.set_text("Wait...");
        }
        assert_eq!(d.init_calls, 1);
        assert_eq!(d.text(), Some("Wait..."));
    }
}
