use reflex_core::Display;
use std::io::Write;

const CLEAR_LINE: &str = "\r\x1b[2K";

/// Cabinet display on a terminal: every update redraws the same line.
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write(&mut self, s: &str) {
        if let Err(e) = self.out.write_all(s.as_bytes()).and_then(|_| self.out.flush()) {
            log::error!("display write failed: {}", e);
        }
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn init(&mut self) {
        self.write("c = coin, g = go/stop, r = reset, q = quit (each followed by Enter)\n");
    }

    fn set_text(&mut self, text: &str) {
        self.write(&format!("{CLEAR_LINE}[ {text:^16} ]"));
    }
}

impl<W: Write> Drop for TerminalDisplay<W> {
    fn drop(&mut self) {
        self.write("\n");
    }
}

/// Transcript display for replays: one line per update.
pub struct LineDisplay<W: Write> {
    out: W,
}

impl<W: Write> LineDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Display for LineDisplay<W> {
    fn init(&mut self) {}

    fn set_text(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            log::error!("transcript write failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_redraws_one_line() {
        let mut buf = Vec::new();
        {
            let mut d = TerminalDisplay::new(&mut buf);
            d.set_text("1.57");
        }
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with(CLEAR_LINE));
        assert!(out.contains("1.57"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn transcript_is_line_per_update() {
        let mut d = LineDisplay::new(Vec::new());
        d.init();
        d.set_text("Insert coin");
        d.set_text("Press GO!");
        let out = String::from_utf8(d.into_inner()).unwrap();
        assert_eq!(out, "Insert coin\nPress GO!\n");
    }
}
