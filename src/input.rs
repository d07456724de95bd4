use crossbeam_channel::Sender;
use std::io::BufRead;
use std::thread::{self, JoinHandle};

/// Operator commands typed at the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Coin,
    GoStop,
    Reset,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "c" | "coin" => Some(Command::Coin),
            "g" | "go" | "" => Some(Command::GoStop),
            "r" | "reset" => Some(Command::Reset),
            "q" | "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Reads commands line by line on a background thread.
///
/// The thread ends at end of input or once the receiver is gone.
pub fn spawn_reader<R>(input: R, tx: Sender<Command>) -> std::io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("input".into())
        .spawn(move || {
            for line in input.lines() {
                let line = match line {
                    Ok(l) => l,
                    Err(e) => {
                        log::error!("input read failed: {}", e);
                        break;
                    }
                };
                match Command::parse(&line) {
                    Some(cmd) => {
                        if tx.send(cmd).is_err() {
                            break;
                        }
                    }
                    None => log::warn!("unknown command {:?}", line.trim()),
                }
            }
            log::debug!("input closed");
        })
}
