use std::io::{self, BufRead};
use std::thread;

use tokio::sync::mpsc;

/// Lines buffered between the reader thread and the session
const LINE_BUFFER: usize = 16;

/// Read lines on a dedicated thread and hand them to async code.
///
/// Blocking reads on stdin cannot be cancelled, so they stay off the runtime;
/// dropping the receiver lets the process exit while the thread still waits.
/// The channel closes at EOF or after the first read error.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::Receiver<io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);

    thread::spawn(move || {
        for line in reader.lines() {
            let failed = line.is_err();
            if tx.blocking_send(line).is_err() {
                tracing::debug!("Line receiver dropped, reader stopping");
                return;
            }
            if failed {
                return;
            }
        }
        tracing::debug!("Reader reached end of input");
    });

    rx
}

/// Stdin as a stream of lines
pub fn stdin_lines() -> mpsc::Receiver<io::Result<String>> {
    spawn_line_reader(io::BufReader::new(io::stdin()))
}
