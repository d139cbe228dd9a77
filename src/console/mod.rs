//! Interactive console: the prompt handle and a single translation session.

mod session;

pub use session::{
    SessionOutcome,
    run_session,
};
use thiserror::Error;
use tokio::io::{
    AsyncBufRead,
    AsyncBufReadExt,
    AsyncWrite,
    AsyncWriteExt,
    BufReader,
    Stderr,
    Stdin,
    Stdout,
};

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input ended while waiting for '{prompt}'")]
    UnexpectedEof { prompt: String },
}

/// Owned input/output handle for prompting a user.
///
/// Created once and passed to whatever needs to ask questions. Prompts and
/// answers go to `writer`, user-facing warnings to `warnings`. Output is
/// flushed by [`Console::close`]; dropping the handle releases all streams.
#[derive(Debug)]
pub struct Console<R, W, E> {
    /// Line source.
    reader: R,
    /// Prompt and answer sink.
    writer: W,
    /// Warning sink.
    warnings: E,
}

impl Console<BufReader<Stdin>, Stdout, Stderr> {
    /// Console over the process's stdin, stdout and stderr.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), tokio::io::stderr())
    }
}

impl<R, W, E> Console<R, W, E>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
    E: AsyncWrite + Unpin + Send,
{
    #[must_use]
    pub const fn new(reader: R, writer: W, warnings: E) -> Self {
        Self { reader, writer, warnings }
    }

    /// Write `prompt`, then read one line without its terminator.
    ///
    /// # Errors
    /// - [`ConsoleError::UnexpectedEof`] if input ends first
    /// - [`ConsoleError::Io`] on read or write failure
    pub async fn question(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.writer.write_all(prompt.as_bytes()).await?;
        self.writer.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(ConsoleError::UnexpectedEof { prompt: prompt.to_string() });
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }

    /// Write `text` followed by a newline.
    ///
    /// # Errors
    /// Returns [`ConsoleError::Io`] on write failure.
    pub async fn print_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        Ok(())
    }

    /// Write `text` followed by a newline to the warning stream.
    ///
    /// # Errors
    /// Returns [`ConsoleError::Io`] on write failure.
    pub async fn warn_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.warnings.write_all(text.as_bytes()).await?;
        self.warnings.write_all(b"\n").await?;
        self.warnings.flush().await?;
        Ok(())
    }

    /// Flush pending output and give back the underlying streams.
    ///
    /// # Errors
    /// Returns [`ConsoleError::Io`] if a flush fails.
    pub async fn close(mut self) -> Result<(R, W, E), ConsoleError> {
        self.writer.flush().await?;
        self.warnings.flush().await?;
        Ok((self.reader, self.writer, self.warnings))
    }
}
