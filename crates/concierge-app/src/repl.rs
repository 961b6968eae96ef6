//! Interactive console loop.
//!
//! Reads one line at a time, answers it through the `ChatSession`, and
//! stops on the `exit` sentinel or end of input. Model errors are printed
//! and the loop keeps going.

use concierge_ai::ChatSession;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

pub const GREETING: &str = " Welcome to the Market Connect customer service. How can I assist you today? (type 'exit' to quit) ";
pub const FAREWELL: &str = "Thank you for using our service. Goodbye!";
pub const ERROR_HINT: &str = "Please check your Gemini API key or try again later.";
const PROMPT: &str = "You: ";
const EXIT_SENTINEL: &str = "exit";

/// What the loop does after handling one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Terminate,
}

/// Case-insensitive match against the exit sentinel, ignoring surrounding
/// whitespace.
pub fn is_exit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(EXIT_SENTINEL)
}

/// Console front end over one `ChatSession`.
pub struct SessionLoop<R, W> {
    session: ChatSession,
    input: R,
    output: W,
}

impl<R, W> SessionLoop<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(session: ChatSession, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    /// Greet, then serve turns until the sentinel or end of input.
    pub async fn run(&mut self) -> std::io::Result<()> {
        self.write_line(GREETING).await?;

        let mut buf = Vec::new();
        loop {
            self.output.write_all(PROMPT.as_bytes()).await?;
            self.output.flush().await?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf).await? == 0 {
                debug!("input closed");
                self.write_line("").await?;
                self.write_line(FAREWELL).await?;
                return Ok(());
            }

            // Undecodable bytes become U+FFFD rather than ending the session.
            let line = String::from_utf8_lossy(&buf);
            let input = line.trim_end_matches(['\n', '\r']);
            if self.handle(input).await? == Step::Terminate {
                return Ok(());
            }
        }
    }

    async fn handle(&mut self, input: &str) -> std::io::Result<Step> {
        if is_exit(input) {
            self.write_line(FAREWELL).await?;
            return Ok(Step::Terminate);
        }

        match self.session.respond(input).await {
            Ok(reply) => {
                self.write_line(&format!("AI: {reply}")).await?;
            }
            Err(e) => {
                debug!(error = %e, "turn failed");
                self.write_line(&format!("An error occurred: {e}")).await?;
                self.write_line(ERROR_HINT).await?;
            }
        }
        Ok(Step::Continue)
    }

    async fn write_line(&mut self, text: &str) -> std::io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }
}
