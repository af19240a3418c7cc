use std::future::Future;
use std::io;
use std::sync::Arc;

use glossa_core::state::AppState;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

use crate::render::{OutputFormat, render_lookup, render_suggestions};

pub const PROMPT: &str = "Enter a word: ";

/// Answers queries against the shared state and writes rendered results
pub struct Session {
    state: Arc<AppState>,
    format: OutputFormat,
    all_suggestions: bool,
}

impl Session {
    pub fn new(state: Arc<AppState>, format: OutputFormat, all_suggestions: bool) -> Self {
        Self {
            state,
            format,
            all_suggestions,
        }
    }

    /// Rendered answer for one query
    pub async fn answer(&self, word: &str) -> anyhow::Result<String> {
        if self.all_suggestions {
            let suggestions = self.state.suggestions(word).await?;
            render_suggestions(word, &suggestions, self.format)
        } else {
            let result = self.state.lookup(word).await?;
            render_lookup(word, &result, self.format)
        }
    }

    /// Answer each word in order
    pub async fn run_words<W>(&self, words: &[String], out: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        for word in words {
            let answer = self.answer(word).await?;
            write_line(out, &answer).await?;
        }
        out.flush().await?;
        Ok(())
    }

    /// Answer one query per input line until the line source closes
    pub async fn run_interactive<W>(
        &self,
        lines: &mut mpsc::Receiver<io::Result<String>>,
        out: &mut W,
        show_prompt: bool,
    ) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        loop {
            if show_prompt {
                out.write_all(PROMPT.as_bytes()).await?;
                out.flush().await?;
            }

            let Some(line) = lines.recv().await else {
                tracing::debug!("Input closed");
                break;
            };

            let answer = self.answer(&line?).await?;
            write_line(out, &answer).await?;
        }
        out.flush().await?;
        Ok(())
    }

    /// Interactive prompt, stopped early when `shutdown` resolves
    pub async fn run_until<W, F>(
        &self,
        mut lines: mpsc::Receiver<io::Result<String>>,
        out: &mut W,
        show_prompt: bool,
        shutdown: F,
    ) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
        F: Future<Output = ()>,
    {
        tokio::select! {
            _ = shutdown => {
                tracing::info!("Shutdown requested");
                Ok(())
            }
            result = self.run_interactive(&mut lines, out, show_prompt) => result,
        }
    }
}

async fn write_line<W: AsyncWrite + Unpin>(out: &mut W, text: &str) -> std::io::Result<()> {
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await
}
