//! Terminal shell for the contact book.
//!
//! Reads one input event per line and writes the resulting screen. The
//! reader and writer are generic so sessions can be scripted in tests.

pub mod command;
pub mod session;

pub use command::Command;
pub use session::{Flow, Reply, Session};

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Run the event loop until `quit` or end of input.
///
/// Every event is handled to completion before the next line is read.
/// Bytes that are not valid UTF-8 are replaced rather than ending the session.
pub async fn run<R, W>(session: &mut Session, mut reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(session.screen().as_bytes()).await?;
    writer.flush().await?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let reply = session.handle(Command::parse(&line));
        writer.write_all(reply.text.as_bytes()).await?;
        writer.flush().await?;

        if reply.flow == Flow::Exit {
            break;
        }
    }

    tracing::info!(
        contacts = session.gallery().cards().len(),
        "Contact book session ended"
    );
    Ok(())
}
