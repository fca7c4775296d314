use std::pin::Pin;

use futures::stream::{self, Stream};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::domain::Error;
use crate::domain::traits::LineSource;

/// Reads operator input line by line from any async reader.
pub struct LineReader<R: AsyncRead + Unpin> {
    reader: Option<R>,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
        }
    }
}

impl<R: AsyncRead + Unpin + Send + 'static> LineSource for LineReader<R> {
    type Lines = Pin<Box<dyn Stream<Item = Result<String, Error>> + Send>>;

    fn lines(&mut self) -> Self::Lines {
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                // Already consumed; return an empty stream.
                return Box::pin(stream::empty());
            }
        };

        let lines = BufReader::new(reader).lines();

        Box::pin(stream::unfold(Some(lines), |state| async move {
            let mut lines = match state {
                Some(lines) => lines,
                None => return None,
            };
            match lines.next_line().await {
                Ok(Some(line)) => Some((Ok(line.trim_end_matches('\r').to_string()), Some(lines))),
                Ok(None) => None,
                // Surface the error once, then end the stream.
                Err(e) => Some((Err(Error::IO(e)), None)),
            }
        }))
    }
}
