//! Waiting room websocket stream.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::{Stream, StreamExt};
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, error, info, trace, warn};

use crate::api::endpoints;
use crate::auth::AccessToken;
use crate::error::{Error, TransportError};
use crate::types::{BaseUrl, ResourceId};

use super::events::{parse_event, WaitingRoomEvent};

/// A stream of waiting room events for one online quiz.
///
/// The stream ends when the server closes the connection (typically when
/// the quiz starts) or when a transport error occurs; errors are yielded
/// once and terminate the stream.
pub struct WaitingRoomStream {
    inner: Pin<Box<dyn Stream<Item = Result<WaitingRoomEvent, Error>> + Send>>,
}

impl WaitingRoomStream {
    pub(crate) fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<WaitingRoomEvent, Error>> + Send + 'static,
    {
        Self {
            inner: Box::pin(stream),
        }
    }

    /// Connect to the waiting room of `online_quiz`.
    pub(crate) async fn connect(
        base: &BaseUrl,
        online_quiz: &ResourceId,
        token: Option<&AccessToken>,
    ) -> Result<Self, Error> {
        let ws_url = build_ws_url(base, online_quiz, token);
        info!(quiz = %online_quiz, "Connecting to waiting room");

        let (ws_stream, _) =
            connect_async(&ws_url)
                .await
                .map_err(|e| TransportError::Connection {
                    message: e.to_string(),
                })?;

        debug!("WebSocket connected, listening for events");

        let stream = async_stream::stream! {
            let (mut write, mut read) = ws_stream.split();

            while let Some(msg) = read.next().await {
                match msg {
                    Ok(Message::Text(text)) => {
                        yield parse_event(&text);
                    }
                    Ok(Message::Ping(data)) => {
                        trace!("Received ping");
                        if let Err(e) = futures_util::SinkExt::send(&mut write, Message::Pong(data)).await {
                            warn!(error = %e, "Failed to send pong");
                        }
                    }
                    Ok(Message::Close(frame)) => {
                        info!(?frame, "Waiting room closed by server");
                        break;
                    }
                    Ok(Message::Binary(_)) => {
                        trace!("Ignoring binary frame");
                    }
                    Ok(Message::Pong(_)) => {
                        trace!("Received pong");
                    }
                    Ok(Message::Frame(_)) => {
                        // Raw frame, ignore
                    }
                    Err(e) => {
                        error!(error = %e, "WebSocket error");
                        yield Err(TransportError::Connection {
                            message: e.to_string(),
                        }.into());
                        break;
                    }
                }
            }
        };

        Ok(Self::new(stream))
    }
}

impl Stream for WaitingRoomStream {
    type Item = Result<WaitingRoomEvent, Error>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

fn build_ws_url(base: &BaseUrl, online_quiz: &ResourceId, token: Option<&AccessToken>) -> String {
    let mut url = base.ws_endpoint(&format!("{}/{}", endpoints::WAITING_ROOM, online_quiz));

    // The backend reads the bearer token from the query string during the
    // websocket handshake, not from an Authorization header.
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        url.push_str("?token=");
        url.extend(url::form_urlencoded::byte_serialize(
            token.as_str().as_bytes(),
        ));
    }

    url
}
