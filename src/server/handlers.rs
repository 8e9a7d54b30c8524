// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Route handlers.
//!
//! Both routes funnel every request through [`respond`], so a message gets
//! the same frame whether it arrives as an HTTP body or a WebSocket message.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{debug, info};

use super::AppState;
use crate::dispatcher::Dispatcher;
use crate::error::transport::TransportError;
use crate::error::{report_error, ErrorContext};
use crate::protocol::ResponseFrame;

/// Runs one raw request through the dispatcher and frames the outcome.
///
/// Failed requests are handed to the installed error reporter before the
/// error frame is returned.
pub fn respond(dispatcher: &Dispatcher, message: &[u8]) -> ResponseFrame {
    let result = dispatcher.dispatch_raw(message);
    let frame = ResponseFrame::from_result(&result);

    if let Err(err) = result {
        report_error(
            ErrorContext::new(err, "dispatcher")
                .with_details(format!("request: {:?}", String::from_utf8_lossy(message))),
        );
    }

    frame
}

/// `POST` handler: one request per body.
///
/// Replies `200` with `s<json>` on success and `400` with `e<message>` on
/// failure.
pub async fn handle_once(State(state): State<AppState>, body: Bytes) -> Response {
    let frame = respond(&state.dispatcher, &body);
    let status = if frame.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, frame.to_bytes()).into_response()
}

/// `GET` handler upgrading to a WebSocket session.
pub async fn handle_ws(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    let dispatcher = Arc::clone(&state.dispatcher);

    ws.max_message_size(state.max_message_size)
        .on_upgrade(move |socket| handle_client(socket, dispatcher))
}

/// Serves one WebSocket session until the peer closes or the socket fails.
///
/// Messages are answered strictly in arrival order, one text frame per
/// message.
async fn handle_client(mut socket: WebSocket, dispatcher: Arc<Dispatcher>) {
    info!("websocket session opened");

    while let Some(received) = socket.recv().await {
        let message = match received {
            Ok(message) => message,
            Err(err) => {
                report_error(ErrorContext::new(
                    TransportError::WebSocketReceiveError(err.to_string()),
                    "websocket",
                ));
                break;
            }
        };

        let request = match message {
            Message::Text(text) => text.into_bytes(),
            Message::Binary(bytes) => bytes,
            Message::Ping(_) | Message::Pong(_) => continue,
            Message::Close(_) => break,
        };
        debug!(bytes = request.len(), "websocket message received");

        let frame = respond(&dispatcher, &request);
        let reply = String::from_utf8_lossy(&frame.to_bytes()).into_owned();

        if let Err(err) = socket.send(Message::Text(reply)).await {
            report_error(ErrorContext::new(
                TransportError::WebSocketSendError(err.to_string()),
                "websocket",
            ));
            break;
        }
    }

    debug!("websocket session closed");
}
