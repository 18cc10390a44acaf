use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream::{Stream, StreamExt};
use tracing::debug;

use crate::hero::rotation::{role_frames, RoleRotation};
use crate::state::AppState;

/// GET /api/v1/hero/roles
///
/// Server-sent events, one `role` event per rotation tick. Each subscriber gets
/// its own rotation starting from the first role; the chain stops when the
/// client goes away and the stream is dropped.
pub async fn handle_role_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    debug!("Role stream subscriber connected");

    let rotation = RoleRotation::new(state.content.profile.roles.clone());
    let events = role_frames(rotation).map(|frame| {
        let event = Event::default().event("role");
        Ok::<_, Infallible>(match event.json_data(&frame) {
            Ok(event) => event,
            Err(_) => Event::default().event("role").data(frame.text),
        })
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}
