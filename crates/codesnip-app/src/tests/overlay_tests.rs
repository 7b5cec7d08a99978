//! Tests for the overlay gesture session: activation, single emission,
//! cancellation.

use std::time::Duration;

use codesnip_types::{AppEvent, LogicalPoint, PointerEvent, UiEvent};
use tokio::time::timeout;

use crate::ui::overlay_loop;

fn p(x: f64, y: f64) -> LogicalPoint {
    LogicalPoint::new(x, y)
}

async fn recv(rx: &kanal::AsyncReceiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timeout")
        .expect("channel closed")
}

/// The session must emit nothing further: either the wait times out or the
/// channel is already closed because the session ended.
async fn assert_no_more_events(rx: &kanal::AsyncReceiver<AppEvent>) {
    match timeout(Duration::from_millis(200), rx.recv()).await {
        Err(_elapsed) => {}
        Ok(Err(_closed)) => {}
        Ok(Ok(event)) => panic!("unexpected event {event:?}"),
    }
}

#[tokio::test]
async fn drag_emits_preview_then_one_selection() {
    let (overlay_tx, overlay_rx) = kanal::bounded_async::<AppEvent>(64);
    let (ui_to_app_tx, ui_to_app_rx) = kanal::bounded_async::<AppEvent>(64);

    let session = tokio::spawn(overlay_loop(overlay_rx, ui_to_app_tx));

    overlay_tx
        .send(AppEvent::UiEvent(UiEvent::Show))
        .await
        .unwrap();
    overlay_tx
        .send(AppEvent::PointerInput(PointerEvent::Pressed(p(10.0, 10.0))))
        .await
        .unwrap();
    overlay_tx
        .send(AppEvent::PointerInput(PointerEvent::Moved(p(60.0, 40.0))))
        .await
        .unwrap();
    overlay_tx
        .send(AppEvent::PointerInput(PointerEvent::Released(p(60.0, 40.0))))
        .await
        .unwrap();

    match recv(&ui_to_app_rx).await {
        AppEvent::SelectionPreview(rect) => {
            assert_eq!(rect.x, 10.0);
            assert_eq!(rect.width, 50.0);
            assert_eq!(rect.height, 30.0);
        }
        other => panic!("expected preview, got {other:?}"),
    }

    match recv(&ui_to_app_rx).await {
        AppEvent::SelectionMade(gesture) => {
            assert_eq!(gesture.start, p(10.0, 10.0));
            assert_eq!(gesture.end, p(60.0, 40.0));
        }
        other => panic!("expected selection, got {other:?}"),
    }

    // A stray release after finalization must not re-emit.
    overlay_tx
        .send(AppEvent::PointerInput(PointerEvent::Released(p(90.0, 90.0))))
        .await
        .unwrap();
    overlay_tx
        .send(AppEvent::UiEvent(UiEvent::Close))
        .await
        .unwrap();

    session.await.unwrap().unwrap();
    assert_no_more_events(&ui_to_app_rx).await;
}

#[tokio::test]
async fn escape_cancels_the_gesture() {
    let (overlay_tx, overlay_rx) = kanal::bounded_async::<AppEvent>(64);
    let (ui_to_app_tx, ui_to_app_rx) = kanal::bounded_async::<AppEvent>(64);

    let session = tokio::spawn(overlay_loop(overlay_rx, ui_to_app_tx));

    overlay_tx
        .send(AppEvent::UiEvent(UiEvent::Show))
        .await
        .unwrap();
    overlay_tx
        .send(AppEvent::PointerInput(PointerEvent::Pressed(p(5.0, 5.0))))
        .await
        .unwrap();
    overlay_tx
        .send(AppEvent::PointerInput(PointerEvent::Cancelled))
        .await
        .unwrap();

    match recv(&ui_to_app_rx).await {
        AppEvent::SelectionCancelled => {}
        other => panic!("expected cancellation, got {other:?}"),
    }

    overlay_tx
        .send(AppEvent::UiEvent(UiEvent::Close))
        .await
        .unwrap();
    session.await.unwrap().unwrap();
}

#[tokio::test]
async fn pointer_input_without_activation_is_ignored() {
    let (overlay_tx, overlay_rx) = kanal::bounded_async::<AppEvent>(64);
    let (ui_to_app_tx, ui_to_app_rx) = kanal::bounded_async::<AppEvent>(64);

    let session = tokio::spawn(overlay_loop(overlay_rx, ui_to_app_tx));

    overlay_tx
        .send(AppEvent::PointerInput(PointerEvent::Pressed(p(1.0, 1.0))))
        .await
        .unwrap();
    overlay_tx
        .send(AppEvent::PointerInput(PointerEvent::Released(p(2.0, 2.0))))
        .await
        .unwrap();
    overlay_tx
        .send(AppEvent::UiEvent(UiEvent::Close))
        .await
        .unwrap();

    session.await.unwrap().unwrap();
    assert_no_more_events(&ui_to_app_rx).await;
}
