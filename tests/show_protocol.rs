// SPDX-License-Identifier: MPL-2.0
//! End-to-end show/wait/retry behaviour of a viewer host driven by a fake engine.

use futures_util::future::join_all;
use iced::{Point, Size};
use iiif_viewer::config::SearchConfig;
use iiif_viewer::engine::{DirectionHint, PointerEvent};
use iiif_viewer::ids::IdGenerator;
use iiif_viewer::net::HttpClient;
use iiif_viewer::task::Deferred;
use iiif_viewer::test_utils::{FakeControl, FakeEngine};
use iiif_viewer::ui::viewer::canvas::Pointer;
use iiif_viewer::ui::viewer::{Effect, Message, ViewerHost};

fn host(pages: usize) -> (ViewerHost, FakeControl) {
    let engine = FakeEngine::new(pages);
    let control = engine.control();
    let http = HttpClient::new(&SearchConfig::default()).expect("client");
    let id = IdGenerator::new().next_id();
    let host = ViewerHost::new(id, Some("https://example.org/iiif/manifest".into()), engine.boxed(), http);
    (host, control)
}

/// Runs every job and feeds the produced messages back into the host until
/// no work is left.
async fn drain(host: &mut ViewerHost, work: Deferred<Message>) {
    let mut pending = work;
    while !pending.is_empty() {
        let messages: Vec<Message> = join_all(pending.into_jobs()).await.into_iter().flatten().collect();
        let mut next = Deferred::none();
        for message in messages {
            let (effect, work) = host.update(message);
            assert_eq!(effect, Effect::None);
            next.extend(work);
        }
        pending = next;
    }
}

fn click(hint: DirectionHint, control: &FakeControl) -> Message {
    control.set_click_hint(Some(hint));
    Message::Pointer(Pointer::Up {
        event: PointerEvent::new(Point::new(5.0, 5.0), Size::new(100.0, 100.0)),
        click: true,
    })
}

#[tokio::test]
async fn first_page_waits_for_its_asset_then_shows() {
    let (mut host, control) = host(3);
    control.mark_loaded(1);

    let (effect, mut work) = host.update(Message::ManifestFetched(Ok("{\"label\":\"Sample\"}".into())));
    assert_eq!(effect, Effect::None);
    assert!(host.progress().is_visible());
    assert_eq!(host.list().active_index(), None);

    let (_, lazy) = host.update(Message::StartLazyLoad);
    assert_eq!(control.load_requests(), vec![0, 2]);
    work.extend(lazy);

    control.mark_loaded(0);
    control.mark_loaded(2);
    drain(&mut host, work).await;

    assert!(!host.progress().is_visible());
    assert_eq!(host.list().active_index(), Some(0));
    assert!(host.list().items().all(|item| item.is_loaded()));
    assert!(host.icons().items().all(|item| item.is_loaded()));
}

#[tokio::test]
async fn waiting_show_retries_when_asset_arrives() {
    let (mut host, control) = host(3);
    control.mark_loaded(1);
    let (_, _) = host.update(Message::ManifestFetched(Ok("{}".into())));

    let work = host.show(2);
    assert!(host.progress().is_visible());
    control.mark_loaded(2);
    drain(&mut host, work).await;

    assert_eq!(control.index(), 2);
    assert_eq!(host.list().active_index(), Some(2));
}

#[tokio::test]
async fn next_and_prev_round_trip() {
    let (mut host, control) = host(4);
    for i in 0..4 {
        control.mark_loaded(i);
    }
    let (_, work) = host.update(Message::ManifestFetched(Ok("{}".into())));
    drain(&mut host, work).await;
    assert_eq!(control.index(), 0);

    let work = host.next();
    drain(&mut host, work).await;
    let work = host.next();
    drain(&mut host, work).await;
    assert_eq!(control.index(), 2);

    let work = host.prev();
    drain(&mut host, work).await;
    let work = host.prev();
    drain(&mut host, work).await;
    assert_eq!(control.index(), 0);
    assert_eq!(host.list().active_index(), Some(0));
}

#[tokio::test]
async fn click_hint_toward_start_advances() {
    let (mut host, control) = host(3);
    for i in 0..3 {
        control.mark_loaded(i);
    }
    let (_, work) = host.update(Message::ManifestFetched(Ok("{}".into())));
    drain(&mut host, work).await;

    let (_, work) = host.update(click(DirectionHint::TowardStart, &control));
    drain(&mut host, work).await;
    assert_eq!(control.index(), 1);

    let (_, work) = host.update(click(DirectionHint::TowardEnd, &control));
    drain(&mut host, work).await;
    assert_eq!(control.index(), 0);
}

#[tokio::test]
async fn disposed_host_swallows_late_assets() {
    let (mut host, control) = host(2);
    let (_, work) = host.update(Message::ManifestFetched(Ok("{}".into())));
    host.dispose();
    control.mark_loaded(0);
    control.mark_loaded(1);

    let messages: Vec<Message> = join_all(work.into_jobs()).await.into_iter().flatten().collect();
    for message in messages {
        let (effect, work) = host.update(message);
        assert_eq!(effect, Effect::None);
        assert!(work.is_empty());
    }
    assert_eq!(control.free_count(), 1);
    assert_eq!(host.list().active_index(), None);
}
