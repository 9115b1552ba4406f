#![cfg(target_arch = "wasm32")]

use factor_console_wasm::app::{App, Scene};
use factor_console_wasm::application::annotate_snapshot;
use factor_console_wasm::config::ConsoleConfig;
use factor_console_wasm::domain::layout::CssLength;
use factor_console_wasm::global_state::{globals, rotation, row_metrics};
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

/// Mounts `child` into a fresh host under a toggle, so the test can dispose it.
fn mount_toggled<N: IntoView + 'static>(
    child: impl Fn() -> N + Clone + 'static,
) -> (HtmlElement, RwSignal<bool>) {
    // Globals must outlive the mounted owner.
    globals();
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.create_element("div").unwrap().dyn_into::<HtmlElement>().unwrap();
    document.body().unwrap().append_child(&host).unwrap();

    let show = create_rw_signal(true);
    mount_to(host.clone(), move || view! { {move || show.get().then(child.clone())} });
    (host, show)
}

fn dispatch_resize() {
    let window = web_sys::window().unwrap();
    let event = web_sys::Event::new("resize").unwrap();
    window.dispatch_event(&event).unwrap();
}

fn split_length(raw: &str) -> (f64, &'static str) {
    if let Some(number) = raw.strip_suffix("px") {
        (number.trim().parse().unwrap(), "px")
    } else if let Some(number) = raw.strip_suffix('%') {
        (number.trim().parse().unwrap(), "%")
    } else {
        panic!("unexpected css length {raw:?}");
    }
}

fn assert_length(actual: &str, expected: CssLength) {
    let (actual_value, actual_unit) = split_length(actual);
    let (expected_value, expected_unit) = split_length(&expected.to_string());
    assert_eq!(actual_unit, expected_unit, "{actual} vs {expected}");
    assert!((actual_value - expected_value).abs() < 0.05, "{actual} vs {expected}");
}

#[wasm_bindgen_test]
async fn callouts_follow_row_metrics_until_scene_is_disposed() {
    let (host, show) = mount_toggled(|| view! { <Scene /> });
    TimeoutFuture::new(100).await;

    let snapshot = rotation().with_untracked(|r| r.current());
    let metrics = row_metrics().get_untracked();
    assert_eq!(metrics.len(), snapshot.orders.len());
    assert!(metrics.iter().all(Option::is_some));

    let expected = annotate_snapshot(snapshot, &metrics);
    let callouts = host.query_selector_all(".annotation").unwrap();
    assert_eq!(callouts.length() as usize, expected.len());
    for i in 0..callouts.length() {
        let callout = callouts.item(i).unwrap().dyn_into::<HtmlElement>().unwrap();
        let key = callout.get_attribute("data-key").unwrap();
        let view = expected.iter().find(|view| view.key == key).unwrap();
        let style = callout.style();
        assert_length(&style.get_property_value("top").unwrap(), view.position.top);
        assert_length(&style.get_property_value("left").unwrap(), view.position.left);
    }

    // Mounted: a resize re-measures.
    row_metrics().set(Vec::new());
    dispatch_resize();
    assert!(!row_metrics().get_untracked().is_empty());

    // Disposed: the listener is gone and the callouts with it.
    show.set(false);
    TimeoutFuture::new(50).await;
    row_metrics().set(Vec::new());
    dispatch_resize();
    TimeoutFuture::new(50).await;
    assert!(row_metrics().get_untracked().is_empty());
    assert_eq!(host.query_selector_all(".annotation").unwrap().length(), 0);

    host.remove();
}

#[wasm_bindgen_test]
async fn rotation_timer_stops_when_app_is_disposed() {
    let config = ConsoleConfig { rotation_interval_ms: 30, ..ConsoleConfig::default() };
    let (host, show) = mount_toggled(move || view! { <App config=config.clone() /> });

    let start = rotation().with_untracked(|r| r.cycle());
    TimeoutFuture::new(200).await;
    assert!(rotation().with_untracked(|r| r.cycle()) > start);

    show.set(false);
    TimeoutFuture::new(50).await;
    let stopped = rotation().with_untracked(|r| r.cycle());
    TimeoutFuture::new(200).await;
    assert_eq!(rotation().with_untracked(|r| r.cycle()), stopped);

    host.remove();
}
