use gloo_timers::callback::Interval;
use leptos::html::Div;
use leptos::*;
use web_sys::{Element, HtmlDivElement};

use crate::{
    application::{AnnotationView, SnapshotRotation, annotate_snapshot},
    config::ConsoleConfig,
    domain::{
        layout::AnnotationPosition,
        logging::{LogComponent, get_logger},
        order_book::{ORDER_HEADERS, Order, TICKER_ITEMS},
    },
    event_utils::on_window_resize,
    format_utils::{format_price, format_size},
    global_state::{display_time, rotation, row_metrics},
    infrastructure::dom::measure_order_rows,
    log_debug, log_warn,
    time_utils::current_clock_label,
};

const STYLES: &str = r#"
:root {
    --phosphor: #9cff7a;
    --phosphor-dim: rgba(156, 255, 122, 0.45);
    --amber: #ffb347;
    --sell: #ff6b5a;
    --ink: #0b0f0a;
    --paper: #efe6d2;
}

.hero {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    background: radial-gradient(circle at 50% 20%, #f7f0df 0%, var(--paper) 55%, #d9ceb5 100%);
    color: var(--ink);
    font-family: 'Space Mono', 'Courier New', monospace;
    overflow: hidden;
}

.hero-nav {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 24px 40px;
}

.brand {
    display: flex;
    align-items: center;
    gap: 12px;
}

.brand-mark img {
    display: block;
    border-radius: 8px;
}

.brand-label {
    display: flex;
    flex-direction: column;
    font-weight: 700;
    letter-spacing: 0.04em;
}

.brand-label small {
    font-weight: 400;
    opacity: 0.6;
    text-transform: uppercase;
    font-size: 11px;
}

.hero-status {
    display: flex;
    align-items: center;
    gap: 10px;
    padding: 8px 14px;
    border: 1px solid rgba(11, 15, 10, 0.2);
    border-radius: 999px;
    font-size: 12px;
    text-transform: uppercase;
}

.hero-status__dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: #2ecc71;
    box-shadow: 0 0 8px #2ecc71;
    animation: pulse 1.6s ease-in-out infinite;
}

.hero-status__copy {
    display: flex;
    flex-direction: column;
}

.hero-status__copy small {
    opacity: 0.55;
    font-size: 10px;
}

.scene {
    flex: 1;
    display: flex;
    justify-content: center;
    align-items: center;
    padding: 40px 20px 80px;
}

.computer-stack {
    position: relative;
    width: min(760px, 92vw);
}

.computer__bezel {
    padding: 28px;
    background: linear-gradient(160deg, #e4dcc8, #c9bea4);
    border-radius: 22px;
    box-shadow: inset 0 2px 0 rgba(255, 255, 255, 0.6), 0 18px 40px rgba(0, 0, 0, 0.25);
}

.screen {
    background: var(--ink);
    color: var(--phosphor);
    border-radius: 14px;
    padding: 18px 20px;
    box-shadow: inset 0 0 40px rgba(156, 255, 122, 0.12);
    text-shadow: 0 0 6px var(--phosphor-dim);
}

.screen__header {
    display: flex;
    justify-content: space-between;
    font-size: 12px;
    text-transform: uppercase;
    letter-spacing: 0.12em;
    padding-bottom: 12px;
    border-bottom: 1px dashed var(--phosphor-dim);
}

.order-book__labels,
.order-book__row {
    display: grid;
    grid-template-columns: 70px 90px 60px 110px 1fr;
    gap: 8px;
    align-items: center;
}

.order-book__labels {
    font-size: 10px;
    opacity: 0.6;
    padding: 10px 0 6px;
}

.order-book__row {
    font-size: 13px;
    padding: 8px 0;
    border-bottom: 1px solid rgba(156, 255, 122, 0.08);
    animation: row-in 0.5s ease-out both;
}

.order-book__side {
    display: flex;
    align-items: center;
    gap: 6px;
}

.order-book__side em {
    width: 6px;
    height: 6px;
    border-radius: 50%;
    background: currentColor;
}

.order-book__row--buy .order-book__side {
    color: var(--phosphor);
}

.order-book__row--sell .order-book__side {
    color: var(--sell);
}

.order-book__factor {
    color: var(--amber);
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
}

.computer__base {
    display: flex;
    justify-content: center;
    gap: 10px;
    margin: 0 auto;
    width: 60%;
    padding: 14px 0;
    background: linear-gradient(180deg, #d3c8ae, #b8ac90);
    border-radius: 0 0 18px 18px;
}

.computer__vent {
    width: 48px;
    height: 4px;
    border-radius: 2px;
    background: rgba(11, 15, 10, 0.25);
}

.computer-shadow {
    width: 70%;
    height: 18px;
    margin: 12px auto 0;
    border-radius: 50%;
    background: rgba(0, 0, 0, 0.18);
    filter: blur(8px);
}

.annotation-layer {
    position: absolute;
    inset: 0;
    pointer-events: none;
}

.annotation {
    position: absolute;
    display: flex;
    align-items: center;
    width: 220px;
    transition: top 0.3s ease, left 0.3s ease;
    animation: callout-in 0.6s ease-out both;
}

.annotation--left-top,
.annotation--left-bottom {
    flex-direction: row-reverse;
    transform: translate(-100%, -50%);
}

.annotation--right-top,
.annotation--right-bottom {
    transform: translate(0, -50%);
}

.annotation--left-top .annotation__body,
.annotation--right-top .annotation__body {
    align-self: flex-end;
    margin-bottom: 48px;
}

.annotation--left-bottom .annotation__body,
.annotation--right-bottom .annotation__body {
    align-self: flex-start;
    margin-top: 48px;
}

.annotation__line {
    flex: 0 0 36px;
    height: 1px;
    background: var(--ink);
}

.annotation__body {
    background: rgba(239, 230, 210, 0.95);
    border: 1px solid var(--ink);
    padding: 8px 10px;
    font-size: 11px;
    box-shadow: 4px 4px 0 rgba(11, 15, 10, 0.85);
}

.annotation__body p {
    margin: 0 0 2px;
}

.annotation__label {
    font-weight: 700;
    text-transform: uppercase;
}

.annotation__factor {
    opacity: 0.7;
}

.annotation__factor--accent {
    color: #b36b00;
    opacity: 1;
}

.ticker {
    border-top: 1px solid rgba(11, 15, 10, 0.2);
    background: var(--ink);
    color: var(--phosphor);
    font-size: 12px;
    text-transform: uppercase;
}

.ticker__mask {
    overflow: hidden;
    padding: 10px 0;
}

.ticker__track {
    display: flex;
    width: max-content;
    animation: ticker-scroll 24s linear infinite;
}

.ticker__group {
    display: flex;
    gap: 48px;
    padding-right: 48px;
}

@keyframes ticker-scroll {
    from { transform: translateX(0); }
    to { transform: translateX(-50%); }
}

@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.35; }
}

@keyframes row-in {
    from { opacity: 0; transform: translateY(4px); }
    to { opacity: 1; transform: none; }
}

@keyframes callout-in {
    from { opacity: 0; }
    to { opacity: 1; }
}
"#;

/// 🖥️ Landing page: nav, animated order book with callouts, ticker.
#[component]
pub fn App(#[prop(default = ConsoleConfig::default())] config: ConsoleConfig) -> impl IntoView {
    display_time().set(current_clock_label(&config.locale));

    let rotation_timer = Interval::new(config.rotation_interval_ms, move || {
        rotation().update(SnapshotRotation::advance);
        log_debug!(
            LogComponent::Presentation("App"),
            "🔄 snapshot -> {}",
            rotation().with_untracked(|r| r.current().id)
        );
    });

    let locale = config.locale.clone();
    let clock_timer = Interval::new(config.clock_interval_ms, move || {
        display_time().set(current_clock_label(&locale));
    });

    on_cleanup(move || {
        drop(rotation_timer);
        drop(clock_timer);
        get_logger().debug(LogComponent::Presentation("App"), "🛑 timers cancelled");
    });

    view! {
        <style>{STYLES}</style>
        <main class="hero">
            <HeroNav />
            <Scene />
            <Ticker repeat=config.ticker_repeat />
        </main>
    }
}

#[component]
fn HeroNav() -> impl IntoView {
    view! {
        <nav class="hero-nav">
            <div class="brand">
                <div class="brand-mark">
                    <img src="/logos/fd-logo.png" alt="Factor Dynamics Logo" width="40" height="40" />
                </div>
                <div class="brand-label">
                    <span>"Factor Dynamics"</span>
                    <small>"Signal console"</small>
                </div>
            </div>
            <div class="hero-status">
                <span class="hero-status__dot" />
                <div class="hero-status__copy">
                    <span>"live factor routing"</span>
                    <small>"[EXPERIMENTAL]"</small>
                </div>
            </div>
        </nav>
    }
}

fn as_element(div: &HtmlDivElement) -> &Element {
    div
}

/// Retro computer with the order book and the annotation layer on top.
#[component]
pub fn Scene() -> impl IntoView {
    let stack_ref = create_node_ref::<Div>();

    let remeasure = move || {
        let snapshot = rotation().with_untracked(SnapshotRotation::current);
        let container = stack_ref.get_untracked();
        match measure_order_rows(container.as_deref().map(as_element), snapshot.orders.len()) {
            Ok(metrics) => {
                log_debug!(
                    LogComponent::Presentation("Scene"),
                    "📐 {}: measured {}/{} rows",
                    snapshot.id,
                    metrics.iter().flatten().count(),
                    snapshot.orders.len()
                );
                row_metrics().set(metrics);
            }
            Err(e) => {
                log_warn!(LogComponent::Presentation("Scene"), "⚠️ {}", e);
                row_metrics().set(Vec::new());
            }
        }
    };

    // Rows for the new snapshot are in the DOM once the next frame is laid out.
    create_effect(move |_| {
        let _ = rotation().with(SnapshotRotation::index);
        request_animation_frame(remeasure);
    });

    let resize_listener = on_window_resize(remeasure);
    on_cleanup(move || resize_listener.remove());

    view! {
        <section class="scene">
            <div class="computer-stack" node_ref=stack_ref>
                <div class="computer">
                    <div class="computer__bezel">
                        <div class="screen">
                            <header class="screen__header">
                                <span>"Order book"</span>
                                <span>{move || display_time().get()}</span>
                            </header>
                            <OrderBook />
                        </div>
                    </div>
                    <div class="computer__base">
                        <div class="computer__vent" />
                        <div class="computer__vent" />
                        <div class="computer__vent" />
                    </div>
                </div>
                <div class="computer-shadow" />
                <AnnotationLayer />
            </div>
        </section>
    }
}

#[component]
fn OrderBook() -> impl IntoView {
    view! {
        <div class="order-book">
            <div class="order-book__labels">
                {ORDER_HEADERS.iter().map(|header| view! { <span>{*header}</span> }).collect_view()}
            </div>
            <div class="order-book__rows">
                {move || {
                    let snapshot = rotation().with(SnapshotRotation::current);
                    snapshot
                        .orders
                        .iter()
                        .enumerate()
                        .map(|(index, order)| view! { <OrderRow index=index order=order /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn OrderRow(index: usize, order: &'static Order) -> impl IntoView {
    view! {
        <div
            class=format!("order-book__row order-book__row--{}", order.side.css_modifier())
            data-row-index=index.to_string()
        >
            <span class="order-book__side">
                <em />
                {order.side.to_string()}
            </span>
            <span>{order.symbol}</span>
            <span>{format_size(order.size)}</span>
            <span>{format_price(order.price)}</span>
            <span class="order-book__factor">{order.factor}</span>
        </div>
    }
}

/// Rebuilt on every rotation so the callout entrance animation replays;
/// callout positions follow the row metrics through a memo without rebuilding.
#[component]
fn AnnotationLayer() -> impl IntoView {
    move || {
        let current = rotation().get();
        let snapshot = current.current();
        let annotations =
            create_memo(move |_| row_metrics().with(|metrics| annotate_snapshot(snapshot, metrics)));
        view! {
            <div class="annotation-layer" data-cycle=current.cycle().to_string()>
                {annotations
                    .get_untracked()
                    .into_iter()
                    .enumerate()
                    .map(|(slot, annotation)| {
                        view! { <Callout annotations=annotations slot_index=slot annotation=annotation /> }
                    })
                    .collect_view()}
            </div>
        }
    }
}

/// `slot_index` indexes into `annotations`; skipped highlights are skipped the same
/// way on every recompute, so slots stay stable within one snapshot.
#[component]
fn Callout(
    annotations: Memo<Vec<AnnotationView>>,
    slot_index: usize,
    annotation: AnnotationView,
) -> impl IntoView {
    let position = move || -> AnnotationPosition {
        annotations.with(|views| views.get(slot_index).map(|view| view.position).unwrap_or_default())
    };

    view! {
        <div
            class=format!("annotation annotation--{}", annotation.quadrant)
            data-key=annotation.key
            style:top=move || position().top.to_string()
            style:left=move || position().left.to_string()
        >
            <span class="annotation__line" />
            <div class="annotation__body">
                <p class="annotation__label">{annotation.label}</p>
                <p class="annotation__value">{annotation.value}</p>
                <p class="annotation__factor">{annotation.detail}</p>
                <p class="annotation__factor annotation__factor--accent">{annotation.factor}</p>
            </div>
        </div>
    }
}

/// Decorative marquee; the item list is laid out `repeat` times so the CSS
/// loop (translateX -50%) is seamless.
#[component]
fn Ticker(repeat: usize) -> impl IntoView {
    view! {
        <div class="ticker">
            <div class="ticker__mask">
                <div class="ticker__track">
                    {(0..repeat)
                        .map(|_| {
                            view! {
                                <div class="ticker__group">
                                    {TICKER_ITEMS.iter().map(|item| view! { <span>{*item}</span> }).collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
