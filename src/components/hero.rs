use dioxus::prelude::*;
use crate::data::bonds::{self, format_change, format_price, format_yield};
use crate::utils::motion::{Ease, Segment, Style, Timeline};
use crate::utils::scroll::{scroll_to, use_scroll_progress};

const TICKER_ROWS: usize = 5;

// The hero sits at the top of the page, so only the back half of its progress
// range is reachable. Entrances run as load animations in CSS; scroll drives
// the exits.
const HEADLINE_EXIT: Timeline = Timeline::exit_only(Segment {
  start: 0.82,
  end: 0.98,
  from: Style::REST,
  to: Style::REST.with_shift(0.0, -10.0).with_opacity(0.25),
  ease: Ease::CubicIn,
});

const TICKER_EXIT: Timeline = Timeline::exit_only(Segment {
  start: 0.82,
  end: 0.98,
  from: Style::REST,
  to: Style::REST.with_shift(8.0, 0.0).with_opacity(0.25),
  ease: Ease::CubicIn,
});

const MICRO_BAR_EXIT: Timeline = Timeline::exit_only(Segment {
  start: 0.82,
  end: 0.98,
  from: Style::REST,
  to: Style::REST.with_shift(0.0, 6.0).with_opacity(0.2),
  ease: Ease::CubicIn,
});

#[component]
pub fn Hero() -> Element {
  let progress = use_scroll_progress("hero");
  let headline_style = HEADLINE_EXIT.style_at(progress());
  let ticker_style = TICKER_EXIT.style_at(progress());
  let micro_bar_style = MICRO_BAR_EXIT.style_at(progress());

  let all_bonds = bonds::bonds();
  let bond_count = all_bonds.len();
  let live_bonds = &all_bonds[..TICKER_ROWS.min(bond_count)];

  rsx!{
    section {
      id: "hero",
      class: "section hero-section",
      div { class: "hero-backdrop" }
      div {
        class: "hero-inner",
        div {
          class: "hero-grid",
          div {
            class: "hero-headline",
            style: headline_style.css(),
            div {
              class: "hero-eyebrow rise-in",
              svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentcolor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path {
                  d: "M22 12h-2.48a2 2 0 0 0-1.93 1.46l-2.35 8.36a.25.25 0 0 1-.48 0L9.24 2.18a.25.25 0 0 0-.48 0l-2.35 8.36A2 2 0 0 1 4.49 12H2"
                }
              }
              span { "Real-time market data" }
            }
            h1 {
              class: "hero-title rise-in",
              "AI Bond"
              br { }
              span { class: "text-cyan", "Tracker" }
            }
            p {
              class: "hero-blurb rise-in",
              "Real-time prices, AI summaries, and historic spreads for the world's largest tech issuers."
            }
            div {
              class: "hero-actions rise-in",
              button {
                class: "btn-primary",
                onclick: move |_| scroll_to("bonds"),
                "Explore bonds"
                ArrowIcon { }
              }
              button {
                class: "btn-outline",
                svg {
                  xmlns: "http://www.w3.org/2000/svg",
                  width: "16",
                  height: "16",
                  view_box: "0 0 24 24",
                  fill: "none",
                  stroke: "currentcolor",
                  stroke_width: "2",
                  stroke_linecap: "round",
                  stroke_linejoin: "round",
                  path { d: "M12 7v14" }
                  path {
                    d: "M3 18a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1h5a4 4 0 0 1 4 4 4 4 0 0 1 4-4h5a1 1 0 0 1 1 1v13a1 1 0 0 1-1 1h-6a3 3 0 0 0-3 3 3 3 0 0 0-3-3z"
                  }
                }
                "View methodology"
              }
            }
          }
          div {
            class: "card-terminal ticker-card slide-in",
            style: ticker_style.css(),
            div {
              class: "ticker-head",
              div {
                class: "ticker-title",
                div { class: "pulse-dot" }
                h3 { "Live Ticker" }
              }
              span { class: "ticker-stamp", "Updated: Just now" }
            }
            div {
              class: "ticker-table",
              div {
                class: "ticker-row ticker-header",
                span { "Issuer" }
                span { "Coupon" }
                span { class: "cell-right", "Price" }
                span { class: "cell-right", "Yield" }
                span { class: "cell-right", "Chg" }
              }
              for (idx, bond) in live_bonds.iter().enumerate() {
                div {
                  key: "{bond.id}",
                  class: "ticker-row rise-in",
                  style: format!("animation-delay: {}s", idx as f64 * 0.05),
                  span { class: "cell-strong", "{bond.issuer}" }
                  span { class: "cell-muted", {format!("{:.2}%", bond.coupon)} }
                  span { class: "cell-right", {format_price(bond.price)} }
                  span { class: "cell-right cell-muted", {format_yield(bond.yield_pct)} }
                  span {
                    class: if bond.change.is_sign_negative() {"cell-right text-negative"} else {"cell-right text-positive"},
                    {format_change(bond.change)}
                  }
                }
              }
            }
            div {
              class: "ticker-foot",
              span { "{bond_count} bonds tracked" }
              button {
                class: "link-cyan",
                onclick: move |_| scroll_to("bonds"),
                "View all"
                ArrowIcon { }
              }
            }
          }
        }
        div {
          class: "micro-bar",
          style: micro_bar_style.css(),
          div {
            class: "stat-item rise-in",
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "20",
              height: "20",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              circle { cx: "12", cy: "12", r: "10" }
              path { d: "M12 6v6l4 2" }
            }
            div {
              p { class: "stat-label", "Data latency" }
              p { class: "stat-value", "<60 seconds" }
            }
          }
          div {
            class: "stat-item rise-in",
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "20",
              height: "20",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              ellipse { cx: "12", cy: "5", rx: "9", ry: "3" }
              path { d: "M3 5V19A9 3 0 0 0 21 19V5" }
              path { d: "M3 12A9 3 0 0 0 21 12" }
            }
            div {
              p { class: "stat-label", "Coverage" }
              p { class: "stat-value", "{bond_count} bonds" }
            }
          }
          div {
            class: "stat-item rise-in",
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "20",
              height: "20",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              rect { x: "4", y: "4", width: "16", height: "16", rx: "2" }
              rect { x: "9", y: "9", width: "6", height: "6" }
              path { d: "M9 2v2" }
              path { d: "M15 2v2" }
              path { d: "M9 20v2" }
              path { d: "M15 20v2" }
              path { d: "M2 9h2" }
              path { d: "M2 15h2" }
              path { d: "M20 9h2" }
              path { d: "M20 15h2" }
            }
            div {
              p { class: "stat-label", "AI models" }
              p { class: "stat-value", "8 active" }
            }
          }
          div {
            class: "stat-item rise-in",
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "20",
              height: "20",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              path {
                d: "M22 12h-2.48a2 2 0 0 0-1.93 1.46l-2.35 8.36a.25.25 0 0 1-.48 0L9.24 2.18a.25.25 0 0 0-.48 0l-2.35 8.36A2 2 0 0 1 4.49 12H2"
              }
            }
            div {
              p { class: "stat-label", "Updates" }
              p { class: "stat-value", "Real-time" }
            }
          }
        }
      }
    }
  }
}

#[component]
fn ArrowIcon() -> Element {
  rsx!{
    svg {
      xmlns: "http://www.w3.org/2000/svg",
      width: "16",
      height: "16",
      view_box: "0 0 24 24",
      fill: "none",
      stroke: "currentcolor",
      stroke_width: "2",
      stroke_linecap: "round",
      stroke_linejoin: "round",
      path { d: "M5 12h14" }
      path { d: "m12 5 7 7-7 7" }
    }
  }
}
