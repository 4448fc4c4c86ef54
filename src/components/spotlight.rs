use chrono::Datelike;
use dioxus::prelude::*;
use crate::data::bonds::{self, format_price, format_total_debt, format_yield};
use crate::utils::carousel::Carousel;
use crate::utils::motion::{Ease, Segment, Style, Timeline};
use crate::utils::scroll::use_scroll_progress;

// The card never fully faces the viewer. It settles into a tilted pose and
// swings through it on the way out.
const TILTED: Style = Style::REST.with_rotation(6.0, -18.0);

const CARD_TIMELINE: Timeline = Timeline {
  enter: Segment {
    start: 0.15,
    end: 0.35,
    from: Style::REST.with_rotation(10.0, -45.0).with_shift(0.0, 8.0).with_opacity(0.0),
    to: TILTED,
    ease: Ease::CubicOut,
  },
  exit: Segment {
    start: 0.6,
    end: 0.9,
    from: TILTED,
    to: Style::REST.with_rotation(8.0, 18.0).with_shift(0.0, -6.0).with_opacity(0.25),
    ease: Ease::CubicIn,
  },
};

#[component]
pub fn IssuerSpotlight() -> Element {
  let progress = use_scroll_progress("issuers");
  let card_style = CARD_TIMELINE.style_at(progress());

  let issuers = bonds::issuers();
  let mut ring = use_signal(|| Carousel::new(issuers.len()));
  let issuer = &issuers[ring().index()];
  let featured = issuer.bonds.first().copied();
  let position = ring().index() + 1;
  let total = issuers.len();

  rsx!{
    section {
      id: "issuers",
      class: "section spotlight-section",
      div {
        class: "section-inner",
        div {
          class: "section-head",
          span { class: "section-kicker", "Featured Issuer" }
          h2 { "Issuer Spotlight" }
        }
        div {
          class: "perspective-stage",
          div {
            class: "card-terminal spotlight-card",
            style: card_style.css(),
            div {
              class: "spotlight-head",
              div {
                class: "spotlight-identity",
                div {
                  class: "icon-badge badge-large",
                  svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "28",
                    height: "28",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentcolor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    path { d: "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z" }
                    path { d: "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2" }
                    path { d: "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2" }
                    path { d: "M10 6h4" }
                    path { d: "M10 10h4" }
                    path { d: "M10 14h4" }
                    path { d: "M10 18h4" }
                  }
                }
                div {
                  h3 { "{issuer.name}" }
                  p { class: "spotlight-ticker", "{issuer.ticker}" }
                }
              }
              span { class: "rating-chip", "{issuer.rating}" }
            }
            p { class: "spotlight-blurb", "{issuer.description}" }
            if let Some(bond) = featured {
              div {
                class: "spotlight-stats",
                div {
                  class: "spotlight-stat",
                  div {
                    class: "stat-key",
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
                      path { d: "M8 2v4" }
                      path { d: "M16 2v4" }
                      rect { x: "3", y: "4", width: "18", height: "18", rx: "2" }
                      path { d: "M3 10h18" }
                    }
                    span { "Maturity" }
                  }
                  span { class: "stat-figure", {bond.maturity.year().to_string()} }
                }
                div {
                  class: "spotlight-stat",
                  div {
                    class: "stat-key",
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
                      line { x1: "19", y1: "5", x2: "5", y2: "19" }
                      circle { cx: "6.5", cy: "6.5", r: "2.5" }
                      circle { cx: "17.5", cy: "17.5", r: "2.5" }
                    }
                    span { "Coupon" }
                  }
                  span { class: "stat-figure", {format!("{:.2}%", bond.coupon)} }
                }
                div {
                  class: "spotlight-stat",
                  div {
                    class: "stat-key",
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
                      line { x1: "12", y1: "2", x2: "12", y2: "22" }
                      path { d: "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6" }
                    }
                    span { "Price" }
                  }
                  span { class: "stat-figure", {format_price(bond.price)} }
                }
                div {
                  class: "spotlight-stat stat-last",
                  div {
                    class: "stat-key",
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
                      polyline { points: "22 7 13.5 15.5 8.5 10.5 2 17" }
                      polyline { points: "16 7 22 7 22 13" }
                    }
                    span { "Yield" }
                  }
                  span { class: "stat-figure text-cyan", {format_yield(bond.yield_pct)} }
                }
              }
            }
            div {
              class: "debt-box",
              p { class: "stat-label", "Total Debt Outstanding" }
              p { class: "debt-figure", {format_total_debt(issuer.total_debt)} }
            }
            div {
              class: "spotlight-nav",
              button {
                class: "pager-button",
                onclick: move |_| ring.write().prev(),
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
                  path { d: "m15 18-6-6 6-6" }
                }
                span { "Previous" }
              }
              span { class: "pager-counter", "{position} / {total}" }
              button {
                class: "pager-button",
                onclick: move |_| ring.write().next(),
                span { "Next" }
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
                  path { d: "m9 18 6-6-6-6" }
                }
              }
            }
          }
        }
        div {
          class: "dot-row",
          for idx in 0..total {
            button {
              key: "{idx}",
              class: if idx == ring().index() {"dot dot-active"} else {"dot"},
              onclick: move |_| ring.write().select(idx),
            }
          }
        }
      }
    }
  }
}
