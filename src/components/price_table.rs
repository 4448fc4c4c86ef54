use dioxus::prelude::*;
use rust_decimal::Decimal;
use crate::components::ai_panel::SparkIcon;
use crate::data::bonds::{self, format_change, format_maturity, format_price, format_volume, format_yield};
use crate::utils::motion::{Ease, Segment, Style, Timeline};
use crate::utils::scroll::use_scroll_progress;
use crate::utils::table::{BondQuery, RowExpansion, SortField};

// Header eases in a beat ahead of the table card. Row-level animation is
// deliberately absent, it fights the DOM churn from filtering and sorting.
const HEAD_TIMELINE: Timeline = Timeline {
  enter: Segment {
    start: 0.15,
    end: 0.3,
    from: Style::REST.with_shift(0.0, -4.0).with_opacity(0.0),
    to: Style::REST,
    ease: Ease::CubicOut,
  },
  exit: Segment {
    start: 0.6,
    end: 0.9,
    from: Style::REST,
    to: Style::REST.with_opacity(0.3),
    ease: Ease::CubicIn,
  },
};

const TABLE_TIMELINE: Timeline = Timeline {
  enter: Segment {
    start: 0.17,
    end: 0.37,
    from: Style::REST.with_shift(0.0, 10.0).with_scale(0.98).with_opacity(0.0),
    to: Style::REST,
    ease: Ease::CubicOut,
  },
  exit: Segment {
    start: 0.6,
    end: 0.9,
    from: Style::REST,
    to: Style::REST.with_shift(0.0, -6.0).with_opacity(0.25),
    ease: Ease::CubicIn,
  },
};

#[component]
pub fn LivePriceTable() -> Element {
  let progress = use_scroll_progress("bonds");
  let mut query = use_signal(BondQuery::default);
  let mut expansion = use_signal(|| RowExpansion::Collapsed);

  let p = progress();
  let q = query();
  let visible = q.apply(bonds::bonds());
  let shown = visible.len();
  let total = bonds::bonds().len();
  let rating_filter = q.rating;

  rsx!{
    section { id: "bonds", class: "section table-section",
      div { class: "section-inner",
        div { class: "table-head", style: HEAD_TIMELINE.style_at(p).css(),
          div {
            h2 { class: "section-title", "Live Prices" }
            p { class: "section-blurb", "Investment-grade tech issuers. Updated every 60 seconds." }
          }
          div { class: "table-controls",
            div { class: "search-box",
              SearchIcon { }
              input {
                class: "input-terminal search-input",
                r#type: "text",
                placeholder: "Search bonds...",
                value: "{q.search}",
                oninput: move |evt| query.write().search = evt.value(),
              }
            }
            div { class: "rating-filter",
              button { class: "btn-outline btn-small rating-trigger",
                FilterIcon { }
                "Rating"
                ChevronDownIcon { }
              }
              div { class: "rating-menu card-terminal",
                button {
                  class: if rating_filter.is_none() { "rating-option rating-option-active" } else { "rating-option" },
                  onclick: move |_| query.write().rating = None,
                  "All Ratings"
                }
                for rating in bonds::ratings() {
                  button {
                    key: "{rating}",
                    class: if rating_filter == Some(rating) { "rating-option rating-option-active" } else { "rating-option" },
                    onclick: move |_| query.write().rating = Some(rating),
                    "{rating}"
                  }
                }
              }
            }
          }
        }
        div { class: "card-terminal table-card", style: TABLE_TIMELINE.style_at(p).css(),
          div { class: "table-scroll",
            table { class: "price-table",
              thead {
                tr {
                  SortHeader { label: "Issuer", field: SortField::Issuer, right: false, query }
                  th { class: "th-cell", "ISIN" }
                  SortHeader { label: "Coupon", field: SortField::Coupon, right: true, query }
                  th { class: "th-cell", "Maturity" }
                  SortHeader { label: "Price", field: SortField::Price, right: true, query }
                  SortHeader { label: "Yield", field: SortField::Yield, right: true, query }
                  SortHeader { label: "Chg", field: SortField::Change, right: true, query }
                  th { class: "th-cell th-center", "Rating" }
                  th { class: "th-cell th-blank" }
                }
              }
              tbody {
                for bond in visible {
                  tr {
                    key: "{bond.id}",
                    class: "bond-row",
                    onclick: move |_| expansion.write().toggle(bond.id),
                    td { class: "td-cell",
                      div { class: "issuer-cell",
                        span { class: "issuer-monogram", {bond.issuer[..2].to_ascii_uppercase()} }
                        span { class: "issuer-name", "{bond.issuer}" }
                      }
                    }
                    td { class: "td-cell td-mono td-muted", "{bond.isin}" }
                    td { class: "td-cell td-mono td-right", {format!("{:.2}%", bond.coupon)} }
                    td { class: "td-cell td-mono td-muted", {format_maturity(bond.maturity)} }
                    td { class: "td-cell td-mono td-right", {format_price(bond.price)} }
                    td { class: "td-cell td-mono td-right text-cyan", {format_yield(bond.yield_pct)} }
                    td { class: "td-cell td-right",
                      span {
                        class: if bond.change.is_sign_negative() { "change-cell text-negative" } else { "change-cell text-positive" },
                        {trend_icon(bond.change)}
                        {format_change(bond.change)}
                      }
                    }
                    td { class: "td-cell td-center",
                      span { class: "rating-chip", "{bond.rating}" }
                    }
                    td { class: "td-cell td-sparkle",
                      if bond.ai_summary.is_some() {
                        span { class: "sparkle-mark", SparkIcon { } }
                      }
                    }
                  }
                  if expansion().is_expanded(bond.id) {
                    if let Some(summary) = bond.ai_summary {
                      tr { key: "x-{bond.id}", class: "summary-row",
                        td { colspan: "9", class: "summary-cell",
                          div { class: "summary-body",
                            span { class: "sparkle-mark", SparkIcon { } }
                            div {
                              p { class: "summary-label", "AI Summary" }
                              p { class: "summary-text", "{summary}" }
                              div { class: "summary-meta",
                                span { {format!("Volume: {}", format_volume(bond.volume))} }
                                button { class: "link-cyan summary-details",
                                  "View details"
                                  ChevronUpIcon { }
                                }
                              }
                            }
                          }
                        }
                      }
                    }
                  }
                }
              }
            }
          }
          div { class: "table-foot",
            div { class: "table-legend",
              span { class: "legend-item",
                span { class: "legend-glyph text-positive", TrendUpIcon { } }
                "Price up"
              }
              span { class: "legend-item",
                span { class: "legend-glyph text-negative", TrendDownIcon { } }
                "Price down"
              }
              span { class: "legend-item",
                span { class: "legend-glyph sparkle-mark", SparkIcon { } }
                "AI summary available"
              }
            }
            span { class: "table-count", "Showing {shown} of {total} bonds" }
          }
        }
      }
    }
  }
}

#[component]
fn SortHeader(label: &'static str, field: SortField, right: bool, mut query: Signal<BondQuery>) -> Element {
  rsx!{
    th { class: if right { "th-cell th-right" } else { "th-cell" },
      button { class: "th-sort", onclick: move |_| query.write().sort_on(field),
        "{label}"
        SortIcon { }
      }
    }
  }
}

fn trend_icon(change: Decimal) -> Element {
  if change > Decimal::ZERO {
    rsx!{ TrendUpIcon { } }
  } else if change < Decimal::ZERO {
    rsx!{ TrendDownIcon { } }
  } else {
    rsx!{ MinusIcon { } }
  }
}

#[component]
fn SearchIcon() -> Element {
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
      circle { cx: "11", cy: "11", r: "8" }
      path { d: "m21 21-4.3-4.3" }
    }
  }
}

#[component]
fn FilterIcon() -> Element {
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
      polygon { points: "22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3" }
    }
  }
}

#[component]
fn SortIcon() -> Element {
  rsx!{
    svg {
      xmlns: "http://www.w3.org/2000/svg",
      width: "12",
      height: "12",
      view_box: "0 0 24 24",
      fill: "none",
      stroke: "currentcolor",
      stroke_width: "2",
      stroke_linecap: "round",
      stroke_linejoin: "round",
      path { d: "m21 16-4 4-4-4" }
      path { d: "M17 20V4" }
      path { d: "m3 8 4-4 4 4" }
      path { d: "M7 4v16" }
    }
  }
}

#[component]
fn ChevronDownIcon() -> Element {
  rsx!{
    svg {
      xmlns: "http://www.w3.org/2000/svg",
      width: "12",
      height: "12",
      view_box: "0 0 24 24",
      fill: "none",
      stroke: "currentcolor",
      stroke_width: "2",
      stroke_linecap: "round",
      stroke_linejoin: "round",
      path { d: "m6 9 6 6 6-6" }
    }
  }
}

#[component]
fn ChevronUpIcon() -> Element {
  rsx!{
    svg {
      xmlns: "http://www.w3.org/2000/svg",
      width: "12",
      height: "12",
      view_box: "0 0 24 24",
      fill: "none",
      stroke: "currentcolor",
      stroke_width: "2",
      stroke_linecap: "round",
      stroke_linejoin: "round",
      path { d: "m18 15-6-6-6 6" }
    }
  }
}

#[component]
fn TrendUpIcon() -> Element {
  rsx!{
    svg {
      xmlns: "http://www.w3.org/2000/svg",
      width: "14",
      height: "14",
      view_box: "0 0 24 24",
      fill: "none",
      stroke: "currentcolor",
      stroke_width: "2",
      stroke_linecap: "round",
      stroke_linejoin: "round",
      path { d: "M22 7 13.5 15.5 8.5 10.5 2 17" }
      path { d: "M16 7h6v6" }
    }
  }
}

#[component]
fn TrendDownIcon() -> Element {
  rsx!{
    svg {
      xmlns: "http://www.w3.org/2000/svg",
      width: "14",
      height: "14",
      view_box: "0 0 24 24",
      fill: "none",
      stroke: "currentcolor",
      stroke_width: "2",
      stroke_linecap: "round",
      stroke_linejoin: "round",
      path { d: "M22 17 13.5 8.5 8.5 13.5 2 7" }
      path { d: "M16 17h6v-6" }
    }
  }
}

#[component]
fn MinusIcon() -> Element {
  rsx!{
    svg {
      xmlns: "http://www.w3.org/2000/svg",
      width: "14",
      height: "14",
      view_box: "0 0 24 24",
      fill: "none",
      stroke: "currentcolor",
      stroke_width: "2",
      stroke_linecap: "round",
      stroke_linejoin: "round",
      path { d: "M5 12h14" }
    }
  }
}
