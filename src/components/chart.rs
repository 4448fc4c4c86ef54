use charming::{
  component::{Axis, Grid},
  element::{
    AxisLabel, AxisType, Color, LineStyle, LineStyleType, MarkLine, MarkLineData,
    MarkLineVariant, SplitLine, Symbol, Tooltip, Trigger,
  },
  series::Line,
  Chart, WasmRenderer,
};
use chrono::Utc;
use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use crate::data::bonds::{self, format_price};
use crate::pages::home::ChartRuntime;
use crate::utils::history::{
  clip_range, price_history, seed_for, series_stats, TimeRange, BOND_VOLATILITY,
};
use crate::utils::motion::{Ease, Segment, Style, Timeline};
use crate::utils::scroll::use_scroll_progress;

static CANVAS_ID: &str = "bond-history-chart";

const PANEL_TIMELINE: Timeline = Timeline {
  enter: Segment {
    start: 0.15,
    end: 0.35,
    from: Style::REST.with_shift(-6.0, 0.0).with_opacity(0.0),
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

const CHART_TIMELINE: Timeline = Timeline {
  enter: Segment {
    start: 0.17,
    end: 0.37,
    from: Style::REST.with_shift(6.0, 0.0).with_scale(0.98).with_opacity(0.0),
    to: Style::REST,
    ease: Ease::CubicOut,
  },
  exit: Segment {
    start: 0.6,
    end: 0.9,
    from: Style::REST,
    to: Style::REST.with_shift(0.0, -5.0).with_opacity(0.25),
    ease: Ease::CubicIn,
  },
};

#[component]
pub fn HistoricChart() -> Element {
  let progress = use_scroll_progress("analytics");
  let echarts_ready = use_context::<ChartRuntime>().echarts_ready;
  let mut selected: Signal<&'static bonds::Bond> = use_signal(|| &bonds::bonds()[0]);
  let mut range = use_signal(|| TimeRange::All);
  let renderer = use_signal(|| WasmRenderer::new(860, 420));

  // Reselecting a bond replays its own seeded walk, switching ranges only
  // clips the series that is already there.
  let full_series = use_memo(move || {
    let bond = selected();
    let base = bond.price.to_f64().expect("fixture price fits in f64");
    price_history(base, BOND_VOLATILITY, seed_for(bond.id), Utc::now().date_naive())
  });
  let visible = use_memo(move || clip_range(&full_series(), range(), Utc::now().date_naive()));

  use_effect(move || {
    if !echarts_ready() {
      return;
    }
    let window = visible();
    let x_labels: Vec<String> = window.iter().map(|p| p.date.format("%b %y").to_string()).collect();
    let prices: Vec<f64> = window.iter().map(|p| p.price).collect();

    let chart = Chart::new()
    .background_color("transparent")
    .color(vec![Color::Value("#29e7f3".to_string())])
    .tooltip(
      Tooltip::new()
      .trigger(Trigger::Axis)
    )
    .grid(
      Grid::new()
      .left("3%")
      .right("3%")
      .top("6%")
      .bottom("6%")
      .contain_label(true)
    )
    .x_axis(
      Axis::new()
      .type_(AxisType::Category)
      .data(x_labels)
      .axis_label(
        AxisLabel::new()
        .color("#a7b1c8")
      )
    )
    .y_axis(
      Axis::new()
      .type_(AxisType::Value)
      .scale(true)
      .split_line(
        SplitLine::new()
        .line_style(
          LineStyle::new()
          .color("rgba(41, 231, 243, 0.1)")
        )
      )
      .axis_label(
        AxisLabel::new()
        .color("#a7b1c8")
      )
    )
    .series(
      Line::new()
      .name("Price")
      .smooth(0.5)
      .symbol(Symbol::None)
      .line_style(
        LineStyle::new()
        .color("#29e7f3")
        .width(2.0)
      )
      .mark_line(
        MarkLine::new()
        .symbol(vec![Symbol::None, Symbol::None])
        .line_style(
          LineStyle::new()
          .color("rgba(41, 231, 243, 0.3)")
          .type_(LineStyleType::Dashed)
        )
        .data(vec![MarkLineVariant::Simple(
          MarkLineData::new().name("Par").y_axis(100.0),
        )])
      )
      .data(prices)
    );

    if let Err(err) = renderer.read_unchecked().render(CANVAS_ID, &chart) {
      error!("price history chart render failed: {err:?}");
    }
  });

  let p = progress();
  let bond = selected();
  let window = visible();
  let stats = series_stats(&full_series(), &window);
  let point_count = window.len();
  let current_price = format_price(bond.price);
  let change_text = match stats {
    Some(s) if s.period_change >= 0.0 => format!("+{:.2} ({:.1}%)", s.period_change, s.period_change_pct),
    Some(s) => format!("{:.2} ({:.1}%)", s.period_change, s.period_change_pct),
    None => "--".to_string(),
  };
  let change_up = stats.map(|s| s.period_change >= 0.0).unwrap_or(true);
  let high_text = stats.map(|s| format!("{:.2}", s.high)).unwrap_or_else(|| "--".to_string());
  let low_text = stats.map(|s| format!("{:.2}", s.low)).unwrap_or_else(|| "--".to_string());
  let updated = Utc::now().date_naive().format("%-m/%-d/%Y").to_string();

  rsx!{
    section { id: "analytics", class: "section chart-section",
      div { class: "section-inner",
        div { class: "chart-grid",
          div { class: "chart-panel", style: PANEL_TIMELINE.style_at(p).css(),
            div {
              h2 { class: "section-title", "Historic Prices" }
              p { class: "section-blurb",
                "Daily closes since 2019. Compare spreads, yields, and momentum across issuers."
              }
            }
            div { class: "bond-picker",
              label { class: "picker-label", "Select Bond" }
              select {
                class: "input-terminal bond-select",
                value: "{bond.id}",
                onchange: move |evt| {
                  if let Some(pick) = bonds::bond_by_id(&evt.value()) {
                    selected.set(pick);
                  }
                },
                for b in bonds::bonds() {
                  option { key: "{b.id}", value: "{b.id}", {b.title()} }
                }
              }
            }
            div { class: "card-terminal stats-card",
              div { class: "stats-row",
                span { class: "stats-key", "Current Price" }
                span { class: "stats-value", "{current_price}" }
              }
              div { class: "stats-row",
                span { class: "stats-key", "Period Change" }
                span {
                  class: if change_up { "stats-value text-positive" } else { "stats-value text-negative" },
                  "{change_text}"
                }
              }
              div { class: "stats-row",
                span { class: "stats-key", "52W High" }
                span { class: "stats-value", "{high_text}" }
              }
              div { class: "stats-row",
                span { class: "stats-key", "52W Low" }
                span { class: "stats-value", "{low_text}" }
              }
            }
            button { class: "btn-outline download-button",
              DownloadIcon { }
              "Download CSV"
            }
          }
          div { class: "chart-stage", style: CHART_TIMELINE.style_at(p).css(),
            div { class: "card-terminal chart-card",
              div { class: "chart-card-head",
                div { class: "chart-title-group",
                  div { class: "icon-badge",
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
                      path { d: "M22 7 13.5 15.5 8.5 10.5 2 17" }
                      path { d: "M16 7h6v6" }
                    }
                  }
                  div {
                    h3 { class: "chart-title", {bond.title()} }
                    p { class: "chart-isin", "{bond.isin}" }
                  }
                }
                div { class: "range-picker",
                  for r in TimeRange::ALL {
                    button {
                      key: "{r:?}",
                      class: if range() == r { "range-button range-active" } else { "range-button" },
                      onclick: move |_| range.set(r),
                      {r.label()}
                    }
                  }
                }
              }
              div {
                id: CANVAS_ID,
                class: "chart-canvas",
                onmounted: move |_evt| {
                  document::eval(
                    r#"
                    var millis = 350;
                    setTimeout(function() {
                        const element = document.getElementById('bond-history-chart');
                        if (!element) {console.log('no element found');}
                        var chart = echarts.getInstanceByDom(element);
                        if (!chart) {console.log('no chart found');}
                        window.addEventListener('resize', function() {
                            chart.resize();
                        });
                    }, millis)
                    "#);
                }
              }
              div { class: "chart-card-foot",
                div { class: "chart-foot-meta",
                  span { class: "foot-item",
                    CalendarIcon { }
                    "{point_count} data points"
                  }
                  span { class: "foot-item",
                    InfoIcon { }
                    "Daily closes"
                  }
                }
                span { class: "foot-updated", "Last updated: {updated}" }
              }
            }
          }
        }
      }
    }
  }
}

#[component]
fn DownloadIcon() -> Element {
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
      path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
      path { d: "m7 10 5 5 5-5" }
      path { d: "M12 15V3" }
    }
  }
}

#[component]
fn CalendarIcon() -> Element {
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
      path { d: "M8 2v4" }
      path { d: "M16 2v4" }
      rect { x: "3", y: "4", width: "18", height: "18", rx: "2" }
      path { d: "M3 10h18" }
    }
  }
}

#[component]
fn InfoIcon() -> Element {
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
      circle { cx: "12", cy: "12", r: "10" }
      path { d: "M12 16v-4" }
      path { d: "M12 8h.01" }
    }
  }
}
