use dioxus::prelude::*;
use crate::utils::motion::{Ease, Segment, Style, Timeline};
use crate::utils::scroll::use_scroll_progress;

const CARD_TIMELINE: Timeline = Timeline {
  enter: Segment {
    start: 0.15,
    end: 0.35,
    from: Style::REST.with_shift(-8.0, 0.0).with_opacity(0.0),
    to: Style::REST,
    ease: Ease::CubicOut,
  },
  exit: Segment {
    start: 0.6,
    end: 0.9,
    from: Style::REST,
    to: Style::REST.with_shift(-6.0, 0.0).with_opacity(0.35),
    ease: Ease::CubicIn,
  },
};

const DIAGRAM_TIMELINE: Timeline = Timeline {
  enter: Segment {
    start: 0.17,
    end: 0.38,
    from: Style::REST.with_opacity(0.0),
    to: Style::REST,
    ease: Ease::CubicOut,
  },
  exit: Segment {
    start: 0.6,
    end: 0.9,
    from: Style::REST,
    to: Style::REST.with_shift(6.0, 0.0).with_opacity(0.3),
    ease: Ease::CubicIn,
  },
};

// nodes and connectors pop in staggered by their index in the flow
fn node_segment(idx: usize) -> Segment {
  let offset = idx as f64 * 0.012;
  Segment {
    start: 0.18 + offset,
    end: 0.34 + offset,
    from: Style::REST.with_opacity(0.0).with_scale(0.9),
    to: Style::REST,
    ease: Ease::CubicOut,
  }
}

fn line_segment(idx: usize) -> Segment {
  let offset = idx as f64 * 0.015;
  Segment {
    start: 0.21 + offset,
    end: 0.36 + offset,
    from: Style::REST.with_scale(0.0).with_opacity(0.0),
    to: Style::REST,
    ease: Ease::CubicOut,
  }
}

#[component]
pub fn AiPanel() -> Element {
  let progress = use_scroll_progress("ai-features");
  let p = progress();
  let card_style = CARD_TIMELINE.style_at(p);
  let diagram_style = DIAGRAM_TIMELINE.style_at(p);

  rsx!{
    section {
      id: "ai-features",
      class: "section ai-section",
      div {
        class: "section-inner",
        div {
          class: "ai-grid",
          div {
            class: "card-terminal ai-card",
            style: card_style.css(),
            div {
              class: "ai-card-head",
              div {
                class: "icon-badge",
                SparkIcon { }
              }
              h2 { "What the AI sees" }
            }
            div {
              class: "feature-list",
              div {
                class: "feature-row",
                div {
                  class: "feature-icon",
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
                    path { d: "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z" }
                    path { d: "M14 2v4a2 2 0 0 0 2 2h4" }
                    path { d: "M10 9H8" }
                    path { d: "M16 13H8" }
                    path { d: "M16 17H8" }
                  }
                }
                p { "Summarizes issuer filings and earnings calls" }
              }
              div {
                class: "feature-row",
                div {
                  class: "feature-icon",
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
                }
                p { "Maps yield changes to news sentiment" }
              }
              div {
                class: "feature-row",
                div {
                  class: "feature-icon",
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
                    path { d: "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 20h16a2 2 0 0 0 1.73-2" }
                    path { d: "M12 9v4" }
                    path { d: "M12 17h.01" }
                  }
                }
                p { "Surfaces outliers before the market does" }
              }
            }
            div {
              class: "ai-card-foot",
              button {
                class: "link-cyan",
                "Learn more about the model"
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
          }
          div {
            class: "ai-diagram",
            style: diagram_style.css(),
            svg {
              class: "diagram-canvas",
              view_box: "0 0 400 400",
              fill: "none",
              // left column feeds the model, right column takes its output
              for i in 0..4 {
                rect {
                  key: "dl{i}",
                  class: "diagram-node",
                  style: node_segment(i).style_at(p).css(),
                  x: "40",
                  y: 60 + (i as i32) * 80,
                  width: "48",
                  height: "48",
                  rx: "8",
                  fill: "rgba(41, 231, 243, 0.15)",
                  stroke: "rgba(41, 231, 243, 0.5)",
                  stroke_width: "1.5",
                }
              }
              for i in 0..4 {
                rect {
                  key: "dr{i}",
                  class: "diagram-node",
                  style: node_segment(i + 4).style_at(p).css(),
                  x: "312",
                  y: 60 + (i as i32) * 80,
                  width: "48",
                  height: "48",
                  rx: "8",
                  fill: "rgba(41, 231, 243, 0.15)",
                  stroke: "rgba(41, 231, 243, 0.5)",
                  stroke_width: "1.5",
                }
              }
              circle {
                class: "diagram-node",
                style: node_segment(8).style_at(p).css(),
                cx: "200",
                cy: "200",
                r: "40",
                fill: "rgba(41, 231, 243, 0.2)",
                stroke: "rgba(41, 231, 243, 0.7)",
                stroke_width: "2",
              }
              text {
                x: "200",
                y: "205",
                text_anchor: "middle",
                fill: "#29e7f3",
                font_size: "12",
                "AI"
              }
              for i in 0..4 {
                line {
                  key: "ll{i}",
                  class: "diagram-line",
                  style: line_segment(i).style_at(p).css(),
                  x1: "88",
                  y1: 84 + (i as i32) * 80,
                  x2: "160",
                  y2: "200",
                  stroke: "rgba(41, 231, 243, 0.4)",
                  stroke_width: "1.5",
                  stroke_linecap: "round",
                }
              }
              for i in 0..4 {
                line {
                  key: "lr{i}",
                  class: "diagram-line",
                  style: line_segment(i + 4).style_at(p).css(),
                  x1: "312",
                  y1: 84 + (i as i32) * 80,
                  x2: "240",
                  y2: "200",
                  stroke: "rgba(41, 231, 243, 0.4)",
                  stroke_width: "1.5",
                  stroke_linecap: "round",
                }
              }
              line {
                class: "diagram-line",
                style: line_segment(8).style_at(p).css(),
                x1: "88",
                y1: "84",
                x2: "88",
                y2: "324",
                stroke: "rgba(41, 231, 243, 0.25)",
                stroke_width: "1",
                stroke_linecap: "round",
              }
              line {
                class: "diagram-line",
                style: line_segment(9).style_at(p).css(),
                x1: "312",
                y1: "84",
                x2: "312",
                y2: "324",
                stroke: "rgba(41, 231, 243, 0.25)",
                stroke_width: "1",
                stroke_linecap: "round",
              }
            }
            div { class: "diagram-label label-left", "Market Data" }
            div { class: "diagram-label label-right", "Insights" }
            div { class: "diagram-label label-bottom", "Real-time Processing" }
          }
        }
      }
    }
  }
}

#[component]
pub fn SparkIcon() -> Element {
  rsx!{
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
        d: "M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z"
      }
      path { d: "M20 3v4" }
      path { d: "M22 5h-4" }
    }
  }
}
