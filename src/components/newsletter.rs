use std::time::Duration;
use chrono::{Datelike, Utc};
use dioxus::prelude::*;
use crate::components::nav::BellIcon;
use crate::utils::motion::{Ease, Segment, Style, Timeline};
use crate::utils::scroll::use_scroll_progress;

// The document ends inside this section, so progress tops out near 0.5 and
// the exit band never actually runs. The card stays put at the bottom.
const CARD_TIMELINE: Timeline = Timeline {
  enter: Segment {
    start: 0.15,
    end: 0.35,
    from: Style::REST.with_shift(0.0, 10.0).with_scale(0.98).with_opacity(0.0),
    to: Style::REST,
    ease: Ease::CubicOut,
  },
  exit: Segment {
    start: 0.55,
    end: 0.75,
    from: Style::REST,
    to: Style::REST.with_opacity(0.3),
    ease: Ease::CubicIn,
  },
};

fn form_segment(idx: usize) -> Segment {
  let offset = idx as f64 * 0.03;
  Segment {
    start: 0.2 + offset,
    end: 0.4 + offset,
    from: Style::REST.with_shift(0.0, 1.2).with_opacity(0.0),
    to: Style::REST,
    ease: Ease::CubicOut,
  }
}

fn footer_segment(idx: usize) -> Segment {
  let offset = idx as f64 * 0.025;
  Segment {
    start: 0.25 + offset,
    end: 0.45 + offset,
    from: Style::REST.with_shift(0.0, 0.8).with_opacity(0.0),
    to: Style::REST,
    ease: Ease::CubicOut,
  }
}

#[component]
pub fn Newsletter() -> Element {
  let progress = use_scroll_progress("updates");
  let mut email = use_signal(String::new);
  let mut subscribed = use_signal(|| false);

  let p = progress();
  let year = Utc::now().year();

  rsx!{
    section { id: "updates", class: "section newsletter-section",
      div { class: "section-inner",
        div { class: "newsletter-wrap", style: CARD_TIMELINE.style_at(p).css(),
          div { class: "card-terminal newsletter-card",
            div { class: "newsletter-head",
              div { class: "icon-badge badge-large",
                BellIcon { }
              }
              h2 { class: "newsletter-title", "Get AI bond alerts" }
              p { class: "newsletter-blurb", "Weekly summaries + unusual movement alerts." }
            }
            form {
              class: "newsletter-form",
              onsubmit: move |_evt| async move {
                if email().trim().is_empty() {
                  return;
                }
                subscribed.set(true);
                async_std::task::sleep(Duration::from_secs(3)).await;
                email.set(String::new());
                subscribed.set(false);
              },
              div { class: "mail-box", style: form_segment(0).style_at(p).css(),
                MailIcon { }
                input {
                  class: "input-terminal mail-input",
                  r#type: "email",
                  placeholder: "Enter your email",
                  required: true,
                  value: "{email}",
                  oninput: move |evt| email.set(evt.value()),
                }
              }
              button {
                r#type: "submit",
                class: if subscribed() { "btn-primary subscribe-button btn-subscribed" } else { "btn-primary subscribe-button" },
                style: form_segment(1).style_at(p).css(),
                if subscribed() {
                  ShieldIcon { }
                  "Subscribed!"
                } else {
                  BellIcon { }
                  "Subscribe"
                }
              }
            }
            p { class: "newsletter-note", style: form_segment(2).style_at(p).css(),
              "No spam. Unsubscribe anytime."
            }
            div { class: "benefit-grid", style: form_segment(3).style_at(p).css(),
              div { class: "benefit-item", span { class: "benefit-dot" } "Weekly digest" }
              div { class: "benefit-item", span { class: "benefit-dot" } "Price alerts" }
              div { class: "benefit-item", span { class: "benefit-dot" } "AI summaries" }
              div { class: "benefit-item", span { class: "benefit-dot" } "New issuance" }
            }
          }
        }
        footer { class: "site-footer",
          div { class: "footer-row",
            div { class: "footer-brand",
              span { class: "footer-logo", "AI" }
              span { class: "footer-name", "Bond Tracker" }
            }
            div { class: "footer-links",
              a { class: "footer-link", href: "#", style: footer_segment(0).style_at(p).css(),
                ShieldIcon { }
                "Privacy"
              }
              a { class: "footer-link", href: "#", style: footer_segment(1).style_at(p).css(),
                FileTextIcon { }
                "Terms"
              }
              a { class: "footer-link", href: "#", style: footer_segment(2).style_at(p).css(),
                UsersIcon { }
                "Contact"
              }
              a { class: "footer-link", href: "#", style: footer_segment(3).style_at(p).css(),
                CodeIcon { }
                "API docs"
              }
            }
            p { class: "footer-copy", "© {year} AI Bond Tracker. All rights reserved." }
          }
        }
      }
    }
  }
}

#[component]
fn MailIcon() -> Element {
  rsx!{
    svg {
      xmlns: "http://www.w3.org/2000/svg",
      width: "18",
      height: "18",
      view_box: "0 0 24 24",
      fill: "none",
      stroke: "currentcolor",
      stroke_width: "2",
      stroke_linecap: "round",
      stroke_linejoin: "round",
      rect { x: "2", y: "4", width: "20", height: "16", rx: "2" }
      path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
    }
  }
}

#[component]
fn ShieldIcon() -> Element {
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
      path {
        d: "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"
      }
    }
  }
}

#[component]
fn FileTextIcon() -> Element {
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
      path { d: "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" }
      path { d: "M14 2v4a2 2 0 0 0 2 2h4" }
      path { d: "M10 9H8" }
      path { d: "M16 13H8" }
      path { d: "M16 17H8" }
    }
  }
}

#[component]
fn UsersIcon() -> Element {
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
      path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
      circle { cx: "9", cy: "7", r: "4" }
      path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
      path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
    }
  }
}

#[component]
fn CodeIcon() -> Element {
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
      path { d: "m16 18 6-6-6-6" }
      path { d: "m8 6-6 6 6 6" }
    }
  }
}
