use dioxus::prelude::*;
use crate::Route;
use crate::utils::scroll::{scroll_to, use_scrolled_past};

const NAV_ITEMS: [(&str, &str); 4] = [
  ("Bonds", "bonds"),
  ("Issuers", "issuers"),
  ("Analytics", "analytics"),
  ("Updates", "updates"),
];

// solid nav background once the hero headline starts sliding under it
const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[component]
pub fn NavBar() -> Element {
  static CSS: Asset = asset!("assets/main.css");

  rsx! {
    document::Stylesheet {href: CSS},
    SiteNav { }
    Outlet::<Route> {}
  }
}

#[component]
fn SiteNav() -> Element {
  let scrolled = use_scrolled_past(SCROLL_THRESHOLD_PX);
  let mut menu_open = use_signal(|| false);

  rsx!{
    nav {
      class: if scrolled() {"site-nav site-nav-scrolled"} else {"site-nav"},
      div {
        class: "nav-container",
        div {
          class: "nav-brand",
          svg {
            class: "brand-icon",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentcolor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path {
              d: "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"
            }
          }
          span { "AI Bond Tracker" }
        }
        div {
          class: "nav-links",
          for (label, anchor) in NAV_ITEMS {
            button {
              key: "{label}",
              class: "nav-link",
              onclick: move |_| scroll_to(anchor),
              "{label}"
            }
          }
        }
        div {
          class: "nav-actions",
          button {
            class: "nav-link",
            "Sign in"
          }
          button {
            class: "btn-outline btn-small",
            BellIcon { }
            "Get alerts"
          }
        }
        button {
          class: "menu-button",
          onclick: move |_| {
            let open = menu_open();
            menu_open.set(!open);
          },
          if menu_open() {
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "24",
              height: "24",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              path { d: "M18 6 6 18" }
              path { d: "m6 6 12 12" }
            }
          } else {
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "24",
              height: "24",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              path { d: "M4 6h16" }
              path { d: "M4 12h16" }
              path { d: "M4 18h16" }
            }
          }
        }
      }
      if menu_open() {
        div {
          class: "mobile-menu",
          for (label, anchor) in NAV_ITEMS {
            button {
              key: "{label}",
              class: "mobile-menu-link",
              onclick: move |_| {
                scroll_to(anchor);
                menu_open.set(false);
              },
              "{label}"
            }
          }
          div {
            class: "mobile-menu-actions",
            button {
              class: "mobile-menu-link",
              "Sign in"
            }
            button {
              class: "btn-outline",
              BellIcon { }
              "Get alerts"
            }
          }
        }
      }
    }
  }
}

#[component]
pub fn BellIcon() -> Element {
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
      path { d: "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" }
      path { d: "M10.3 21a1.94 1.94 0 0 0 3.4 0" }
    }
  }
}
