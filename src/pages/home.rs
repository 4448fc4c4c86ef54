use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use crate::components::ai_panel::AiPanel;
use crate::components::chart::HistoricChart;
use crate::components::hero::Hero;
use crate::components::newsletter::Newsletter;
use crate::components::price_table::LivePriceTable;
use crate::components::spotlight::IssuerSpotlight;

/// Charts cannot draw before the echarts bundle is on the page, so readiness
/// is shared through context and chart renders are gated on it.
#[derive(Clone)]
pub struct ChartRuntime {
  pub echarts_ready: Signal<bool>,
}

#[component]
pub fn Home() -> Element {
  let mut echarts_ready = use_signal(|| false);
  use_context_provider(|| ChartRuntime { echarts_ready });

  use_future(move || async move {
    let mut loader = document::eval(
      r#"
      function loadScript(src, callback) {
      const scriptElem = document.createElement('script');
      scriptElem.src = src;
      scriptElem.async = true;
      scriptElem.onload = callback;
      scriptElem.onerror = function() {
        console.error(`Error loading script: ${src}`);
      };
      document.head.appendChild(scriptElem);
      }

      if (window.echarts) {
        dioxus.send(true);
      } else {
        loadScript('https://cdn.jsdelivr.net/npm/echarts@5.6.0/dist/echarts.min.js', function() {
          dioxus.send(true);
        });
      }
      "#);
    match loader.recv::<bool>().await {
      Ok(_) => echarts_ready.set(true),
      Err(err) => error!("echarts loader channel closed: {err:?}"),
    }
  });

  static CSS: Asset = asset!("assets/home.css");
  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "home-page",
      div { class: "grain-overlay" }
      Hero { }
      AiPanel { }
      IssuerSpotlight { }
      LivePriceTable { }
      HistoricChart { }
      Newsletter { }
    }
  }
}
