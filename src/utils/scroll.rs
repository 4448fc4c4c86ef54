use dioxus::prelude::*;
use serde::Deserialize;

/// Window listeners fire on every animation frame while the user scrolls, far
/// more often than a style update is visible. Writes into the progress signal
/// are gated below this interval unless the value lands on an edge.
const MIN_INTERVAL_MS: f64 = 40.0;
const MIN_DELTA: f64 = 0.004;

/// Geometry sample posted from the page: the section's bounding rect top and
/// height plus the viewport height, all in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScrollFrame {
  pub top: f64,
  pub height: f64,
  pub viewport: f64,
}

/// Progress of a section through the viewport: 0 while its top edge is still
/// below the fold, 1 once its bottom edge has left through the top.
pub fn section_progress(frame: &ScrollFrame) -> f64 {
  let span = frame.viewport + frame.height;
  if span <= 0.0 {
    return 0.0;
  }
  ((frame.viewport - frame.top) / span).clamp(0.0, 1.0)
}

/// Rate limiter for progress writes, keyed off `performance.now()`.
pub struct ProgressGate {
  perf: Option<web_sys::Performance>,
  last_emit_ms: f64,
  last_value: f64,
}

impl ProgressGate {
  pub fn new() -> Self {
    let perf = web_sys::window().and_then(|w| w.performance());
    ProgressGate {
      perf,
      last_emit_ms: f64::NEG_INFINITY,
      last_value: f64::NAN,
    }
  }

  pub fn admit(&mut self, value: f64) -> bool {
    let now = self.perf.as_ref().map(|p| p.now()).unwrap_or(0.0);
    let emit = should_emit(now - self.last_emit_ms, value - self.last_value, value);
    if emit {
      self.last_emit_ms = now;
      self.last_value = value;
    }
    emit
  }
}

fn should_emit(elapsed_ms: f64, delta: f64, value: f64) -> bool {
  // NaN delta means no sample has been admitted yet
  if delta.is_nan() {
    return true;
  }
  if delta.abs() < MIN_DELTA {
    return false;
  }
  // always land exactly on the endpoints so sections settle fully
  // entered or fully exited
  if value <= 0.0 || value >= 1.0 {
    return true;
  }
  elapsed_ms >= MIN_INTERVAL_MS
}

/// Tracks the section with the given element id through the viewport and
/// returns its scroll progress in [0, 1].
///
/// Mounting installs a window scroll/resize listener on the page; unmounting
/// removes it again. The listener samples at most once per animation frame
/// and the gate above drops writes that would not visibly move the section.
pub fn use_scroll_progress(section_id: &'static str) -> ReadOnlySignal<f64> {
  let mut progress = use_signal(|| 0.0_f64);
  use_future(move || async move {
    let mut frames = document::eval(&monitor_js(section_id));
    let mut gate = ProgressGate::new();
    loop {
      match frames.recv::<ScrollFrame>().await {
        Ok(frame) => {
          let sample = section_progress(&frame);
          if gate.admit(sample) {
            progress.set(sample);
          }
        }
        // channel closes when the section unmounts
        Err(_) => break,
      }
    }
  });
  use_drop(move || {
    document::eval(&release_js(section_id));
  });
  progress.into()
}

/// True once the window has scrolled past `threshold` pixels. Used by the
/// navigation bar to swap into its condensed style.
pub fn use_scrolled_past(threshold: f64) -> ReadOnlySignal<bool> {
  let mut passed = use_signal(|| false);
  use_future(move || async move {
    let mut samples = document::eval(WINDOW_MONITOR_JS);
    loop {
      match samples.recv::<f64>().await {
        Ok(scroll_y) => {
          let now_past = scroll_y > threshold;
          if now_past != passed() {
            passed.set(now_past);
          }
        }
        Err(_) => break,
      }
    }
  });
  use_drop(|| {
    document::eval(WINDOW_RELEASE_JS);
  });
  passed.into()
}

/// Smooth-scrolls the page to the element with the given id.
pub fn scroll_to(anchor: &str) {
  document::eval(&format!(
    r#"document.getElementById('{anchor}')?.scrollIntoView({{ behavior: 'smooth' }});"#
  ));
}

fn monitor_js(section_id: &str) -> String {
  format!(
    r#"
    (function() {{
        const KEY = '__scroll_probe_{section_id}';
        function hook() {{
            const el = document.getElementById('{section_id}');
            if (!el) {{
                setTimeout(hook, 120);
                return;
            }}
            let ticking = false;
            const sample = function() {{
                ticking = false;
                const rect = el.getBoundingClientRect();
                dioxus.send({{ top: rect.top, height: rect.height, viewport: window.innerHeight }});
            }};
            const listener = function() {{
                if (!ticking) {{
                    ticking = true;
                    requestAnimationFrame(sample);
                }}
            }};
            window[KEY] = listener;
            window.addEventListener('scroll', listener, {{ passive: true }});
            window.addEventListener('resize', listener, {{ passive: true }});
            sample();
        }}
        hook();
    }})();
    "#
  )
}

fn release_js(section_id: &str) -> String {
  format!(
    r#"
    (function() {{
        const KEY = '__scroll_probe_{section_id}';
        const listener = window[KEY];
        if (listener) {{
            window.removeEventListener('scroll', listener);
            window.removeEventListener('resize', listener);
            delete window[KEY];
        }}
    }})();
    "#
  )
}

const WINDOW_MONITOR_JS: &str = r#"
(function() {
    const KEY = '__scroll_probe_window';
    let ticking = false;
    const sample = function() {
        ticking = false;
        dioxus.send(window.scrollY);
    };
    const listener = function() {
        if (!ticking) {
            ticking = true;
            requestAnimationFrame(sample);
        }
    };
    window[KEY] = listener;
    window.addEventListener('scroll', listener, { passive: true });
    sample();
})();
"#;

const WINDOW_RELEASE_JS: &str = r#"
(function() {
    const KEY = '__scroll_probe_window';
    const listener = window[KEY];
    if (listener) {
        window.removeEventListener('scroll', listener);
        delete window[KEY];
    }
})();
"#;

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;

  fn frame(top: f64, height: f64, viewport: f64) -> ScrollFrame {
    ScrollFrame {
      top,
      height,
      viewport,
    }
  }

  #[test]
  fn test_progress_is_zero_below_the_fold() {
    assert_eq!(section_progress(&frame(900.0, 800.0, 900.0)), 0.0);
    assert_eq!(section_progress(&frame(2400.0, 800.0, 900.0)), 0.0);
  }

  #[test]
  fn test_progress_is_one_after_leaving_through_the_top() {
    assert_eq!(section_progress(&frame(-800.0, 800.0, 900.0)), 1.0);
    assert_eq!(section_progress(&frame(-3000.0, 800.0, 900.0)), 1.0);
  }

  #[test]
  fn test_progress_midpoints() {
    // section top at viewport top, equal heights
    assert_abs_diff_eq!(
      section_progress(&frame(0.0, 900.0, 900.0)),
      0.5,
      epsilon = 1e-9
    );
    // halfway into view
    assert_abs_diff_eq!(
      section_progress(&frame(450.0, 900.0, 900.0)),
      0.25,
      epsilon = 1e-9
    );
  }

  #[test]
  fn test_progress_monotonic_in_scroll() {
    let mut last = -1.0;
    let mut top = 900.0;
    while top >= -800.0 {
      let p = section_progress(&frame(top, 800.0, 900.0));
      assert!(p >= last);
      last = p;
      top -= 50.0;
    }
  }

  #[test]
  fn test_degenerate_geometry_yields_zero() {
    assert_eq!(section_progress(&frame(0.0, 0.0, 0.0)), 0.0);
    assert_eq!(section_progress(&frame(10.0, -20.0, 10.0)), 0.0);
  }

  #[test]
  fn test_gate_admits_first_sample() {
    assert!(should_emit(0.0, f64::NAN, 0.0));
  }

  #[test]
  fn test_gate_drops_jitter() {
    assert!(!should_emit(1000.0, 0.001, 0.5));
    assert!(!should_emit(1000.0, -0.003, 0.5));
  }

  #[test]
  fn test_gate_throttles_mid_range() {
    assert!(!should_emit(10.0, 0.05, 0.5));
    assert!(should_emit(40.0, 0.05, 0.5));
  }

  #[test]
  fn test_gate_always_lands_on_endpoints() {
    assert!(should_emit(0.0, 0.05, 0.0));
    assert!(should_emit(0.0, 0.05, 1.0));
    assert!(should_emit(0.0, -0.05, 0.0));
  }
}
