//! Scroll-progress driven styling. A section samples its progress through the
//! viewport as a value in [0, 1] and maps it through a `Timeline` to an
//! interpolated `Style`, which renders as an inline CSS fragment. Pure math,
//! no DOM access.

/// Interpolatable style channels. Translations are in viewport units so the
/// motion scales with the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
  pub translate_x_vw: f64,
  pub translate_y_vh: f64,
  pub scale: f64,
  pub rotate_x_deg: f64,
  pub rotate_y_deg: f64,
  pub opacity: f64,
}

impl Style {
  pub const REST: Style = Style {
    translate_x_vw: 0.0,
    translate_y_vh: 0.0,
    scale: 1.0,
    rotate_x_deg: 0.0,
    rotate_y_deg: 0.0,
    opacity: 1.0,
  };

  pub const fn with_shift(mut self, x_vw: f64, y_vh: f64) -> Self {
    self.translate_x_vw = x_vw;
    self.translate_y_vh = y_vh;
    self
  }

  pub const fn with_scale(mut self, scale: f64) -> Self {
    self.scale = scale;
    self
  }

  pub const fn with_rotation(mut self, x_deg: f64, y_deg: f64) -> Self {
    self.rotate_x_deg = x_deg;
    self.rotate_y_deg = y_deg;
    self
  }

  pub const fn with_opacity(mut self, opacity: f64) -> Self {
    self.opacity = opacity;
    self
  }

  pub fn lerp(from: &Style, to: &Style, t: f64) -> Style {
    let mix = |a: f64, b: f64| a + (b - a) * t;
    Style {
      translate_x_vw: mix(from.translate_x_vw, to.translate_x_vw),
      translate_y_vh: mix(from.translate_y_vh, to.translate_y_vh),
      scale: mix(from.scale, to.scale),
      rotate_x_deg: mix(from.rotate_x_deg, to.rotate_x_deg),
      rotate_y_deg: mix(from.rotate_y_deg, to.rotate_y_deg),
      opacity: mix(from.opacity, to.opacity),
    }
  }

  /// Inline CSS for the current pose.
  pub fn css(&self) -> String {
    format!(
      "opacity: {:.3}; transform: translate({:.2}vw, {:.2}vh) scale({:.3}) rotateX({:.2}deg) rotateY({:.2}deg);",
      self.opacity,
      self.translate_x_vw,
      self.translate_y_vh,
      self.scale,
      self.rotate_x_deg,
      self.rotate_y_deg,
    )
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
  Linear,
  CubicIn,
  CubicOut,
}

impl Ease {
  pub fn apply(self, t: f64) -> f64 {
    match self {
      Ease::Linear => t,
      Ease::CubicIn => t * t * t,
      Ease::CubicOut => {
        let inv = 1.0 - t;
        1.0 - inv * inv * inv
      }
    }
  }
}

/// One tween over a progress window. Progress before `start` holds `from`,
/// progress past `end` holds `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
  pub start: f64,
  pub end: f64,
  pub from: Style,
  pub to: Style,
  pub ease: Ease,
}

impl Segment {
  pub fn style_at(&self, progress: f64) -> Style {
    let t = if self.end <= self.start {
      if progress < self.start {
        0.0
      } else {
        1.0
      }
    } else {
      ((progress - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    };
    Style::lerp(&self.from, &self.to, self.ease.apply(t))
  }
}

/// Entrance and exit tweens for a section. Between the two windows the
/// section holds its settled pose (`enter.to`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
  pub enter: Segment,
  pub exit: Segment,
}

impl Timeline {
  /// Sections that are already on screen at load and only animate out.
  pub const fn exit_only(exit: Segment) -> Self {
    Timeline {
      enter: Segment {
        start: 0.0,
        end: 0.0,
        from: Style::REST,
        to: Style::REST,
        ease: Ease::Linear,
      },
      exit,
    }
  }

  pub fn style_at(&self, progress: f64) -> Style {
    let p = progress.clamp(0.0, 1.0);
    if p <= self.enter.end {
      self.enter.style_at(p)
    } else if p < self.exit.start {
      self.enter.to
    } else {
      self.exit.style_at(p)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;

  const FADE_IN: Segment = Segment {
    start: 0.2,
    end: 0.4,
    from: Style::REST.with_opacity(0.0).with_shift(0.0, 10.0),
    to: Style::REST,
    ease: Ease::Linear,
  };

  const FADE_OUT: Segment = Segment {
    start: 0.7,
    end: 0.9,
    from: Style::REST,
    to: Style::REST.with_opacity(0.25).with_shift(0.0, -6.0),
    ease: Ease::Linear,
  };

  #[test]
  fn test_lerp_endpoints_and_midpoint() {
    let from = Style::REST.with_opacity(0.0).with_scale(0.9);
    let to = Style::REST;
    assert_eq!(Style::lerp(&from, &to, 0.0), from);
    assert_eq!(Style::lerp(&from, &to, 1.0), to);
    let mid = Style::lerp(&from, &to, 0.5);
    assert_abs_diff_eq!(mid.opacity, 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(mid.scale, 0.95, epsilon = 1e-9);
  }

  #[test]
  fn test_ease_fixes_endpoints() {
    for ease in [Ease::Linear, Ease::CubicIn, Ease::CubicOut] {
      assert_abs_diff_eq!(ease.apply(0.0), 0.0, epsilon = 1e-9);
      assert_abs_diff_eq!(ease.apply(1.0), 1.0, epsilon = 1e-9);
    }
    assert!(Ease::CubicIn.apply(0.5) < 0.5);
    assert!(Ease::CubicOut.apply(0.5) > 0.5);
  }

  #[test]
  fn test_segment_clamps_outside_window() {
    assert_eq!(FADE_IN.style_at(0.0), FADE_IN.from);
    assert_eq!(FADE_IN.style_at(0.19), FADE_IN.from);
    assert_eq!(FADE_IN.style_at(0.4), FADE_IN.to);
    assert_eq!(FADE_IN.style_at(1.0), FADE_IN.to);
    let mid = FADE_IN.style_at(0.3);
    assert_abs_diff_eq!(mid.opacity, 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(mid.translate_y_vh, 5.0, epsilon = 1e-9);
  }

  #[test]
  fn test_degenerate_segment_snaps() {
    let snap = Segment {
      start: 0.5,
      end: 0.5,
      from: Style::REST.with_opacity(0.0),
      to: Style::REST,
      ease: Ease::Linear,
    };
    assert_eq!(snap.style_at(0.49), snap.from);
    assert_eq!(snap.style_at(0.5), snap.to);
  }

  #[test]
  fn test_timeline_holds_settled_pose_between_windows() {
    let timeline = Timeline {
      enter: FADE_IN,
      exit: FADE_OUT,
    };
    assert_eq!(timeline.style_at(0.0), FADE_IN.from);
    assert_eq!(timeline.style_at(0.55), Style::REST);
    assert_abs_diff_eq!(timeline.style_at(0.8).opacity, 0.625, epsilon = 1e-9);
    assert_eq!(timeline.style_at(1.0), FADE_OUT.to);
    // out-of-range progress clamps instead of extrapolating
    assert_eq!(timeline.style_at(-0.5), FADE_IN.from);
    assert_eq!(timeline.style_at(1.5), FADE_OUT.to);
  }

  #[test]
  fn test_exit_only_rests_until_exit_window() {
    let timeline = Timeline::exit_only(FADE_OUT);
    assert_eq!(timeline.style_at(0.0), Style::REST);
    assert_eq!(timeline.style_at(0.5), Style::REST);
    assert_abs_diff_eq!(timeline.style_at(0.9).opacity, 0.25, epsilon = 1e-9);
  }

  #[test]
  fn test_css_renders_every_channel() {
    let css = Style::REST.css();
    assert_eq!(
      css,
      "opacity: 1.000; transform: translate(0.00vw, 0.00vh) scale(1.000) rotateX(0.00deg) rotateY(0.00deg);"
    );
    let tilted = Style::REST.with_rotation(6.0, -18.0).with_shift(0.0, 8.0);
    let css = tilted.css();
    assert!(css.contains("rotateX(6.00deg)"));
    assert!(css.contains("rotateY(-18.00deg)"));
    assert!(css.contains("translate(0.00vw, 8.00vh)"));
  }
}
