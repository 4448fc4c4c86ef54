use chrono::{Months, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Walk volatility used for every bond series on the analytics panel.
pub const BOND_VOLATILITY: f64 = 1.5;

const PRICE_FLOOR: f64 = 80.0;
const PRICE_CEIL: f64 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
  pub date: NaiveDate,
  pub price: f64,
  pub yield_pct: f64,
}

/// First sample of every generated series.
pub fn series_start() -> NaiveDate {
  NaiveDate::from_ymd_opt(2019, 1, 1).expect("valid calendar date")
}

/// Deterministic seed for a bond id, so reselecting the same bond replays the
/// same walk within a session and across runs. FNV-1a over the id bytes.
pub fn seed_for(bond_id: &str) -> u64 {
  let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
  for byte in bond_id.bytes() {
    hash ^= u64::from(byte);
    hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
  }
  hash
}

/// Monthly random walk from `series_start()` through `today` inclusive.
///
/// Each step perturbs the running price by a delta in
/// [-volatility/2, volatility/2) and clamps to [80, 120]; the stored price is
/// rounded to cents but the walk continues from the unrounded value. Yields
/// are sampled independently and uniformly from [4, 7).
pub fn price_history(
  base_price: f64,
  volatility: f64,
  seed: u64,
  today: NaiveDate,
) -> Vec<PricePoint> {
  let mut rng = StdRng::seed_from_u64(seed);
  let mut price = base_price.clamp(PRICE_FLOOR, PRICE_CEIL);
  let mut points = Vec::new();
  let mut cursor = series_start();
  while cursor <= today {
    let delta = (rng.random::<f64>() - 0.5) * volatility;
    price = (price + delta).clamp(PRICE_FLOOR, PRICE_CEIL);
    points.push(PricePoint {
      date: cursor,
      price: round2(price),
      yield_pct: round2(4.0 + rng.random::<f64>() * 3.0),
    });
    cursor = cursor + Months::new(1);
  }
  points
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
  OneYear,
  ThreeYears,
  FiveYears,
  All,
}

impl TimeRange {
  pub const ALL: [TimeRange; 4] = [
    TimeRange::OneYear,
    TimeRange::ThreeYears,
    TimeRange::FiveYears,
    TimeRange::All,
  ];

  pub fn label(self) -> &'static str {
    match self {
      TimeRange::OneYear => "1Y",
      TimeRange::ThreeYears => "3Y",
      TimeRange::FiveYears => "5Y",
      TimeRange::All => "ALL",
    }
  }

  fn months_back(self) -> Option<u32> {
    match self {
      TimeRange::OneYear => Some(12),
      TimeRange::ThreeYears => Some(36),
      TimeRange::FiveYears => Some(60),
      TimeRange::All => None,
    }
  }
}

/// Restrict a series to the selected window, measured back from `today`.
pub fn clip_range(points: &[PricePoint], range: TimeRange, today: NaiveDate) -> Vec<PricePoint> {
  match range.months_back() {
    None => points.to_vec(),
    Some(months) => {
      let cutoff = today - Months::new(months);
      points.iter().filter(|p| p.date >= cutoff).copied().collect()
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
  pub period_change: f64,
  pub period_change_pct: f64,
  pub high: f64,
  pub low: f64,
}

/// Period change over the visible window; high/low always span the full
/// series so the 52W figures do not shrink with the window.
pub fn series_stats(full: &[PricePoint], window: &[PricePoint]) -> Option<SeriesStats> {
  let first = window.first()?;
  let last = window.last()?;
  let period_change = last.price - first.price;
  let period_change_pct = period_change / first.price * 100.0;
  let mut high = f64::MIN;
  let mut low = f64::MAX;
  for point in full {
    high = high.max(point.price);
    low = low.min(point.price);
  }
  Some(SeriesStats {
    period_change,
    period_change_pct,
    high,
    low,
  })
}

fn round2(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;

  fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
  }

  #[test]
  fn test_series_is_monthly_from_start_to_today() {
    let series = price_history(95.0, BOND_VOLATILITY, 7, fixed_today());
    // Jan 2019 through Jun 2025 inclusive
    assert_eq!(series.len(), 78);
    assert_eq!(series[0].date, series_start());
    assert_eq!(
      series.last().unwrap().date,
      NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    );
    for pair in series.windows(2) {
      assert_eq!(pair[0].date + Months::new(1), pair[1].date);
    }
  }

  #[test]
  fn test_prices_stay_bounded_for_any_seed() {
    for seed in 0..64 {
      let series = price_history(119.0, 10.0, seed, fixed_today());
      for point in &series {
        assert!(point.price >= 80.0 && point.price <= 120.0, "seed {seed}");
      }
    }
  }

  #[test]
  fn test_prices_round_to_cents() {
    let series = price_history(95.0, BOND_VOLATILITY, 42, fixed_today());
    for point in &series {
      assert_abs_diff_eq!(
        point.price * 100.0,
        (point.price * 100.0).round(),
        epsilon = 1e-6
      );
    }
  }

  #[test]
  fn test_yields_sampled_from_expected_band() {
    let series = price_history(95.0, BOND_VOLATILITY, 11, fixed_today());
    for point in &series {
      assert!(point.yield_pct >= 4.0 && point.yield_pct <= 7.0);
    }
  }

  #[test]
  fn test_same_seed_replays_same_walk() {
    let a = price_history(93.06, BOND_VOLATILITY, seed_for("ORCL-2034"), fixed_today());
    let b = price_history(93.06, BOND_VOLATILITY, seed_for("ORCL-2034"), fixed_today());
    assert_eq!(a, b);

    let c = price_history(93.06, BOND_VOLATILITY, seed_for("ORCL-2029"), fixed_today());
    assert_ne!(a, c);
  }

  #[test]
  fn test_out_of_band_base_price_clamps_immediately() {
    let series = price_history(250.0, BOND_VOLATILITY, 3, fixed_today());
    assert!(series[0].price <= 120.0);
  }

  #[test]
  fn test_clip_range_windows() {
    let series = price_history(95.0, BOND_VOLATILITY, 5, fixed_today());
    let today = fixed_today();

    let one_year = clip_range(&series, TimeRange::OneYear, today);
    assert_eq!(one_year.len(), 12);
    assert_eq!(
      one_year[0].date,
      NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    );

    let three_years = clip_range(&series, TimeRange::ThreeYears, today);
    assert_eq!(three_years.len(), 36);

    let five_years = clip_range(&series, TimeRange::FiveYears, today);
    assert_eq!(five_years.len(), 60);

    let all = clip_range(&series, TimeRange::All, today);
    assert_eq!(all.len(), series.len());
  }

  #[test]
  fn test_clip_range_keeps_chronological_order() {
    let series = price_history(95.0, BOND_VOLATILITY, 5, fixed_today());
    let window = clip_range(&series, TimeRange::ThreeYears, fixed_today());
    for pair in window.windows(2) {
      assert!(pair[0].date < pair[1].date);
    }
  }

  #[test]
  fn test_series_stats_change_over_window_extremes_over_full() {
    let mk = |date: NaiveDate, price: f64| PricePoint {
      date,
      price,
      yield_pct: 5.0,
    };
    let d = |y, m| NaiveDate::from_ymd_opt(y, m, 1).unwrap();
    let full = vec![
      mk(d(2024, 1), 118.0),
      mk(d(2024, 2), 81.0),
      mk(d(2024, 3), 100.0),
      mk(d(2024, 4), 104.0),
    ];
    let window = full[2..].to_vec();

    let stats = series_stats(&full, &window).unwrap();
    assert_abs_diff_eq!(stats.period_change, 4.0, epsilon = 1e-9);
    assert_abs_diff_eq!(stats.period_change_pct, 4.0, epsilon = 1e-9);
    assert_abs_diff_eq!(stats.high, 118.0, epsilon = 1e-9);
    assert_abs_diff_eq!(stats.low, 81.0, epsilon = 1e-9);

    assert!(series_stats(&full, &[]).is_none());
  }

  #[test]
  fn test_seed_for_is_stable_per_id() {
    assert_eq!(seed_for("META-2054"), seed_for("META-2054"));
    assert_ne!(seed_for("META-2054"), seed_for("META-2029"));
    // FNV-1a of an empty string is the offset basis
    assert_eq!(seed_for(""), 0xcbf2_9ce4_8422_2325);
  }
}
