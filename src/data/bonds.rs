use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
  pub id: &'static str,
  pub issuer: &'static str,
  pub isin: &'static str,
  pub coupon: Decimal,
  pub maturity: NaiveDate,
  pub price: Decimal,
  pub yield_pct: Decimal,
  pub change: Decimal,
  pub rating: &'static str,
  pub volume: u64,
  pub ai_summary: Option<&'static str>,
}

impl Bond {
  /// Display label like "Oracle 4.7% 2034".
  pub fn title(&self) -> String {
    use chrono::Datelike;
    format!(
      "{} {}% {}",
      self.issuer,
      self.coupon.normalize(),
      self.maturity.year()
    )
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Issuer {
  pub name: &'static str,
  pub ticker: &'static str,
  pub description: &'static str,
  pub total_debt: u64,
  pub rating: &'static str,
  pub bonds: Vec<&'static Bond>,
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

static BONDS: Lazy<Vec<Bond>> = Lazy::new(|| {
  vec![
    Bond {
      id: "ORCL-2034",
      issuer: "Oracle",
      isin: "US68389XCT00",
      coupon: dec!(4.70),
      maturity: ymd(2034, 9, 27),
      price: dec!(93.06),
      yield_pct: dec!(5.88),
      change: dec!(-0.12),
      rating: "BBB",
      volume: 1_750_000_000,
      ai_summary: Some(
        "AI infrastructure financing bonds showing stable demand despite recent volatility.",
      ),
    },
    Bond {
      id: "ORCL-2029",
      issuer: "Oracle",
      isin: "US68389XCS27",
      coupon: dec!(4.20),
      maturity: ymd(2029, 9, 27),
      price: dec!(98.62),
      yield_pct: dec!(4.86),
      change: dec!(-0.08),
      rating: "BBB",
      volume: 1_500_000_000,
      ai_summary: Some("Shorter maturity profile attracting defensive positioning."),
    },
    Bond {
      id: "META-2054",
      issuer: "Meta",
      isin: "US30303M8V78",
      coupon: dec!(5.40),
      maturity: ymd(2054, 8, 15),
      price: dec!(92.96),
      yield_pct: dec!(5.98),
      change: dec!(-0.08),
      rating: "AA-",
      volume: 3_250_000_000,
      ai_summary: Some(
        "Long-duration bonds pricing in AI capex expansion. Strong issuer credit profile.",
      ),
    },
    Bond {
      id: "META-2029",
      issuer: "Meta",
      isin: "US30303M8S40",
      coupon: dec!(4.30),
      maturity: ymd(2029, 8, 15),
      price: dec!(101.14),
      yield_pct: dec!(4.24),
      change: dec!(0.03),
      rating: "AA-",
      volume: 1_000_000_000,
      ai_summary: Some("Near-par pricing reflects flight to quality within tech sector."),
    },
    Bond {
      id: "META-2032",
      issuer: "Meta",
      isin: "US30303M8L96",
      coupon: dec!(4.60),
      maturity: ymd(2032, 5, 15),
      price: dec!(100.56),
      yield_pct: dec!(4.50),
      change: dec!(0.05),
      rating: "AA-",
      volume: 4_000_000_000,
      ai_summary: Some("Mid-duration sweet spot attracting institutional flows."),
    },
    Bond {
      id: "AAPL-2031",
      issuer: "Apple",
      isin: "US037833AT77",
      coupon: dec!(4.45),
      maturity: ymd(2031, 2, 15),
      price: dec!(98.12),
      yield_pct: dec!(4.72),
      change: dec!(0.04),
      rating: "AA+",
      volume: 2_500_000_000,
      ai_summary: Some(
        "Premium issuer with defensive characteristics. Steady demand from pension funds.",
      ),
    },
    Bond {
      id: "AAPL-2028",
      issuer: "Apple",
      isin: "US037833AS96",
      coupon: dec!(4.15),
      maturity: ymd(2028, 8, 15),
      price: dec!(99.85),
      yield_pct: dec!(4.18),
      change: dec!(0.02),
      rating: "AA+",
      volume: 2_000_000_000,
      ai_summary: Some("Short-end exposure with minimal rate sensitivity."),
    },
    Bond {
      id: "MSFT-2034",
      issuer: "Microsoft",
      isin: "US594918BQ13",
      coupon: dec!(4.20),
      maturity: ymd(2034, 8, 15),
      price: dec!(99.45),
      yield_pct: dec!(4.28),
      change: dec!(0.02),
      rating: "AAA",
      volume: 3_000_000_000,
      ai_summary: Some(
        "Highest credit quality in tech space. Tight spreads reflecting defensive demand.",
      ),
    },
    Bond {
      id: "MSFT-2030",
      issuer: "Microsoft",
      isin: "US594918BP49",
      coupon: dec!(3.95),
      maturity: ymd(2030, 5, 15),
      price: dec!(100.20),
      yield_pct: dec!(3.89),
      change: dec!(0.01),
      rating: "AAA",
      volume: 2_500_000_000,
      ai_summary: Some("Benchmark quality issuer with exceptional liquidity."),
    },
    Bond {
      id: "AMZN-2029",
      issuer: "Amazon",
      isin: "US023135AQ19",
      coupon: dec!(4.55),
      maturity: ymd(2029, 12, 1),
      price: dec!(100.10),
      yield_pct: dec!(4.51),
      change: dec!(-0.03),
      rating: "AA-",
      volume: 2_000_000_000,
      ai_summary: Some(
        "Cloud growth narrative supporting credit profile. Moderate duration preference.",
      ),
    },
    Bond {
      id: "AMZN-2034",
      issuer: "Amazon",
      isin: "US023135AR91",
      coupon: dec!(4.80),
      maturity: ymd(2034, 12, 1),
      price: dec!(98.75),
      yield_pct: dec!(4.95),
      change: dec!(-0.05),
      rating: "AA-",
      volume: 1_500_000_000,
      ai_summary: Some("AWS cash flows providing credit support for longer maturities."),
    },
    Bond {
      id: "GOOGL-2032",
      issuer: "Alphabet",
      isin: "US02079KAB44",
      coupon: dec!(4.35),
      maturity: ymd(2032, 2, 15),
      price: dec!(99.30),
      yield_pct: dec!(4.42),
      change: dec!(0.03),
      rating: "AA+",
      volume: 2_500_000_000,
      ai_summary: Some("Search monetization resilience supporting bond valuations."),
    },
    Bond {
      id: "NVDA-2033",
      issuer: "NVIDIA",
      isin: "US67066GAE47",
      coupon: dec!(4.65),
      maturity: ymd(2033, 9, 16),
      price: dec!(101.25),
      yield_pct: dec!(4.48),
      change: dec!(0.08),
      rating: "AA-",
      volume: 1_500_000_000,
      ai_summary: Some(
        "AI chip dominance translating to exceptional cash generation. Premium pricing.",
      ),
    },
    Bond {
      id: "TSLA-2030",
      issuer: "Tesla",
      isin: "US88160RAE18",
      coupon: dec!(5.25),
      maturity: ymd(2030, 3, 15),
      price: dec!(94.50),
      yield_pct: dec!(6.12),
      change: dec!(-0.15),
      rating: "BB+",
      volume: 1_000_000_000,
      ai_summary: Some("Higher yield compensating for credit risk. Volatile price action."),
    },
  ]
});

// The issuer -> bonds index is built once here and never mutated afterwards.
static ISSUERS: Lazy<Vec<Issuer>> = Lazy::new(|| {
  let profiles: [(&str, &str, &str, u64, &str); 8] = [
    (
      "Oracle",
      "ORCL",
      "Enterprise software and cloud infrastructure leader with significant AI investments.",
      131_700_000_000,
      "BBB",
    ),
    (
      "Meta",
      "META",
      "Social media and metaverse pioneer with aggressive AI infrastructure buildout.",
      28_800_000_000,
      "AA-",
    ),
    (
      "Apple",
      "AAPL",
      "Consumer technology giant with fortress balance sheet and strong cash generation.",
      90_700_000_000,
      "AA+",
    ),
    (
      "Microsoft",
      "MSFT",
      "Cloud computing leader with AAA credit rating and diversified revenue streams.",
      43_200_000_000,
      "AAA",
    ),
    (
      "Amazon",
      "AMZN",
      "E-commerce and cloud services giant with strong free cash flow generation.",
      62_200_000_000,
      "AA-",
    ),
    (
      "Alphabet",
      "GOOGL",
      "Search and advertising leader with dominant market position.",
      23_600_000_000,
      "AA+",
    ),
    (
      "NVIDIA",
      "NVDA",
      "AI chip market leader with exceptional growth and profitability.",
      8_500_000_000,
      "AA-",
    ),
    (
      "Tesla",
      "TSLA",
      "Electric vehicle pioneer with high growth but elevated credit risk.",
      9_500_000_000,
      "BB+",
    ),
  ];
  profiles
    .into_iter()
    .map(|(name, ticker, description, total_debt, rating)| Issuer {
      name,
      ticker,
      description,
      total_debt,
      rating,
      bonds: bonds_by_issuer(name),
    })
    .collect()
});

pub fn bonds() -> &'static [Bond] {
  &BONDS
}

pub fn issuers() -> &'static [Issuer] {
  &ISSUERS
}

pub fn bond_by_id(id: &str) -> Option<&'static Bond> {
  BONDS.iter().find(|b| b.id == id)
}

pub fn bonds_by_issuer(name: &str) -> Vec<&'static Bond> {
  BONDS
    .iter()
    .filter(|b| b.issuer.eq_ignore_ascii_case(name))
    .collect()
}

/// Distinct ratings across all tracked bonds, lexicographically sorted for the
/// filter dropdown.
pub fn ratings() -> Vec<&'static str> {
  let mut out: Vec<&'static str> = Vec::new();
  for bond in BONDS.iter() {
    if !out.contains(&bond.rating) {
      out.push(bond.rating);
    }
  }
  out.sort_unstable();
  out
}

pub fn format_price(price: Decimal) -> String {
  format!("{price:.2}")
}

pub fn format_yield(yield_pct: Decimal) -> String {
  format!("{yield_pct:.2}%")
}

/// Signed two-decimal change, always carrying an explicit sign: "+0.03", "-0.08".
pub fn format_change(change: Decimal) -> String {
  if change.is_sign_negative() {
    format!("{change:.2}")
  } else {
    format!("+{change:.2}")
  }
}

/// Compact dollar volume: billions at two decimals, millions rounded to whole,
/// anything smaller grouped with thousands separators.
pub fn format_volume(volume: u64) -> String {
  if volume >= 1_000_000_000 {
    format!("${:.2}B", volume as f64 / 1e9)
  } else if volume >= 1_000_000 {
    format!("${}M", (volume as f64 / 1e6).round() as u64)
  } else {
    format!("${}", group_thousands(volume))
  }
}

pub fn format_total_debt(total_debt: u64) -> String {
  format!("${:.1}B", total_debt as f64 / 1e9)
}

/// Short month plus year, e.g. "Sep 2034".
pub fn format_maturity(date: NaiveDate) -> String {
  date.format("%b %Y").to_string()
}

fn group_thousands(value: u64) -> String {
  let digits = value.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_issuer_index_covers_every_bond() {
    let indexed: usize = issuers().iter().map(|i| i.bonds.len()).sum();
    assert_eq!(indexed, bonds().len());
    for issuer in issuers() {
      for bond in &issuer.bonds {
        assert!(bond.issuer.eq_ignore_ascii_case(issuer.name));
      }
    }
  }

  #[test]
  fn test_issuer_subsets_preserve_order() {
    let meta = bonds_by_issuer("Meta");
    let ids: Vec<&str> = meta.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec!["META-2054", "META-2029", "META-2032"]);
    // lookups are case-insensitive
    assert_eq!(bonds_by_issuer("meta").len(), 3);
    assert_eq!(bonds_by_issuer("MICROSOFT").len(), 2);
    assert!(bonds_by_issuer("Unknown Issuer").is_empty());
  }

  #[test]
  fn test_bond_by_id() {
    assert_eq!(bond_by_id("NVDA-2033").map(|b| b.issuer), Some("NVIDIA"));
    assert!(bond_by_id("NVDA-2099").is_none());
  }

  #[test]
  fn test_ratings_are_unique_and_sorted() {
    let ratings = ratings();
    assert_eq!(ratings, vec!["AA+", "AA-", "AAA", "BB+", "BBB"]);
  }

  #[test]
  fn test_format_change_signs() {
    assert_eq!(format_change(dec!(0.03)), "+0.03");
    assert_eq!(format_change(dec!(-0.08)), "-0.08");
    assert_eq!(format_change(dec!(0)), "+0.00");
  }

  #[test]
  fn test_format_volume_scales() {
    assert_eq!(format_volume(1_750_000_000), "$1.75B");
    assert_eq!(format_volume(2_500_000), "$3M");
    assert_eq!(format_volume(2_400_000), "$2M");
    assert_eq!(format_volume(999_999), "$999,999");
  }

  #[test]
  fn test_format_price_and_yield() {
    assert_eq!(format_price(dec!(93.06)), "93.06");
    assert_eq!(format_price(dec!(100.2)), "100.20");
    assert_eq!(format_yield(dec!(5.88)), "5.88%");
  }

  #[test]
  fn test_format_maturity_short_month() {
    assert_eq!(format_maturity(ymd(2034, 9, 27)), "Sep 2034");
    assert_eq!(format_maturity(ymd(2029, 12, 1)), "Dec 2029");
  }

  #[test]
  fn test_format_total_debt() {
    assert_eq!(format_total_debt(131_700_000_000), "$131.7B");
    assert_eq!(format_total_debt(8_500_000_000), "$8.5B");
  }

  #[test]
  fn test_bond_title() {
    let bond = bond_by_id("ORCL-2034").unwrap();
    assert_eq!(bond.title(), "Oracle 4.7% 2034");
    let bond = bond_by_id("MSFT-2030").unwrap();
    assert_eq!(bond.title(), "Microsoft 3.95% 2030");
  }
}
