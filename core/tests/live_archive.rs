//! Checks against the real cbr-xml-daily.ru archive.
//!
//! Ignored by default since they need outbound network access. Run with
//! `cargo test -p cbr-core --test live_archive -- --ignored`.

use std::time::Duration;

use cbr_core::{ClientConfig, DailyRates, ExchangeRateClient};

fn live_client() -> ExchangeRateClient {
    ExchangeRateClient::with_config(&ClientConfig {
        timeout: Some(Duration::from_secs(30)),
        ..ClientConfig::default()
    })
}

#[test]
#[ignore = "requires network access"]
fn published_day_has_usd_and_eur() {
    let payload = live_client().fetch("2025-03-01").expect("archive should have 2025-03-01");
    let rates = DailyRates::from_payload(&payload).unwrap();

    for code in ["USD", "EUR"] {
        let value = rates.rate(code).unwrap_or_else(|| panic!("missing {code}"));
        assert!(value > 0.0, "{code}: {value}");
    }
}

#[test]
#[ignore = "requires network access"]
fn bad_and_unpublished_dates_are_absent() {
    let client = live_client();
    for date in ["2025-13-01", "abcd-ef-gh", "2030-01-01", "1900-01-01"] {
        assert!(client.fetch(date).is_none(), "{date}");
    }
}
