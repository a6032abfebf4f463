//! Shared test fixtures for the crypto dashboard integration tests.
//!
//! Provides small hand-computed daily series and helpers that write chart
//! responses to a temp directory for the offline source.

#![allow(dead_code)]

use chrono::NaiveDate;
use crypto_dashboard::{DailyRecord, DailySeries};
use serde_json::{json, Value};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;

pub const EPS: f64 = 1e-9;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn rec(y: i32, m: u32, d: u32, open: f64, high: f64, low: f64, close: f64) -> DailyRecord {
    DailyRecord::new(date(y, m, d), open, high, low, close)
}

/// A record whose four prices all equal `price`, so its average is `price`.
pub fn flat(y: i32, m: u32, d: u32, price: f64) -> DailyRecord {
    rec(y, m, d, price, price, price, price)
}

pub fn series(records: Vec<DailyRecord>) -> DailySeries {
    DailySeries::new(records).unwrap()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

/// Seven days Mon 3 Jan .. Sun 9 Jan 2022: exactly ISO week 2022-W01.
pub fn iso_week_one_2022() -> DailySeries {
    series(vec![
        rec(2022, 1, 3, 10.0, 12.0, 9.0, 11.0),
        rec(2022, 1, 4, 11.0, 13.0, 10.0, 12.0),
        rec(2022, 1, 5, 12.0, 15.0, 11.0, 14.0),
        rec(2022, 1, 6, 14.0, 14.5, 12.0, 13.0),
        rec(2022, 1, 7, 13.0, 13.5, 11.5, 12.5),
        rec(2022, 1, 8, 12.5, 16.0, 12.0, 15.0),
        rec(2022, 1, 9, 15.0, 15.0, 14.0, 14.5),
    ])
}

/// March records in 2021 (low prices) and 2022 (high prices).
pub fn two_marches() -> DailySeries {
    series(vec![
        flat(2021, 3, 1, 5.0),
        flat(2021, 3, 2, 6.0),
        flat(2021, 3, 9, 7.0),
        flat(2022, 3, 1, 20.0),
        flat(2022, 3, 8, 30.0),
        flat(2022, 3, 9, 32.0),
        flat(2022, 3, 15, 25.0),
    ])
}

/// Two years of sparse data spanning several months.
pub fn multi_year() -> DailySeries {
    series(vec![
        flat(2021, 1, 4, 1.0),
        flat(2021, 1, 5, 3.0),
        flat(2021, 2, 1, 4.0),
        flat(2021, 6, 14, 8.0),
        flat(2021, 6, 15, 10.0),
        flat(2021, 12, 30, 6.0),
        flat(2022, 1, 3, 2.0),
        flat(2022, 1, 11, 5.0),
        flat(2022, 2, 28, 9.0),
        flat(2022, 3, 1, 11.0),
    ])
}

/// Build a chart response body in the upstream's shape.
pub fn chart_json(symbol: &str, gmtoffset: i64, rows: &[(i64, [Option<f64>; 4])]) -> Value {
    let timestamps: Vec<i64> = rows.iter().map(|(ts, _)| *ts).collect();
    let column = |i: usize| -> Vec<Option<f64>> { rows.iter().map(|(_, v)| v[i]).collect() };
    json!({
        "chart": {
            "result": [{
                "meta": {
                    "currency": "USD",
                    "symbol": symbol,
                    "gmtoffset": gmtoffset,
                    "timezone": "UTC"
                },
                "timestamp": timestamps,
                "indicators": {
                    "quote": [{
                        "open": column(0),
                        "high": column(1),
                        "low": column(2),
                        "close": column(3),
                        "volume": vec![0; rows.len()]
                    }]
                }
            }],
            "error": null
        }
    })
}

/// UTC midnight timestamp for a date.
pub fn ts(y: i32, m: u32, d: u32) -> i64 {
    date(y, m, d).and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp()
}

/// A clean ten-day chart for `symbol` covering 1..=10 March 2022.
pub fn march_chart(symbol: &str) -> Value {
    let rows: Vec<(i64, [Option<f64>; 4])> = (1..=10)
        .map(|d| {
            let p = d as f64;
            (ts(2022, 3, d), [Some(p), Some(p + 1.0), Some(p - 0.5), Some(p + 0.5)])
        })
        .collect();
    chart_json(symbol, 0, &rows)
}

pub fn write_chart(dir: &Path, symbol: &str, body: &Value) {
    let path = dir.join(format!("{}.json", symbol));
    std::fs::write(path, serde_json::to_string(body).unwrap()).unwrap();
}

/// Answer a single HTTP request on a loopback port with a canned response.
///
/// Returns the base URL to hand to `YahooClient::new`.
pub fn serve_once(status: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}/v8/finance/chart")
}
