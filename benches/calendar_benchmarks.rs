//! Performance benchmarks for the shift calendar.
//!
//! Covers the per-cell rest-day check, a single staff month, and month
//! rosters for growing staff counts through the HTTP API.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use shift_calendar::api::{AppState, MonthRosterRequest, create_router};
use shift_calendar::calendar::{Roster, RosterData, ShiftCalendar};
use shift_calendar::config::ConfigLoader;
use shift_calendar::models::{
    RotationWeek, ShiftPattern, SpecialTemplate, StaffShiftAssignment, VariantCode,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/default").expect("Failed to load config")
}

/// Creates a month roster request with a mix of shift types.
fn create_roster_request(staff_count: usize) -> MonthRosterRequest {
    let codes = ["5x2", "6x1", "rotativo_2s", "especial_28"];
    let staff: Vec<serde_json::Value> = (0..staff_count)
        .map(|i| {
            let code = codes[i % codes.len()];
            let variant = if i % 2 == 0 { "principal" } else { "contraturno" };
            let template = (code == "especial_28").then(|| vec![0, 1, 14, 15]);
            serde_json::json!({
                "staff_id": format!("c-{:04}", i),
                "shift_type_code": code,
                "variant": variant,
                "special_template": template,
                "overrides": [{ "date": "2026-01-15", "kind": "rest" }]
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "year": 2026,
        "month": 1,
        "staff": staff
    }))
    .expect("Failed to build request")
}

fn bench_is_rest_day(c: &mut Criterion) {
    let calendar = ShiftCalendar::default();
    let assignment = StaffShiftAssignment::new("c-0001", "rotativo_2s", VariantCode::Contraturno);
    let pattern = ShiftPattern::Rotating {
        cycle: 2,
        weeks: vec![RotationWeek::new(vec![3, 0]), RotationWeek::new(vec![5, 6])],
    };
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

    c.bench_function("is_rest_day_365_days", |b| {
        b.iter(|| {
            let mut rest = 0;
            for offset in 0..365 {
                let date = start + Days::new(offset);
                if calendar.is_rest_day(black_box(date), &assignment, &pattern, None, None) {
                    rest += 1;
                }
            }
            rest
        })
    });
}

fn bench_staff_month(c: &mut Criterion) {
    let config = load_config();
    let roster = Roster::new(config.calendar(), config.catalog(), config.hours());
    let data = RosterData::new(vec![SpecialTemplate::new("c-0001", vec![0, 7, 14, 21])], Vec::new());
    let assignment = StaffShiftAssignment::new("c-0001", "especial_28", VariantCode::Principal);
    let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

    c.bench_function("staff_month", |b| {
        b.iter(|| roster.staff_month(black_box(&assignment), &data, 2026, 1, today))
    });
}

fn bench_month_roster_api(c: &mut Criterion) {
    let state = AppState::new(load_config());
    let runtime = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("month_roster_api");
    for staff_count in [1usize, 50, 500] {
        let body = serde_json::to_string(&create_roster_request(staff_count)).unwrap();
        group.throughput(Throughput::Elements(staff_count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(staff_count), &body, |b, body| {
            b.to_async(&runtime).iter(|| async {
                let response = create_router(state.clone())
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/roster/month")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_is_rest_day, bench_staff_month, bench_month_roster_api);
criterion_main!(benches);
