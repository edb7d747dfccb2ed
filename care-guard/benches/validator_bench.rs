//! Benchmarks for field and form validation.

use care_guard::core::{FieldValidator, FixedClock, ValidationRuleSet};
use care_guard::formatting::format_phone_digits;
use care_guard::forms::{FormInput, FormSchema};
use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn validator() -> FieldValidator<FixedClock> {
    FieldValidator::with_clock(FixedClock(
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap_or_default(),
    ))
}

fn bench_rules(c: &mut Criterion) {
    let validator = validator();
    let cases = [
        ("required", "Jane", ValidationRuleSet::new().required()),
        ("email", "jane.doe@example.com", ValidationRuleSet::new().required().email()),
        ("phone", "(555) 123-4567", ValidationRuleSet::new().required().phone()),
        ("date", "2026-11-02", ValidationRuleSet::new().required().date()),
    ];

    let mut group = c.benchmark_group("field_validation");
    for (name, value, rules) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &value, |b, value| {
            b.iter(|| validator.validate(black_box(value), black_box(&rules)))
        });
    }
    group.finish();
}

fn bench_form(c: &mut Criterion) {
    let validator = validator();
    let schema = FormSchema::appointment();
    let input = FormInput::new()
        .with_value("firstName", "Jane")
        .with_value("lastName", "Doe")
        .with_value("email", "jane@example.com")
        .with_value("phone", "(555) 123-4567")
        .with_value("dateOfBirth", "1990-04-01")
        .with_value("department", "cardiology")
        .with_value("appointmentDate", "2026-10-20")
        .with_value("appointmentTime", "09:30")
        .with_value("appointmentType", "consultation")
        .with_checkbox("consent", true);

    c.bench_function("appointment_form", |b| {
        b.iter(|| schema.validate(&validator, black_box(&input)))
    });
}

fn bench_format_phone(c: &mut Criterion) {
    c.bench_function("format_phone_digits", |b| {
        b.iter(|| format_phone_digits(black_box("+1 (555) 123-4567")))
    });
}

criterion_group!(benches, bench_rules, bench_form, bench_format_phone);
criterion_main!(benches);
