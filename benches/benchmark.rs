use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regex::Regex as LibRegex;

const PATTERN: &str = "(a|b)*c(d|e)+f?";
const INPUT: &str = "ababbababacdddeeef";

pub fn regex_compile(c: &mut Criterion) {
    c.bench_function("retrace compile", |b| {
        b.iter(|| retrace::compile(black_box(PATTERN)).unwrap())
    });

    c.bench_function("library regex compile", |b| {
        b.iter(|| LibRegex::new(&format!("^(?:{})$", black_box(PATTERN))).unwrap())
    });
}

pub fn regex_check(c: &mut Criterion) {
    let nfa = retrace::compile(PATTERN).unwrap();
    c.bench_function("retrace evaluate", |b| {
        b.iter(|| retrace::evaluate(&nfa, black_box(INPUT)))
    });

    let lib_regex = LibRegex::new(&format!("^(?:{PATTERN})$")).unwrap();
    c.bench_function("library regex check", |b| {
        b.iter(|| lib_regex.is_match(black_box(INPUT)))
    });
}

criterion_group!(benches, regex_compile, regex_check);
criterion_main!(benches);
