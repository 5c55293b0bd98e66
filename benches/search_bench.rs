//! Benchmarks for trie construction and query resolution.
//!
//! Simulates a CPE-sized dataset of synthetic OS/product titles, each with a handful of
//! fields carrying a couple of alternatives, to get a feel for build and query cost as
//! the dataset grows.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use match_string_trie::types::{Alt, Field, FieldList};
use match_string_trie::{key_expand, EngineOptions, MatchStringTrie, Title};
use std::sync::Arc;

const VENDORS: &[&str] = &["canonical", "microsoft", "apple", "cisco", "redhat", "debian"];
const FAMILIES: &[&str] = &["ubuntu", "windows", "ios", "ios-xr", "linux", "server"];

fn synthetic_titles(count: usize) -> Vec<(Title, FieldList)> {
    let mut titles = Vec::with_capacity(count);
    for i in 0..count {
        let vendor = VENDORS[i % VENDORS.len()];
        let family = FAMILIES[i % FAMILIES.len()];
        let major = (i % 30).to_string();
        let minor = (i % 10).to_string();

        let field_list = FieldList(vec![
            Field::new(vec![Alt::token(vendor), Alt::Skip]).unwrap(),
            Field::new(vec![Alt::token(family)]).unwrap(),
            Field::new(vec![Alt::token(major.clone())]).unwrap(),
            Field::new(vec![Alt::token(minor.clone())]).unwrap(),
        ]);

        let title: Title = Arc::from(
            format!("{vendor} {family} {major}.{minor}", vendor = vendor, family = family)
                .as_str(),
        );
        titles.push((title, field_list));
    }
    titles
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_expand_build_sequential");
    for size in [100usize, 1_000, 10_000] {
        let titles = synthetic_titles(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &titles, |b, titles| {
            b.iter(|| {
                let (trie, terms) = key_expand::build_sequential(black_box(titles));
                black_box((trie.len(), terms.len()))
            });
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_search");
    for size in [100usize, 1_000, 10_000] {
        let titles = synthetic_titles(size);
        let mut options = EngineOptions::default();
        options.eager_load = true;
        let engine = MatchStringTrie::new(titles, options, None);

        let terms = vec!["ubuntu".to_string(), "canonical".to_string(), "5".to_string()];
        group.bench_with_input(BenchmarkId::from_parameter(size), &terms, |b, terms| {
            b.iter(|| black_box(engine.search(black_box(terms), true, false)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_search);
criterion_main!(benches);
