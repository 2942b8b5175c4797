use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vpath::filesystem::{expand_braces, MockFilesystem};
use vpath::path::normalize;
use vpath::{Mode, PathResolver};

const ALIAS_DEPTHS: &[usize] = &[1, 10, 50];

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("clean_simple", |b| {
        b.iter(|| normalize::clean(black_box("/srv/www/assets/app.css")));
    });

    group.bench_function("clean_dots", |b| {
        b.iter(|| normalize::clean(black_box("/a/b/../c/./d/../../e/f")));
    });

    group.bench_function("clean_backslashes", |b| {
        b.iter(|| normalize::clean(black_box(r"C:\\www\\\\assets\\..\\css\\app.css")));
    });

    group.bench_function("prefix", |b| {
        b.iter(|| normalize::prefix(black_box("C:/www/assets")));
    });

    group.bench_function("expand_braces", |b| {
        b.iter(|| expand_braces(black_box("*.{css,js,{png,jpg}}")));
    });

    group.finish();
}

/// A resolver whose `assets` alias holds `depth` directories, the file living in the last.
fn deep_resolver(depth: usize) -> PathResolver<MockFilesystem> {
    let dirs: Vec<String> = (0..depth).map(|i| format!("/site/pkg{i}")).collect();
    let fs = dirs
        .iter()
        .fold(MockFilesystem::new(), |fs, dir| fs.with_dir(dir))
        .with_file(&format!("/site/pkg{}/app.js", depth - 1));

    let mut resolver = PathResolver::with_filesystem(fs, Some("/site")).unwrap();
    resolver.set("assets", &dirs, Mode::Append).unwrap();
    resolver
}

fn bench_resolver(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolver");

    for &depth in ALIAS_DEPTHS {
        let resolver = deep_resolver(depth);

        group.bench_with_input(BenchmarkId::new("get_last_dir", depth), &resolver, |b, r| {
            b.iter(|| r.get(black_box("assets:app.js")));
        });

        group.bench_with_input(BenchmarkId::new("get_paths", depth), &resolver, |b, r| {
            b.iter(|| r.get_paths(black_box("assets")));
        });

        group.bench_with_input(BenchmarkId::new("url", depth), &resolver, |b, r| {
            b.iter(|| r.url(black_box("assets:app.js?v=1"), true));
        });
    }

    let mut chained = deep_resolver(1);
    chained.set("theme", ["assets:"], Mode::Prepend).unwrap();
    chained.set("site", ["theme:"], Mode::Prepend).unwrap();
    group.bench_function("get_through_references", |b| {
        b.iter(|| chained.get(black_box("site:app.js")));
    });

    group.bench_function("is_virtual", |b| {
        b.iter(|| chained.is_virtual(black_box("assets:/app.js")));
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_resolver);
criterion_main!(benches);
