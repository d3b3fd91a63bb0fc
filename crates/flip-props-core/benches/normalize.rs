use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flip_props::{normalize, Element, NullSink, RawConfig, RawValue};

fn raw_config(children: usize) -> RawConfig {
    let items: Vec<RawValue> = (0..children)
        .map(|i| Element::host("li").with_key(format!("item-{}", i)).into())
        .collect();
    RawConfig::new()
        .with("duration", "250")
        .with("staggerDelayBy", 20)
        .with("enterClassName", "fade")
        .with("disableAnimations", false)
        .with("maintainContainerHeight", true)
        .with("className", "list")
        .with("children", items)
}

fn bench_normalize(c: &mut Criterion) {
    for size in [1, 100, 1000] {
        let raw = raw_config(size);
        c.bench_function(&format!("normalize_{}_children", size), |b| {
            b.iter(|| normalize(black_box(&raw), &mut NullSink))
        });
    }
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
