extern crate criterion;

use criterion::{criterion_group, criterion_main, Criterion};

use tagstyle_lib::{StyleBuilder, PROPERTIES};

fn bench_example_chain(c: &mut Criterion) {
    c.bench_function("example_chain", |b| {
        b.iter(|| {
            StyleBuilder::new("div", "Not visible to other parties")
                .background_color("yellow")
                .border_radius("10px")
                .padding_left("10px")
                .padding_right("10px")
                .color("darkorange")
                .font_size("smaller")
                .display("inline-flex")
                .align_items("center")
                .justify_content("center")
                .build()
        })
    });
}

fn bench_every_property(c: &mut Criterion) {
    let mut builder = StyleBuilder::new("div", "Content");
    for name in PROPERTIES {
        builder.set(*name, "inherit");
    }

    c.bench_function("every_property_build", |b| b.iter(|| builder.build()));
}

criterion_group!(benches, bench_example_chain, bench_every_property);
criterion_main!(benches);
