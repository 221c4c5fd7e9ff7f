use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swipedeck_core::{CardItem, Config, Deck, Engine, GestureSample};

fn mk_engine(n: usize) -> Engine {
    let deck = Deck::new(
        (0..n)
            .map(|i| CardItem {
                image: format!("card-{i}.png"),
                title: format!("Card {i}"),
                description: "bench payload".into(),
            })
            .collect(),
    );
    let mut eng = Engine::new(Config::default(), deck).expect("deck");
    eng.set_card_height(812.0);
    eng
}

fn bench_gesture_tick(c: &mut Criterion) {
    let mut eng = mk_engine(16);
    let dragging = GestureSample {
        card_index: 0,
        down: true,
        movement: [0.0, -240.0],
        velocity: 0.12,
        offset: [0.0, -240.0],
    };

    c.bench_function("gesture_tick_16_cards", |b| {
        b.iter(|| {
            let out = eng.on_gesture(black_box(&dragging));
            black_box(out.changes.len())
        })
    });
}

criterion_group!(benches, bench_gesture_tick);
criterion_main!(benches);
