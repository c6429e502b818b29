use criterion::{Criterion, criterion_group, criterion_main};
use memento_core::*;
use std::hint::black_box;

fn deal(c: &mut Criterion) {
    let config = GameConfig::new(5, 6, DEFAULT_IMAGES).unwrap();
    let mut seed = 0;
    c.bench_function("deal_5x6", |b| {
        b.iter(|| {
            seed += 1;
            black_box(RandomDeckGenerator::new(seed).generate(&config).unwrap())
        })
    });
}

fn full_game(c: &mut Criterion) {
    let mut engine = GameEngine::new(1);
    c.bench_function("full_game_5x6", |b| {
        b.iter(|| {
            let cards = engine.initialize(5, 6, DEFAULT_IMAGES).unwrap().to_vec();
            for index in 0..cards.len() {
                if engine.card_at(index).unwrap().is_revealed() {
                    continue;
                }
                engine.play(index).unwrap();
                let partner = (0..cards.len())
                    .find(|&other| other != index && cards[other].value() == cards[index].value())
                    .unwrap();
                black_box(engine.play(partner).unwrap());
            }
        })
    });
}

criterion_group!(benches, deal, full_game);
criterion_main!(benches);
