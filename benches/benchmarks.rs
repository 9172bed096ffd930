criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        parsing_builtin_catalog,
        dealing_builtin_rounds,
        dealing_crowded_tables,
        walking_full_briefings,
}

fn parsing_builtin_catalog(c: &mut criterion::Criterion) {
    c.bench_function("parse the builtin Catalog", |b| {
        b.iter(|| Catalog::builtin())
    });
}

fn dealing_builtin_rounds(c: &mut criterion::Criterion) {
    let catalog = Catalog::builtin();
    c.bench_function("deal a 4-seat Round", |b| {
        let ref mut rng = SmallRng::seed_from_u64(0);
        b.iter(|| Round::deal(&catalog, 4, 1, rng))
    });
}

fn dealing_crowded_tables(c: &mut criterion::Criterion) {
    let catalog = Catalog::builtin();
    c.bench_function("deal a packed 25-seat Round", |b| {
        let ref mut rng = SmallRng::seed_from_u64(0);
        b.iter(|| Round::deal(&catalog, 25, 12, rng))
    });
}

fn walking_full_briefings(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let round = Round::deal(&Catalog::builtin(), 8, 2, rng).unwrap();
    c.bench_function("walk a full 8-seat Briefing", |b| {
        b.iter(|| {
            let mut briefing = Briefing::from(round.clone());
            while !briefing.phase().is_playing() {
                briefing = briefing.apply(Action::Reveal).apply(Action::Advance);
            }
            briefing
        })
    });
}

use coverup::game::Action;
use coverup::game::Briefing;
use coverup::game::Round;
use coverup::locations::Catalog;
use rand::rngs::SmallRng;
use rand::SeedableRng;
