fn main() {
    divan::main();
}

fn load(file: &str) -> analysis::Match {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../testfiles/")
        .join(file);
    let data = std::fs::read(path).unwrap();
    analysis::Match::parse(&data).unwrap()
}

#[divan::bench(args = ["rich.json", "legacy.json", "summary.json"])]
fn perround(bencher: divan::Bencher, file: &str) {
    let m = load(file);
    let config = analysis::perround::Config::default();

    bencher.bench(|| analysis::perround::reconstruct_with(divan::black_box(&config), divan::black_box(&m)));
}

#[divan::bench(args = ["rich.json", "legacy.json"])]
fn scoreboard(bencher: divan::Bencher, file: &str) {
    let rounds = analysis::perround::reconstruct(&load(file)).rounds;

    bencher.bench(|| {
        divan::black_box(&rounds)
            .iter()
            .map(analysis::scoreboard::build_round_score_rows)
            .collect::<Vec<_>>()
    });
}

#[divan::bench]
fn aggregate(bencher: divan::Bencher) {
    let matches: Vec<_> = ["rich.json", "legacy.json", "summary.json"]
        .into_iter()
        .cycle()
        .take(300)
        .map(load)
        .collect();

    bencher.bench(|| analysis::aggregate::compute(divan::black_box(&matches), divan::black_box("alpha")));
}
