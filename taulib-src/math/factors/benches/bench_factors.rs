use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use factors::Factors;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn bench_factors(c: &mut Criterion) {
    let mut group = c.benchmark_group("factors");

    // bc <<< "obase=16; ibase=2; $(shuf -re {0,1}{0,1}{0,1}{0,1}{0,1}{0,1}{0,1}{0,1} -n 32)" \
    //     | sed '/../!s/^/0/; s/^/0x/' | paste -sd , -
    let mut rng = ChaCha20Rng::from_seed([
        0x3B, 0x57, 0x11, 0xC0, 0x8E, 0x2F, 0xD1, 0x64, 0xA9, 0x0D, 0x7C, 0x36,
        0xEE, 0x42, 0x98, 0x5A, 0xB1, 0x6F, 0x20, 0xCD, 0x73, 0x09, 0xF4, 0x8B,
        0x1E, 0xD7, 0x62, 0xAF, 0x05, 0x9C, 0xE8, 0x31,
    ]);

    for exp in [12_u32, 16, 20] {
        let n: u64 = rng.gen_range(1 << (exp - 1)..1 << exp);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(n).factors().count())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_factors);
criterion_main!(benches);
