// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::thread_rng;
use rand::{Fill, Rng};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use recursive_power::power;

fn chacha_rng() -> ChaCha20Rng {
    let mut rng = thread_rng();
    let mut seed = [0u8; 32];
    seed.try_fill(&mut rng).unwrap();
    ChaCha20Rng::from_seed(seed)
}

fn criterion_benchmark(c: &mut Criterion) {
    for exponent in [10i64, 100, 1000] {
        c.bench_function(&format!("power::depth_{exponent}"), |b| {
            let mut rng = chacha_rng();
            b.iter_batched(
                || rng.gen::<i64>(),
                |base| power(black_box(base), black_box(exponent)),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    c.bench_function("power::minus_two", |b| {
        b.iter(|| power(black_box(2i64), black_box(-2)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
