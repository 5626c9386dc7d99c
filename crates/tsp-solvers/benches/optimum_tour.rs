use criterion::{Criterion, criterion_group, criterion_main};
use tsp_core::Graph;
use tsp_solvers::optimum_tour;

fn random_euclidean_instance(n: usize, gridsize: f64, seed: u64) -> Graph {
    use rand::Rng;
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let xs: Vec<f64> = (0..n).map(|_| rng.random_range(0.0..gridsize)).collect();
    let ys: Vec<f64> = (0..n).map(|_| rng.random_range(0.0..gridsize)).collect();
    Graph::new_from_coordinates(&xs, &ys).unwrap()
}

fn optimum_tour_small_instances(c: &mut Criterion) {
    use rand::SeedableRng;

    let mut group = c.benchmark_group("optimum_tour");
    for &n in &[8usize, 10, 12] {
        let g = random_euclidean_instance(n, 100.0, 42);
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| {
                let mut rng = rand::rngs::StdRng::seed_from_u64(7);
                optimum_tour(&g, &mut rng)
            });
        });
    }
    group.finish();
}

criterion_group! {
    name = optimum_tour_bench;
    config = Criterion::default().sample_size(10);
    targets = optimum_tour_small_instances
}
criterion_main!(optimum_tour_bench);
