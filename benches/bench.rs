#![allow(clippy::all)] // Clippy will attempt to remove black_box() internals

use criterion::*;
use gridgen::*;
use lutn::{AxisSet, Grid, Table, TableRegistry};

enum Order {
    Scan,
    Shuffled,
}

macro_rules! bench_lookup_specific {
    ($group:ident, $ndims:expr, $gridsize:expr, $size:expr, $order:expr) => {
        $group.throughput(Throughput::Elements(*$size as u64));
        let scan_or_shuffle = match $order {
            Order::Scan => "Sequential Order",
            Order::Shuffled => "Shuffled Order",
        };

        $group.bench_with_input(
            BenchmarkId::new(
                format!("Table {}x{}D, {}", $gridsize, $ndims, scan_or_shuffle),
                $size,
            ),
            $size,
            |b, &size| {
                // Interpolation grid with noise
                let (grids, z) = gen_grid($ndims, $gridsize, 1e-3);
                let axes: [Vec<f64>; $ndims] = core::array::from_fn(|i| grids[i].clone());
                let axes = AxisSet::new(axes).unwrap();
                let grid = Grid::new([$gridsize; $ndims], z).unwrap();
                let mut table = Table::new(axes, grid).unwrap();

                // Observation points
                let m: usize = ((size as f64).powf(1.0 / ($ndims as f64)) + 2.0) as usize;
                let gridobs_t = gen_obs_grid(&grids, m, matches!($order, Order::Shuffled));
                let obs: [&[f64]; $ndims] = core::array::from_fn(|i| &gridobs_t[i][..size]);
                let mut out = vec![0.0; size];

                b.iter(|| black_box(table.get_values(&obs, &mut out).unwrap()));
            },
        );

        $group.bench_with_input(
            BenchmarkId::new(
                format!("Registry {}x{}D, {}", $gridsize, $ndims, scan_or_shuffle),
                $size,
            ),
            $size,
            |b, &size| {
                let (grids, z) = gen_grid($ndims, $gridsize, 1e-3);
                let axes: [Vec<f64>; $ndims] = core::array::from_fn(|i| grids[i].clone());
                let axes = AxisSet::new(axes).unwrap();
                let grid = Grid::new([$gridsize; $ndims], z).unwrap();
                let mut tables = TableRegistry::<&str>::new();
                tables.put("bench", Table::new(axes, grid).unwrap());

                let m: usize = ((size as f64).powf(1.0 / ($ndims as f64)) + 2.0) as usize;
                let gridobs_t = gen_obs_grid(&grids, m, matches!($order, Order::Shuffled));
                let mut x = [0.0; $ndims];

                b.iter(|| {
                    for i in 0..size {
                        (0..$ndims).for_each(|j| x[j] = gridobs_t[j][i]);
                        black_box(tables.lookup("bench", &x).unwrap());
                    }
                });
            },
        );
    };
}

fn bench_lookup(c: &mut Criterion) {
    for order in [Order::Scan, Order::Shuffled] {
        let tag = match order {
            Order::Scan => "Sequential",
            Order::Shuffled => "Shuffled",
        };

        for gridsize in [10, 100] {
            let mut group = c.benchmark_group(format!("Lookup_1D_{tag}_{gridsize}-grid"));
            for size in [1, 100, 10_000].iter() {
                bench_lookup_specific!(group, 1, gridsize, size, order);
            }
            group.finish();
        }

        for gridsize in [10, 100] {
            let mut group = c.benchmark_group(format!("Lookup_2D_{tag}_{gridsize}-grid"));
            for size in [1, 100, 10_000].iter() {
                bench_lookup_specific!(group, 2, gridsize, size, order);
            }
            group.finish();
        }

        for gridsize in [10] {
            let mut group = c.benchmark_group(format!("Lookup_4D_{tag}_{gridsize}-grid"));
            for size in [1, 100, 10_000].iter() {
                bench_lookup_specific!(group, 4, gridsize, size, order);
            }
            group.finish();
        }

        for gridsize in [4] {
            let mut group = c.benchmark_group(format!("Lookup_6D_{tag}_{gridsize}-grid"));
            for size in [1, 100, 10_000].iter() {
                bench_lookup_specific!(group, 6, gridsize, size, order);
            }
            group.finish();
        }
    }
}

criterion_group!(benches_lookup, bench_lookup);
criterion_main!(benches_lookup);

mod randn {
    use rand::distr::StandardUniform;
    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::SeedableRng;

    /// Fixed random seed to support repeatable testing
    const SEED: [u8; 32] = [
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7,
        6, 5, 4, 3, 2, 1,
    ];

    /// Get a random number generator with a const seed for repeatable testing
    pub fn rng_fixed_seed() -> StdRng {
        StdRng::from_seed(SEED)
    }

    /// Generate `n` random numbers using provided generator
    pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
    where
        StandardUniform: rand::distr::Distribution<T>,
    {
        (0..n).map(|_| rng.random::<T>()).collect()
    }
}

mod gridgen {
    use super::randn::*;
    use lutn::utils::*;
    use rand::seq::SliceRandom;

    // Generate a (potentially irregular) grid to interpolate on,
    // and some fake data values.
    pub fn gen_grid(ndims: usize, size: usize, noise: f64) -> (Vec<Vec<f64>>, Vec<f64>) {
        let mut rng = rng_fixed_seed();
        let n = size.pow(ndims as u32);
        let z = randn::<f64>(&mut rng, n);

        let grids: Vec<Vec<f64>> = (0..ndims)
            .map(|_| {
                let mut x = linspace(0.0, 100.0, size);
                if noise > 0.0 {
                    let dx = randn::<f64>(&mut rng, size);
                    (0..size).for_each(|i| x[i] = x[i] + (dx[i] - 0.5) * noise);
                }
                x
            })
            .collect();

        (grids, z)
    }

    // Generate a set of either sequential (scanning) or shuffled
    // observation points that are entirely inside the interpolation grid.
    //
    // Sequential points sweep the last dimension fastest, so most lookups
    // land in the same cell as the one before and hit the bracket cache.
    pub fn gen_obs_grid(grids: &Vec<Vec<f64>>, size: usize, shuffled: bool) -> Vec<Vec<f64>> {
        let mut rng = rng_fixed_seed();
        let ndims = grids.len();

        let xobs: Vec<Vec<f64>> = (0..ndims)
            .map(|i| linspace(grids[i][1], grids[i][grids[i].len() - 2], size))
            .collect();
        let gridobs = meshgrid((0..ndims).map(|i| &xobs[i]).collect());
        let mut gridobs_t: Vec<Vec<f64>> = (0..ndims)
            .map(|i| gridobs.iter().map(|x| x[i]).collect())
            .collect(); // transpose
        if shuffled {
            (0..ndims).for_each(|i| gridobs_t[i].shuffle(&mut rng));
        }
        gridobs_t
    }
}
