//! Performance benchmark comparing serial and parallel steps

use lenia::domain::{Grid, GrowthParams, Kernel, SmoothBump, StepMode, reseed};
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;

fn benchmark_step(mode: StepMode, size: usize, radius: i32, iterations: u32) -> f64 {
    let kernel = Kernel::generate(radius, &SmoothBump).expect("benchmark radius is valid");
    let growth = GrowthParams::default();
    let mut grid = Grid::new(size, size).expect("benchmark size is valid");
    let mut rng = StdRng::seed_from_u64(0);
    reseed(&mut grid, radius, 0.5, &mut rng).expect("benchmark density is valid");

    let start = Instant::now();
    for _ in 0..iterations {
        mode.step(&mut grid, &kernel, &growth, 0.1);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Lenia Step Benchmark ===\n");

    let sizes = [64, 128, 255, 512];
    let radii = [5, 13];
    let iterations = 10;

    println!("{:>10} {:>8} {:>12} {:>12} {:>10}",
        "Size", "Radius", "Serial", "Parallel", "Speedup");
    println!("{:-<58}", "");

    for radius in radii {
        for size in sizes {
            let serial_ms = benchmark_step(StepMode::Serial, size, radius, iterations);
            let parallel_ms = benchmark_step(StepMode::Parallel, size, radius, iterations);

            println!(
                "{:>10} {:>8} {:>12.2} {:>12.2} {:>9.1}x",
                format!("{}x{}", size, size),
                radius,
                serial_ms,
                parallel_ms,
                serial_ms / parallel_ms
            );
        }
    }

    let kernel = Kernel::generate(13, &SmoothBump).expect("radius 13 is valid");
    let window = kernel.weights().len();
    println!(
        "\nRadius 13 kernel: {} taps of {} ({:.1}% dense)",
        kernel.taps().len(),
        window,
        100.0 * kernel.taps().len() as f64 / window as f64
    );
}
