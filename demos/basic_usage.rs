//! Example usage of the finite-difference crate

use finite_difference::{
    centered_differential, centered_differential_samples, derivative_series, estimate_step,
    forward_differential, Differentiator, Direction, StepSize,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(true)
        .init();

    println!("=== Finite Difference Examples ===\n");

    // Example 1: Callable mode, all orders at one point
    println!("1. Derivatives of sin at x = 0.5 (h = 0.01):");
    for order in 1..=4 {
        let d = centered_differential(f64::sin, 0.5, 0.01, order)?;
        println!("   order {}: {:.8}", order, d);
    }

    // Example 2: Forward stencil at the left edge of a domain
    println!("\n2. Forward derivative of sqrt at x = 0 + 1e-3:");
    let d = forward_differential(f64::sqrt, 1e-3, 1e-4, 1)?;
    println!("   {:.6} (exact {:.6})", d, 0.5 / 1e-3_f64.sqrt());

    // Example 3: Sample mode with an estimated step
    let samples: Vec<f64> = (0..20).map(|i| 0.5 * i as f64).collect();
    println!("\n3. Linear ramp samples, estimated step = {}", estimate_step(&samples)?);
    println!("   centered slope at index 10: {}", centered_differential_samples(&samples, 10, 1)?);

    // Example 4: Out-of-range requests are reported, not clamped
    println!("\n4. Centered order 1 at index 1 of a 4-point series:");
    match centered_differential_samples(&[0.0, 1.0, 2.0, 3.0], 1, 1) {
        Ok(v) => println!("   {}", v),
        Err(e) => println!("   error: {}", e),
    }

    // Example 5: Whole series with boundary-aware stencils
    let h = 0.1;
    let signal: Vec<f64> = (0..16).map(|i| (i as f64 * h).powi(3)).collect();
    println!("\n5. First derivative of x^3 sampled at h = {}:", h);
    let diff = Differentiator::new(1)?.with_step(StepSize::Fixed(h));
    print_signal(&diff.apply(&signal)?);

    println!("\n6. Same series with the estimated step:");
    print_signal(&derivative_series(&signal, 1)?);

    // Example 7: Fixed backward direction at the right edge
    let back = Differentiator::new(2)?
        .with_direction(Direction::Backward)
        .with_step(StepSize::Fixed(h));
    println!("\n7. Backward second derivative at the last sample: {:.6}", back.at(&signal, 15)?);

    Ok(())
}

fn print_signal(signal: &[f64]) {
    for (i, &value) in signal.iter().enumerate() {
        print!("{:8.3}", value);
        if i > 0 && (i + 1) % 8 == 0 {
            println!();
        }
    }
    if signal.len() % 8 != 0 {
        println!();
    }
}
