//! Tabular comparison of approx_pow against the libm oracle
//!
//! Prints the seed cases with their relative errors. Run with:
//! cargo run --bin compare

use fastpow::approx_pow;

fn main() {
    let test_cases: [(f32, f32); 5] = [
        (2.0, 3.0),
        (5.0, 2.0),
        (10.0, 0.5),
        (3.14, 2.0),
        (2.0, 8.0),
    ];

    println!("Testing approx_pow vs libm::powf:");
    println!(
        "{:<10} {:<10} {:<15} {:<15} {:<10}",
        "Base", "Exp", "approx_pow", "powf", "Error"
    );
    println!("---------------------------------------------------------------");

    for &(base, exponent) in &test_cases {
        let fast = approx_pow(base, exponent);
        let exact = libm::powf(base, exponent);
        let error = ((fast - exact) / exact).abs() * 100.0;

        println!(
            "{:<10.2} {:<10.2} {:<15.6} {:<15.6} {:<10.2}%",
            base, exponent, fast, exact, error
        );
    }
}
