use serde_json::json;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Seasonal swing for a 1-based calendar month, peaking mid-year.
fn seasonal(month: u32) -> f64 {
    use std::f64::consts::PI;
    -3.2 * ((month as f64 - 1.0) / 12.0 * 2.0 * PI).cos()
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let base_temperature = 8.66;
    let first_year = 1880;
    let last_year = 2020;

    let mut monthly_variance = Vec::new();
    for year in first_year..=last_year {
        // Slow warming trend on top of the seasonal cycle.
        let trend = 0.008 * (year - first_year) as f64;
        for month in 1..=12u32 {
            let variance = seasonal(month) + trend + rng.gauss(0.0, 0.15);
            monthly_variance.push(json!({
                "year": year,
                "month": month,
                "variance": (variance * 1000.0).round() / 1000.0,
            }));
        }
    }

    let record_count = monthly_variance.len();
    let doc = json!({
        "baseTemperature": base_temperature,
        "monthlyVariance": monthly_variance,
    });

    let output_path = "sample_temperature.json";
    let body = serde_json::to_string_pretty(&doc).expect("Failed to serialize dataset");
    std::fs::write(output_path, body).expect("Failed to write output file");

    println!(
        "Wrote {record_count} monthly records ({first_year}-{last_year}) to {output_path}"
    );
}
