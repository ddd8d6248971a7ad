//! Generates a synthetic `data/turnover.csv` for trying out the dashboard.
//!
//! Columns mirror the usual employee-turnover export: `stag` (tenure in
//! months), `event` (1 = left the company), `profession`, `age`, `gender`.

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

    /// Exponential draw via inverse transform sampling.
    fn exponential(&mut self, mean: f64) -> f64 {
        -mean * self.next_f64().max(1e-15).ln()
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (profession, mean tenure in months, turnover probability)
    let professions: &[(&str, f64, f64)] = &[
        ("HR", 38.0, 0.45),
        ("IT", 30.0, 0.55),
        ("Sales", 22.0, 0.65),
        ("Marketing", 28.0, 0.50),
        ("Finance", 42.0, 0.35),
        ("Manager", 55.0, 0.25),
    ];
    let genders = ["f", "m"];
    let rows_per_profession = 100;

    std::fs::create_dir_all("data").expect("Failed to create data directory");
    let output_path = "data/turnover.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    writer
        .write_record(["stag", "event", "profession", "age", "gender"])
        .expect("Failed to write header");

    let mut row_count = 0usize;
    for &(profession, mean_tenure, turnover_prob) in professions {
        for _ in 0..rows_per_profession {
            // Observation window of ten years: longer tenures are censored.
            let tenure = rng.exponential(mean_tenure).min(120.0);
            let event = if rng.next_f64() < turnover_prob { 1 } else { 0 };
            let age = 22.0 + rng.next_f64() * 38.0;

            writer
                .write_record([
                    format!("{tenure:.2}"),
                    event.to_string(),
                    profession.to_string(),
                    format!("{age:.0}"),
                    genders[(rng.next_u64() % 2) as usize].to_string(),
                ])
                .expect("Failed to write row");
            row_count += 1;
        }
    }

    writer.flush().expect("Failed to flush CSV");
    println!("Wrote {row_count} employee records to {output_path}");
}
