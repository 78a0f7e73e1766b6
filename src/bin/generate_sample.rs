use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct SampleStudent {
    student_id: i64,
    name: String,
    math: f64,
    science: f64,
    english: f64,
    attendance_pct: f64,
    study_hours_week: f64,
    class_tests_avg: f64,
    previous_term_avg: f64,
}

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

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn score(rng: &mut SimpleRng, ability: f64, spread: f64) -> f64 {
    round1((ability + rng.gauss(0.0, spread)).clamp(0.0, 100.0))
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let first_names = [
        "Asha", "Ben", "Chloe", "Dev", "Elena", "Farid", "Grace", "Hiro", "Ines", "Jonas",
        "Kavya", "Liam", "Mara", "Nina", "Omar", "Priya", "Quinn", "Rohan", "Sara", "Tomas",
    ];
    let last_names = ["Khan", "Lopez", "Nguyen", "Okafor", "Patel", "Rossi"];

    let n_students = first_names.len() * last_names.len();
    let mut students = Vec::with_capacity(n_students);

    for id in 0..n_students {
        // One latent ability factor per student keeps the subject scores,
        // class tests, and previous term plausibly correlated.
        let ability = rng.gauss(62.0, 12.0);
        let study_hours_week = round1(rng.gauss(6.5, 2.5).clamp(0.0, 20.0));
        let attendance_pct = round1(rng.gauss(82.0, 10.0).clamp(40.0, 100.0));

        students.push(SampleStudent {
            student_id: id as i64 + 1,
            name: format!(
                "{} {}",
                first_names[id % first_names.len()],
                last_names[id / first_names.len()]
            ),
            math: score(&mut rng, ability, 7.0),
            science: score(&mut rng, ability, 7.0),
            english: score(&mut rng, ability, 7.0),
            attendance_pct,
            study_hours_week,
            class_tests_avg: round1(
                (ability * 0.7 + study_hours_week * 2.5 + rng.gauss(0.0, 5.0)).clamp(0.0, 100.0),
            ),
            previous_term_avg: score(&mut rng, ability, 4.0),
        });
    }

    let output_path = Path::new("data/students.csv");
    std::fs::create_dir_all("data").context("creating data directory")?;

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    for student in &students {
        writer.serialize(student).context("writing student row")?;
    }
    writer.flush().context("flushing csv writer")?;

    println!(
        "Wrote {} students to {}",
        students.len(),
        output_path.display()
    );
    Ok(())
}
