//! Writes a deterministic synthetic dataset with the Titanic CSV schema,
//! so the dashboard runs without the Kaggle data file.
//!
//!   cargo run --bin generate_sample [output.csv]

use std::path::PathBuf;

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

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[(self.next_u64() % options.len() as u64) as usize]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/titanic.csv"));
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create output directory");
    }

    let mut writer = csv::Writer::from_path(&output_path).expect("Failed to create output file");
    writer
        .write_record([
            "PassengerId",
            "Survived",
            "Pclass",
            "Name",
            "Sex",
            "Age",
            "SibSp",
            "Parch",
            "Fare",
            "Embarked",
        ])
        .expect("Failed to write header");

    let surnames = [
        "Abbott", "Becker", "Carlsson", "Dahl", "Eklund", "Fortune", "Goodwin", "Hansen",
        "Ilmakangas", "Jensen", "Karlsson", "Lindqvist", "Moran", "Nilsson", "Olsen", "Palsson",
    ];
    let rows = 400u32;

    for id in 1..=rows {
        // class skews third, sex skews male, as on the real manifest
        let pclass: u8 = match rng.next_u64() % 10 {
            0..=2 => 1,
            3..=4 => 2,
            _ => 3,
        };
        let male = rng.chance(0.62);

        let age = rng
            .gauss(38.0 - f64::from(pclass) * 4.0, 14.0)
            .clamp(0.5, 80.0);
        let age = (age * 2.0).round() / 2.0;
        let age_known = rng.chance(0.8);

        let sib_sp = (rng.next_u64() % 3) as u8;
        let parch = (rng.next_u64() % 3) as u8;

        let base_fare = match pclass {
            1 => 80.0,
            2 => 25.0,
            _ => 10.0,
        };
        let fare = (base_fare * (0.5 + rng.next_f64()) + rng.next_f64() * 5.0).max(3.0);

        // survival odds driven by sex, class and age, so the classifier
        // has real signal to find
        let mut odds: f64 = if male { 0.18 } else { 0.72 };
        odds += match pclass {
            1 => 0.18,
            2 => 0.05,
            _ => -0.05,
        };
        if age < 12.0 {
            odds += 0.15;
        }
        let survived = u8::from(rng.chance(odds.clamp(0.02, 0.95)));

        let surname = rng.pick(&surnames);
        let (title, given) = if male {
            ("Mr.", rng.pick(&["Karl", "Johan", "William", "Ernst", "Patrick"]))
        } else {
            ("Miss.", rng.pick(&["Anna", "Elin", "Margaret", "Hulda", "Kate"]))
        };
        let name = format!("{surname}, {title} {given}");

        let embarked = if rng.chance(0.98) {
            rng.pick(&["S", "S", "S", "C", "C", "Q"])
        } else {
            ""
        };

        writer
            .write_record([
                id.to_string(),
                survived.to_string(),
                pclass.to_string(),
                name,
                if male { "male" } else { "female" }.to_string(),
                if age_known { format!("{age}") } else { String::new() },
                sib_sp.to_string(),
                parch.to_string(),
                format!("{fare:.4}"),
                embarked.to_string(),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {rows} passengers to {}", output_path.display());
}
