// Host-side tests for the greeting table and its random selection.

use hongbao_core::*;
use std::collections::HashSet;

#[test]
fn table_has_five_complete_records() {
    assert_eq!(GREETINGS.len(), 5);
    let titles: HashSet<&str> = GREETINGS.iter().map(|g| g.title).collect();
    assert_eq!(titles.len(), 5, "titles must be unique");
    for g in GREETINGS.iter() {
        assert_eq!(g.lines.len(), 4);
        assert!(g.lines.iter().all(|l| !l.is_empty()));
        assert!(!g.title.is_empty());
    }
}

#[test]
fn draws_only_come_from_the_table() {
    let mut blessings = Blessings::new(1);
    for _ in 0..1000 {
        let g = blessings.draw();
        assert!(GREETINGS.iter().any(|t| t == g));
    }
}

#[test]
fn draws_are_uniform_by_chi_square() {
    const N: usize = 5000;
    let mut blessings = Blessings::new(2024);
    let mut counts = [0usize; 5];
    for _ in 0..N {
        let g = blessings.draw();
        let idx = GREETINGS
            .iter()
            .position(|t| t.title == g.title)
            .expect("title in table");
        counts[idx] += 1;
    }
    let expected = N as f64 / counts.len() as f64;
    let chi2: f64 = counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum();
    // 4 degrees of freedom, p = 0.001
    assert!(chi2 < 18.47, "chi2={chi2:.2} counts={counts:?}");
}

#[test]
fn seeded_draws_are_repeatable() {
    let mut a = Blessings::new(77);
    let mut b = Blessings::new(77);
    for _ in 0..50 {
        assert_eq!(a.draw().title, b.draw().title);
    }
}
