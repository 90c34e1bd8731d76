use crate::generator::{generate, Kolakoski};
use crate::run::runs;
use crate::stats::analyze;
use crate::symbol::Symbol;
use proptest::prelude::*;

/// Maps arbitrary bytes onto the two-letter alphabet.
fn to_symbols(bytes: &[u8]) -> Vec<Symbol> {
    bytes
        .iter()
        .map(|b| if b % 2 == 0 { Symbol::One } else { Symbol::Two })
        .collect()
}

proptest! {
    /// Property 1: Exact length
    /// Generation never over- or under-shoots the requested length.
    #[test]
    fn prop_generate_exact_length(n in 0usize..5000) {
        prop_assert_eq!(generate(n).len(), n);
    }

    /// Property 2: Prefix stability
    /// A shorter request is always a prefix of a longer one.
    #[test]
    fn prop_generate_prefix_stable(a in 0usize..2000, b in 0usize..2000) {
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        let long_seq = generate(long);
        prop_assert_eq!(&generate(short)[..], &long_seq[..short]);
    }

    /// Property 3: Lazy and eager generation agree
    #[test]
    fn prop_iter_matches_generate(n in 0usize..3000) {
        let lazy: Vec<Symbol> = Kolakoski::new().take(n).collect();
        prop_assert_eq!(lazy, generate(n));
    }

    /// Property 4: Self-description
    /// The lengths of every complete run spell out the sequence itself.
    /// The last run may be cut short by truncation, so it is skipped.
    #[test]
    fn prop_runs_describe_sequence(n in 1usize..5000) {
        let seq = generate(n);
        let lengths: Vec<usize> = runs(seq.iter().copied()).map(|r| r.length).collect();
        let complete = lengths.len() - 1;

        for (i, &len) in lengths[..complete].iter().enumerate() {
            prop_assert_eq!(len, seq[i].run_length(), "run {} of {}", i, n);
        }
    }

    /// Property 5: Both symbols appear once the prefix has two terms
    #[test]
    fn prop_both_symbols_present(n in 2usize..3000) {
        let stats = analyze(&generate(n));
        prop_assert!(stats.count(&Symbol::One) > 0);
        prop_assert!(stats.count(&Symbol::Two) > 0);
    }

    /// Property 6: Run lengths of the generated sequence are 1 or 2
    #[test]
    fn prop_generated_runs_short(n in 0usize..3000) {
        let stats = analyze(&generate(n));
        prop_assert!(stats.run_length_distribution.keys().all(|&len| len == 1 || len == 2));
    }

    /// Property 7: Analysis identities hold for arbitrary sequences
    #[test]
    fn prop_analyze_identities(input: Vec<u8>) {
        let stats = analyze(&input);

        prop_assert_eq!(stats.total_terms, input.len());
        prop_assert_eq!(stats.counts.values().sum::<usize>(), input.len());

        let weighted: usize = stats
            .run_length_distribution
            .iter()
            .map(|(len, freq)| len * freq)
            .sum();
        prop_assert_eq!(weighted, input.len());
        prop_assert_eq!(stats.run_length_distribution.values().sum::<usize>(), stats.num_runs);
    }

    /// Property 8: Runs partition the input
    #[test]
    fn prop_runs_partition(input: Vec<u8>) {
        let symbols = to_symbols(&input);
        let all: Vec<_> = runs(symbols.iter().copied()).collect();

        let mut expected_start = 0;
        for run in &all {
            prop_assert_eq!(run.start, expected_start);
            prop_assert!(run.length > 0);
            prop_assert!(symbols[run.start..run.end()].iter().all(|&s| s == run.symbol));
            expected_start = run.end();
        }
        prop_assert_eq!(expected_start, symbols.len());

        for pair in all.windows(2) {
            prop_assert_ne!(pair[0].symbol, pair[1].symbol);
        }
    }
}

/// Bolero fuzz test: Analysis never panics and keeps its identities
#[cfg(test)]
#[test]
fn fuzz_analyze_no_panic() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|input| {
        let stats = analyze(input);

        assert_eq!(stats.total_terms, input.len());
        assert_eq!(
            stats.run_length_distribution.values().sum::<usize>(),
            stats.num_runs
        );
        assert_eq!(stats.is_empty(), input.is_empty());
    });
}

/// Bolero fuzz test: Generation honours any requested length
#[cfg(test)]
#[test]
fn fuzz_generate_length() {
    bolero::check!().with_type::<u16>().for_each(|&n| {
        let seq = generate(n as usize);
        assert_eq!(seq.len(), n as usize);
    });
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_first_ten_runs() {
        let seq = generate(10);
        let pairs: Vec<(u8, usize)> = runs(seq.iter().copied())
            .map(|r| (r.symbol.value(), r.length))
            .collect();
        assert_eq!(
            pairs,
            vec![(1, 1), (2, 2), (1, 2), (2, 1), (1, 1), (2, 2), (1, 1)]
        );
    }

    #[test]
    fn test_large_prefix_is_balanced() {
        // Density of 1s is empirically close to one half
        let stats = analyze(&generate(100_000));
        let density = stats.density(&Symbol::One);
        assert!((0.49..0.51).contains(&density), "density {}", density);
    }
}
