use afl::fuzz;
use inn_check::{normalize, validate_inn, InvalidReason, RussianInnChecksum, Validator};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

/// Sprinkles spaces and dashes through the input. They must never change the verdict.
fn insert_separators(input: &str, rng: &mut StdRng) -> String {
    let mut output = String::with_capacity(input.len() * 2);
    for c in input.chars() {
        match rng.gen_range::<u8, _>(0..8) {
            0 => output.push(' '),
            1 => output.push('-'),
            2 => output.push('\t'),
            _ => {}
        }
        output.push(c);
    }
    output
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
    }

    let verdict = validate_inn(input);

    // validation is deterministic
    assert_eq!(validate_inn(input), verdict);

    // normalization is idempotent
    let normalized = normalize(input);
    assert_eq!(normalize(&normalized), normalized);

    let formatted = insert_separators(input, &mut rng);
    assert_eq!(validate_inn(&formatted), verdict);

    match &verdict {
        Ok(inn) => {
            assert_eq!(inn.as_str(), normalized);
            assert_eq!(validate_inn(inn.as_str()).as_ref(), Ok(inn));
            assert!(RussianInnChecksum.is_valid_match(inn.as_str()));
        }
        Err(err) => match err.reason() {
            InvalidReason::NonDigitCharacter => {
                assert!(normalized.chars().any(|c| !c.is_ascii_digit()))
            }
            InvalidReason::InvalidLength => {
                assert!(normalized.len() != 10 && normalized.len() != 12)
            }
            InvalidReason::ChecksumMismatch => {
                assert!(!RussianInnChecksum.is_valid_match(&normalized))
            }
        },
    }

    #[cfg(feature = "manual_test")]
    {
        println!("Verdict: {:?}", verdict);
    }
}
