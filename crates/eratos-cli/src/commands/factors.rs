use crate::support::{exit_with, join_values, print_json_or_exit, yes_no};
use eratos_kernel::{factors_of, prime_factorization};
use serde_json::json;

fn render_factorization(factors: &[(u64, u32)]) -> String {
    if factors.is_empty() {
        return "1".to_string();
    }
    factors
        .iter()
        .map(|&(p, e)| if e == 1 { p.to_string() } else { format!("{p}^{e}") })
        .collect::<Vec<_>>()
        .join(" * ")
}

pub fn run(n: i64, json_output: bool) {
    let factors = factors_of(n).unwrap_or_else(|e| exit_with(e));
    let factorization = prime_factorization(n).unwrap_or_else(|e| exit_with(e));
    let is_prime = factors.len() == 2;

    if json_output {
        let payload = json!({
            "n": n,
            "factors": factors,
            "primeFactorization": factorization
                .iter()
                .map(|&(prime, exponent)| json!({ "prime": prime, "exponent": exponent }))
                .collect::<Vec<_>>(),
            "isPrime": is_prime,
        });
        print_json_or_exit(&payload);
        return;
    }

    println!("eratos factors {n}");
    println!("  Factors: {}", join_values(&factors));
    println!("  Prime factorization: {}", render_factorization(&factorization));
    println!("  Prime: {}", yes_no(is_prime));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_exponents() {
        assert_eq!(render_factorization(&[(2, 3), (3, 2), (5, 1)]), "2^3 * 3^2 * 5");
        assert_eq!(render_factorization(&[]), "1");
    }
}
