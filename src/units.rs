//! Rendering of running totals.

use indicatif::HumanBytes;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

const BINARY_PREFIXES: [&str; 8] = ["Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi", "Yi"];

/// Format `total` either as a plain base-10 integer or in human byte units.
///
/// Human units are binary (`KiB`, `MiB`, ...). Totals that no longer fit in a
/// `u64` keep the same two-decimal style, saturating at `YiB`.
pub fn total_to_string(total: &BigUint, human: bool) -> String {
    if !human {
        return total.to_str_radix(10);
    }

    match u64::try_from(total) {
        Ok(bytes) => HumanBytes(bytes).to_string(),
        Err(_) => format_huge(total),
    }
}

fn format_huge(total: &BigUint) -> String {
    let mut value = total.to_f64().unwrap_or(f64::INFINITY);
    let mut prefix = 0;
    while prefix < BINARY_PREFIXES.len() {
        value /= 1024.0;
        if value < 1024.0 {
            break;
        }
        prefix += 1;
    }
    let prefix = prefix.min(BINARY_PREFIXES.len() - 1);
    format!("{:.2} {}B", value, BINARY_PREFIXES[prefix])
}
