use alloy::primitives::U256;
use alloy::primitives::utils::format_units;

// wei -> decimal string in whole native tokens (18 decimals)
pub fn format_ether(wei: U256) -> String {
    format_units(wei, 18u8).unwrap_or_else(|_| wei.to_string())
}

// rounded for display, like "0.1234"
pub fn format_ether_short(wei: U256, decimals: usize) -> String {
    let full = format_ether(wei);
    match full.split_once('.') {
        Some((whole, fraction)) => {
            let mut fraction: String = fraction.chars().take(decimals).collect();
            while fraction.len() < decimals {
                fraction.push('0');
            }
            if decimals == 0 {
                whole.to_string()
            } else {
                format!("{}.{}", whole, fraction)
            }
        }
        None => full,
    }
}
