use std::net::Ipv4Addr;

/// Validate an IPv4 CIDR block like "10.0.0.0/8".
/// Pattern: dotted-quad address, slash, prefix length 0-32.
pub fn is_valid_cidr_block(block: &str) -> bool {
    let Some((addr, prefix)) = block.split_once('/') else {
        return false;
    };
    if addr.parse::<Ipv4Addr>().is_err() {
        return false;
    }
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    matches!(prefix.parse::<u8>(), Ok(len) if len <= 32)
}

/// Validate a stack/bucket name suffix for S3 bucket naming rules.
/// Pattern: [a-z0-9][a-z0-9-]* ending with an alphanumeric.
pub fn is_valid_name_suffix(suffix: &str) -> bool {
    let mut chars = suffix.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c.is_ascii_digit() => {}
        _ => return false,
    }
    for c in chars {
        if !(c == '-' || c.is_ascii_lowercase() || c.is_ascii_digit()) {
            return false;
        }
    }
    !suffix.ends_with('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cidr_blocks() {
        assert!(is_valid_cidr_block("0.0.0.0/0"));
        assert!(is_valid_cidr_block("10.0.0.0/8"));
        assert!(is_valid_cidr_block("192.168.1.0/24"));
        assert!(is_valid_cidr_block("1.2.3.4/32"));
    }

    #[test]
    fn test_invalid_cidr_blocks() {
        assert!(!is_valid_cidr_block(""));
        assert!(!is_valid_cidr_block("10.0.0.0"));
        assert!(!is_valid_cidr_block("10.0.0.0/33"));
        assert!(!is_valid_cidr_block("10.0.0.0/"));
        assert!(!is_valid_cidr_block("10.0.0/8"));
        assert!(!is_valid_cidr_block("256.0.0.0/8"));
        assert!(!is_valid_cidr_block("10.0.0.0/+8"));
        assert!(!is_valid_cidr_block("not-a-cidr"));
    }

    #[test]
    fn test_valid_suffixes() {
        assert!(is_valid_name_suffix("dev"));
        assert!(is_valid_name_suffix("staging-2"));
        assert!(is_valid_name_suffix("0test"));
    }

    #[test]
    fn test_invalid_suffixes() {
        assert!(!is_valid_name_suffix(""));
        assert!(!is_valid_name_suffix("-dev"));
        assert!(!is_valid_name_suffix("dev-"));
        assert!(!is_valid_name_suffix("Dev"));
        assert!(!is_valid_name_suffix("dev_1"));
        assert!(!is_valid_name_suffix("dev.1"));
    }
}
