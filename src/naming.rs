use chrono::{DateTime, Local};

/// Logical template name, also the base of every stack and change-set name
pub const DEFAULT_TEMPLATE_NAME: &str = "warehouse";

/// Base name of the warehouse bucket
pub const DEFAULT_BUCKET_NAME: &str = "nccid-data-warehouse";

fn suffix_string(suffix: Option<&str>) -> String {
    match suffix {
        Some(s) if !s.is_empty() => format!("-{}", s),
        _ => String::new(),
    }
}

/// Name of the target stack, namespaced by the optional suffix
pub fn stack_name(suffix: Option<&str>) -> String {
    format!("{}{}", DEFAULT_TEMPLATE_NAME, suffix_string(suffix))
}

/// Name of the warehouse bucket, namespaced the same way as the stack
pub fn bucket_name(suffix: Option<&str>) -> String {
    format!("{}{}", DEFAULT_BUCKET_NAME, suffix_string(suffix))
}

/// Change-set name: template name plus a second-resolution timestamp,
/// distinct across repeated submissions in one process run
pub fn changeset_name(now: &DateTime<Local>) -> String {
    format!(
        "{}-{}",
        DEFAULT_TEMPLATE_NAME,
        now.format("%Y-%m-%d-%H-%M-%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_stack_name_without_suffix() {
        assert_eq!(stack_name(None), "warehouse");
    }

    #[test]
    fn test_stack_name_with_suffix() {
        assert_eq!(stack_name(Some("dev")), "warehouse-dev");
    }

    #[test]
    fn test_empty_suffix_behaves_as_absent() {
        assert_eq!(stack_name(Some("")), "warehouse");
        assert_eq!(bucket_name(Some("")), "nccid-data-warehouse");
    }

    #[test]
    fn test_bucket_name_follows_stack_pattern() {
        assert_eq!(bucket_name(None), "nccid-data-warehouse");
        assert_eq!(bucket_name(Some("dev")), "nccid-data-warehouse-dev");
    }

    #[test]
    fn test_changeset_name_format() {
        let ts = Local.with_ymd_and_hms(2021, 3, 14, 15, 9, 26).unwrap();
        assert_eq!(changeset_name(&ts), "warehouse-2021-03-14-15-09-26");
    }
}
