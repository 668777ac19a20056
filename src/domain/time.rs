/// Formats a whole number of seconds as `M:SS`.
///
/// Minutes carry no leading zero and are unbounded, so an hour renders as `60:00`.
pub fn formatted_seconds(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "0:00")]
    #[case(9, "0:09")]
    #[case(59, "0:59")]
    #[case(60, "1:00")]
    #[case(125, "2:05")]
    #[case(3600, "60:00")]
    #[case(6039, "100:39")]
    fn test_formatted_seconds(#[case] seconds: u64, #[case] expected: &str) {
        assert_eq!(formatted_seconds(seconds), expected);
    }
}
