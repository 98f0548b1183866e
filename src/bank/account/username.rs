/// Derive a username from an account owner: the first letter of each word of
/// the lowercased name, e.g. "Jessica Davis" gives "jd".
///
/// Runs of whitespace count as a single separator.
pub fn derive_username(owner: &str) -> String {
    owner
        .to_lowercase()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[test]
fn test_derive_username() {
    for (owner, want) in vec![
        ("John Smith", "js"),
        ("Jessica Davis", "jd"),
        ("Steven Thomas Williams", "stw"),
        ("Sarah", "s"),
        ("  Jonas   Schmedtmann ", "js"),
        ("Élodie Ørsted", "éø"),
        ("", ""),
    ] {
        assert_eq!(want, derive_username(owner), "owner {:?}", owner);
    }
}
