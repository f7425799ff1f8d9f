//! Abbreviable command keywords
//!
//! Stata accepts any truncation of a command down to its minimum abbreviation
//! (`pr`, `pro`, ..., `program`). Each keyword expands into the explicit list of
//! accepted tokens so matching never degrades into a generic prefix test.

/// A command keyword together with its shortest accepted abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword {
    canonical: &'static str,
    min_len: usize,
}

/// The program declaration command.
pub const PROGRAM: Keyword = Keyword::new("program", 2);

/// The optional `define` qualifier after `program`.
pub const DEFINE: Keyword = Keyword::new("define", 2);

impl Keyword {
    pub const fn new(canonical: &'static str, min_len: usize) -> Self {
        Keyword { canonical, min_len }
    }

    /// All accepted spellings, longest first.
    pub fn truncations(&self) -> Vec<&'static str> {
        let shortest = self.min_len.clamp(1, self.canonical.len().max(1));
        (shortest..=self.canonical.len())
            .rev()
            .map(|len| &self.canonical[..len])
            .collect()
    }

    /// Regex alternation of [`Keyword::truncations`], longest first.
    pub fn alternation(&self) -> String {
        self.truncations()
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|")
    }

    pub fn accepts(&self, token: &str) -> bool {
        self.truncations().contains(&token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_program_truncations_longest_first() {
        assert_eq!(
            PROGRAM.truncations(),
            vec!["program", "progra", "progr", "prog", "pro", "pr"]
        );
    }

    #[test]
    fn test_define_alternation() {
        assert_eq!(DEFINE.alternation(), "define|defin|defi|def|de");
    }

    #[rstest]
    #[case("pr", true)]
    #[case("prog", true)]
    #[case("program", true)]
    #[case("p", false)]
    #[case("programs", false)]
    #[case("print", false)]
    fn test_program_accepts(#[case] token: &str, #[case] accepted: bool) {
        assert_eq!(PROGRAM.accepts(token), accepted);
    }

    #[test]
    fn test_zero_min_len_still_requires_one_letter() {
        let keyword = Keyword::new("end", 0);
        assert_eq!(keyword.truncations(), vec!["end", "en", "e"]);
    }
}
