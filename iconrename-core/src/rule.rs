use regex::{Regex, RegexBuilder};

/// A pure renaming rule: old filename in, new filename out, or `None` when
/// the filename doesn't trigger the rule.
///
/// Rules never touch the filesystem. A rule may return a name equal to its
/// input; the engine's no-op guard handles that case, not the rule.
pub trait RenameRule {
    fn apply(&self, filename: &str) -> Option<String>;
}

/// Matches wiki icon exports of the form `<digits>px-SF6_<Name>_Icon.<ext>`
/// (case-insensitive) and renames them to `<name>.<ext>`, lowercased.
///
/// The name group is lazy, so it stops at the first `_Icon.` marker; the
/// extension group takes everything after that marker's dot, dots included.
#[derive(Debug, Clone)]
pub struct Sf6IconRule {
    pattern: Regex,
}

impl Sf6IconRule {
    pub fn new() -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(r"^\d+px-SF6_(.+?)_Icon\.(.+)$")
            .case_insensitive(true)
            .build()?;
        Ok(Self { pattern })
    }
}

impl RenameRule for Sf6IconRule {
    fn apply(&self, filename: &str) -> Option<String> {
        let caps = self.pattern.captures(filename)?;
        let name = caps.get(1)?.as_str().to_lowercase();
        let extension = caps.get(2)?.as_str().to_lowercase();
        Some(format!("{name}.{extension}"))
    }
}

/// Strips a single trailing `1` from the filename base and lowercases both
/// base and extension. `Abel11.png` becomes `abel1.png`, not `abel.png`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingOneRule;

impl RenameRule for TrailingOneRule {
    fn apply(&self, filename: &str) -> Option<String> {
        let (base, extension) = split_extension(filename);
        let stripped = base.strip_suffix('1')?;
        Some(format!(
            "{}{}",
            stripped.to_lowercase(),
            extension.to_lowercase()
        ))
    }
}

/// Splits a filename into base and extension at the last `.`, keeping the dot
/// with the extension. A dot with nothing but dots before it does not start an
/// extension, so dotfiles like `.profile1` are all base and no extension.
fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(idx) if filename[..idx].bytes().any(|b| b != b'.') => {
            (&filename[..idx], &filename[idx..])
        },
        _ => (filename, ""),
    }
}
