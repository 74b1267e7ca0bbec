//! Parser configuration.

/// How named commands are matched against the registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CommandCase {
    /// ASCII case is ignored (`privmsg` matches `PRIVMSG`).
    #[default]
    Insensitive,
    /// Only the canonical upper-case spelling matches.
    Sensitive,
}

/// Options for a [`Parser`](crate::Parser).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// Command name matching.
    pub command_case: CommandCase,
    /// Strip one trailing `\r\n`, `\n` or `\r` before tokenizing.
    pub trim_line_ending: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            command_case: CommandCase::Insensitive,
            trim_line_ending: true,
        }
    }
}
