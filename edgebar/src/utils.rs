pub mod log;

/// Shared `--help` layout of the edgebar binaries.
#[must_use]
pub const fn get_help_template() -> &'static str {
    "\
{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
"
}
