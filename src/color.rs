use supports_color::Stream;

/// Determine if the output should be colored.
///
/// Respects [`NO_COLOR`](https://no-color.org) and `FORCE_COLOR` via the
/// `supports-color` detection.
pub(crate) fn should_use_color() -> bool {
    supports_color::on(Stream::Stdout).is_some()
}
