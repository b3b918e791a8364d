use std::fmt;

/// Renders an amount as `R$ 1234.50`.
pub(crate) struct Currency(pub f64);

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R$ {:.2}", self.0)
    }
}

/// Writes `lines` separated by newlines, without a trailing one.
pub(crate) fn write_lines<I, T>(f: &mut fmt::Formatter<'_>, lines: I) -> fmt::Result
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    for (idx, line) in lines.into_iter().enumerate() {
        if idx > 0 {
            f.write_str("\n")?;
        }
        write!(f, "{line}")?;
    }
    Ok(())
}
