use crate::writers::WriteFormat;

/// Format selection for `generate`; `All` expands to every writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatChoice {
    One(WriteFormat),
    All,
}

impl FormatChoice {
    #[must_use]
    pub fn formats(self) -> Vec<WriteFormat> {
        match self {
            FormatChoice::One(f) => vec![f],
            FormatChoice::All => vec![WriteFormat::Csv, WriteFormat::Json, WriteFormat::Log],
        }
    }
}

pub fn parse_format_input(s: &Option<String>) -> Option<String> {
    s.as_ref().map(|x| x.to_lowercase())
}

pub fn parse_write_format(s: &Option<String>) -> FormatChoice {
    match parse_format_input(s).as_deref() {
        Some("json") => FormatChoice::One(WriteFormat::Json),
        Some("log") => FormatChoice::One(WriteFormat::Log),
        Some("all") => FormatChoice::All,
        _ => FormatChoice::One(WriteFormat::Csv),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_format_parsing() {
        assert!(matches!(
            parse_write_format(&Some("csv".into())),
            FormatChoice::One(WriteFormat::Csv)
        ));
        assert!(matches!(
            parse_write_format(&Some("JSON".into())),
            FormatChoice::One(WriteFormat::Json)
        ));
        assert!(matches!(
            parse_write_format(&Some("log".into())),
            FormatChoice::One(WriteFormat::Log)
        ));
        assert!(matches!(parse_write_format(&Some("all".into())), FormatChoice::All));
        assert!(matches!(parse_write_format(&None), FormatChoice::One(WriteFormat::Csv)));
    }

    #[test]
    fn all_expands_to_every_format() {
        let formats = FormatChoice::All.formats();
        assert_eq!(formats, vec![WriteFormat::Csv, WriteFormat::Json, WriteFormat::Log]);
    }
}
