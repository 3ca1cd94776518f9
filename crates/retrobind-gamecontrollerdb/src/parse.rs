use retrobind_input::{Guid, GuidParseError};
use thiserror::Error;

/// GUID column value SDL uses for its default XInput mapping.
pub(crate) const XINPUT_DEFAULT_GUID: &str = "xinput";

const PLATFORM_FIELD: &str = "platform";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum LineError {
    #[error("invalid guid: {0}")]
    Guid(#[from] GuidParseError),
    #[error("missing device name")]
    MissingName,
    #[error("field without value: \"{0}\"")]
    FieldWithoutValue(String),
}

/// Which device a line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineGuid {
    Device(Guid),
    XInputDefault,
}

/// A database line split into its columns, borrowing from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedLine<'a> {
    pub guid: LineGuid,
    pub name: &'a str,
    pub platform: Option<&'a str>,
    pub fields: Vec<(&'a str, &'a str)>,
}

/// Parse one database line. Returns `Ok(None)` for blank lines and comments.
pub(crate) fn parse_line(line: &str) -> Result<Option<ParsedLine<'_>>, LineError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut columns = line.split(',');

    let raw_guid = columns.next().unwrap_or_default().trim();
    let guid = if raw_guid.eq_ignore_ascii_case(XINPUT_DEFAULT_GUID) {
        LineGuid::XInputDefault
    } else {
        LineGuid::Device(raw_guid.parse::<Guid>()?)
    };

    let name = columns.next().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(LineError::MissingName);
    }

    let mut platform = None;
    let mut fields = Vec::new();
    for column in columns {
        let column = column.trim();
        // The reference database ends every line with a comma.
        if column.is_empty() {
            continue;
        }
        let Some((key, value)) = column.split_once(':') else {
            return Err(LineError::FieldWithoutValue(column.to_string()));
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() {
            return Err(LineError::FieldWithoutValue(column.to_string()));
        }
        if key == PLATFORM_FIELD {
            platform = Some(value);
        } else {
            fields.push((key, value));
        }
    }

    Ok(Some(ParsedLine {
        guid,
        name,
        platform,
        fields,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_lines_and_comments() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# Windows"), Ok(None));
    }

    #[test]
    fn splits_columns() {
        let line = parse_line(
            "030000005e0400008e02000000007200,Xbox 360 Controller,a:b0,leftx:a0,platform:Windows,",
        )
        .unwrap()
        .unwrap();

        assert_eq!(
            line.guid,
            LineGuid::Device("030000005e0400008e02000000007200".parse().unwrap())
        );
        assert_eq!(line.name, "Xbox 360 Controller");
        assert_eq!(line.platform, Some("Windows"));
        assert_eq!(line.fields, vec![("a", "b0"), ("leftx", "a0")]);
    }

    #[test]
    fn keeps_hint_values_with_colons() {
        let line = parse_line(
            "030000007e0500000920000000000000,Pro,a:b0,hint:!SDL_GAMECONTROLLER_USE_BUTTON_LABELS:=1,",
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            line.fields[1],
            ("hint", "!SDL_GAMECONTROLLER_USE_BUTTON_LABELS:=1")
        );
    }

    #[test]
    fn recognizes_xinput_default_line() {
        let line = parse_line("xinput,XInput Controller,a:b0,").unwrap().unwrap();
        assert_eq!(line.guid, LineGuid::XInputDefault);
        assert_eq!(line.platform, None);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(matches!(
            parse_line("not-a-guid,Pad,a:b0"),
            Err(LineError::Guid(_))
        ));
        assert_eq!(
            parse_line("030000005e0400008e02000000007200,,a:b0"),
            Err(LineError::MissingName)
        );
        assert_eq!(
            parse_line("030000005e0400008e02000000007200"),
            Err(LineError::MissingName)
        );
        assert_eq!(
            parse_line("030000005e0400008e02000000007200,Pad,a:b0,garbage"),
            Err(LineError::FieldWithoutValue("garbage".to_string()))
        );
        assert_eq!(
            parse_line("030000005e0400008e02000000007200,Pad,:b0"),
            Err(LineError::FieldWithoutValue(":b0".to_string()))
        );
    }
}
