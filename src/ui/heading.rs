use super::theme::Painter;

const DEFAULT_SUITE: &str = "default";

/// Lines announcing a group: a blank separator, then `suite / group (file)`.
/// The suite prefix is dropped for the unnamed default suite.
pub fn group(
    suite: Option<&str>,
    title: &str,
    file: Option<&str>,
    painter: &Painter,
) -> Vec<String> {
    let mut heading = match suite {
        Some(suite) if suite != DEFAULT_SUITE => format!("{} / {}", suite, title),
        _ => title.to_string(),
    };
    heading = painter.bold(heading);

    if let Some(file) = file {
        heading = format!("{} {}", heading, painter.dim(format!("({})", file)));
    }

    vec![String::new(), heading]
}

/// Lines announcing a file whose tests are not inside any group.
pub fn file_banner(file: &str, painter: &Painter) -> Vec<String> {
    vec![String::new(), painter.dim(file)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_suite_is_not_prefixed() {
        let painter = Painter::new(false);
        assert_eq!(
            group(Some("default"), "math", Some("tests/math.rs"), &painter),
            ["", "math (tests/math.rs)"]
        );
        assert_eq!(group(None, "math", None, &painter), ["", "math"]);
    }

    #[test]
    fn named_suite_prefixes_the_group() {
        let painter = Painter::new(false);
        assert_eq!(
            group(Some("unit"), "math", None, &painter),
            ["", "unit / math"]
        );
    }
}
