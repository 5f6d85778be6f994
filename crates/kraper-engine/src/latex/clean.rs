use std::sync::OnceLock;

use regex::Regex;

/// Convert the Markdown that generated sections tend to contain into LaTeX.
///
/// Rules run in a fixed order so later rules never see markup produced by
/// earlier ones:
///
/// 1. `**bold**` to `\textbf{bold}`
/// 2. `*italic*` to `\textit{italic}`
/// 3. line-leading `# `, `## `, `### ` to `\section`, `\subsection`,
///    `\subsubsection`
/// 4. backticks removed
/// 5. `_` escaped as `\_`
///
/// Nothing else is escaped, so inline math such as `$x^2$` passes through.
pub fn clean_markdown(body: &str) -> String {
    let rules = rules();

    let mut out = rules.bold.replace_all(body, r"\textbf{${1}}").into_owned();
    out = rules.italic.replace_all(&out, r"\textit{${1}}").into_owned();
    out = rules.h1.replace_all(&out, r"\section{${1}}").into_owned();
    out = rules.h2.replace_all(&out, r"\subsection{${1}}").into_owned();
    out = rules.h3.replace_all(&out, r"\subsubsection{${1}}").into_owned();

    out.replace('`', "").replace('_', r"\_")
}

/// Escape LaTeX special characters in plain metadata such as the title.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '{' | '}' | '$' | '&' | '#' | '_' | '%' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Strip emphasis markers for plain-text exporters.
pub fn strip_emphasis(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '*' | '_')).collect()
}

struct Rules {
    bold: Regex,
    italic: Regex,
    h1: Regex,
    h2: Regex,
    h3: Regex,
}

fn rules() -> &'static Rules {
    static RULES: OnceLock<Rules> = OnceLock::new();
    RULES.get_or_init(|| Rules {
        bold: Regex::new(r"\*\*(.*?)\*\*").expect("Invalid bold regex"),
        italic: Regex::new(r"\*(.*?)\*").expect("Invalid italic regex"),
        h1: Regex::new(r"(?m)^# (.*)").expect("Invalid h1 regex"),
        h2: Regex::new(r"(?m)^## (.*)").expect("Invalid h2 regex"),
        h3: Regex::new(r"(?m)^### (.*)").expect("Invalid h3 regex"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("plain text", "plain text")]
    #[case("a **bold** word", r"a \textbf{bold} word")]
    #[case("an *italic* word", r"an \textit{italic} word")]
    #[case("**b** and *i*", r"\textbf{b} and \textit{i}")]
    #[case("# Heading", r"\section{Heading}")]
    #[case("## Sub", r"\subsection{Sub}")]
    #[case("### Subsub", r"\subsubsection{Subsub}")]
    #[case("use `cargo` here", "use cargo here")]
    #[case("snake_case", r"snake\_case")]
    #[case("$x^2 + \\alpha$", "$x^2 + \\alpha$")]
    fn test_clean_markdown(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(clean_markdown(input), expected);
    }

    #[test]
    fn test_headings_only_match_at_line_start() {
        let input = "Intro line\n## Details\nnot # a heading";
        assert_eq!(
            clean_markdown(input),
            "Intro line\n\\subsection{Details}\nnot # a heading"
        );
    }

    #[test]
    fn test_emphasis_does_not_cross_lines() {
        let input = "*open\nclose*";
        assert_eq!(clean_markdown(input), "*open\nclose*");
    }

    #[test]
    fn test_underscores_inside_produced_markup_are_escaped() {
        assert_eq!(clean_markdown("**my_var**"), r"\textbf{my\_var}");
    }

    #[test]
    fn test_escape_latex() {
        assert_eq!(
            escape_latex(r"50% of R&D_{x} \ ~#$^"),
            r"50\% of R\&D\_\{x\} \textbackslash{} \textasciitilde{}\#\$\textasciicircum{}"
        );
    }

    #[test]
    fn test_strip_emphasis() {
        assert_eq!(strip_emphasis("**Bold** and _under_"), "Bold and under");
    }
}
