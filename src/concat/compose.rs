//! Artifact composition: the exact byte layout of a compiled `.ultra` file.

/// Combine the shared preamble, a unit's YAML and a unit's text into the
/// artifact content:
///
/// ```text
/// ---\n
/// <preamble>            (newline appended if not already terminated)
/// <unit yaml>           (newline appended if not already terminated)
/// ---\n
/// <unit text>           (verbatim, no trailing newline added)
/// ```
///
/// All three inputs are treated as opaque text. The output is a pure function
/// of the inputs.
pub fn compose_artifact(preamble: &str, yaml: &str, txt: &str) -> String {
    let mut out = String::with_capacity(preamble.len() + yaml.len() + txt.len() + 10);
    out.push_str("---\n");
    push_newline_terminated(&mut out, preamble);
    push_newline_terminated(&mut out, yaml);
    out.push_str("---\n");
    out.push_str(txt);
    out
}

fn push_newline_terminated(out: &mut String, text: &str) {
    out.push_str(text);
    if !text.ends_with('\n') {
        out.push('\n');
    }
}
